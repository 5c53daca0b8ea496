use super::*;
use nalgebra::vector;

use crate::geom2::rand::{draw_star, draw_tangle, ReplayToken, StarCfg};

fn poly(pts: &[(f64, f64)]) -> Polygon {
    Polygon::from_xy(pts)
}

#[test]
fn simple_polygon_is_returned_unchanged() {
    let sq = poly(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]);
    assert_eq!(split_polygon(&sq, ClipCfg::default()), vec![sq]);
}

#[test]
fn empty_polygon_has_no_pieces() {
    assert!(split_polygon(&Polygon::default(), ClipCfg::default()).is_empty());
}

#[test]
fn bowtie_splits_into_two_triangles() {
    let bowtie = poly(&[(0.0, 0.0), (2.0, 2.0), (2.0, 0.0), (0.0, 2.0)]);
    let pieces = split_polygon(&bowtie, ClipCfg::default());
    assert_eq!(
        pieces,
        vec![
            poly(&[(0.0, 0.0), (1.0, 1.0), (0.0, 2.0)]),
            poly(&[(1.0, 1.0), (2.0, 2.0), (2.0, 0.0)]),
        ]
    );
}

#[test]
fn self_crossings_are_sorted_along_each_edge() {
    // long horizontal edge crossed by three teeth of a comb
    let comb = poly(&[
        (0.0, 0.0),
        (16.0, 0.0),
        (16.0, 4.0),
        (12.0, -4.0),
        (8.0, 4.0),
        (4.0, -4.0),
    ]);
    let edges: Vec<Segment> = comb.edges().collect();
    let hits = self_crossings(&edges, ClipCfg::default());
    assert_eq!(
        hits[0],
        vec![vector![6.0, 0.0], vector![10.0, 0.0], vector![14.0, 0.0]]
    );
    assert_eq!(hits[2], vec![vector![14.0, 0.0]]);
    assert!(hits[1].is_empty() && hits[5].is_empty());
}

#[test]
fn comb_peels_into_teeth() {
    let comb = poly(&[
        (0.0, 0.0),
        (16.0, 0.0),
        (16.0, 4.0),
        (12.0, -4.0),
        (8.0, 4.0),
        (4.0, -4.0),
    ]);
    assert_eq!(
        split_polygon(&comb, ClipCfg::default()),
        vec![
            poly(&[(0.0, 0.0), (6.0, 0.0), (4.0, -4.0)]),
            poly(&[(6.0, 0.0), (10.0, 0.0), (8.0, 4.0)]),
            poly(&[(10.0, 0.0), (14.0, 0.0), (12.0, -4.0)]),
            poly(&[(14.0, 0.0), (16.0, 0.0), (16.0, 4.0)]),
        ]
    );
}

#[test]
fn figure_eight_of_two_squares() {
    let a = poly(&[
        (0.0, 0.0),
        (10.0, 0.0),
        (10.0, 20.0),
        (20.0, 20.0),
        (20.0, 10.0),
        (0.0, 10.0),
    ]);
    let pieces = split_polygon(&a, ClipCfg::default());
    assert_eq!(
        pieces,
        vec![
            poly(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]),
            poly(&[(10.0, 10.0), (10.0, 20.0), (20.0, 20.0), (20.0, 10.0)]),
        ]
    );
}

#[test]
fn hook_with_shared_edge_crossing() {
    let b = poly(&[
        (2.0, -5.0),
        (2.0, 12.0),
        (22.0, 12.0),
        (22.0, 14.0),
        (4.0, 14.0),
        (4.0, -5.0),
    ]);
    let pieces = split_polygon(&b, ClipCfg::default());
    assert_eq!(
        pieces,
        vec![
            poly(&[(2.0, -5.0), (2.0, 12.0), (4.0, 12.0), (4.0, -5.0)]),
            poly(&[(4.0, 12.0), (22.0, 12.0), (22.0, 14.0), (4.0, 14.0)]),
        ]
    );
}

#[test]
fn five_lobed_star_decomposition() {
    let b = poly(&[
        (30.0, 240.0),
        (330.0, 240.0),
        (330.0, 210.0),
        (270.0, 90.0),
        (210.0, 270.0),
        (210.0, 90.0),
        (180.0, 60.0),
        (150.0, 90.0),
        (150.0, 270.0),
        (90.0, 90.0),
        (30.0, 210.0),
    ]);
    let pieces = split_polygon(&b, ClipCfg::default());
    assert_eq!(
        pieces,
        vec![
            poly(&[(30.0, 240.0), (140.0, 240.0), (90.0, 90.0), (30.0, 210.0)]),
            poly(&[(140.0, 240.0), (150.0, 240.0), (150.0, 270.0)]),
            poly(&[
                (150.0, 240.0),
                (210.0, 240.0),
                (210.0, 90.0),
                (180.0, 60.0),
                (150.0, 90.0),
            ]),
            poly(&[(210.0, 240.0), (220.0, 240.0), (210.0, 270.0)]),
            poly(&[(220.0, 240.0), (330.0, 240.0), (330.0, 210.0), (270.0, 90.0)]),
        ]
    );
}

#[test]
fn random_stars_stay_whole() {
    let cfg = StarCfg::default();
    for index in 0..20 {
        let star = draw_star(cfg, ReplayToken { seed: 11, index });
        let pieces = split_polygon(&star, ClipCfg::default());
        assert_eq!(pieces, vec![star]);
    }
}

#[test]
fn tangles_always_yield_closed_pieces() {
    // every node has as many incoming as outgoing sub-edges, so the walk
    // from vertex 0 always closes
    let cfg = StarCfg::default();
    for index in 0..10 {
        let tangle = draw_tangle(cfg, ReplayToken { seed: 3, index }, 5);
        let pieces = split_polygon(&tangle, ClipCfg::default());
        assert!(!pieces.is_empty(), "tangle {index} produced nothing");
        assert_eq!(pieces[0].v[0], tangle.v[0]);
        assert!(pieces.iter().all(|p| p.len() >= 2));
    }
}

#[test]
fn pentagram_keeps_both_copies_of_inexact_crossings() {
    // crossings computed from the two sides of a pair differ in the last
    // bit; under exact identity both copies survive as separate vertices
    let star = poly(&[(0.0, 3.0), (2.0, -3.0), (-3.0, 1.0), (3.0, 1.0), (-2.0, -3.0)]);
    let pieces = split_polygon(&star, ClipCfg::default());
    assert_eq!(
        pieces,
        vec![
            poly(&[
                (0.0, 3.0),
                (0.6666666666666666, 1.0),
                (0.666666666666667, 1.0),
                (3.0, 1.0),
                (1.1578947368421053, -0.4736842105263157),
                (1.1578947368421053, -0.47368421052631593),
                (0.0, -1.4),
                (-2.0, -3.0),
                (-1.1578947368421053, -0.47368421052631593),
                (-0.6666666666666665, 1.0),
                (-0.6666666666666667, 1.0),
            ]),
            poly(&[
                (0.6666666666666666, 1.0),
                (0.666666666666667, 1.0),
                (1.1578947368421053, -0.47368421052631593),
                (1.1578947368421053, -0.4736842105263157),
                (2.0, -3.0),
                (0.0, -1.4),
                (-1.1578947368421053, -0.47368421052631593),
                (-3.0, 1.0),
                (-0.6666666666666667, 1.0),
                (-0.6666666666666665, 1.0),
            ]),
        ]
    );
}

#[test]
fn backtracking_edges_leave_a_sliver_piece() {
    let a = poly(&[(9.0, 3.0), (3.0, 2.0), (6.0, 5.0), (4.0, 3.0), (5.0, 10.0), (6.0, 9.0)]);
    assert_eq!(
        split_polygon(&a, ClipCfg::default()),
        vec![
            poly(&[(9.0, 3.0), (3.0, 2.0), (4.0, 3.0), (5.0, 10.0), (6.0, 9.0)]),
            poly(&[(6.0, 5.0), (4.0, 3.0), (4.0, 3.0)]),
        ]
    );
}

#[test]
fn near_duplicate_crossings_merge_under_tolerance() {
    let bowtie = poly(&[(0.0, 0.0), (2.0, 2.0), (2.0, 0.0), (0.0, 2.0)]);
    let cfg = ClipCfg {
        eps_point: 1e-9,
        ..ClipCfg::default()
    };
    let pieces = split_polygon(&bowtie, cfg);
    assert_eq!(pieces.len(), 2);
    assert_eq!(pieces[0].v[1], vector![1.0, 1.0]);
}
