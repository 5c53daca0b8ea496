//! Decomposition of a self-intersecting vertex loop into simple polygons.
//!
//! Purpose
//! - Cut every edge at its crossings with the other (non-adjacent) edges,
//!   then peel closed loops off the resulting arc graph one lobe at a time.
//!
//! Procedure
//! - Edge pairs sharing an endpoint are skipped. Each crossing is stored once
//!   per edge (point policy dedup) and the list is sorted by distance from the
//!   edge's start vertex (stable; ties are not expected for valid input).
//! - Sub-edges go into an `ArcGraph`. A walk starts at the first node (in
//!   insertion order) with exactly one unconsumed outgoing arc and follows the
//!   most recently inserted unconsumed arc at every node until it returns.
//!
//! A simple loop comes back unchanged, starting at its first vertex.
//!
//! Cross-refs: `graph::ArcGraph`, `crate::geom2::segment_intersection`

mod graph;

pub use graph::{Arc, ArcGraph, ArcId, Node, NodeId};

use tracing::trace;

use crate::geom2::{dist, segment_intersection, ClipCfg, Point, Polygon, Segment};

/// Split `poly` into simple polygons.
///
/// Empty input yields no pieces. Output order follows the extraction order.
pub fn split_polygon(poly: &Polygon, cfg: ClipCfg) -> Vec<Polygon> {
    let edges: Vec<Segment> = poly.edges().collect();
    let hits = self_crossings(&edges, cfg);
    let cuts: usize = hits.iter().map(Vec::len).sum();
    let mut pairs: Vec<(Point, Point)> = Vec::with_capacity(edges.len() + cuts);
    for (e, pts) in edges.iter().zip(&hits) {
        let mut from = e.a;
        for &p in pts {
            pairs.push((from, p));
            from = p;
        }
        pairs.push((from, e.b));
    }
    let mut graph = ArcGraph::from_arcs(&pairs, cfg);
    let pieces = graph.extract_loops();
    trace!(
        vertices = poly.len(),
        sub_edges = pairs.len(),
        pieces = pieces.len(),
        leftover = graph.unused_arcs(),
        "split"
    );
    pieces
}

/// Crossings of each edge with every edge it does not share an endpoint with,
/// sorted along the edge.
///
/// Every ordered pair `(i, j)` is evaluated, so each crossing is computed from
/// both sides; the first value registered on an edge wins.
pub fn self_crossings(edges: &[Segment], cfg: ClipCfg) -> Vec<Vec<Point>> {
    let mut hits: Vec<Vec<Point>> = vec![Vec::new(); edges.len()];
    for i in 0..edges.len() {
        for j in 0..edges.len() {
            if i == j || edges[i].shares_endpoint(&edges[j], cfg) {
                continue;
            }
            if let Some(p) = segment_intersection(&edges[i], &edges[j]) {
                push_unique(&mut hits[i], p, cfg);
                push_unique(&mut hits[j], p, cfg);
            }
        }
    }
    for (pts, e) in hits.iter_mut().zip(edges) {
        sort_along(pts, e.a);
    }
    hits
}

fn push_unique(pts: &mut Vec<Point>, p: Point, cfg: ClipCfg) {
    if !pts.iter().any(|&q| cfg.same_point(q, p)) {
        pts.push(p);
    }
}

/// Stable sort by distance from `origin`.
pub(crate) fn sort_along(pts: &mut [Point], origin: Point) {
    pts.sort_by(|p, q| {
        dist(*p, origin)
            .partial_cmp(&dist(*q, origin))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

#[cfg(test)]
mod tests;
