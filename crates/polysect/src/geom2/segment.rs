//! Parametric intersection of two finite segments.
//!
//! Conventions
//! - Exact floating-point arithmetic, no tolerance.
//! - Parallel segments (`cross(dirA, dirB) == 0`), collinear overlaps included,
//!   report no intersection.
//! - Touching at an endpoint counts: both parameters are tested with closed
//!   bounds `0 <= t, u <= 1`.

use super::types::{Point, Segment};
use super::vector::cross;

/// Intersection point of `sa` and `sb`, if any.
///
/// Solves `sa.a + t·dirA = sb.a + u·dirB` via
/// `t = cross(sb.a − sa.a, dirB) / cross(dirA, dirB)` and
/// `u = cross(sb.a − sa.a, dirA) / cross(dirA, dirB)`; the returned point is
/// `sa.a + t·dirA`, so the result depends on argument order in the last bits.
pub fn segment_intersection(sa: &Segment, sb: &Segment) -> Option<Point> {
    let dir_a = sa.dir();
    let dir_b = sb.dir();
    let denom = cross(dir_a, dir_b);
    if denom == 0.0 {
        return None;
    }
    let offset = sb.a - sa.a;
    let t = cross(offset, dir_b) / denom;
    let u = cross(offset, dir_a) / denom;
    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(sa.a + dir_a * t)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn seg(ax: f64, ay: f64, bx: f64, by: f64) -> Segment {
        Segment::new(vector![ax, ay], vector![bx, by])
    }

    #[test]
    fn proper_crossing() {
        let p = segment_intersection(&seg(0.0, 0.0, 0.0, 10.0), &seg(-5.0, 8.0, 15.0, 8.0));
        assert_eq!(p, Some(vector![0.0, 8.0]));
    }

    #[test]
    fn endpoint_touch_is_reported() {
        let p = segment_intersection(&seg(0.0, 0.0, 0.0, 10.0), &seg(0.0, 10.0, 10.0, 10.0));
        assert_eq!(p, Some(vector![0.0, 10.0]));
        // T-junction: endpoint of one lies inside the other
        let q = segment_intersection(&seg(2.0, 0.0, 2.0, 10.0), &seg(0.0, 10.0, 10.0, 10.0));
        assert_eq!(q, Some(vector![2.0, 10.0]));
    }

    #[test]
    fn parallel_and_collinear_are_none() {
        assert!(segment_intersection(&seg(0.0, 0.0, 1.0, 0.0), &seg(0.0, 1.0, 1.0, 1.0)).is_none());
        // collinear overlap is not detected
        assert!(segment_intersection(&seg(0.0, 0.0, 2.0, 0.0), &seg(1.0, 0.0, 3.0, 0.0)).is_none());
    }

    #[test]
    fn disjoint_lines_crossing_outside_extent() {
        assert!(segment_intersection(&seg(0.0, 0.0, 1.0, 1.0), &seg(3.0, 0.0, 2.0, 1.0)).is_none());
    }

    #[test]
    fn bowtie_diagonals_meet_in_the_middle() {
        let d1 = seg(0.0, 0.0, 2.0, 2.0);
        let d2 = seg(2.0, 0.0, 0.0, 2.0);
        assert_eq!(segment_intersection(&d1, &d2), Some(vector![1.0, 1.0]));
        assert_eq!(segment_intersection(&d2, &d1), Some(vector![1.0, 1.0]));
    }
}
