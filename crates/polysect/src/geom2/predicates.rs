//! Orientation, containment and area predicates on vertex loops.
//!
//! Every formula is evaluated in a fixed operand order; under the default
//! (exact) configuration results are reproducible bit-for-bit.

use super::types::{ClipCfg, Point, Segment};
use super::vector::cross;

/// `Σ (x_{i+1} − x_i)(y_{i+1} + y_i) > 0`.
///
/// With y pointing up this is the clockwise test; zero-area loops are not
/// clockwise.
pub fn is_clockwise(v: &[Point]) -> bool {
    let n = v.len();
    let mut sum = 0.0;
    for i in 0..n {
        let cur = v[i];
        let next = v[(i + 1) % n];
        sum += (next.x - cur.x) * (next.y + cur.y);
    }
    sum > 0.0
}

/// True if `p` lies on the closed segment `edge`.
///
/// Collinearity via the cross product, extent via the projection
/// `0 <= dot(e, p − a) <= dot(e, e)`. With a positive `eps_point` every bound
/// is widened by `eps · |e|`. A zero-length edge (under the point policy)
/// holds only its own point.
pub fn is_on_edge(p: Point, edge: &Segment, cfg: ClipCfg) -> bool {
    let e = edge.dir();
    let w = p - edge.a;
    let c = cross(e, w);
    let d = e.dot(&w);
    let ee = e.dot(&e);
    if ee == 0.0 || cfg.same_point(edge.a, edge.b) {
        return cfg.same_point(p, edge.a);
    }
    if cfg.eps_point == 0.0 {
        c == 0.0 && d >= 0.0 && d <= ee
    } else {
        let slack = cfg.eps_point * ee.sqrt();
        c.abs() <= slack && d >= -slack && d <= ee + slack
    }
}

/// Ray-casting point-in-polygon; vertices and edges count as inside.
///
/// Short-circuits to `true` as soon as `p` equals a vertex or lies on an edge;
/// otherwise toggles on every edge straddling the horizontal through `p` whose
/// crossing lies strictly to the right of `p`.
pub fn contains_point(p: Point, v: &[Point], cfg: ClipCfg) -> bool {
    let n = v.len();
    if n == 0 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let vi = v[i];
        let vj = v[j];
        if cfg.same_point(p, vi) {
            return true;
        }
        if is_on_edge(p, &Segment::new(vj, vi), cfg) {
            return true;
        }
        if ((vi.y > p.y) != (vj.y > p.y))
            && (p.x < (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x)
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// `|Σ (x_i − x_{i+1})(y_i + y_{i+1})|`, zero below three vertices.
pub fn doubled_area(v: &[Point]) -> f64 {
    let n = v.len();
    if n <= 2 {
        return 0.0;
    }
    let mut acc = 0.0;
    for i in 0..n {
        let p = v[i];
        let q = v[(i + 1) % n];
        acc += (p.x - q.x) * (p.y + q.y);
    }
    acc.abs()
}
