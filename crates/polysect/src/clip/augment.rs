//! Splice interior crossings into a polygon's vertex sequence.

use crate::geom2::{ClipCfg, Polygon};
use crate::split::sort_along;

use super::types::{EdgeMarks, LabeledVertex};

/// Augmented vertex sequence of `poly`.
///
/// Each original vertex is emitted with its contact flag, followed by the
/// interior crossings of its outgoing edge sorted by distance from it. A
/// crossing equal to the previously emitted point is skipped.
pub fn augment(poly: &Polygon, marks: &EdgeMarks, cfg: ClipCfg) -> Vec<LabeledVertex> {
    let mut out: Vec<LabeledVertex> = Vec::with_capacity(poly.len() + marks.crossing_count());
    for (i, &at) in poly.v.iter().enumerate() {
        out.push(LabeledVertex::vertex(at, marks.at_vertex[i]));
        let mut pts = marks.interior[i].clone();
        sort_along(&mut pts, at);
        for p in pts {
            let dup = out.last().is_some_and(|last| cfg.same_point(last.at, p));
            if !dup {
                out.push(LabeledVertex::crossing(p));
            }
        }
    }
    out
}
