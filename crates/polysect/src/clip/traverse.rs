//! Weiler–Atherton walk over two labeled, augmented polygons.
//!
//! The walk starts on A at an unvisited intersection vertex and follows the
//! current polygon while the next vertex lies inside the other operand. At a
//! vertex whose successor is outside it switches polygons through `jump` and
//! resumes just past the linked vertex. A vertex with an outside successor and
//! no link ends the walk early; the partial ring is still returned and the
//! area filter downstream normally removes it.

use tracing::{debug, warn};

use crate::geom2::{ClipCfg, Point, Polygon};

use super::types::LabeledVertex;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    A,
    B,
}

impl Side {
    fn other(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// Set `is_inside` of every vertex against the original `other` polygon.
pub fn label_inside(aug: &mut [LabeledVertex], other: &Polygon, cfg: ClipCfg) {
    for v in aug.iter_mut() {
        v.is_inside = other.contains(v.at, cfg);
    }
}

/// Link each intersection vertex of `a` to the first vertex of `b` at the
/// same point, in both directions. A later vertex of `a` at the same point
/// overwrites the back link on `b`.
pub fn link_jumps(a: &mut [LabeledVertex], b: &mut [LabeledVertex], cfg: ClipCfg) {
    for i in 0..a.len() {
        if !a[i].is_intersection {
            continue;
        }
        let at = a[i].at;
        if let Some(j) = b.iter().position(|w| cfg.same_point(w.at, at)) {
            a[i].jump = Some(j);
            b[j].jump = Some(i);
        }
    }
}

/// Every overlap ring reachable from an intersection vertex of `a`.
pub fn traverse(a: &[LabeledVertex], b: &[LabeledVertex], cfg: ClipCfg) -> Vec<Polygon> {
    let mut used = vec![false; a.len()];
    let mut out = Vec::new();
    while let Some(start) = (0..a.len()).find(|&i| a[i].is_intersection && !used[i]) {
        if let Some(ring) = walk(a, b, start, &mut used, cfg) {
            out.push(Polygon::new(ring));
        }
    }
    out
}

/// One ring from `a[start]`. `None` if the step bound is exceeded.
fn walk(
    a: &[LabeledVertex],
    b: &[LabeledVertex],
    start: usize,
    used: &mut [bool],
    cfg: ClipCfg,
) -> Option<Vec<Point>> {
    let origin = a[start].at;
    let limit = 2 * (a.len() + b.len());
    let pick = |side: Side| match side {
        Side::A => a,
        Side::B => b,
    };
    let (mut side, mut cur) = (Side::A, start);
    let mut ring = Vec::new();
    loop {
        let poly = pick(side);
        let here = poly[cur];
        match side {
            Side::A => used[cur] = true,
            Side::B => {
                if let Some(k) = here.jump {
                    used[k] = true;
                }
            }
        }
        ring.push(here.at);

        let next = (cur + 1) % poly.len();
        if poly[next].is_inside {
            cur = next;
        } else if let Some(k) = here.jump {
            side = side.other();
            cur = (k + 1) % pick(side).len();
        } else {
            debug!(start, len = ring.len(), "overlap walk ended on an open boundary");
            return Some(ring);
        }

        if cfg.same_point(pick(side)[cur].at, origin) {
            return Some(ring);
        }
        if ring.len() > limit {
            warn!(start, limit, "overlap walk did not close; ring dropped");
            return None;
        }
    }
}
