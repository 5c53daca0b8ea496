//! Weiler–Atherton clipping of two simple polygons.
//!
//! Purpose
//! - Overlap of two simple (non self-intersecting) polygons as a list of rings.
//!
//! Procedure
//! 1. Both operands are normalized to clockwise order.
//! 2. `mark_crossings` finds every boundary contact and the degenerate flag.
//! 3. Degenerate (no contact strictly inside any edge): containment decides.
//!    All of A's vertices inside-or-on B yields `[A]`; otherwise all of B's
//!    inside A yields `[B]`; otherwise nothing.
//! 4. Otherwise both operands are augmented with their crossings, labeled
//!    inside/outside against the other original operand, cross-linked, and
//!    walked from each unvisited intersection vertex of A.
//!
//! Conventions
//! - Output rings are clockwise in the non-degenerate case and are the
//!   normalized operand in the containment case.
//! - Rings may be partial or sliver-thin; `crate::intersect` filters by area.
//!
//! Cross-refs: `crate::split` (operands come from there), `crate::geom2::contains_point`

mod augment;
mod mark;
mod traverse;
mod types;

pub use augment::augment;
pub use mark::mark_crossings;
pub use traverse::{label_inside, link_jumps, traverse};
pub use types::{EdgeMarks, LabeledVertex, Marks};

use tracing::trace;

use crate::geom2::{ClipCfg, Polygon};

/// Overlap of two simple polygons.
///
/// Operands with fewer than 3 vertices have no overlap.
pub fn intersect_simple(a: &Polygon, b: &Polygon, cfg: ClipCfg) -> Vec<Polygon> {
    if a.len() < 3 || b.len() < 3 {
        return Vec::new();
    }
    let a = a.clone().into_clockwise();
    let b = b.clone().into_clockwise();
    let marks = mark_crossings(&a, &b, cfg);
    if marks.degenerate {
        trace!(len_a = a.len(), len_b = b.len(), "touch-only pair; containment test");
        return containment(a, b, cfg);
    }

    let mut aug_a = augment(&a, &marks.a, cfg);
    let mut aug_b = augment(&b, &marks.b, cfg);
    label_inside(&mut aug_a, &b, cfg);
    label_inside(&mut aug_b, &a, cfg);
    link_jumps(&mut aug_a, &mut aug_b, cfg);
    let rings = traverse(&aug_a, &aug_b, cfg);
    trace!(
        aug_a = aug_a.len(),
        aug_b = aug_b.len(),
        rings = rings.len(),
        "clipped pair"
    );
    rings
}

/// `[a]` if `a` lies in `b`, else `[b]` if `b` lies in `a`, else empty.
fn containment(a: Polygon, b: Polygon, cfg: ClipCfg) -> Vec<Polygon> {
    if a.v.iter().all(|&p| b.contains(p, cfg)) {
        vec![a]
    } else if b.v.iter().all(|&p| a.contains(p, cfg)) {
        vec![b]
    } else {
        Vec::new()
    }
}
