//! Intersection of two arbitrary (possibly self-intersecting) polygons.
//!
//! Purpose
//! - The crate's main entry point: split both operands into simple pieces,
//!   clip every (piece of A, piece of B) pair, drop near-zero-area results.
//!
//! Conventions
//! - Output order: pairs in (A piece, B piece) iteration order, then ring
//!   discovery order within each pair.
//! - Pieces with fewer than 3 vertices are not paired.
//! - The lenient entry points never fail; malformed input degrades to empty
//!   or filtered output. `try_intersect_polygons` rejects it up front.
//!
//! Cross-refs: `crate::split::split_polygon`, `crate::clip::intersect_simple`

use tracing::debug;

use crate::clip::intersect_simple;
use crate::error::{ClipError, ClipResult, Operand};
use crate::geom2::{ClipCfg, Polygon};
use crate::split::split_polygon;

/// Intersect `a` and `b` with the default configuration.
pub fn intersect_polygons(a: &Polygon, b: &Polygon) -> Vec<Polygon> {
    intersect_polygons_with(a, b, ClipCfg::default())
}

/// Intersect `a` and `b` under `cfg`.
pub fn intersect_polygons_with(a: &Polygon, b: &Polygon, cfg: ClipCfg) -> Vec<Polygon> {
    let pieces_a = simple_pieces(a, cfg);
    let pieces_b = simple_pieces(b, cfg);
    let mut raw = Vec::new();
    for pa in &pieces_a {
        for pb in &pieces_b {
            raw.extend(intersect_simple(pa, pb, cfg));
        }
    }
    let found = raw.len();
    let out = retain_significant(raw, cfg.area_threshold);
    debug!(
        pieces_a = pieces_a.len(),
        pieces_b = pieces_b.len(),
        found,
        kept = out.len(),
        "intersect"
    );
    out
}

/// Validate both operands and the configuration, then intersect.
pub fn try_intersect_polygons(a: &Polygon, b: &Polygon, cfg: ClipCfg) -> ClipResult<Vec<Polygon>> {
    cfg.validate()
        .map_err(|message| ClipError::InvalidConfig { message })?;
    validate_operand(a, Operand::A, cfg)?;
    validate_operand(b, Operand::B, cfg)?;
    Ok(intersect_polygons_with(a, b, cfg))
}

/// Reject polygons with fewer than 3 vertices, non-finite coordinates or a
/// zero-length edge. Checks run in that order.
pub fn validate_operand(p: &Polygon, operand: Operand, cfg: ClipCfg) -> ClipResult<()> {
    if p.len() < 3 {
        return Err(ClipError::InvalidPolygon {
            operand,
            len: p.len(),
        });
    }
    if let Some(vertex) = p.v.iter().position(|q| !(q.x.is_finite() && q.y.is_finite())) {
        return Err(ClipError::NonFiniteVertex { operand, vertex });
    }
    if let Some(edge) = p.edges().position(|e| cfg.same_point(e.a, e.b)) {
        return Err(ClipError::DegenerateEdge { operand, edge });
    }
    Ok(())
}

/// Keep rings whose doubled area is at least `2 * threshold`.
pub fn retain_significant(rings: Vec<Polygon>, threshold: f64) -> Vec<Polygon> {
    rings
        .into_iter()
        .filter(|r| r.doubled_area() >= 2.0 * threshold)
        .collect()
}

fn simple_pieces(p: &Polygon, cfg: ClipCfg) -> Vec<Polygon> {
    let mut pieces = split_polygon(p, cfg);
    pieces.retain(|q| q.len() >= 3);
    pieces
}
