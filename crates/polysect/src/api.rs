//! Curated surface for tooling (CLI, benches, demos).
//!
//! Re-exports only; everything here is also reachable through its module.

// Entry points
pub use crate::intersect::{
    intersect_polygons, intersect_polygons_with, retain_significant, try_intersect_polygons,
    validate_operand,
};
// Phases
pub use crate::clip::{
    augment, intersect_simple, label_inside, link_jumps, mark_crossings, traverse, LabeledVertex,
    Marks,
};
pub use crate::split::{self_crossings, split_polygon};
// Geometry
pub use crate::geom2::{
    contains_point, doubled_area, is_clockwise, segment_intersection, ClipCfg, Point, Polygon,
    Segment,
};
pub use crate::geom2::rand::{
    draw_star, draw_tangle, ReplayToken as PolygonReplay, StarCfg, VertexCount,
};
pub use crate::error::{ClipError, ClipResult, Operand};
