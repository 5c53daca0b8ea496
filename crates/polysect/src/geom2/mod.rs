//! 2D primitives for the intersection kernel.
//!
//! Purpose
//! - Points, segments and vertex-loop polygons with the handful of predicates
//!   the clipper needs: exact segment intersection, winding, point-in-polygon
//!   with boundary short-circuits, doubled shoelace area.
//!
//! Conventions
//! - `Point = Vector2<f64>`; identity goes through `ClipCfg::same_point`.
//! - Clockwise means `Σ (x_{i+1} − x_i)(y_{i+1} + y_i) > 0` (y up).
//!
//! Cross-refs: `crate::split`, `crate::clip`

mod predicates;
pub mod rand;
mod segment;
mod types;
mod vector;

pub use predicates::{contains_point, doubled_area, is_clockwise, is_on_edge};
pub use segment::segment_intersection;
pub use types::{ClipCfg, Point, Polygon, Segment};
pub use vector::{cross, dist};
