//! Polygon intersection for simple and self-intersecting polygons.
//!
//! Pipeline: `split` cuts each operand into simple pieces, `clip` runs a
//! Weiler–Atherton walk on every pair of pieces, and `intersect` filters out
//! near-zero-area rings.
//!
//! Precision contract
//! - Point identity is exact coordinate equality unless `ClipCfg::eps_point`
//!   is set. Crossing points come from a division and are not guaranteed to
//!   be bit-identical when computed from different edge pairs.
//!
//! API Policy
//! - `intersect_polygons` and `try_intersect_polygons` are the supported
//!   entry points. Phase modules are public for tests, benches and tooling.

pub mod api;
pub mod clip;
pub mod error;
pub mod geom2;
pub mod intersect;
pub mod split;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{ClipError, ClipResult, Operand};
pub use geom2::{ClipCfg, Point, Polygon};
pub use intersect::{intersect_polygons, intersect_polygons_with, try_intersect_polygons};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::clip::intersect_simple;
    pub use crate::geom2::rand::{draw_star, draw_tangle, ReplayToken, StarCfg, VertexCount};
    pub use crate::geom2::{ClipCfg, Point, Polygon};
    pub use crate::intersect::{
        intersect_polygons, intersect_polygons_with, retain_significant, try_intersect_polygons,
    };
    pub use crate::split::split_polygon;
    pub use crate::{ClipError, ClipResult};
    pub use nalgebra::Vector2 as Vec2;
}
