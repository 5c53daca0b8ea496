//! Basic 2D types and the point-identity policy.
//!
//! - `ClipCfg`: centralizes the point tolerance and the area threshold.
//! - `Segment`: directed edge `a → b`.
//! - `Polygon`: closed vertex loop; edge `i` joins `v[i]` to `v[(i+1) % n]`.
//!
//! Cross-refs: `segment::segment_intersection`, `predicates::{is_on_edge, contains_point}`

use nalgebra::Vector2;

use super::predicates::{contains_point, doubled_area, is_clockwise};

/// A point in the plane. Identity between points is decided by
/// [`ClipCfg::same_point`], never by `==` directly.
pub type Point = Vector2<f64>;

/// Clip configuration (tolerances).
///
/// Defaults: exact coordinate equality for point identity and a `1e-4` area
/// threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipCfg {
    /// Per-axis tolerance for point identity. `0.0` means exact equality.
    pub eps_point: f64,
    /// Outputs whose area is below this value are dropped (compared against the
    /// doubled area as `2 * area_threshold`).
    pub area_threshold: f64,
}

impl Default for ClipCfg {
    fn default() -> Self {
        Self {
            eps_point: 0.0,
            area_threshold: 1e-4,
        }
    }
}

impl ClipCfg {
    /// Exact-equality configuration with a custom area threshold.
    #[inline]
    pub fn with_area_threshold(area_threshold: f64) -> Self {
        Self {
            area_threshold,
            ..Self::default()
        }
    }

    /// Point identity: `|a.x - b.x| <= eps` and `|a.y - b.y| <= eps`.
    ///
    /// With `eps_point == 0` this is plain coordinate equality (`-0.0 == 0.0`).
    #[inline]
    pub fn same_point(&self, a: Point, b: Point) -> bool {
        if self.eps_point == 0.0 {
            a.x == b.x && a.y == b.y
        } else {
            (a.x - b.x).abs() <= self.eps_point && (a.y - b.y).abs() <= self.eps_point
        }
    }

    /// Check that both tolerances are finite and non-negative.
    pub fn validate(&self) -> Result<(), String> {
        if !self.eps_point.is_finite() || self.eps_point < 0.0 {
            return Err(format!("eps_point must be finite and >= 0, got {}", self.eps_point));
        }
        if !self.area_threshold.is_finite() || self.area_threshold < 0.0 {
            return Err(format!(
                "area_threshold must be finite and >= 0, got {}",
                self.area_threshold
            ));
        }
        Ok(())
    }
}

/// Directed segment `a → b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// Direction vector `b - a`.
    #[inline]
    pub fn dir(&self) -> Vector2<f64> {
        self.b - self.a
    }

    /// True if `p` is one of the two endpoints under `cfg`.
    #[inline]
    pub fn has_endpoint(&self, p: Point, cfg: ClipCfg) -> bool {
        cfg.same_point(p, self.a) || cfg.same_point(p, self.b)
    }

    /// True if the two segments share at least one endpoint under `cfg`.
    #[inline]
    pub fn shares_endpoint(&self, other: &Segment, cfg: ClipCfg) -> bool {
        self.has_endpoint(other.a, cfg) || self.has_endpoint(other.b, cfg)
    }
}

/// Closed polygon as an ordered vertex loop (no repeated closing vertex).
///
/// Invariants:
/// - Any vertex count is representable; fewer than 3 vertices means zero area.
/// - No simplicity or winding requirement; see `split` for self-intersecting input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub v: Vec<Point>,
}

impl Polygon {
    #[inline]
    pub fn new(v: Vec<Point>) -> Self {
        Self { v }
    }

    /// Build from `(x, y)` pairs.
    pub fn from_xy(pts: &[(f64, f64)]) -> Self {
        Self {
            v: pts.iter().map(|&(x, y)| Vector2::new(x, y)).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.v.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.v.is_empty()
    }

    /// Edge `i`: `v[i] → v[(i+1) % n]`.
    #[inline]
    pub fn edge(&self, i: usize) -> Segment {
        Segment::new(self.v[i], self.v[(i + 1) % self.v.len()])
    }

    /// All edges in order, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        (0..self.v.len()).map(move |i| self.edge(i))
    }

    /// Winding test, see [`is_clockwise`].
    #[inline]
    pub fn is_clockwise(&self) -> bool {
        is_clockwise(&self.v)
    }

    /// Same loop traversed in the opposite direction.
    pub fn reversed(mut self) -> Self {
        self.v.reverse();
        self
    }

    /// Reverse unless already clockwise.
    pub fn into_clockwise(self) -> Self {
        if self.is_clockwise() {
            self
        } else {
            self.reversed()
        }
    }

    /// Unsigned doubled shoelace area; `0.0` below 3 vertices.
    #[inline]
    pub fn doubled_area(&self) -> f64 {
        doubled_area(&self.v)
    }

    /// Point-in-polygon including the boundary, see [`contains_point`].
    #[inline]
    pub fn contains(&self, p: Point, cfg: ClipCfg) -> bool {
        contains_point(p, &self.v, cfg)
    }

    /// Translate every vertex by `t`.
    pub fn translated(&self, t: Vector2<f64>) -> Self {
        Self {
            v: self.v.iter().map(|p| p + t).collect(),
        }
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(v: Vec<Point>) -> Self {
        Self { v }
    }
}
