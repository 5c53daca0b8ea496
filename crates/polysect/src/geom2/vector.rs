//! Vector primitives on `Vector2<f64>`.
//!
//! nalgebra already supplies length (`norm`), negation, scaling, addition and
//! `dot`. The one primitive it lacks for 2D is the scalar cross product.

use nalgebra::Vector2;

/// Scalar cross product `u.x * v.y - v.x * u.y`.
///
/// Signed area of the parallelogram spanned by `u` and `v`; positive when
/// `u → v` turns counterclockwise. Evaluated in exactly this operand order so
/// that results are reproducible bit-for-bit.
#[inline]
pub fn cross(u: Vector2<f64>, v: Vector2<f64>) -> f64 {
    u.x * v.y - v.x * u.y
}

/// Euclidean distance `|a − b|`.
#[inline]
pub fn dist(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    (a - b).norm()
}
