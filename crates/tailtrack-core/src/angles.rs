//! Image-plane angle conventions.
//!
//! Pixel coordinates put the origin at the top-left with y growing downward,
//! while angles follow the math convention: measured from the positive x axis,
//! counterclockwise positive *on screen*. Every sign flip that mismatch
//! requires lives in this module; no other component applies its own.

use nalgebra::Vector2;

/// Unit step in image coordinates for a direction angle.
///
/// An angle of zero points rightward; positive angles rotate
/// counterclockwise on screen, which is toward smaller y.
#[inline]
pub fn unit_vector(angle: f32) -> Vector2<f32> {
    Vector2::new(angle.cos(), -angle.sin())
}

/// Direction angle of an image-space vector.
///
/// Inverse of [`unit_vector`] up to vector length: the y component is negated
/// before `atan2` so that on-screen counterclockwise comes out positive.
#[inline]
pub fn vector_angle(v: Vector2<f32>) -> f32 {
    (-v.y).atan2(v.x)
}

/// Angle of `v` after subtracting the baseline direction `(cos b, sin b)`.
///
/// This is the tail-angle reduction: the baseline enters as a plain
/// math-convention unit vector, the difference is measured with
/// [`vector_angle`]. With a zero baseline, a vector along positive x has zero
/// deflection and bending toward smaller y is positive.
#[inline]
pub fn deflection(v: Vector2<f32>, baseline: f32) -> f32 {
    vector_angle(v - Vector2::new(baseline.cos(), baseline.sin()))
}
