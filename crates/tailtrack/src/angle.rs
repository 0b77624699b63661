//! Chain-to-angle reduction.

use nalgebra::Vector2;

use tailtrack_core::{deflection, PixelCoords};

/// Tail deflection angle for a tracked point chain.
///
/// Averages the last `n_tip_points` chain points (the whole chain when it is
/// shorter), takes the vector from the chain start to that tip and measures
/// its deflection from the baseline direction. Repeated points from bounds
/// recovery enter the mean like any other. `None` for an empty chain.
pub fn tail_angle(points: &[PixelCoords], n_tip_points: usize, baseline: f32) -> Option<f32> {
    if points.is_empty() {
        return None;
    }

    let tip_count = n_tip_points.clamp(1, points.len());
    let tip_sum = points[points.len() - tip_count..]
        .iter()
        .fold(Vector2::zeros(), |acc, p| acc + p.to_vector());
    let tip = tip_sum / tip_count as f32;

    let tail_vector = tip - points[0].to_vector();
    Some(deflection(tail_vector, baseline))
}
