use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Integer pixel coordinates (origin top-left, x right, y down).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct PixelCoords {
    pub x: i32,
    pub y: i32,
}

impl PixelCoords {
    /// Position as a float vector for image-space math.
    pub fn to_vector(self) -> Vector2<f32> {
        Vector2::new(self.x as f32, self.y as f32)
    }

    /// Vector from `self` to `other`.
    pub fn vector_to(self, other: PixelCoords) -> Vector2<f32> {
        other.to_vector() - self.to_vector()
    }
}
