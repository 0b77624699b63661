//! Core types and utilities for tail tracking.
//!
//! This crate is intentionally small and purely data-oriented. It does *not*
//! depend on any concrete image container or on the tracking pipeline itself.

mod angles;
mod coords;
mod frame;
mod logger;

pub use angles::{deflection, unit_vector, vector_angle};
pub use coords::PixelCoords;
pub use frame::{FilteredFrame, FrameView};
pub use logger::init_with_level;

#[cfg(feature = "tracing")]
pub use logger::init_tracing;
