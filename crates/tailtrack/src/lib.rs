//! Tail bending-angle tracking for tethered-animal video frames.
//!
//! This crate provides:
//! - the per-frame tracking pipeline: normalization and smoothing, an
//!   iterative arc search walking a point chain along the tail, and the
//!   deflection-angle reduction of that chain,
//! - JSON config/report types for driving the tracker from files,
//! - (feature-gated) adapters for `image` containers and a small CLI.
//!
//! ## Quickstart
//!
//! ```
//! use tailtrack::{FrameView, PixelCoords, TailTracker};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pixels = vec![200u8; 64 * 48];
//! let frame = FrameView {
//!     width: 64,
//!     height: 48,
//!     data: &pixels,
//! };
//!
//! let tracker = TailTracker::from_points(
//!     PixelCoords { x: 8, y: 24 },
//!     PixelCoords { x: 56, y: 24 },
//!     10,
//! )?;
//! let result = tracker.track(&frame)?;
//! println!("tracked: {}", result.is_some());
//! # Ok(())
//! # }
//! ```
//!
//! The seed normally comes from two user clicks in an annotation GUI;
//! [`TailTracker::from_points`] turns them into a tail length and start
//! angle. Tracking holds no state between frames, so one tracker can be
//! shared across a whole recording and retuned between calls through
//! [`TailTracker::params_mut`].
//!
//! ## API map
//! - [`TailTracker`], [`TrackResult`]: the pipeline entry point.
//! - [`TailTrackerParams`], [`TailSeed`], [`Background`]: configuration.
//! - [`preprocess()`], [`search_chain`], [`tail_angle`]: the pipeline stages,
//!   usable on their own.
//! - [`TailTrackConfig`], [`TailTrackReport`]: JSON driving layer.
//! - [`adapt`] (feature `image`): `image::GrayImage` conversions.

pub use tailtrack_core as core;

mod angle;
mod arc_search;
mod io;
mod params;
mod preprocess;
mod tracker;

pub use angle::tail_angle;
pub use arc_search::{search_chain, ARC_SAMPLES};
pub use io::{TailTrackConfig, TailTrackReport, TrackIoError};
pub use params::{Background, TailParamsError, TailSeed, TailTrackerParams};
pub use preprocess::{preprocess, PreprocessError};
pub use tracker::{TailTracker, TrackResult};

pub use tailtrack_core::{FilteredFrame, FrameView, PixelCoords};

#[cfg(feature = "image")]
pub mod adapt;
