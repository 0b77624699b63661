//! Tail tracker entry point.

use serde::{Deserialize, Serialize};

use tailtrack_core::{FilteredFrame, FrameView, PixelCoords};

use crate::angle::tail_angle;
use crate::arc_search::search_chain;
use crate::params::{TailParamsError, TailSeed, TailTrackerParams};
use crate::preprocess::{preprocess, PreprocessError};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Chain and angle produced by tracking one frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackResult {
    /// Deflection of the tail from the configured start angle, radians.
    pub angle: f32,
    /// Tracked chain, `n_points + 1` entries starting at the seed point.
    pub points: Vec<PixelCoords>,
}

/// Tail tracker. Create once, track any number of frames.
///
/// Tracking is a pure function of the frame and the parameters; nothing
/// carries over between frames, so every call restarts from the seed.
#[derive(Clone, Debug)]
pub struct TailTracker {
    params: TailTrackerParams,
}

impl TailTracker {
    /// Create a tracker from a validated parameter set.
    pub fn new(params: TailTrackerParams) -> Result<Self, TailParamsError> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Create a configured tracker from two user-picked points.
    ///
    /// See [`TailTrackerParams::from_points`].
    pub fn from_points(
        p0: PixelCoords,
        p1: PixelCoords,
        n_points: usize,
    ) -> Result<Self, TailParamsError> {
        Self::new(TailTrackerParams::from_points(p0, p1, n_points))
    }

    /// Current parameters.
    pub fn params(&self) -> &TailTrackerParams {
        &self.params
    }

    /// Mutable access to parameters for post-construction tuning.
    ///
    /// Callers changing the seed or window sizes should re-run
    /// [`TailTrackerParams::validate`] before the next track.
    pub fn params_mut(&mut self) -> &mut TailTrackerParams {
        &mut self.params
    }

    /// Normalized and smoothed view of `frame`, exactly as the search sees it.
    pub fn preprocess(&self, frame: &FrameView<'_>) -> Result<FilteredFrame, PreprocessError> {
        preprocess(frame, self.params.kernel_size)
    }

    /// Track one frame.
    ///
    /// Returns `Ok(None)` while the seed is unconfigured; otherwise the full
    /// preprocess, arc-search and angle pipeline runs and yields a result
    /// with `n_points + 1` chain entries.
    #[cfg_attr(
        feature = "tracing",
        instrument(
            level = "info",
            skip(self, frame),
            fields(width = frame.width, height = frame.height)
        )
    )]
    pub fn track(&self, frame: &FrameView<'_>) -> Result<Option<TrackResult>, PreprocessError> {
        let TailSeed::Configured {
            start_point,
            tail_length,
            n_points,
        } = self.params.seed
        else {
            return Ok(None);
        };

        let filtered = self.preprocess(frame)?;
        let points = search_chain(
            &filtered,
            start_point,
            tail_length,
            n_points,
            self.params.start_angle,
            self.params.background,
        );
        let angle = tail_angle(&points, self.params.n_tip_points, self.params.start_angle);

        Ok(angle.map(|angle| TrackResult { angle, points }))
    }
}
