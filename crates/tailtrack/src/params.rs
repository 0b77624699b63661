//! Tracker configuration.

use serde::{Deserialize, Serialize};

use tailtrack_core::{vector_angle, PixelCoords};

/// Which side of the intensity contrast the scene sits on.
///
/// A light background means the tail is darker than its surroundings, so the
/// search follows intensity minima; a dark background follows maxima.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Background {
    Light,
    Dark,
}

impl Default for Background {
    fn default() -> Self {
        Self::Light
    }
}

/// Seed geometry for the point-chain search.
///
/// Either the user has picked a start point and tail extent, or tracking is a
/// no-op; partially configured states are unrepresentable.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TailSeed {
    Unconfigured,
    Configured {
        /// Pixel the chain starts from (tail attachment point).
        start_point: PixelCoords,
        /// Total chain extent in pixels, split evenly across `n_points` steps.
        tail_length: f32,
        /// Number of search steps; the chain has `n_points + 1` points.
        n_points: usize,
    },
}

impl Default for TailSeed {
    fn default() -> Self {
        Self::Unconfigured
    }
}

fn default_kernel_size() -> usize {
    7
}

fn default_n_tip_points() -> usize {
    3
}

/// Configuration for the tail tracker.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TailTrackerParams {
    /// Seed geometry; `Unconfigured` makes `track` return no result.
    #[serde(default)]
    pub seed: TailSeed,
    /// Center of the first search arc, radians. Zero points rightward,
    /// counterclockwise on screen is positive.
    #[serde(default)]
    pub start_angle: f32,
    /// Intensity polarity of the scene.
    #[serde(default)]
    pub background: Background,
    /// Side of the square mean-filter window in pixels, odd.
    #[serde(default = "default_kernel_size")]
    pub kernel_size: usize,
    /// Number of trailing chain points averaged for the angle estimate.
    #[serde(default = "default_n_tip_points")]
    pub n_tip_points: usize,
}

impl Default for TailTrackerParams {
    fn default() -> Self {
        Self {
            seed: TailSeed::Unconfigured,
            start_angle: 0.0,
            background: Background::Light,
            kernel_size: default_kernel_size(),
            n_tip_points: default_n_tip_points(),
        }
    }
}

/// Errors from validating a parameter set.
#[derive(thiserror::Error, Debug)]
pub enum TailParamsError {
    #[error("kernel size must be odd and nonzero (got {got})")]
    KernelSize { got: usize },
    #[error("tip-averaging window must be nonzero")]
    TipWindow,
    #[error("tip-averaging window exceeds the chain length ({got} > {max})")]
    TipWindowExceedsChain { got: usize, max: usize },
    #[error("tail length must be positive and finite (got {got})")]
    TailLength { got: f32 },
    #[error("point count must be nonzero")]
    PointCount,
}

impl TailTrackerParams {
    /// Check the parameter set for values the tracker cannot work with.
    pub fn validate(&self) -> Result<(), TailParamsError> {
        if self.kernel_size == 0 || self.kernel_size % 2 == 0 {
            return Err(TailParamsError::KernelSize {
                got: self.kernel_size,
            });
        }
        if self.n_tip_points == 0 {
            return Err(TailParamsError::TipWindow);
        }
        if let TailSeed::Configured {
            tail_length,
            n_points,
            ..
        } = self.seed
        {
            if !(tail_length.is_finite() && tail_length > 0.0) {
                return Err(TailParamsError::TailLength { got: tail_length });
            }
            if n_points == 0 {
                return Err(TailParamsError::PointCount);
            }
            if self.n_tip_points > n_points + 1 {
                return Err(TailParamsError::TipWindowExceedsChain {
                    got: self.n_tip_points,
                    max: n_points + 1,
                });
            }
        }
        Ok(())
    }

    /// Derive a configured parameter set from two user-picked points.
    ///
    /// `p0` is the tail attachment, `p1` the resting tail tip; the segment
    /// between them fixes the chain extent and the first arc direction.
    /// Remaining fields keep their defaults and can be adjusted afterwards.
    pub fn from_points(p0: PixelCoords, p1: PixelCoords, n_points: usize) -> Self {
        let v = p0.vector_to(p1);
        Self {
            seed: TailSeed::Configured {
                start_point: p0,
                tail_length: v.norm(),
                n_points,
            },
            start_angle: vector_angle(v),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn configured(tail_length: f32, n_points: usize) -> TailTrackerParams {
        TailTrackerParams {
            seed: TailSeed::Configured {
                start_point: PixelCoords { x: 0, y: 0 },
                tail_length,
                n_points,
            },
            ..TailTrackerParams::default()
        }
    }

    #[test]
    fn defaults_are_valid_and_unconfigured() {
        let params = TailTrackerParams::default();
        assert_eq!(TailSeed::Unconfigured, params.seed);
        assert_eq!(0.0, params.start_angle);
        assert_eq!(Background::Light, params.background);
        assert_eq!(7, params.kernel_size);
        assert_eq!(3, params.n_tip_points);
        params.validate().expect("defaults validate");
    }

    #[test]
    fn from_points_horizontal() {
        let params = TailTrackerParams::from_points(
            PixelCoords { x: 0, y: 0 },
            PixelCoords { x: 10, y: 0 },
            5,
        );
        let TailSeed::Configured {
            start_point,
            tail_length,
            n_points,
        } = params.seed
        else {
            panic!("expected a configured seed");
        };
        assert_eq!(PixelCoords { x: 0, y: 0 }, start_point);
        assert_eq!(10.0, tail_length);
        assert_eq!(5, n_points);
        assert_eq!(0.0, params.start_angle);
    }

    #[test]
    fn from_points_vertical_down_points_to_negative_angle() {
        let params = TailTrackerParams::from_points(
            PixelCoords { x: 0, y: 0 },
            PixelCoords { x: 0, y: 10 },
            5,
        );
        assert!(
            (params.start_angle + FRAC_PI_2).abs() < 1e-6,
            "got {}",
            params.start_angle
        );
    }

    #[test]
    fn validate_rejects_even_or_zero_kernel() {
        for kernel_size in [0, 2, 8] {
            let params = TailTrackerParams {
                kernel_size,
                ..TailTrackerParams::default()
            };
            assert!(matches!(
                params.validate(),
                Err(TailParamsError::KernelSize { got }) if got == kernel_size
            ));
        }
    }

    #[test]
    fn validate_rejects_zero_tip_window() {
        let params = TailTrackerParams {
            n_tip_points: 0,
            ..TailTrackerParams::default()
        };
        assert!(matches!(params.validate(), Err(TailParamsError::TipWindow)));
    }

    #[test]
    fn validate_rejects_bad_seed_geometry() {
        assert!(matches!(
            configured(0.0, 5).validate(),
            Err(TailParamsError::TailLength { .. })
        ));
        assert!(matches!(
            configured(f32::NAN, 5).validate(),
            Err(TailParamsError::TailLength { .. })
        ));
        assert!(matches!(
            configured(40.0, 0).validate(),
            Err(TailParamsError::PointCount)
        ));
    }

    #[test]
    fn validate_rejects_tip_window_longer_than_chain() {
        let params = TailTrackerParams {
            n_tip_points: 5,
            ..configured(40.0, 3)
        };
        assert!(matches!(
            params.validate(),
            Err(TailParamsError::TipWindowExceedsChain { got: 5, max: 4 })
        ));
    }

    #[test]
    fn params_round_trip_through_json() {
        let params = TailTrackerParams {
            background: Background::Dark,
            ..TailTrackerParams::from_points(
                PixelCoords { x: 12, y: 30 },
                PixelCoords { x: 52, y: 28 },
                8,
            )
        };
        let json = serde_json::to_string(&params).expect("serialize");
        let restored: TailTrackerParams = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(params, restored);
        assert!(json.contains("\"dark\""), "lowercase polarity tag: {json}");
    }

    #[test]
    fn empty_json_object_deserializes_to_defaults() {
        let params: TailTrackerParams = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(TailTrackerParams::default(), params);
    }
}
