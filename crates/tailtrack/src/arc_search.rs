//! Iterative arc search producing the tail point chain.

use log::debug;

use tailtrack_core::{unit_vector, FilteredFrame, PixelCoords};

use crate::params::Background;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Number of candidate directions sampled per step.
pub const ARC_SAMPLES: usize = 20;

/// Candidate angles for one step: a half circle centered on `center`, both
/// endpoints included.
fn arc_angles(center: f32) -> [f32; ARC_SAMPLES] {
    let step = std::f32::consts::PI / (ARC_SAMPLES - 1) as f32;
    let start = center - std::f32::consts::FRAC_PI_2;
    std::array::from_fn(|i| start + i as f32 * step)
}

/// Index of the extremum matching the background polarity.
///
/// Light backgrounds follow intensity minima, dark backgrounds maxima; ties
/// go to the earliest candidate.
fn extremum_index(samples: &[f32], background: Background) -> usize {
    let mut best = 0;
    for (i, &v) in samples.iter().enumerate().skip(1) {
        let better = match background {
            Background::Light => v < samples[best],
            Background::Dark => v > samples[best],
        };
        if better {
            best = i;
        }
    }
    best
}

/// Walk a chain of `n_points` steps through the filtered buffer.
///
/// Each step samples [`ARC_SAMPLES`] candidate pixels on a half circle of
/// radius `tail_length / n_points` around the current position, moves to the
/// extremum picked by `background`, and centers the next arc on the chosen
/// angle. A step whose arc leaves the buffer repeats the previous point and
/// keeps position and direction, so the chain always comes back with
/// `n_points + 1` entries starting at `start`.
#[cfg_attr(feature = "tracing", instrument(level = "debug", skip(filtered)))]
pub fn search_chain(
    filtered: &FilteredFrame,
    start: PixelCoords,
    tail_length: f32,
    n_points: usize,
    start_angle: f32,
    background: Background,
) -> Vec<PixelCoords> {
    let spacing = tail_length / n_points as f32;

    let mut points = Vec::with_capacity(n_points + 1);
    points.push(start);

    let mut pos = start;
    let mut center = start_angle;

    for _ in 0..n_points {
        let angles = arc_angles(center);
        let candidates = angles.map(|angle| {
            let step = unit_vector(angle) * spacing;
            PixelCoords {
                x: (pos.x as f32 + step.x) as i32,
                y: (pos.y as f32 + step.y) as i32,
            }
        });

        let mut samples = [0.0f32; ARC_SAMPLES];
        let mut in_bounds = true;
        for (sample, candidate) in samples.iter_mut().zip(&candidates) {
            match filtered.get(candidate.x, candidate.y) {
                Some(v) => *sample = v,
                None => {
                    in_bounds = false;
                    break;
                }
            }
        }

        if !in_bounds {
            // Hold position and direction; the step repeats the last point.
            debug!("search arc left the frame at {pos:?}; repeating previous point");
            points.push(pos);
            continue;
        }

        let idx = extremum_index(&samples, background);
        pos = candidates[idx];
        center = angles[idx];
        points.push(pos);
    }

    points
}
