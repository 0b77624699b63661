//! Frame normalization and smoothing.

use tailtrack_core::{FilteredFrame, FrameView};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Errors from frame preprocessing.
#[derive(thiserror::Error, Debug)]
pub enum PreprocessError {
    /// The frame is empty or entirely zero, so normalization is undefined.
    #[error("frame maximum intensity is zero; normalization undefined")]
    InvalidFrame,
    #[error("frame buffer length mismatch (expected {expected} bytes, got {got})")]
    BufferLength { expected: usize, got: usize },
}

/// Normalize a frame by its maximum and smooth it with a mean filter.
///
/// Returns values in `[0, 1]`. Near the borders the mean is taken over the
/// window's overlap with the image, so edge pixels average fewer samples
/// instead of wrapping around or padding with zeros. A kernel size of 1
/// returns the normalized buffer unchanged.
#[cfg_attr(
    feature = "tracing",
    instrument(
        level = "info",
        skip(frame),
        fields(width = frame.width, height = frame.height)
    )
)]
pub fn preprocess(
    frame: &FrameView<'_>,
    kernel_size: usize,
) -> Result<FilteredFrame, PreprocessError> {
    let expected = frame.expected_len();
    if frame.data.len() != expected {
        return Err(PreprocessError::BufferLength {
            expected,
            got: frame.data.len(),
        });
    }

    let max = frame.data.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return Err(PreprocessError::InvalidFrame);
    }

    let inv = 1.0 / f32::from(max);
    let normalized: Vec<f32> = frame.data.iter().map(|&v| f32::from(v) * inv).collect();

    let data = box_filter(&normalized, frame.width, frame.height, kernel_size);
    Ok(FilteredFrame {
        width: frame.width,
        height: frame.height,
        data,
    })
}

/// Number of in-image samples a centered window covers along one axis.
#[inline]
fn axis_count(i: usize, len: usize, radius: usize) -> usize {
    let lo = i.saturating_sub(radius);
    let hi = (i + radius).min(len - 1);
    hi - lo + 1
}

/// Separable mean filter with per-pixel valid-sample normalization.
///
/// Two sliding-sum passes (rows, then columns) accumulate the window total in
/// `f64`; each output divides by the product of per-axis sample counts.
fn box_filter(src: &[f32], width: usize, height: usize, kernel_size: usize) -> Vec<f32> {
    if kernel_size <= 1 {
        return src.to_vec();
    }
    let radius = kernel_size / 2;

    // Pass 1: windowed sums along each row.
    let mut row_sums = vec![0.0f64; src.len()];
    for y in 0..height {
        let row = y * width;
        let mut acc = 0.0f64;
        for x in 0..width.min(radius + 1) {
            acc += f64::from(src[row + x]);
        }
        row_sums[row] = acc;
        for x in 1..width {
            if x + radius < width {
                acc += f64::from(src[row + x + radius]);
            }
            if x > radius {
                acc -= f64::from(src[row + x - radius - 1]);
            }
            row_sums[row + x] = acc;
        }
    }

    // Pass 2: windowed sums down each column, divided by the window overlap.
    let mut out = vec![0.0f32; src.len()];
    for x in 0..width {
        let count_x = axis_count(x, width, radius) as f64;
        let mut acc = 0.0f64;
        for y in 0..height.min(radius + 1) {
            acc += row_sums[y * width + x];
        }
        out[x] = (acc / (count_x * axis_count(0, height, radius) as f64)) as f32;
        for y in 1..height {
            if y + radius < height {
                acc += row_sums[(y + radius) * width + x];
            }
            if y > radius {
                acc -= row_sums[(y - radius - 1) * width + x];
            }
            out[y * width + x] = (acc / (count_x * axis_count(y, height, radius) as f64)) as f32;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(width: usize, height: usize, data: &[u8]) -> FrameView<'_> {
        FrameView {
            width,
            height,
            data,
        }
    }

    #[test]
    fn rejects_mismatched_buffer() {
        let data = [10u8; 5];
        let err = preprocess(&frame(3, 2, &data), 3).expect_err("length mismatch");
        assert!(matches!(
            err,
            PreprocessError::BufferLength {
                expected: 6,
                got: 5
            }
        ));
    }

    #[test]
    fn rejects_all_zero_frame() {
        let data = [0u8; 12];
        let err = preprocess(&frame(4, 3, &data), 3).expect_err("zero max");
        assert!(matches!(err, PreprocessError::InvalidFrame));
    }

    #[test]
    fn rejects_empty_frame() {
        let err = preprocess(&frame(0, 0, &[]), 3).expect_err("empty frame");
        assert!(matches!(err, PreprocessError::InvalidFrame));
    }

    #[test]
    fn kernel_of_one_only_normalizes() {
        // Max of 128 makes the scale factor a power of two, so the
        // normalized values are exact.
        let data = [0u8, 128, 32];
        let filtered = preprocess(&frame(3, 1, &data), 1).expect("preprocess");
        assert_eq!(vec![0.0, 1.0, 0.25], filtered.data);
    }

    #[test]
    fn constant_frame_stays_constant_including_edges() {
        let data = [128u8; 5 * 4];
        let filtered = preprocess(&frame(5, 4, &data), 3).expect("preprocess");
        for (i, &v) in filtered.data.iter().enumerate() {
            assert!((v - 1.0).abs() < 1e-6, "pixel {i} drifted to {v}");
        }
    }

    #[test]
    fn border_means_divide_by_window_overlap() {
        // Single hot pixel in the top-left corner of a 3x3 frame.
        let data = [255u8, 0, 0, 0, 0, 0, 0, 0, 0];
        let filtered = preprocess(&frame(3, 3, &data), 3).expect("preprocess");

        let corner = filtered.get(0, 0).expect("corner");
        assert!((corner - 0.25).abs() < 1e-6, "corner window has 4 samples");

        let edge = filtered.get(1, 0).expect("edge");
        assert!((edge - 1.0 / 6.0).abs() < 1e-6, "edge window has 6 samples");

        let center = filtered.get(1, 1).expect("center");
        assert!((center - 1.0 / 9.0).abs() < 1e-6, "full window has 9 samples");

        let far = filtered.get(2, 2).expect("far corner");
        assert!(far.abs() < 1e-6, "hot pixel outside the far window");
    }

    #[test]
    fn windows_do_not_wrap_across_rows() {
        // Hot pixel at the end of the first row must not bleed into the
        // second row's left edge through the sliding sums.
        let data = [0u8, 0, 0, 0, 255, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        let filtered = preprocess(&frame(5, 3, &data), 3).expect("preprocess");

        let left_below = filtered.get(0, 1).expect("sample");
        assert!(left_below.abs() < 1e-6, "no wraparound into next row");

        let under_hot = filtered.get(4, 1).expect("sample");
        assert!((under_hot - 1.0 / 6.0).abs() < 1e-6);
    }
}
