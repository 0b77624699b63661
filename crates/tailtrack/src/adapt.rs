//! Adapters between `image` containers and the core frame types.

use image::GrayImage;

use tailtrack_core::{FilteredFrame, FrameView};

/// Borrow an `image::GrayImage` as the lightweight frame view.
pub fn frame_view(img: &GrayImage) -> FrameView<'_> {
    FrameView {
        width: img.width() as usize,
        height: img.height() as usize,
        data: img.as_raw(),
    }
}

/// Export a filtered buffer as an 8-bit grayscale image for display.
///
/// Values are scaled from `[0, 1]` to `[0, 255]` and clamped. `None` when
/// the buffer dimensions do not fit an image.
pub fn filtered_to_gray(buf: &FilteredFrame) -> Option<GrayImage> {
    let width = u32::try_from(buf.width).ok()?;
    let height = u32::try_from(buf.height).ok()?;
    let pixels = buf
        .data
        .iter()
        .map(|v| (v * 255.0).clamp(0.0, 255.0) as u8)
        .collect();
    GrayImage::from_raw(width, height, pixels)
}
