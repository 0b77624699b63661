/// Borrowed single-channel 8-bit frame as delivered by a video source.
#[derive(Clone, Copy, Debug)]
pub struct FrameView<'a> {
    pub width: usize,
    pub height: usize,
    pub data: &'a [u8], // row-major, len = w*h
}

impl<'a> FrameView<'a> {
    /// Number of bytes a buffer of these dimensions must hold.
    #[inline]
    pub fn expected_len(&self) -> usize {
        self.width * self.height
    }
}

/// Owned filtered intensity buffer produced by preprocessing.
///
/// Values are normalized to `[0, 1]` and smoothed; the buffer lives only for
/// the duration of one tracking call.
#[derive(Clone, Debug)]
pub struct FilteredFrame {
    pub width: usize,
    pub height: usize,
    pub data: Vec<f32>, // row-major, len = w*h
}

impl FilteredFrame {
    /// Bounds-checked sample. `None` outside the buffer; negative
    /// coordinates never wrap to the far edge.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<f32> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(self.data[y as usize * self.width + x as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_rejects_out_of_bounds() {
        let buf = FilteredFrame {
            width: 3,
            height: 2,
            data: vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5],
        };

        assert_eq!(Some(0.0), buf.get(0, 0));
        assert_eq!(Some(0.5), buf.get(2, 1));
        assert_eq!(None, buf.get(-1, 0));
        assert_eq!(None, buf.get(0, -1));
        assert_eq!(None, buf.get(3, 0));
        assert_eq!(None, buf.get(0, 2));
    }

    #[test]
    fn get_indexes_row_major() {
        let buf = FilteredFrame {
            width: 2,
            height: 2,
            data: vec![1.0, 2.0, 3.0, 4.0],
        };

        assert_eq!(Some(2.0), buf.get(1, 0));
        assert_eq!(Some(3.0), buf.get(0, 1));
    }
}
