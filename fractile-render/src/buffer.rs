/// An RGBA pixel buffer representing one rendered frame.
///
/// Row-major, top-left origin, 4 bytes per pixel; dimensions are fixed at
/// creation. The renderer overwrites it in place and the host surface swaps
/// it in only after a full pass completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    /// RGBA pixel data, `4 * width * height` bytes.
    pub pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Create a new buffer filled with opaque black.
    pub fn new(width: u32, height: u32) -> Self {
        let mut pixels = vec![0u8; width as usize * height as usize * 4];
        for chunk in pixels.chunks_exact_mut(4) {
            chunk[3] = 255;
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Write one pixel's four channels at a linear byte index.
    #[inline]
    pub fn put(&mut self, byte_index: usize, rgba: [u8; 4]) {
        self.pixels[byte_index..byte_index + 4].copy_from_slice(&rgba);
    }

    /// Read the pixel at `(x, y)`, top-left origin.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_black_opaque() {
        let buf = PixelBuffer::new(4, 4);
        assert_eq!(buf.pixels.len(), 4 * 4 * 4);
        for chunk in buf.pixels.chunks_exact(4) {
            assert_eq!(chunk, &[0, 0, 0, 255]);
        }
    }

    #[test]
    fn put_and_read_back() {
        let mut buf = PixelBuffer::new(8, 8);
        let idx = (3 * 8 + 5) * 4;
        buf.put(idx, [255, 10, 20, 255]);
        assert_eq!(buf.pixel(5, 3), [255, 10, 20, 255]);
        // Neighbours untouched.
        assert_eq!(buf.pixel(4, 3), [0, 0, 0, 255]);
        assert_eq!(buf.pixel(5, 4), [0, 0, 0, 255]);
    }
}
