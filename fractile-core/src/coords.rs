use crate::complex::Complex;
use crate::viewport::Viewport;

/// Maps between buffer addresses and complex-plane coordinates.
///
/// The buffer side is row-major with the origin at the **top-left** and
/// 4 bytes per pixel; the plane side is a [`Viewport`] anchored at its
/// **bottom-left** corner. The two disagree on the vertical axis, so every
/// conversion flips `y` through an intermediate "tile" coordinate
/// (`tile_y = height_px - y`).
///
/// The mapper snapshots the viewport at construction: a live viewport can
/// be replaced between frames without affecting a pass already mapping
/// through it.
///
/// Coordinates are continuous — no rounding, no clamping. Out-of-buffer
/// pixel input extrapolates to out-of-viewport plane output, which is fine
/// for the in-bounds pointer input this serves.
#[derive(Debug, Clone, Copy)]
pub struct FrameMapper {
    viewport: Viewport,
    width_px: u32,
    height_px: u32,
}

impl FrameMapper {
    pub fn new(viewport: Viewport, width_px: u32, height_px: u32) -> Self {
        Self {
            viewport,
            width_px,
            height_px,
        }
    }

    /// Recover the `(x, y)` pixel coordinate from a linear byte index.
    ///
    /// `x = (i/4) mod width`, `y = (i/4 - x) / width`.
    #[inline]
    pub fn pixel_of_index(byte_index: usize, width_px: u32) -> (u32, u32) {
        let pixel = (byte_index / 4) as u32;
        let x = pixel % width_px;
        (x, (pixel - x) / width_px)
    }

    /// The composed forward map: linear byte index to plane coordinate.
    #[inline]
    pub fn index_to_plane(&self, byte_index: usize) -> Complex {
        let (x, y) = Self::pixel_of_index(byte_index, self.width_px);
        self.pixel_to_plane(x as f64, y as f64)
    }

    /// Map a (possibly fractional) top-left pixel coordinate to the plane.
    #[inline]
    pub fn pixel_to_plane(&self, px: f64, py: f64) -> Complex {
        let tile_x = px;
        let tile_y = self.height_px as f64 - py;
        Complex::new(
            self.viewport.origin.re + self.viewport.width / self.width_px as f64 * tile_x,
            self.viewport.origin.im + self.viewport.height / self.height_px as f64 * tile_y,
        )
    }

    /// Invert the affine step: plane coordinate back to a top-left pixel
    /// coordinate. Used for click handling and round-trip checks.
    #[inline]
    pub fn plane_to_pixel(&self, point: Complex) -> (f64, f64) {
        let tile_x = (point.re - self.viewport.origin.re) * self.width_px as f64
            / self.viewport.width;
        let tile_y = (point.im - self.viewport.origin.im) * self.height_px as f64
            / self.viewport.height;
        (tile_x, self.height_px as f64 - tile_y)
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn width_px(&self) -> u32 {
        self.width_px
    }

    pub fn height_px(&self) -> u32 {
        self.height_px
    }
}
