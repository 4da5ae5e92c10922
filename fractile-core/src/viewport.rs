use tracing::warn;

use crate::complex::Complex;
use crate::error::CoreError;

/// Below this plane width, f64 pixel spacing starts losing bits.
const PRECISION_WARN_WIDTH: f64 = 1e-13;

/// The rectangular region of the complex plane mapped onto the pixel buffer.
///
/// `origin` is the **bottom-left** corner; `width` and `height` extend
/// toward positive real and positive imaginary. The viewport is replaced
/// wholesale on zoom and reset — transitions return new values and never
/// touch a viewport a render pass is reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Bottom-left corner of the visible region.
    pub origin: Complex,

    /// Extent along the real axis, in plane units.
    pub width: f64,

    /// Extent along the imaginary axis, in plane units.
    pub height: f64,
}

impl Viewport {
    /// The home view: real span `[-3, 1]`, imaginary span `[-1, 1]`.
    ///
    /// Wide enough to show the whole Mandelbrot set with margin on a 2:1
    /// surface. Reset restores this view.
    pub const DEFAULT_ORIGIN: Complex = Complex { re: -3.0, im: -1.0 };
    pub const DEFAULT_WIDTH: f64 = 4.0;
    pub const DEFAULT_HEIGHT: f64 = 2.0;

    /// Create a viewport with explicit extents.
    pub fn new(origin: Complex, width: f64, height: f64) -> crate::Result<Self> {
        if !(width > 0.0 && width.is_finite()) || !(height > 0.0 && height.is_finite()) {
            return Err(CoreError::InvalidViewport {
                reason: format!("extents must be positive and finite, got {width}\u{d7}{height}"),
            });
        }
        if !origin.re.is_finite() || !origin.im.is_finite() {
            return Err(CoreError::InvalidViewport {
                reason: format!("origin must be finite, got {origin}"),
            });
        }
        Ok(Self {
            origin,
            width,
            height,
        })
    }

    /// Midpoint of the viewport in the complex plane.
    pub fn center(&self) -> Complex {
        Complex::new(
            self.origin.re + self.width / 2.0,
            self.origin.im + self.height / 2.0,
        )
    }

    /// Zoom in by a factor of two, recentring on `center`.
    ///
    /// Halves both extents and places the bottom-left corner so that
    /// `center` becomes the new midpoint. Clicking a point that maps to
    /// plane `(0, 0)` on the default view yields extents `(2, 1)` and
    /// origin `(-1, -0.5)`.
    pub fn zoomed_to(&self, center: Complex) -> Self {
        let width = self.width / 2.0;
        let height = self.height / 2.0;
        if width < PRECISION_WARN_WIDTH {
            warn!(
                width,
                "approaching f64 precision limits; artifacts may appear"
            );
        }
        Self {
            origin: Complex::new(center.re - width / 2.0, center.im - height / 2.0),
            width,
            height,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            origin: Self::DEFAULT_ORIGIN,
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn default_viewport() {
        let vp = Viewport::default();
        assert_eq!(vp.origin, Complex::new(-3.0, -1.0));
        assert!((vp.width - 4.0).abs() < EPSILON);
        assert!((vp.height - 2.0).abs() < EPSILON);
    }

    #[test]
    fn center_of_default_view() {
        let c = Viewport::default().center();
        assert!((c.re - (-1.0)).abs() < EPSILON);
        assert!(c.im.abs() < EPSILON);
    }

    #[test]
    fn zoom_halves_and_recenters() {
        let vp = Viewport::default().zoomed_to(Complex::ZERO);
        assert!((vp.width - 2.0).abs() < EPSILON);
        assert!((vp.height - 1.0).abs() < EPSILON);
        assert!((vp.origin.re - (-1.0)).abs() < EPSILON);
        assert!((vp.origin.im - (-0.5)).abs() < EPSILON);
        // The clicked point is the new midpoint.
        let c = vp.center();
        assert!(c.re.abs() < EPSILON);
        assert!(c.im.abs() < EPSILON);
    }

    #[test]
    fn repeated_zoom_converges_on_target() {
        let target = Complex::new(-0.743, 0.131);
        let mut vp = Viewport::default();
        for _ in 0..8 {
            vp = vp.zoomed_to(target);
        }
        let c = vp.center();
        assert!((c.re - target.re).abs() < EPSILON);
        assert!((c.im - target.im).abs() < EPSILON);
        assert!((vp.width - 4.0 / 256.0).abs() < EPSILON);
    }

    #[test]
    fn invalid_extents() {
        assert!(Viewport::new(Complex::ZERO, 0.0, 1.0).is_err());
        assert!(Viewport::new(Complex::ZERO, 1.0, -2.0).is_err());
        assert!(Viewport::new(Complex::ZERO, f64::NAN, 1.0).is_err());
        assert!(Viewport::new(Complex::ZERO, 1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn invalid_origin() {
        assert!(Viewport::new(Complex::new(f64::NAN, 0.0), 1.0, 1.0).is_err());
    }
}
