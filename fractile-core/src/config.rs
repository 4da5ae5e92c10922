use crate::complex::Complex;
use crate::coords::FrameMapper;
use crate::engine::IterateMap;
use crate::error::CoreError;
use crate::viewport::Viewport;

/// Everything that determines one rendered frame.
///
/// Treated as an immutable snapshot for the duration of a render pass;
/// between frames the owning layer replaces fields wholesale (zoom, reset)
/// rather than mutating them mid-pass. The constructor performs the input
/// validation the per-pixel path skips: malformed configuration never
/// reaches the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameConfig {
    pub viewport: Viewport,
    pub width_px: u32,
    pub height_px: u32,
    pub max_iterations: u32,
    pub map: IterateMap,
}

impl FrameConfig {
    pub const DEFAULT_MAX_ITERATIONS: u32 = 100;
    pub const DEFAULT_WIDTH_PX: u32 = 800;
    pub const DEFAULT_HEIGHT_PX: u32 = 400;

    pub fn new(
        viewport: Viewport,
        width_px: u32,
        height_px: u32,
        max_iterations: u32,
        map: IterateMap,
    ) -> crate::Result<Self> {
        if width_px == 0 || height_px == 0 {
            return Err(CoreError::InvalidResolution {
                width: width_px,
                height: height_px,
            });
        }
        if max_iterations < 1 {
            return Err(CoreError::InvalidMaxIterations(max_iterations));
        }
        Ok(Self {
            viewport,
            width_px,
            height_px,
            max_iterations,
            map,
        })
    }

    /// Snapshot the current viewport into a coordinate mapper.
    pub fn mapper(&self) -> FrameMapper {
        FrameMapper::new(self.viewport, self.width_px, self.height_px)
    }

    /// Byte length of the RGBA buffer this frame renders into.
    pub fn buffer_len(&self) -> usize {
        self.width_px as usize * self.height_px as usize * 4
    }

    /// The plane coordinate a click at pixel `(px, py)` lands on.
    pub fn plane_at_pixel(&self, px: u32, py: u32) -> Complex {
        self.mapper().pixel_to_plane(px as f64, py as f64)
    }

    /// Return a copy with a different iteration budget.
    pub fn with_max_iterations(self, max_iterations: u32) -> Self {
        Self {
            max_iterations,
            ..self
        }
    }

    /// Return a copy with the viewport replaced wholesale.
    pub fn with_viewport(self, viewport: Viewport) -> Self {
        Self { viewport, ..self }
    }
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            width_px: Self::DEFAULT_WIDTH_PX,
            height_px: Self::DEFAULT_HEIGHT_PX,
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            map: IterateMap::Mandelbrot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = FrameConfig::default();
        assert_eq!(cfg.max_iterations, 100);
        assert_eq!(cfg.map, IterateMap::Mandelbrot);
        assert_eq!(cfg.buffer_len(), 800 * 400 * 4);
    }

    #[test]
    fn rejects_zero_resolution() {
        let vp = Viewport::default();
        assert!(FrameConfig::new(vp, 0, 100, 50, IterateMap::Mandelbrot).is_err());
        assert!(FrameConfig::new(vp, 100, 0, 50, IterateMap::Mandelbrot).is_err());
    }

    #[test]
    fn rejects_zero_budget() {
        let vp = Viewport::default();
        assert!(matches!(
            FrameConfig::new(vp, 4, 4, 0, IterateMap::Mandelbrot),
            Err(CoreError::InvalidMaxIterations(0))
        ));
    }

    #[test]
    fn plane_at_pixel_uses_current_viewport() {
        let cfg = FrameConfig::new(Viewport::default(), 4, 4, 50, IterateMap::Mandelbrot).unwrap();
        let c = cfg.plane_at_pixel(3, 2);
        assert!((c.re - 0.0).abs() < 1e-10);
        assert!((c.im - 0.0).abs() < 1e-10);
    }

    #[test]
    fn builders_replace_wholesale() {
        let cfg = FrameConfig::default();
        let zoomed = cfg.with_viewport(cfg.viewport.zoomed_to(Complex::ZERO));
        assert_eq!(cfg.viewport, Viewport::default(), "original untouched");
        assert!((zoomed.viewport.width - 2.0).abs() < 1e-10);
        assert_eq!(cfg.with_max_iterations(500).max_iterations, 500);
    }
}
