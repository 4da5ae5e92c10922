use serde::Deserialize;

use fractile_core::{Complex, FrameConfig, IterateMap, Viewport};
use fractile_render::Coloring;

/// A JSON render request. Every field is optional; anything omitted falls
/// back to the documented defaults, so an empty body (or no request file at
/// all) renders the home view.
///
/// Validation happens here and in the core constructors — a malformed
/// request never reaches the per-pixel path.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderRequest {
    /// Bottom-left corner of the viewport, `[re, im]`.
    pub bl: Option<[f64; 2]>,
    /// Viewport extents on the plane, `[width, height]`.
    pub dim: Option<[f64; 2]>,
    /// Output resolution in pixels, `[width, height]`.
    pub res: Option<[u32; 2]>,
    /// Iteration budget.
    pub iters: Option<u32>,
    /// Iteration map: `mandelbrot`, `cubic`, or `burning-ship`.
    pub map: Option<IterateMap>,
    /// Color strategy: `flat` or `sinusoid`.
    pub coloring: Option<ColoringKind>,
}

/// Strategy selector for the request body; each kind expands to the
/// strategy's default parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColoringKind {
    Flat,
    Sinusoid,
}

impl RenderRequest {
    /// Resolve the request into a validated frame config and a coloring.
    pub fn into_parts(self) -> fractile_core::Result<(FrameConfig, Coloring)> {
        let origin = self
            .bl
            .map(|[re, im]| Complex::new(re, im))
            .unwrap_or(Viewport::DEFAULT_ORIGIN);
        let (width, height) = self
            .dim
            .map(|[w, h]| (w, h))
            .unwrap_or((Viewport::DEFAULT_WIDTH, Viewport::DEFAULT_HEIGHT));
        let viewport = Viewport::new(origin, width, height)?;

        let [width_px, height_px] = self.res.unwrap_or([
            FrameConfig::DEFAULT_WIDTH_PX,
            FrameConfig::DEFAULT_HEIGHT_PX,
        ]);
        let max_iterations = self.iters.unwrap_or(FrameConfig::DEFAULT_MAX_ITERATIONS);

        let config = FrameConfig::new(
            viewport,
            width_px,
            height_px,
            max_iterations,
            self.map.unwrap_or_default(),
        )?;

        let coloring = match self.coloring {
            Some(ColoringKind::Flat) => Coloring::flat(),
            Some(ColoringKind::Sinusoid) | None => Coloring::sinusoid(),
        };
        Ok((config, coloring))
    }
}
