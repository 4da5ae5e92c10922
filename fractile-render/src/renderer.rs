use std::time::Instant;

use tracing::{debug, info};

use fractile_core::{FrameConfig, IterationResult, Viewport};

use crate::buffer::PixelBuffer;
use crate::color::Coloring;
use crate::error::RenderError;

/// Drives the full pipeline and owns the navigation state between frames.
///
/// One render call is a synchronous, blocking pass over the whole buffer:
/// byte index → plane coordinate → escape-time engine → color → write.
/// The configuration is read-only for the duration of a pass (`render`
/// borrows `&self` and snapshots the mapper up front); `zoom_to_pixel` and
/// `reset` replace the viewport wholesale between passes. Callers must
/// serialize render requests — there is no cancellation, only the
/// iteration budget bounding every pixel.
#[derive(Debug, Clone)]
pub struct FrameRenderer {
    config: FrameConfig,
    coloring: Coloring,
}

impl FrameRenderer {
    pub fn new(config: FrameConfig, coloring: Coloring) -> Self {
        Self { config, coloring }
    }

    pub fn config(&self) -> &FrameConfig {
        &self.config
    }

    pub fn coloring(&self) -> &Coloring {
        &self.coloring
    }

    /// Render one full frame into `buffer`, overwriting it in place.
    ///
    /// The buffer is expected to be swapped into the display surface only
    /// after the pass completes; no partial-frame visibility is provided.
    pub fn render(&self, buffer: &mut PixelBuffer) -> crate::Result<()> {
        if buffer.width != self.config.width_px || buffer.height != self.config.height_px {
            return Err(RenderError::DimensionMismatch {
                expected_width: self.config.width_px,
                expected_height: self.config.height_px,
                actual_width: buffer.width,
                actual_height: buffer.height,
            });
        }

        let start = Instant::now();
        let mapper = self.config.mapper();
        let map = self.config.map;
        let max_iterations = self.config.max_iterations;
        debug!(
            width = self.config.width_px,
            height = self.config.height_px,
            max_iterations,
            map = map.label(),
            "starting frame"
        );

        let mut escaped = 0usize;
        let mut captured = 0usize;
        for index in (0..buffer.pixels.len()).step_by(4) {
            let seed = mapper.index_to_plane(index);
            let result = map.iterate(seed, max_iterations);
            match result {
                IterationResult::Escaped { .. } => escaped += 1,
                IterationResult::Captured => captured += 1,
            }
            buffer.put(index, self.coloring.color_of(result, seed));
        }

        info!(
            elapsed_ms = start.elapsed().as_millis(),
            escaped, captured, "frame complete"
        );
        Ok(())
    }

    /// Pointer transition: zoom in by 2× on the plane point under pixel
    /// `(px, py)`. Applied between frames, never during one.
    pub fn zoom_to_pixel(&mut self, px: u32, py: u32) {
        let target = self.config.plane_at_pixel(px, py);
        let viewport = self.config.viewport.zoomed_to(target);
        debug!(center = %target, width = viewport.width, "zoom");
        self.config = self.config.with_viewport(viewport);
    }

    /// Restore the default viewport and iteration budget.
    pub fn reset(&mut self) {
        self.config = self
            .config
            .with_viewport(Viewport::default())
            .with_max_iterations(FrameConfig::DEFAULT_MAX_ITERATIONS);
    }
}
