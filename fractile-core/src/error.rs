use thiserror::Error;

/// Errors originating from the core pipeline.
///
/// The core does not validate per-pixel inputs (finite reals are the
/// caller's contract); these errors only arise when building a viewport
/// or frame configuration from external input.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid viewport: {reason}")]
    InvalidViewport { reason: String },

    #[error("invalid max iterations: {0} (must be >= 1)")]
    InvalidMaxIterations(u32),

    #[error("invalid resolution: {width}\u{d7}{height} (both must be > 0)")]
    InvalidResolution { width: u32, height: u32 },
}
