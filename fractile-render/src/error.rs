use thiserror::Error;

/// Errors originating from the rendering pipeline.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(
        "buffer is {actual_width}\u{d7}{actual_height} but the frame config \
         expects {expected_width}\u{d7}{expected_height}"
    )]
    DimensionMismatch {
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },

    #[error(transparent)]
    Core(#[from] fractile_core::CoreError),

    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("png encoding failure: {0}")]
    Encode(#[from] png::EncodingError),
}
