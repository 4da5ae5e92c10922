pub mod buffer;
pub mod color;
pub mod error;
pub mod export;
pub mod renderer;

pub use buffer::PixelBuffer;
pub use color::{ChannelWave, Coloring, CAPTURED_COLOR};
pub use error::RenderError;
pub use export::write_png;
pub use renderer::FrameRenderer;

/// Convenience result type for the render crate.
pub type Result<T> = std::result::Result<T, RenderError>;
