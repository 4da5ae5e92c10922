pub mod complex;
pub mod config;
pub mod coords;
pub mod engine;
pub mod error;
pub mod viewport;

// Re-export primary types for convenience.
pub use complex::Complex;
pub use config::FrameConfig;
pub use coords::FrameMapper;
pub use engine::{smooth_count, IterateMap, IterationResult, ESCAPE_RADIUS_SQ};
pub use error::CoreError;
pub use viewport::Viewport;

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
