//! Error type for canvas operations.

use thiserror::Error;

/// Errors that can occur while composing or writing the mockup.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Cairo drawing error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Surface data is still borrowed: {0}")]
    Borrow(#[from] cairo::BorrowError),

    #[error("PNG encoding failed: {0}")]
    Png(#[from] cairo::IoError),

    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid surface size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },
}
