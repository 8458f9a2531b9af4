//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `ObError` as one variant
//! where configuration problems can surface.

use thiserror::Error;

/// The top-level error type for `ob-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum ObError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `ob-core`.
pub type ObResult<T> = Result<T, ObError>;
