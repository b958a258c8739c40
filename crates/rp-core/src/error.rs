//! Base error type.
//!
//! Sub-crates define their own error enums and wrap `RpError` as one
//! variant where they need it.

use thiserror::Error;

/// The shared base error for `rp-*` crates.
#[derive(Debug, Error)]
pub enum RpError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type.
pub type RpResult<T> = Result<T, RpError>;
