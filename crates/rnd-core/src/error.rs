//! Entropy error types.

use thiserror::Error;

/// Failure to obtain entropy for seeding.
#[derive(Debug, Error)]
pub enum EntropyError {
    /// The operating system random source could not be read.
    #[error("operating system entropy unavailable: {0}")]
    Os(String),
}
