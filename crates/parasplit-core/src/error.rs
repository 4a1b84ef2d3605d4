//! Error types for Parasplit.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Invalid budget, unknown strategy name, or a strategy that cannot be built.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An externally supplied chunking strategy failed.
    #[error("Delegate error: {0}")]
    Delegate(String),

    /// A chunk sequence that does not tile its source text.
    #[error("Reassembly error: {0}")]
    Reassembly(String),
}

pub type Result<T> = std::result::Result<T, Error>;
