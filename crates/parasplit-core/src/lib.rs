//! Parasplit Core: error type and immutable configuration values.

pub mod config;
pub mod error;

pub use config::{ChunkingConfig, ParasplitConfig, ServiceSettings, StrategyKind, DEFAULT_MAX_WORDS};
pub use error::{Error, Result};
