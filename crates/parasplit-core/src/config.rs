//! Configuration values passed explicitly into every chunking and service call.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Default word budget per chunk.
pub const DEFAULT_MAX_WORDS: usize = 200;

/// Default language-model endpoint.
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:11434/api/generate";

/// Default language-model name.
pub const DEFAULT_SERVICE_MODEL: &str = "gemma2";

/// Which chunking strategy a caller selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Boundary-tiered character splitter.
    Character,
    /// Paragraph-aware word-budget packer.
    #[default]
    Paragraph,
    /// A strategy supplied by the caller (e.g. tokenizer-backed).
    External,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Character => write!(f, "character"),
            Self::Paragraph => write!(f, "paragraph"),
            Self::External => write!(f, "external"),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "character" => Ok(Self::Character),
            "paragraph" => Ok(Self::Paragraph),
            "external" => Ok(Self::External),
            other => Err(Error::Config(format!("unknown chunking strategy: {other:?}"))),
        }
    }
}

/// Chunking parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Selected strategy.
    pub strategy: StrategyKind,
    /// Word budget per chunk. Must be positive.
    pub max_words: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            max_words: DEFAULT_MAX_WORDS,
        }
    }
}

impl ChunkingConfig {
    pub fn new(strategy: StrategyKind, max_words: usize) -> Result<Self> {
        let config = Self {
            strategy,
            max_words,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject a zero budget.
    pub fn validate(&self) -> Result<()> {
        if self.max_words == 0 {
            return Err(Error::Config("max_words must be positive, got 0".into()));
        }
        Ok(())
    }

    /// Defaults overridden by `PARASPLIT_STRATEGY` and `PARASPLIT_MAX_WORDS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup("PARASPLIT_STRATEGY") {
            config.strategy = raw.parse()?;
            debug!("Chunking strategy from environment: {}", config.strategy);
        }
        if let Some(raw) = lookup("PARASPLIT_MAX_WORDS") {
            config.max_words = raw.trim().parse().map_err(|_| {
                Error::Config(format!("PARASPLIT_MAX_WORDS is not a positive integer: {raw:?}"))
            })?;
            debug!("Chunk word budget from environment: {}", config.max_words);
        }

        config.validate()?;
        Ok(config)
    }
}

/// Settings for the language-model service that consumes chunks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSettings {
    /// Generation endpoint.
    pub url: String,
    /// Model name sent with each request.
    pub model: String,
    /// Skip the service entirely and echo placeholder results.
    pub debug: bool,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_SERVICE_URL.to_string(),
            model: DEFAULT_SERVICE_MODEL.to_string(),
            debug: false,
        }
    }
}

impl ServiceSettings {
    /// Defaults overridden by `PARASPLIT_URL`, `PARASPLIT_MODEL` and `PARASPLIT_DEBUG`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut settings = Self::default();

        if let Some(url) = lookup("PARASPLIT_URL") {
            settings.url = url;
        }
        if let Some(model) = lookup("PARASPLIT_MODEL") {
            settings.model = model;
        }
        if let Some(raw) = lookup("PARASPLIT_DEBUG") {
            settings.debug = parse_flag(&raw)
                .ok_or_else(|| Error::Config(format!("PARASPLIT_DEBUG is not a boolean: {raw:?}")))?;
        }

        if settings.url.trim().is_empty() {
            return Err(Error::Config("service url must not be empty".into()));
        }
        Ok(settings)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

/// Top-level Parasplit configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParasplitConfig {
    pub chunking: ChunkingConfig,
    pub service: ServiceSettings,
}

impl ParasplitConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            chunking: ChunkingConfig::from_env()?,
            service: ServiceSettings::from_env()?,
        })
    }
}
