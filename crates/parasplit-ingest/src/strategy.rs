//! Strategy selection behind a single chunking interface.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::metric::char_budget;
use crate::packer::pack_paragraphs;
use crate::splitter::split_text;
use parasplit_core::{ChunkingConfig, Error, Result, StrategyKind};

/// Anything that turns `(text, max_words)` into ordered chunks.
///
/// Implementations must be deterministic: the same input always yields the same chunks.
pub trait Chunker: Send + Sync {
    fn name(&self) -> &str;

    fn chunk(&self, text: &str, max_words: usize) -> Result<Vec<String>>;
}

/// The chunking strategies a caller can select.
#[derive(Clone)]
pub enum Strategy {
    /// [`crate::CharacterSplitter`].
    Character,
    /// [`crate::ParagraphPacker`].
    Paragraph,
    /// A caller-supplied chunker, e.g. one backed by a tokenizer.
    External(Arc<dyn Chunker>),
}

impl fmt::Debug for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Character => write!(f, "Character"),
            Self::Paragraph => write!(f, "Paragraph"),
            Self::External(delegate) => f.debug_tuple("External").field(&delegate.name()).finish(),
        }
    }
}

impl Strategy {
    /// Build the strategy named by `kind`. `delegate` is required for
    /// [`StrategyKind::External`] and ignored otherwise.
    pub fn from_kind(kind: StrategyKind, delegate: Option<Arc<dyn Chunker>>) -> Result<Self> {
        match (kind, delegate) {
            (StrategyKind::Character, delegate) => {
                if delegate.is_some() {
                    warn!("Ignoring external chunker for the character strategy");
                }
                Ok(Self::Character)
            }
            (StrategyKind::Paragraph, delegate) => {
                if delegate.is_some() {
                    warn!("Ignoring external chunker for the paragraph strategy");
                }
                Ok(Self::Paragraph)
            }
            (StrategyKind::External, Some(delegate)) => Ok(Self::External(delegate)),
            (StrategyKind::External, None) => Err(Error::Config(
                "external strategy selected but no chunker was supplied".into(),
            )),
        }
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            Self::Character => StrategyKind::Character,
            Self::Paragraph => StrategyKind::Paragraph,
            Self::External(_) => StrategyKind::External,
        }
    }
}

impl Chunker for Strategy {
    fn name(&self) -> &str {
        match self {
            Self::Character => "character",
            Self::Paragraph => "paragraph",
            Self::External(delegate) => delegate.name(),
        }
    }

    fn chunk(&self, text: &str, max_words: usize) -> Result<Vec<String>> {
        match self {
            Self::Character => split_text(text, max_words),
            Self::Paragraph => pack_paragraphs(text, max_words),
            Self::External(delegate) => {
                // Same budget rules as the built-in strategies, checked before delegating.
                char_budget(max_words)?;
                delegate.chunk(text, max_words)
            }
        }
    }
}

/// A strategy bound to a validated configuration.
#[derive(Debug, Clone)]
pub struct Engine {
    strategy: Strategy,
    config: ChunkingConfig,
}

impl Engine {
    /// Engine for a built-in strategy.
    pub fn new(config: ChunkingConfig) -> Result<Self> {
        Self::build(config, None)
    }

    /// Engine that can also run [`StrategyKind::External`] through `delegate`.
    pub fn with_delegate(config: ChunkingConfig, delegate: Arc<dyn Chunker>) -> Result<Self> {
        Self::build(config, Some(delegate))
    }

    fn build(config: ChunkingConfig, delegate: Option<Arc<dyn Chunker>>) -> Result<Self> {
        config.validate()?;
        let strategy = Strategy::from_kind(config.strategy, delegate)?;
        Ok(Self { strategy, config })
    }

    pub fn config(&self) -> &ChunkingConfig {
        &self.config
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// Chunk `text` with the configured strategy and budget.
    pub fn run(&self, text: &str) -> Result<Vec<String>> {
        let chunks = self.strategy.chunk(text, self.config.max_words)?;
        debug!(
            "{} strategy produced {} chunks from {} bytes (max {} words)",
            self.strategy.name(),
            chunks.len(),
            text.len(),
            self.config.max_words
        );
        Ok(chunks)
    }
}
