//! Parasplit Ingest: boundary-aware text chunking for per-chunk model pipelines.
//!
//! Two strategies share one contract, `(text, max_words) -> ordered chunks`:
//! - [`CharacterSplitter`] carves windows of `max_words * 5` characters and cuts each at the
//!   best boundary tier it can find (sentence end, clause punctuation, whitespace, hard cut).
//! - [`ParagraphPacker`] greedily packs whole paragraphs under a word budget and hands any
//!   paragraph that is too large on its own to the splitter.
//!
//! Both are pure functions of their input. Chunks are contiguous slices of the source, so the
//! original text can always be rebuilt with [`reassemble`].

pub mod boundary;
pub mod chunk;
pub mod metric;
pub mod packer;
pub mod splitter;
pub mod strategy;

pub use boundary::{find_boundary, BoundaryMatch, BoundaryTier};
pub use chunk::{reassemble, Cut, Span, TextChunk};
pub use metric::{char_budget, char_count, is_separator, word_count, AVG_WORD_CHARS};
pub use packer::{pack_paragraphs, ParagraphPacker, PARAGRAPH_DELIMITER};
pub use splitter::{split_text, CharacterSplitter};
pub use strategy::{Chunker, Engine, Strategy};
