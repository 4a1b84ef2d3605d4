//! Chunk records: where each chunk sits in the source and why it ended there.

use serde::{Deserialize, Serialize};

use crate::boundary::BoundaryTier;
use crate::packer::PARAGRAPH_DELIMITER;
use parasplit_core::{Error, Result};

/// Why a chunk ends where it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Cut {
    /// Carved by the character splitter at a boundary of this tier.
    Boundary(BoundaryTier),
    /// A group of this many whole paragraphs.
    Paragraphs(usize),
    /// The tail the character splitter emits once the rest fits the budget.
    Remainder,
}

/// Byte range of a chunk in the text it was cut from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub cut: Cut,
}

impl Span {
    pub(crate) fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn as_str<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }

    /// Move the span right by `offset` bytes (sub-text to full-text coordinates).
    pub(crate) fn shift(self, offset: usize) -> Self {
        Self {
            start: self.start + offset,
            end: self.end + offset,
            cut: self.cut,
        }
    }
}

/// An owned chunk with its position in the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextChunk {
    pub text: String,
    pub chunk_index: usize,
    pub total_chunks: usize,
    /// Byte offset of the first byte in the source.
    pub start: usize,
    /// Byte offset one past the last byte in the source.
    pub end: usize,
    pub cut: Cut,
}

impl TextChunk {
    pub(crate) fn from_spans(text: &str, spans: &[Span]) -> Vec<TextChunk> {
        spans
            .iter()
            .enumerate()
            .map(|(i, span)| TextChunk {
                text: span.as_str(text).to_string(),
                chunk_index: i,
                total_chunks: spans.len(),
                start: span.start,
                end: span.end,
                cut: span.cut,
            })
            .collect()
    }
}

/// Rebuild the source from its chunks.
///
/// Consecutive chunks either touch (splitter cuts) or are separated by exactly one
/// paragraph delimiter (packer groups), which is reinserted here. Records that do not tile
/// the source from byte 0 fail with [`Error::Reassembly`].
pub fn reassemble(chunks: &[TextChunk]) -> Result<String> {
    let capacity = chunks.last().map(|c| c.end).unwrap_or(0);
    let mut out = String::with_capacity(capacity);
    let mut previous_end: Option<usize> = None;

    for chunk in chunks {
        if chunk.end < chunk.start || chunk.end - chunk.start != chunk.text.len() {
            return Err(Error::Reassembly(format!(
                "chunk {} spans bytes {}..{} but holds {} bytes",
                chunk.chunk_index,
                chunk.start,
                chunk.end,
                chunk.text.len()
            )));
        }
        if let Some(end) = previous_end {
            if chunk.start < end {
                return Err(Error::Reassembly(format!(
                    "chunk {} starts at byte {} before the previous chunk ends at {}",
                    chunk.chunk_index, chunk.start, end
                )));
            }
            match chunk.start - end {
                0 => {}
                gap if gap == PARAGRAPH_DELIMITER.len() => out.push_str(PARAGRAPH_DELIMITER),
                gap => {
                    return Err(Error::Reassembly(format!(
                        "{} byte gap before chunk {} at byte {}",
                        gap, chunk.chunk_index, chunk.start
                    )))
                }
            }
        } else if chunk.start != 0 {
            return Err(Error::Reassembly(format!(
                "first chunk starts at byte {}, not 0",
                chunk.start
            )));
        }
        out.push_str(&chunk.text);
        previous_end = Some(chunk.end);
    }
    Ok(out)
}
