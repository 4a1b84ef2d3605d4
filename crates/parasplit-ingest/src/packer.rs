//! Paragraph-aware word-budget packer.
//!
//! Paragraphs (separated by a blank line) are packed first-fit into groups whose total word
//! count stays within `max_words`. A paragraph that alone exceeds the budget is handed to the
//! [`CharacterSplitter`] with the same `max_words`, which measures it in characters
//! (`max_words * 5`), not words, so its pieces may hold more or fewer than `max_words` words.

use tracing::debug;

use crate::chunk::{Cut, Span, TextChunk};
use crate::metric::word_count;
use crate::splitter::CharacterSplitter;
use parasplit_core::Result;

/// Separator between paragraphs.
pub const PARAGRAPH_DELIMITER: &str = "\n\n";

/// Paragraphs waiting to be flushed as one chunk.
#[derive(Debug)]
struct Group {
    start: usize,
    end: usize,
    paragraphs: usize,
    words: usize,
}

impl Group {
    fn into_span(self) -> Span {
        Span {
            start: self.start,
            end: self.end,
            cut: Cut::Paragraphs(self.paragraphs),
        }
    }
}

/// Packs whole paragraphs into chunks of at most `max_words` words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParagraphPacker {
    max_words: usize,
    splitter: CharacterSplitter,
}

impl ParagraphPacker {
    /// Fails with a configuration error when `max_words` is zero.
    pub fn new(max_words: usize) -> Result<Self> {
        Ok(Self {
            max_words,
            splitter: CharacterSplitter::new(max_words)?,
        })
    }

    pub fn max_words(&self) -> usize {
        self.max_words
    }

    /// Byte spans of the chunks.
    ///
    /// Adjacent paragraph groups are separated by one delimiter that belongs to neither span.
    /// Empty text yields one empty group.
    pub fn spans(&self, text: &str) -> Vec<Span> {
        let mut spans = Vec::new();
        let mut group: Option<Group> = None;
        let mut offset = 0;

        for paragraph in text.split(PARAGRAPH_DELIMITER) {
            let start = offset;
            let end = start + paragraph.len();
            offset = end + PARAGRAPH_DELIMITER.len();

            let words = word_count(paragraph);
            let pending = group.as_ref().map_or(0, |g| g.words);

            if pending + words <= self.max_words {
                match group.as_mut() {
                    Some(g) => {
                        g.end = end;
                        g.paragraphs += 1;
                        g.words += words;
                    }
                    None => {
                        group = Some(Group {
                            start,
                            end,
                            paragraphs: 1,
                            words,
                        })
                    }
                }
                continue;
            }

            if let Some(full) = group.take() {
                debug!(
                    "Flushing {} paragraphs ({} words) at byte {}",
                    full.paragraphs, full.words, full.start
                );
                spans.push(full.into_span());
            }

            if words > self.max_words {
                debug!(
                    "Paragraph at byte {} has {} words (max {}), splitting on boundaries",
                    start, words, self.max_words
                );
                spans.extend(
                    self.splitter
                        .spans(paragraph)
                        .into_iter()
                        .map(|span| span.shift(start)),
                );
            } else {
                group = Some(Group {
                    start,
                    end,
                    paragraphs: 1,
                    words,
                });
            }
        }

        if let Some(last) = group {
            spans.push(last.into_span());
        }
        debug!(
            "Packed {} bytes into {} chunks (max {} words)",
            text.len(),
            spans.len(),
            self.max_words
        );
        spans
    }

    /// The chunks as slices of `text`.
    pub fn pack<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.spans(text).iter().map(|s| s.as_str(text)).collect()
    }

    /// The chunks with their offsets and cut reasons.
    pub fn chunks(&self, text: &str) -> Vec<TextChunk> {
        TextChunk::from_spans(text, &self.spans(text))
    }
}

/// Pack the paragraphs of `text` into chunks of at most `max_words` words.
pub fn pack_paragraphs(text: &str, max_words: usize) -> Result<Vec<String>> {
    let packer = ParagraphPacker::new(max_words)?;
    Ok(packer.pack(text).into_iter().map(str::to_string).collect())
}
