//! Boundary-tiered character splitter.
//!
//! The word budget is turned into a character budget (`max_words * 5`). While the remaining
//! text is longer than that, the first `max_chars` characters form a window, the window is cut
//! at the best boundary [`find_boundary`] finds, and the loop continues after the cut. The
//! remaining tail is emitted as-is once it fits.

use tracing::{debug, trace};

use crate::boundary::find_boundary;
use crate::chunk::{Cut, Span, TextChunk};
use crate::metric::char_budget;
use parasplit_core::Result;

/// Splits text into pieces of at most `max_words * 5` characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterSplitter {
    max_words: usize,
    max_chars: usize,
}

impl CharacterSplitter {
    /// Fails with a configuration error when `max_words` is zero.
    pub fn new(max_words: usize) -> Result<Self> {
        let max_chars = char_budget(max_words)?;
        Ok(Self {
            max_words,
            max_chars,
        })
    }

    pub fn max_words(&self) -> usize {
        self.max_words
    }

    /// Character budget per piece.
    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Byte spans of the pieces. Empty text yields a single empty span.
    pub fn spans(&self, text: &str) -> Vec<Span> {
        let mut spans = Vec::new();
        let mut start = 0;

        loop {
            let rest = &text[start..];
            // First byte past the budget; `None` once the rest fits.
            let Some((limit, _)) = rest.char_indices().nth(self.max_chars) else {
                break;
            };
            let window = &rest[..limit];
            let boundary = find_boundary(window);
            let span = Span {
                start,
                end: start + boundary.end,
                cut: Cut::Boundary(boundary.tier),
            };
            trace!(
                "Window at byte {} ({} bytes) cut after {} bytes ({:?})",
                start,
                window.len(),
                span.len(),
                boundary.tier
            );

            start = span.end;
            spans.push(span);
        }

        spans.push(Span {
            start,
            end: text.len(),
            cut: Cut::Remainder,
        });
        debug!(
            "Split {} bytes into {} pieces (max {} chars)",
            text.len(),
            spans.len(),
            self.max_chars
        );
        spans
    }

    /// The pieces as slices of `text`.
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.spans(text).iter().map(|s| s.as_str(text)).collect()
    }

    /// The pieces with their offsets and cut reasons.
    pub fn chunks(&self, text: &str) -> Vec<TextChunk> {
        TextChunk::from_spans(text, &self.spans(text))
    }
}

/// Split `text` with a budget of `max_words * 5` characters per piece.
pub fn split_text(text: &str, max_words: usize) -> Result<Vec<String>> {
    let splitter = CharacterSplitter::new(max_words)?;
    Ok(splitter
        .split(text)
        .into_iter()
        .map(str::to_string)
        .collect())
}
