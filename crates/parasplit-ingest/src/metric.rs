//! Length metrics shared by the chunkers.

use parasplit_core::{Error, Result};

/// Average characters per word, used to turn a word budget into a character budget.
pub const AVG_WORD_CHARS: usize = 5;

/// Unicode whitespace plus the ASCII information separators U+001C..U+001F.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Number of separator-delimited tokens.
pub fn word_count(text: &str) -> usize {
    text.split(is_separator).filter(|w| !w.is_empty()).count()
}

/// Length in Unicode scalar values.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Character budget for a word budget: `max_words * AVG_WORD_CHARS`.
pub fn char_budget(max_words: usize) -> Result<usize> {
    if max_words == 0 {
        return Err(Error::Config("max_words must be positive, got 0".into()));
    }
    max_words.checked_mul(AVG_WORD_CHARS).ok_or_else(|| {
        Error::Config(format!(
            "max_words {} overflows the character budget",
            max_words
        ))
    })
}
