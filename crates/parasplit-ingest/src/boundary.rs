//! Split-point classifiers, tried in priority order over a bounded window.
//!
//! Each tier reports the byte offset just past its *rightmost* match in the window, so the
//! chunk that ends there is as long as that tier allows. A window is the prefix the splitter
//! is about to carve; it never contains the rest of the text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// `(?s)` lets `.*` run across newlines, so matches are rightmost in the whole window.
// Whitespace includes the ASCII separators U+001C..U+001F, as in `metric::is_separator`.
static SENTENCE_END_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s).*[.!?][\s\x1C-\x1F]").unwrap());
static CLAUSE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s).*(?:\\n|[:;,])").unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s).*[\s\x1C-\x1F]").unwrap());

/// Priority class of a split point, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryTier {
    /// `.`, `!` or `?` followed by a whitespace character (the whitespace stays in the chunk).
    SentenceEnd,
    /// A literal backslash-`n` sequence, `:`, `;` or `,`.
    Clause,
    /// Any whitespace character.
    Whitespace,
    /// No boundary: cut at the end of the window, possibly mid-word.
    HardCut,
}

impl BoundaryTier {
    /// All tiers in the order they are tried.
    pub const CASCADE: [BoundaryTier; 4] = [
        BoundaryTier::SentenceEnd,
        BoundaryTier::Clause,
        BoundaryTier::Whitespace,
        BoundaryTier::HardCut,
    ];

    fn pattern(self) -> Option<&'static Regex> {
        match self {
            Self::SentenceEnd => Some(&*SENTENCE_END_RE),
            Self::Clause => Some(&*CLAUSE_RE),
            Self::Whitespace => Some(&*WHITESPACE_RE),
            Self::HardCut => None,
        }
    }

    /// Byte offset just past the rightmost boundary of this tier in `window`.
    ///
    /// [`BoundaryTier::HardCut`] always matches at the end of the window.
    pub fn locate(self, window: &str) -> Option<usize> {
        match self.pattern() {
            Some(re) => re.find(window).map(|m| m.end()),
            None => Some(window.len()),
        }
    }
}

/// A split point found in a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryMatch {
    pub tier: BoundaryTier,
    /// Byte offset in the window where the chunk ends.
    pub end: usize,
}

/// Best split point in `window`: the first tier of the cascade that matches.
pub fn find_boundary(window: &str) -> BoundaryMatch {
    BoundaryTier::CASCADE
        .iter()
        .find_map(|&tier| tier.locate(window).map(|end| BoundaryMatch { tier, end }))
        .unwrap_or(BoundaryMatch {
            tier: BoundaryTier::HardCut,
            end: window.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cascade_order() {
        assert_eq!(
            BoundaryTier::CASCADE,
            [
                BoundaryTier::SentenceEnd,
                BoundaryTier::Clause,
                BoundaryTier::Whitespace,
                BoundaryTier::HardCut,
            ]
        );
    }

    #[test]
    fn test_sentence_end_is_rightmost() {
        let window = "Yes! No? Maybe. ok";
        assert_eq!(BoundaryTier::SentenceEnd.locate(window), Some(16));
        assert_eq!(&window[..16], "Yes! No? Maybe. ");
    }

    #[test]
    fn test_sentence_end_needs_trailing_whitespace() {
        assert_eq!(BoundaryTier::SentenceEnd.locate("end."), None);
        assert_eq!(BoundaryTier::SentenceEnd.locate("v1.2.3 release"), None);
        assert_eq!(BoundaryTier::SentenceEnd.locate("end.\nnext"), Some(5));
    }

    #[test]
    fn test_sentence_end_spans_lines() {
        let window = "First. Second.\nthird";
        assert_eq!(BoundaryTier::SentenceEnd.locate(window), Some(15));
    }

    #[test]
    fn test_clause_is_rightmost() {
        let window = "a, b; c: d";
        assert_eq!(BoundaryTier::Clause.locate(window), Some(8));
        assert_eq!(BoundaryTier::Clause.locate("no clause here"), None);
    }

    #[test]
    fn test_clause_matches_escaped_newline_not_real_newline() {
        assert_eq!(BoundaryTier::Clause.locate("abc\\ndef"), Some(5));
        assert_eq!(BoundaryTier::Clause.locate("abc\ndef"), None);
    }

    #[test]
    fn test_whitespace_is_rightmost() {
        assert_eq!(BoundaryTier::Whitespace.locate("ab cd\tef"), Some(6));
        assert_eq!(BoundaryTier::Whitespace.locate("abc\ndef"), Some(4));
        assert_eq!(BoundaryTier::Whitespace.locate("abcdef"), None);
    }

    #[test]
    fn test_ascii_separators_are_whitespace() {
        assert_eq!(BoundaryTier::Whitespace.locate("abc\u{1f}defghi"), Some(4));
        assert_eq!(BoundaryTier::Whitespace.locate("a\u{1c}b"), Some(2));
        assert_eq!(BoundaryTier::SentenceEnd.locate("Done.\u{1e}next"), Some(6));
    }

    #[test]
    fn test_hard_cut_always_matches() {
        assert_eq!(BoundaryTier::HardCut.locate("abc"), Some(3));
        assert_eq!(BoundaryTier::HardCut.locate("héé"), Some(5));
    }

    #[test]
    fn test_find_boundary_prefers_higher_tier() {
        // The comma is further right, but a sentence end wins.
        let m = find_boundary("Ab. cd, ef");
        assert_eq!(m.tier, BoundaryTier::SentenceEnd);
        assert_eq!(m.end, 4);

        let m = find_boundary("cd, efghij");
        assert_eq!(m.tier, BoundaryTier::Clause);
        assert_eq!(m.end, 3);

        let m = find_boundary("abc defghi");
        assert_eq!(m.tier, BoundaryTier::Whitespace);
        assert_eq!(m.end, 4);

        let m = find_boundary("abcdefghij");
        assert_eq!(m.tier, BoundaryTier::HardCut);
        assert_eq!(m.end, 10);
    }
}
