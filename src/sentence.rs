//! Sentence splitting.
//!
//! Splits script text into trimmed, non-empty sentences, in input order.
//!
//! ## Boundaries
//!
//! Text is first cut into paragraphs on `\n`. A paragraph end always ends a
//! sentence, even without terminal punctuation; blank paragraphs vanish.
//! Inside a paragraph, one of two boundary finders runs:
//!
//! - [`SplitMode::Punctuation`]: a sentence ends at `.`, `!` or `?` followed
//!   by whitespace. Cheap and predictable, and it leaves `3.14` alone because
//!   no whitespace follows the period.
//! - [`SplitMode::Unicode`]: UAX #29 sentence bounds.
//!
//! ## The Abbreviation Problem
//!
//! ```text
//! "Dr. Smith arrived. He sat down."
//!     ^             ^
//!     |             real boundary
//!     period + space, but not a sentence end
//! ```
//!
//! The punctuation finder skips a period that closes a word from a small,
//! configurable abbreviation list. The list is deliberately short; anything
//! not on it is split naively. Pass an empty list to get the fully naive
//! splitter.

use unicode_segmentation::UnicodeSegmentation;

/// Abbreviations whose trailing period does not end a sentence.
pub const DEFAULT_ABBREVIATIONS: &[&str] = &[
    "mr.", "mrs.", "ms.", "dr.", "st.", "vs.", "etc.", "e.g.", "i.e.",
];

/// A sentence and the paragraph it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Trimmed sentence text.
    pub text: String,
    /// Zero-based index of the source paragraph, counting non-blank paragraphs.
    pub paragraph: usize,
}

impl Sentence {
    /// Create a new sentence.
    #[must_use]
    pub fn new(text: impl Into<String>, paragraph: usize) -> Self {
        Self {
            text: text.into(),
            paragraph,
        }
    }
}

/// How sentence boundaries are found inside a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SplitMode {
    /// Terminal punctuation followed by whitespace.
    #[default]
    Punctuation,
    /// Unicode (UAX #29) sentence bounds.
    Unicode,
}

/// Sentence splitter.
///
/// ## Example
///
/// ```rust
/// use promptdeck::SentenceSplitter;
///
/// let splitter = SentenceSplitter::new();
/// let sentences = splitter.split("Hi there. This is a test.");
///
/// assert_eq!(sentences.len(), 2);
/// assert_eq!(sentences[0].text, "Hi there.");
/// assert_eq!(sentences[1].text, "This is a test.");
/// ```
#[derive(Debug, Clone)]
pub struct SentenceSplitter {
    mode: SplitMode,
    abbreviations: Vec<String>,
}

impl SentenceSplitter {
    /// Create a punctuation splitter with the default abbreviation list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: SplitMode::Punctuation,
            abbreviations: DEFAULT_ABBREVIATIONS.iter().map(|&a| a.to_string()).collect(),
        }
    }

    /// Create a splitter using Unicode sentence bounds.
    #[must_use]
    pub fn unicode() -> Self {
        Self::new().with_mode(SplitMode::Unicode)
    }

    /// Set the boundary finder.
    #[must_use]
    pub fn with_mode(mut self, mode: SplitMode) -> Self {
        self.mode = mode;
        self
    }

    /// Replace the abbreviation list.
    ///
    /// Entries are case-insensitive; a trailing period is optional.
    #[must_use]
    pub fn with_abbreviations(mut self, abbreviations: &[&str]) -> Self {
        self.abbreviations = abbreviations
            .iter()
            .map(|a| normalize_abbreviation(a))
            .filter(|a| !a.is_empty())
            .collect();
        self
    }

    /// The active boundary finder.
    #[must_use]
    pub fn mode(&self) -> SplitMode {
        self.mode
    }

    /// Split text into sentences.
    ///
    /// Never fails; empty or whitespace-only input yields no sentences.
    #[must_use]
    pub fn split(&self, text: &str) -> Vec<Sentence> {
        let mut sentences = Vec::new();

        let paragraphs = text
            .split('\n')
            .map(str::trim)
            .filter(|p| !p.is_empty());

        for (paragraph, para_text) in paragraphs.enumerate() {
            match self.mode {
                SplitMode::Punctuation => {
                    for s in self.split_punctuation(para_text) {
                        sentences.push(Sentence::new(s, paragraph));
                    }
                }
                SplitMode::Unicode => {
                    for s in para_text.split_sentence_bounds() {
                        let trimmed = s.trim();
                        if !trimmed.is_empty() {
                            sentences.push(Sentence::new(trimmed, paragraph));
                        }
                    }
                }
            }
        }

        log::trace!("split {} bytes into {} sentences", text.len(), sentences.len());
        sentences
    }

    /// Split one paragraph at terminal punctuation followed by whitespace.
    fn split_punctuation<'a>(&self, paragraph: &'a str) -> Vec<&'a str> {
        let mut out = Vec::new();
        let mut start = 0;
        let mut chars = paragraph.char_indices().peekable();

        while let Some((idx, ch)) = chars.next() {
            if !matches!(ch, '.' | '!' | '?') {
                continue;
            }
            let followed_by_space = chars.peek().is_some_and(|&(_, next)| next.is_whitespace());
            if !followed_by_space {
                continue;
            }
            let end = idx + ch.len_utf8();
            if ch == '.' && self.is_abbreviation(&paragraph[start..end]) {
                continue;
            }

            let sentence = paragraph[start..end].trim();
            if !sentence.is_empty() {
                out.push(sentence);
            }
            start = end;
        }

        let rest = paragraph[start..].trim();
        if !rest.is_empty() {
            out.push(rest);
        }
        out
    }

    /// Whether the last token of `head` (ending in `.`) is a known abbreviation.
    fn is_abbreviation(&self, head: &str) -> bool {
        if self.abbreviations.is_empty() {
            return false;
        }
        let token = head
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or(head)
            .trim_start_matches(|c: char| !c.is_alphanumeric());
        let token = token.to_lowercase();
        self.abbreviations.iter().any(|a| *a == token)
    }
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize_abbreviation(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('.');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("{}.", trimmed.to_lowercase())
    }
}
