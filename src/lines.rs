//! Line estimation by greedy word wrap.
//!
//! ## How It Works
//!
//! ```text
//! max_chars = 10
//!
//! "This is a test."
//!
//! "This"          4
//! "This is"       7
//! "This is a"     9
//! "This is a test." 15 > 10  -> new line
//!
//! |This is a |
//! |test.     |   = 2 lines
//! ```
//!
//! A token is appended to the current line when the line plus one separating
//! space plus the token stays within `max_chars`. Otherwise the token starts
//! a new line. A token wider than `max_chars` sits alone on its own line and
//! is not broken here; cutting it is the forced splitter's job.
//!
//! `\n` is a hard break: each segment is wrapped on its own and an empty
//! segment still occupies a line. Widths are counted in grapheme clusters
//! (UAX #29), so `"한국어"` is 3 wide and a flag emoji is 1.

use unicode_segmentation::UnicodeSegmentation;

/// Display width of `s` in grapheme clusters.
#[must_use]
pub fn display_width(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Wrap `text` into display lines of at most `max_chars` graphemes.
///
/// Over-long tokens are kept whole on their own line.
///
/// ```rust
/// use promptdeck::wrap_lines;
///
/// assert_eq!(wrap_lines("This is a test.", 10), vec!["This is a", "test."]);
/// assert_eq!(wrap_lines("one\ntwo", 10), vec!["one", "two"]);
/// ```
#[must_use]
pub fn wrap_lines(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for segment in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for token in segment.split_whitespace() {
            let width = display_width(token);
            if current.is_empty() {
                current.push_str(token);
                current_width = width;
            } else if current_width + 1 + width <= max_chars {
                current.push(' ');
                current.push_str(token);
                current_width += 1 + width;
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(token);
                current_width = width;
            }
        }

        // An empty segment still takes a line
        lines.push(current);
    }

    lines
}

/// Estimate how many display lines `text` occupies at `max_chars` per line.
///
/// Never less than 1, even for empty text.
///
/// ```rust
/// use promptdeck::estimate_lines;
///
/// assert_eq!(estimate_lines("Hi there.", 10), 1);
/// assert_eq!(estimate_lines("This is a test.", 10), 2);
/// assert_eq!(estimate_lines("", 10), 1);
/// ```
#[must_use]
pub fn estimate_lines(text: &str, max_chars: usize) -> usize {
    wrap_lines(text, max_chars).len().max(1)
}

/// Whether any whitespace-delimited token is wider than `max_chars`.
#[must_use]
pub fn has_overlong_token(text: &str, max_chars: usize) -> bool {
    text.split_whitespace()
        .any(|token| display_width(token) > max_chars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_width_fits() {
        assert_eq!(wrap_lines("abcde fghi", 10), vec!["abcde fghi"]);
        assert_eq!(estimate_lines("abcde fghij", 10), 2);
    }

    #[test]
    fn test_overlong_token_own_line() {
        let word = "a".repeat(25);
        let text = format!("hi {word} yo");
        assert_eq!(wrap_lines(&text, 10), vec!["hi".to_string(), word, "yo".to_string()]);
        assert!(has_overlong_token(&text, 10));
        assert!(!has_overlong_token("hi yo", 10));
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(estimate_lines("", 10), 1);
        assert_eq!(estimate_lines("   \t ", 10), 1);
    }

    #[test]
    fn test_hard_breaks() {
        assert_eq!(estimate_lines("a\n\nb", 10), 3);
        assert_eq!(estimate_lines("Hi there.\nThis is a test.", 10), 3);
    }

    #[test]
    fn test_collapses_inner_whitespace() {
        assert_eq!(wrap_lines("a    b\tc", 10), vec!["a b c"]);
    }

    #[test]
    fn test_graphemes_not_bytes() {
        // 5 Hangul syllables, 15 bytes
        assert_eq!(display_width("안녕하세요"), 5);
        assert_eq!(estimate_lines("안녕하세요 반가워요", 10), 1);
        assert_eq!(display_width("e\u{301}"), 1);
    }
}
