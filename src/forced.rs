//! Forced splitting of sentences too large for one slide.
//!
//! Tries progressively finer cuts until every piece fits.
//!
//! ## The Cascade
//!
//! Given an oversized sentence and `max_lines = 2`, `max_chars = 10`:
//!
//! ```text
//! 1. Clauses: cut after "," / ";" and before connectives ("and", "그리고", ...)
//!    Pack clauses greedily while the joined text fits.
//! 2. For any clause still too large:
//!    Pack it word by word.
//! 3. For any word wider than one line:
//!    Cut it into max_chars-wide chunks, max_lines chunks per slide.
//! ```
//!
//! Every unit produced here is flagged `needs_review`: its boundary is a
//! cut, not the author's sentence end.
//!
//! The cascade always terminates. Clauses and words strictly shrink the
//! remaining text, and a chunk of `max_chars` graphemes always fits on one
//! line.

use unicode_segmentation::UnicodeSegmentation;

use crate::lines::{display_width, estimate_lines, has_overlong_token};
use crate::{Constraints, SlideUnit};

/// Default clause connectives.
///
/// A new clause starts before these words. Multi-word entries match
/// consecutive words.
pub const DEFAULT_CONNECTIVES: &[&str] = &[
    "그리고", "그러나", "왜냐하면", "예를 들어", "즉", "또는", "and", "but", "because", "however",
    "or",
];

/// Splits one oversized sentence into review-flagged units.
///
/// ## Example
///
/// ```rust
/// use promptdeck::{Constraints, ForcedSplitter};
///
/// let constraints = Constraints::new(1, 12).unwrap();
/// let splitter = ForcedSplitter::new();
/// let units = splitter.split("We came early, we stayed late.", &constraints);
///
/// assert_eq!(units.len(), 3);
/// assert_eq!(units[0].text, "We came");
/// assert!(units.iter().all(|u| u.needs_review));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ForcedSplitter {
    connectives: Vec<Vec<String>>,
}

impl ForcedSplitter {
    /// Create a splitter with the default connectives.
    ///
    /// [`ForcedSplitter::default`] has no connectives at all.
    #[must_use]
    pub fn new() -> Self {
        Self::default().with_connectives(DEFAULT_CONNECTIVES)
    }

    /// Replace the connective words that start a new clause.
    #[must_use]
    pub fn with_connectives(mut self, connectives: &[&str]) -> Self {
        self.connectives = connectives
            .iter()
            .map(|c| c.split_whitespace().map(str::to_lowercase).collect::<Vec<_>>())
            .filter(|words| !words.is_empty())
            .collect();
        self
    }

    /// Split `sentence` into units that each fit `constraints`.
    #[must_use]
    pub fn split(&self, sentence: &str, constraints: &Constraints) -> Vec<SlideUnit> {
        let mut out = Vec::new();
        let mut run = Run::new(constraints);

        for clause in self.clauses(sentence, constraints.min_chars()) {
            if oversized(&clause, constraints) {
                log::debug!("clause over slide capacity, splitting by words");
                split_words(&clause, &mut run, &mut out);
            } else {
                run.push(&clause, &mut out);
            }
        }
        run.flush(&mut out);

        out
    }

    /// Cut a sentence into clauses.
    fn clauses(&self, sentence: &str, min_chars: Option<usize>) -> Vec<String> {
        let words: Vec<&str> = sentence.split_whitespace().collect();
        let mut clauses = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        let mut i = 0;

        while i < words.len() {
            if !current.is_empty() && self.connective_at(&words[i..]) {
                clauses.push(current.join(" "));
                current.clear();
            }

            let word = words[i];
            current.push(word);
            if word.ends_with([',', ';', '，', '；']) {
                clauses.push(current.join(" "));
                current.clear();
            }
            i += 1;
        }
        if !current.is_empty() {
            clauses.push(current.join(" "));
        }

        match min_chars {
            Some(min) => merge_short(clauses, min),
            None => clauses,
        }
    }

    /// Whether a connective starts at the head of `words`.
    fn connective_at(&self, words: &[&str]) -> bool {
        self.connectives.iter().any(|connective| {
            connective.len() <= words.len()
                && connective
                    .iter()
                    .zip(words)
                    .all(|(c, w)| *c == w.trim_end_matches([',', '，']).to_lowercase())
        })
    }
}

/// Whether text cannot sit on one slide without cutting.
pub(crate) fn oversized(text: &str, constraints: &Constraints) -> bool {
    estimate_lines(text, constraints.max_chars()) > constraints.max_lines()
        || has_overlong_token(text, constraints.max_chars())
}

/// Merge clauses narrower than `min` into their successor.
fn merge_short(clauses: Vec<String>, min: usize) -> Vec<String> {
    let mut merged: Vec<String> = Vec::with_capacity(clauses.len());
    let mut carry = String::new();

    for clause in clauses {
        let text = if carry.is_empty() {
            clause
        } else {
            format!("{carry} {clause}")
        };
        carry.clear();

        if display_width(&text) < min {
            carry = text;
        } else {
            merged.push(text);
        }
    }

    if !carry.is_empty() {
        match merged.last_mut() {
            Some(last) => {
                last.push(' ');
                last.push_str(&carry);
            }
            None => merged.push(carry),
        }
    }

    merged
}

/// Pack a clause word by word into `run`, cutting words wider than a line.
fn split_words(clause: &str, run: &mut Run<'_>, out: &mut Vec<SlideUnit>) {
    let constraints = run.constraints;

    for word in clause.split_whitespace() {
        if display_width(word) > constraints.max_chars() {
            log::debug!("word wider than {} chars, cutting", constraints.max_chars());
            run.flush(out);
            split_chars(word, constraints, out);
        } else {
            run.push(word, out);
        }
    }
}

/// Cut a single word into `max_chars`-wide chunks, `max_lines` per unit.
fn split_chars(word: &str, constraints: &Constraints, out: &mut Vec<SlideUnit>) {
    let graphemes: Vec<&str> = word.graphemes(true).collect();
    let chunks: Vec<String> = graphemes
        .chunks(constraints.max_chars())
        .map(|g| g.concat())
        .collect();

    for group in chunks.chunks(constraints.max_lines()) {
        let text = group.join("\n");
        out.push(SlideUnit::new(text, group.len(), true, 0));
    }
}

/// A run of space-joined pieces being packed into one unit.
struct Run<'a> {
    constraints: &'a Constraints,
    text: String,
}

impl<'a> Run<'a> {
    fn new(constraints: &'a Constraints) -> Self {
        Self {
            constraints,
            text: String::new(),
        }
    }

    /// Append `piece`, closing the run first if the piece would not fit.
    fn push(&mut self, piece: &str, out: &mut Vec<SlideUnit>) {
        if self.text.is_empty() {
            self.text.push_str(piece);
            return;
        }

        let candidate = format!("{} {piece}", self.text);
        if estimate_lines(&candidate, self.constraints.max_chars()) <= self.constraints.max_lines()
        {
            self.text = candidate;
        } else {
            self.flush(out);
            self.text.push_str(piece);
        }
    }

    fn flush(&mut self, out: &mut Vec<SlideUnit>) {
        if self.text.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.text);
        let lines = estimate_lines(&text, self.constraints.max_chars());
        out.push(SlideUnit::new(text, lines, true, 0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(units: &[SlideUnit]) -> Vec<&str> {
        units.iter().map(|u| u.text.as_str()).collect()
    }

    #[test]
    fn test_clause_split() {
        let c = Constraints::new(1, 12).unwrap();
        let units = ForcedSplitter::new().split("We came early, we stayed late.", &c);
        assert_eq!(texts(&units), vec!["We came", "early, we", "stayed late."]);
    }

    #[test]
    fn test_clauses_packed_together() {
        let c = Constraints::new(2, 20).unwrap();
        let units =
            ForcedSplitter::new().split("one, two, three, four, five six seven eight nine", &c);
        assert_eq!(
            texts(&units),
            vec!["one, two, three, four,", "five six seven eight nine"]
        );
        assert!(units.iter().all(|u| u.lines <= 2 && u.needs_review));
    }

    #[test]
    fn test_connective_starts_clause() {
        let splitter = ForcedSplitter::new();
        let clauses = splitter.clauses("I ran and you walked", None);
        assert_eq!(clauses, vec!["I ran", "and you walked"]);

        let clauses = splitter.clauses("밥을 먹었다 예를 들어 김치", None);
        assert_eq!(clauses, vec!["밥을 먹었다", "예를 들어 김치"]);
    }

    #[test]
    fn test_connective_at_start_not_split() {
        let clauses = ForcedSplitter::new().clauses("and then, done", None);
        assert_eq!(clauses, vec!["and then,", "done"]);
    }

    #[test]
    fn test_merge_short_clauses() {
        let splitter = ForcedSplitter::new();
        let clauses = splitter.clauses("A, long clause here, another long one", Some(3));
        assert_eq!(clauses, vec!["A, long clause here,", "another long one"]);

        // A short tail joins the clause before it
        let clauses = splitter.clauses("오늘은 정말 좋은 날, 네", Some(4));
        assert_eq!(clauses, vec!["오늘은 정말 좋은 날, 네"]);
    }

    #[test]
    fn test_char_split() {
        let c = Constraints::new(2, 10).unwrap();
        let word = "abcdefghij".repeat(5);
        let units = ForcedSplitter::new().split(&word, &c);

        assert_eq!(units.len(), 3);
        assert_eq!(units[0].text, "abcdefghij\nabcdefghij");
        assert_eq!(units[0].lines, 2);
        assert_eq!(units[2].lines, 1);
        let rebuilt: String = units.iter().flat_map(|u| u.text.split('\n')).collect();
        assert_eq!(rebuilt, word);
    }

    #[test]
    fn test_long_word_inside_sentence() {
        let c = Constraints::new(1, 5).unwrap();
        let units = ForcedSplitter::new().split("go abcdefgh now", &c);
        assert_eq!(texts(&units), vec!["go", "abcde", "fgh", "now"]);
        assert!(units.iter().all(|u| u.needs_review));
    }

    #[test]
    fn test_custom_connectives() {
        let splitter = ForcedSplitter::new().with_connectives(&["then"]);
        assert_eq!(splitter.clauses("eat then sleep", None), vec!["eat", "then sleep"]);
        assert_eq!(splitter.clauses("eat and sleep", None), vec!["eat and sleep"]);
    }
}
