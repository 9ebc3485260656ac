//! Greedy slide packing.
//!
//! One pass over the sentences, no backtracking:
//!
//! ```text
//! max_lines = 4
//!
//! sentence   lines   open slide        action
//! S1         1       [S1]       = 1    accept
//! S2         2       [S1 S2]    = 3    accept
//! S3         1       [S1 S2 S3] = 4    accept (exact fit)
//! S4         2       4 + 2 > 4         close, open [S4]
//! S5         6       6 > 4             close, force-split S5
//! ```
//!
//! A sentence that cannot fit on a slide by itself (too many lines, or a
//! token wider than a line) is handed to the [`ForcedSplitter`], and its
//! review-flagged units are emitted in place.

use crate::forced::oversized;
use crate::lines::estimate_lines;
use crate::{Constraints, ForcedSplitter, Sentence, SlideUnit};

/// Whether a paragraph break forces a new slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParagraphPolicy {
    /// Paragraphs end sentences, but sentences from different paragraphs
    /// may share a slide.
    #[default]
    Soft,
    /// Every paragraph starts on a new slide.
    SlideBreak,
}

/// Greedy sentence-to-slide packer.
#[derive(Debug, Clone)]
pub struct GreedyPacker {
    constraints: Constraints,
    paragraphs: ParagraphPolicy,
}

impl GreedyPacker {
    /// Create a packer.
    #[must_use]
    pub fn new(constraints: Constraints) -> Self {
        Self {
            constraints,
            paragraphs: ParagraphPolicy::default(),
        }
    }

    /// Set the paragraph policy.
    #[must_use]
    pub fn with_paragraphs(mut self, paragraphs: ParagraphPolicy) -> Self {
        self.paragraphs = paragraphs;
        self
    }

    /// Pack sentences into units.
    ///
    /// `joinable[i]` says whether sentence `i` may share a slide with
    /// sentence `i - 1`; missing entries count as `true`. Units come back
    /// with index 0; [`crate::Segmentation::new`] numbers them.
    #[must_use]
    pub fn pack(
        &self,
        sentences: &[Sentence],
        joinable: &[bool],
        forced: &ForcedSplitter,
    ) -> Vec<SlideUnit> {
        let max_chars = self.constraints.max_chars();
        let mut units = Vec::new();
        let mut open = Open::default();

        for (i, sentence) in sentences.iter().enumerate() {
            if oversized(&sentence.text, &self.constraints) {
                log::debug!(
                    "sentence {i} does not fit one slide, forcing split ({} bytes)",
                    sentence.text.len()
                );
                open.close(&mut units);
                units.extend(forced.split(&sentence.text, &self.constraints));
                continue;
            }

            let lines = estimate_lines(&sentence.text, max_chars);
            if self.accepts(&open, sentence, lines, joinable.get(i).copied().unwrap_or(true)) {
                open.text.push('\n');
                open.text.push_str(&sentence.text);
                open.lines += lines;
            } else {
                open.close(&mut units);
                open = Open {
                    text: sentence.text.clone(),
                    lines,
                    paragraph: sentence.paragraph,
                };
            }
        }
        open.close(&mut units);

        units
    }

    fn accepts(&self, open: &Open, sentence: &Sentence, lines: usize, joinable: bool) -> bool {
        if open.text.is_empty() || !joinable {
            return false;
        }
        if self.paragraphs == ParagraphPolicy::SlideBreak && open.paragraph != sentence.paragraph {
            return false;
        }
        !self.constraints.would_overflow(open.lines, lines)
    }
}

/// The slide currently being filled.
#[derive(Default)]
struct Open {
    text: String,
    lines: usize,
    paragraph: usize,
}

impl Open {
    fn close(&mut self, units: &mut Vec<SlideUnit>) {
        if self.text.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.text);
        log::debug!("slide {} closed with {} lines", units.len() + 1, self.lines);
        units.push(SlideUnit::new(text, self.lines, false, 0));
        self.lines = 0;
    }
}
