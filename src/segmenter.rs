//! The segmentation pipeline: sentences in, slide units out.
//!
//! ```text
//! text ──► SentenceSplitter ──► [Sentence]
//!                                   │
//!                 MergeGate ◄───────┤  (once, whole stream)
//!                     │             │
//!                     ▼             ▼
//!               joinable[i] ──► GreedyPacker ──► ForcedSplitter (oversized)
//!                                   │
//!                                   ▼
//!                             Segmentation
//! ```
//!
//! The segmenter holds configuration only. Each call builds its state from
//! scratch, so identical input always gives identical output.

use crate::gate::{CapacityOnly, MergeGate};
use crate::{
    Constraints, Error, ForcedSplitter, GreedyPacker, ParagraphPolicy, Result, Segmentation,
    SentenceSplitter,
};

/// Script segmenter.
///
/// ## Example
///
/// ```rust
/// use promptdeck::{Constraints, Segmenter};
///
/// let segmenter = Segmenter::new(Constraints::new(2, 10).unwrap());
/// let result = segmenter.segment("Hi there. This is a test.").unwrap();
///
/// assert_eq!(result.len(), 2);
/// assert_eq!(result.units()[0].text, "Hi there.");
/// assert_eq!(result.units()[1].text, "This is a test.");
/// assert_eq!(result.review_count(), 0);
/// ```
pub struct Segmenter {
    constraints: Constraints,
    splitter: SentenceSplitter,
    paragraphs: ParagraphPolicy,
    forced: ForcedSplitter,
    gate: Box<dyn MergeGate>,
}

impl Segmenter {
    /// Create a segmenter with default splitting and no similarity gate.
    #[must_use]
    pub fn new(constraints: Constraints) -> Self {
        Self {
            constraints,
            splitter: SentenceSplitter::new(),
            paragraphs: ParagraphPolicy::default(),
            forced: ForcedSplitter::new(),
            gate: Box::new(CapacityOnly),
        }
    }

    /// Set the sentence splitter.
    #[must_use]
    pub fn with_splitter(mut self, splitter: SentenceSplitter) -> Self {
        self.splitter = splitter;
        self
    }

    /// Set the paragraph policy.
    #[must_use]
    pub fn with_paragraphs(mut self, paragraphs: ParagraphPolicy) -> Self {
        self.paragraphs = paragraphs;
        self
    }

    /// Set the connective words used to cut oversized sentences into clauses.
    #[must_use]
    pub fn with_connectives(mut self, connectives: &[&str]) -> Self {
        self.forced = self.forced.with_connectives(connectives);
        self
    }

    /// Add a merge gate on top of the line-capacity check.
    #[must_use]
    pub fn with_gate(mut self, gate: impl MergeGate + 'static) -> Self {
        self.gate = Box::new(gate);
        self
    }

    /// The layout constraints.
    #[must_use]
    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// Segment script text into slide units.
    ///
    /// Empty input is not an error and yields an empty result.
    ///
    /// # Errors
    ///
    /// Fails before any processing if the constraints are invalid, and
    /// propagates merge-gate failures (e.g. an embedding model error).
    pub fn segment(&self, text: &str) -> Result<Segmentation> {
        self.constraints.validate()?;

        let sentences = self.splitter.split(text);
        if sentences.is_empty() {
            return Ok(Segmentation::default());
        }

        let texts: Vec<&str> = sentences.iter().map(|s| s.text.as_str()).collect();
        let joinable = self.gate.joinable(&texts)?;
        if joinable.len() != sentences.len() {
            return Err(Error::GateLength {
                expected: sentences.len(),
                actual: joinable.len(),
            });
        }

        let units = GreedyPacker::new(self.constraints)
            .with_paragraphs(self.paragraphs)
            .pack(&sentences, &joinable, &self.forced);

        let result = Segmentation::new(units);
        log::debug!(
            "segmented {} sentences into {} slides ({} flagged for review)",
            sentences.len(),
            result.len(),
            result.review_count()
        );
        Ok(result)
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new(Constraints::default())
    }
}

impl std::fmt::Debug for Segmenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Segmenter")
            .field("constraints", &self.constraints)
            .field("splitter", &self.splitter)
            .field("paragraphs", &self.paragraphs)
            .field("forced", &self.forced)
            .finish_non_exhaustive()
    }
}

/// Segment `text` with the default pipeline.
///
/// ```rust
/// let result = promptdeck::segment("", 2, 10, None).unwrap();
/// assert!(result.is_empty());
///
/// assert!(promptdeck::segment("Hi.", 0, 10, None).is_err());
/// ```
///
/// # Errors
///
/// Returns a configuration error if any limit is invalid.
pub fn segment(
    text: &str,
    max_lines_per_slide: usize,
    max_chars_per_line: usize,
    min_chars_per_line: Option<usize>,
) -> Result<Segmentation> {
    let mut constraints = Constraints::new(max_lines_per_slide, max_chars_per_line)?;
    if let Some(min) = min_chars_per_line {
        constraints = constraints.with_min_chars(min)?;
    }
    Segmenter::new(constraints).segment(text)
}
