//! # promptdeck
//!
//! Turn a shooting script into teleprompter slides.
//!
//! ## The Problem
//!
//! A presenter reads from a screen across the room, in a font big enough to
//! read at a glance. A slide holds only a few short lines. The script, on the
//! other hand, is free-form prose. Something has to cut it into slides:
//!
//! - A slide that overflows is unreadable
//! - A slide that ends mid-sentence makes the presenter stumble
//! - A sentence that is simply too long for any slide still has to go somewhere
//!
//! ## The Pipeline
//!
//! ### 1. Sentences
//!
//! Split on terminal punctuation followed by whitespace, and at paragraph
//! breaks. See [`SentenceSplitter`].
//!
//! ### 2. Line Estimates
//!
//! Predict how many display lines each sentence takes when word-wrapped at
//! `max_chars_per_line`. See [`estimate_lines`].
//!
//! ```text
//! max_chars = 10
//! "Hi there."        -> |Hi there. |              1 line
//! "This is a test."  -> |This is a | |test.     | 2 lines
//! ```
//!
//! ### 3. Greedy Packing
//!
//! Fill each slide with whole sentences until the next one would push it
//! past `max_lines_per_slide`. An exact fit is accepted.
//!
//! ```text
//! max_lines = 2
//! [Hi there.]            1 line
//! [This is a test.]      2 lines   (1 + 2 > 2, so it starts slide 2)
//! ```
//!
//! ### 4. Forced Splits
//!
//! A sentence too large for an empty slide is cut at clauses, then words,
//! then characters. Those slides are flagged `needs_review`: the cut is not
//! where the author ended a sentence, so someone should read them through.
//!
//! ### 5. Similarity Gate (optional)
//!
//! With the `semantic` feature (or any [`Embedder`]), adjacent sentences
//! only share a slide while their embeddings stay similar. Topic shifts
//! start a fresh slide even if there is room left.
//!
//! ## Quick Start
//!
//! ```rust
//! use promptdeck::{segment, DeckPlan};
//!
//! let script = "Hi there. This is a test.";
//!
//! // 2 lines per slide, 10 characters per line
//! let result = segment(script, 2, 10, None).unwrap();
//! assert_eq!(result.len(), 2);
//!
//! // Page counters, review and end markers for a renderer
//! let deck = DeckPlan::assemble(&result, 10).unwrap();
//! assert_eq!(deck.slides()[1].page_label(), "2 / 2");
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use promptdeck::{Constraints, ParagraphPolicy, Segmenter, SentenceSplitter};
//!
//! let segmenter = Segmenter::new(Constraints::new(5, 18)?.with_min_chars(4)?)
//!     .with_splitter(SentenceSplitter::new().with_abbreviations(&["Dr", "Prof"]))
//!     .with_paragraphs(ParagraphPolicy::SlideBreak);
//!
//! let result = segmenter.segment("Prof. Kim speaks first.\nThen questions.")?;
//! assert_eq!(result.len(), 2);
//! # Ok::<(), promptdeck::Error>(())
//! ```
//!
//! ## Known Limits
//!
//! The punctuation splitter knows only the abbreviations it is given. An
//! unlisted abbreviation followed by a space (`"approx. 5"`) ends a sentence.
//! Decimal numbers (`3.14`) are safe. Widths are grapheme counts, so
//! full-width CJK characters count as 1 even though they render wider.

mod constraints;
mod deck;
mod error;
mod forced;
mod gate;
mod lines;
mod pack;
mod segmenter;
mod sentence;
mod unit;

#[cfg(feature = "semantic")]
mod semantic;

pub use constraints::Constraints;
pub use deck::{DeckPlan, SlidePlan};
pub use error::{Error, Result};
pub use forced::{ForcedSplitter, DEFAULT_CONNECTIVES};
pub use gate::{
    cosine_similarity, CapacityOnly, Embedder, MergeGate, PairwiseGate, SimilarityGate,
    DEFAULT_SIMILARITY_THRESHOLD,
};
pub use lines::{display_width, estimate_lines, has_overlong_token, wrap_lines};
pub use pack::{GreedyPacker, ParagraphPolicy};
pub use segmenter::{segment, Segmenter};
pub use sentence::{Sentence, SentenceSplitter, SplitMode, DEFAULT_ABBREVIATIONS};
pub use unit::{Segmentation, SlideUnit};

#[cfg(feature = "semantic")]
pub use semantic::FastEmbedder;
