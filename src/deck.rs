//! Deck assembly plan.
//!
//! Turns a [`Segmentation`] into per-slide bookkeeping for a renderer: the
//! wrapped lines to draw, a running page counter, a review marker for forced
//! splits, and an end marker on the last slide.
//!
//! ```text
//! +--------------------------+
//! | [needs review (slide 2)] |   <- only when the unit was force-split
//! |                          |
//! |     This is a            |   <- lines, wrapped at render width
//! |     test.                |
//! |                          |
//! |                  [end]   |   <- last slide only
//! |                   2 / 2  |   <- page label
//! +--------------------------+
//! ```
//!
//! Drawing itself (fonts, colors, positions, file formats) belongs to the
//! renderer.

use crate::lines::wrap_lines;
use crate::{Error, Result, Segmentation};

/// One slide, ready to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlidePlan {
    /// One-based slide number.
    pub number: usize,
    /// Total slides in the deck.
    pub total: usize,
    /// Display lines, wrapped at the render width.
    pub lines: Vec<String>,
    /// Whether to draw the review marker.
    pub needs_review: bool,
    /// Whether to draw the end marker.
    pub is_last: bool,
}

impl SlidePlan {
    /// Page counter text, e.g. `"3 / 10"`.
    #[must_use]
    pub fn page_label(&self) -> String {
        format!("{} / {}", self.number, self.total)
    }

    /// Review marker text, if this slide needs one.
    #[must_use]
    pub fn review_label(&self) -> Option<String> {
        self.needs_review
            .then(|| format!("needs review (slide {})", self.number))
    }
}

/// Ordered slide plans for a whole deck.
///
/// ## Example
///
/// ```rust
/// use promptdeck::{segment, DeckPlan};
///
/// let result = segment("Hi there. This is a test.", 2, 10, None).unwrap();
/// let deck = DeckPlan::assemble(&result, 10).unwrap();
///
/// assert_eq!(deck.len(), 2);
/// assert_eq!(deck.slides()[0].page_label(), "1 / 2");
/// assert_eq!(deck.slides()[1].lines, vec!["This is a", "test."]);
/// assert!(deck.slides()[1].is_last);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeckPlan {
    slides: Vec<SlidePlan>,
}

impl DeckPlan {
    /// Plan one slide per unit, wrapping text at `render_width`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMaxChars`] if `render_width` is zero.
    pub fn assemble(segmentation: &Segmentation, render_width: usize) -> Result<Self> {
        if render_width == 0 {
            return Err(Error::InvalidMaxChars(render_width));
        }

        let total = segmentation.len();
        let slides = segmentation
            .iter()
            .enumerate()
            .map(|(i, unit)| SlidePlan {
                number: i + 1,
                total,
                lines: wrap_lines(&unit.text, render_width),
                needs_review: unit.needs_review,
                is_last: i + 1 == total,
            })
            .collect();

        Ok(Self { slides })
    }

    /// All slides in order.
    #[must_use]
    pub fn slides(&self) -> &[SlidePlan] {
        &self.slides
    }

    /// Number of slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Whether the deck has no slides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

impl std::fmt::Display for DeckPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for slide in &self.slides {
            writeln!(f, "--- slide {} ---", slide.page_label())?;
            if let Some(label) = slide.review_label() {
                writeln!(f, "[{label}]")?;
            }
            for line in &slide.lines {
                writeln!(f, "{line}")?;
            }
            if slide.is_last {
                writeln!(f, "[end]")?;
            }
        }
        Ok(())
    }
}
