//! Slide layout constraints.
//!
//! ## The Problem
//!
//! A teleprompter slide is read at a distance, in a large font. Two numbers
//! decide whether a slide is readable:
//!
//! - how many characters fit on one displayed line, and
//! - how many lines fit on one slide.
//!
//! ```text
//! max_chars_per_line = 18, max_lines_per_slide = 3
//!
//! +------------------+
//! |The quick brown   |  line 1
//! |fox jumps over the|  line 2
//! |lazy dog.         |  line 3
//! +------------------+
//! ```
//!
//! Everything downstream (line estimation, packing, forced splitting) is a
//! function of these limits, so they are validated once, up front. A zero
//! limit is a configuration error, never silently clamped.
//!
//! `min_chars_per_line` is optional. When set, clause fragments shorter than
//! it are merged with their neighbour during forced splitting, so an oversized
//! sentence is not cut into slivers like `"즉,"` or `"and,"`.

use crate::{Error, Result};

/// Layout limits for one segmentation run.
///
/// # Examples
///
/// ```rust
/// use promptdeck::Constraints;
///
/// let c = Constraints::new(4, 35).unwrap();
/// assert_eq!(c.max_lines(), 4);
/// assert_eq!(c.max_chars(), 35);
/// assert_eq!(c.min_chars(), None);
///
/// let c = c.with_min_chars(6).unwrap();
/// assert_eq!(c.min_chars(), Some(6));
///
/// assert!(Constraints::new(0, 35).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawConstraints"))]
pub struct Constraints {
    max_lines_per_slide: usize,
    max_chars_per_line: usize,
    min_chars_per_line: Option<usize>,
}

/// Unchecked wire form of [`Constraints`]; deserialized values go through
/// [`Constraints::validate`] before they are handed out.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawConstraints {
    max_lines_per_slide: usize,
    max_chars_per_line: usize,
    #[serde(default)]
    min_chars_per_line: Option<usize>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawConstraints> for Constraints {
    type Error = Error;

    fn try_from(raw: RawConstraints) -> Result<Self> {
        let constraints = Self {
            max_lines_per_slide: raw.max_lines_per_slide,
            max_chars_per_line: raw.max_chars_per_line,
            min_chars_per_line: raw.min_chars_per_line,
        };
        constraints.validate()?;
        Ok(constraints)
    }
}

impl Constraints {
    /// Create constraints from the two mandatory limits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMaxLines`] or [`Error::InvalidMaxChars`] if
    /// either limit is zero.
    pub fn new(max_lines_per_slide: usize, max_chars_per_line: usize) -> Result<Self> {
        let constraints = Self {
            max_lines_per_slide,
            max_chars_per_line,
            min_chars_per_line: None,
        };
        constraints.validate()?;
        Ok(constraints)
    }

    /// Set a minimum fragment width used when forcibly splitting sentences.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMinChars`] if `min` is zero or wider than
    /// `max_chars_per_line`.
    pub fn with_min_chars(self, min: usize) -> Result<Self> {
        let constraints = Self {
            min_chars_per_line: Some(min),
            ..self
        };
        constraints.validate()?;
        Ok(constraints)
    }

    /// Maximum number of display lines on one slide.
    #[must_use]
    pub const fn max_lines(&self) -> usize {
        self.max_lines_per_slide
    }

    /// Maximum number of characters (grapheme clusters) on one display line.
    #[must_use]
    pub const fn max_chars(&self) -> usize {
        self.max_chars_per_line
    }

    /// Optional minimum fragment width for forced splits.
    #[must_use]
    pub const fn min_chars(&self) -> Option<usize> {
        self.min_chars_per_line
    }

    /// Check every limit.
    ///
    /// Constraints built through [`Constraints::new`] or deserialized are
    /// always valid. [`Segmenter::segment`](crate::Segmenter::segment) still
    /// calls this before doing any work.
    ///
    /// # Errors
    ///
    /// Returns the first violated limit.
    pub fn validate(&self) -> Result<()> {
        if self.max_lines_per_slide == 0 {
            return Err(Error::InvalidMaxLines(self.max_lines_per_slide));
        }
        if self.max_chars_per_line == 0 {
            return Err(Error::InvalidMaxChars(self.max_chars_per_line));
        }
        if let Some(min) = self.min_chars_per_line {
            if min == 0 || min > self.max_chars_per_line {
                return Err(Error::InvalidMinChars {
                    min,
                    max: self.max_chars_per_line,
                });
            }
        }
        Ok(())
    }

    /// Check if adding `additional` lines to `current` would exceed the slide.
    ///
    /// An exact fit does not overflow.
    #[must_use]
    pub fn would_overflow(&self, current: usize, additional: usize) -> bool {
        current.saturating_add(additional) > self.max_lines_per_slide
    }
}

impl Default for Constraints {
    fn default() -> Self {
        // Shooting-script defaults: large font, narrow lines
        Self {
            max_lines_per_slide: 5,
            max_chars_per_line: 18,
            min_chars_per_line: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_constraints() {
        let c = Constraints::new(2, 10).unwrap();
        assert_eq!(c.max_lines(), 2);
        assert_eq!(c.max_chars(), 10);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_zero_lines_rejected() {
        assert!(matches!(
            Constraints::new(0, 10),
            Err(Error::InvalidMaxLines(0))
        ));
    }

    #[test]
    fn test_zero_chars_rejected() {
        assert!(matches!(
            Constraints::new(3, 0),
            Err(Error::InvalidMaxChars(0))
        ));
    }

    #[test]
    fn test_min_chars_bounds() {
        let c = Constraints::new(3, 10).unwrap();
        assert!(c.with_min_chars(10).is_ok());
        assert!(matches!(
            c.with_min_chars(11),
            Err(Error::InvalidMinChars { min: 11, max: 10 })
        ));
        assert!(c.with_min_chars(0).is_err());
    }

    #[test]
    fn test_would_overflow() {
        let c = Constraints::new(4, 10).unwrap();
        assert!(!c.would_overflow(2, 1));
        assert!(!c.would_overflow(2, 2)); // exact fit
        assert!(c.would_overflow(2, 3));
    }

    #[test]
    fn test_default_is_valid() {
        assert!(Constraints::default().validate().is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_rejects_zero_limits() {
        let zero = r#"{"max_lines_per_slide":0,"max_chars_per_line":0}"#;
        let err = serde_json::from_str::<Constraints>(zero).unwrap_err();
        assert!(err.to_string().contains("max lines"), "{err}");

        let zero_chars = r#"{"max_lines_per_slide":2,"max_chars_per_line":0}"#;
        assert!(serde_json::from_str::<Constraints>(zero_chars).is_err());

        let wide_min = r#"{"max_lines_per_slide":2,"max_chars_per_line":10,"min_chars_per_line":11}"#;
        assert!(serde_json::from_str::<Constraints>(wide_min).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_valid() {
        let c: Constraints =
            serde_json::from_str(r#"{"max_lines_per_slide":2,"max_chars_per_line":10}"#).unwrap();
        assert_eq!(c, Constraints::new(2, 10).unwrap());

        let json = serde_json::to_string(&c.with_min_chars(3).unwrap()).unwrap();
        let back: Constraints = serde_json::from_str(&json).unwrap();
        assert_eq!(back.min_chars(), Some(3));
    }
}
