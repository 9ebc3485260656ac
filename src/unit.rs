//! Slide content units and the segmentation result.

/// One packed chunk of script text destined for a single slide.
///
/// Sentences sharing a unit are separated by `\n`, so each sentence starts
/// on a fresh display line:
///
/// ```text
/// max_chars = 10
///
/// text:  "Hi there.\nGo now."
/// lines: 2
///   |Hi there. |
///   |Go now.   |
/// ```
///
/// ## Review Flag
///
/// `needs_review` marks units whose boundary is not a sentence boundary:
/// the unit came from forcibly splitting a sentence that could not fit on a
/// slide by itself. Someone should check those slides for awkward breaks
/// before shooting.
///
/// ```rust
/// use promptdeck::SlideUnit;
///
/// let unit = SlideUnit::new("Hi there.", 1, false, 0);
/// assert_eq!(unit.lines, 1);
/// assert!(!unit.needs_review);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlideUnit {
    /// The slide text.
    pub text: String,
    /// Estimated display lines, as used when packing this unit.
    pub lines: usize,
    /// Whether the unit came from a forced (non-sentence) split.
    pub needs_review: bool,
    /// Zero-based index of this unit in the result.
    pub index: usize,
}

impl SlideUnit {
    /// Create a new unit.
    #[must_use]
    pub fn new(text: impl Into<String>, lines: usize, needs_review: bool, index: usize) -> Self {
        Self {
            text: text.into(),
            lines,
            needs_review,
            index,
        }
    }

    /// The length of the unit text in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the unit text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl std::fmt::Display for SlideUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SlideUnit {{ index: {}, lines: {}, review: {}, len: {} }}",
            self.index,
            self.lines,
            self.needs_review,
            self.len()
        )
    }
}

/// Ordered output of one segmentation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segmentation {
    units: Vec<SlideUnit>,
}

impl Segmentation {
    /// Wrap units, renumbering them in order.
    #[must_use]
    pub fn new(mut units: Vec<SlideUnit>) -> Self {
        for (index, unit) in units.iter_mut().enumerate() {
            unit.index = index;
        }
        Self { units }
    }

    /// All units in slide order.
    #[must_use]
    pub fn units(&self) -> &[SlideUnit] {
        &self.units
    }

    /// Number of units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether there are no units.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Number of units flagged for review.
    #[must_use]
    pub fn review_count(&self) -> usize {
        self.units.iter().filter(|u| u.needs_review).count()
    }

    /// Iterate over units in slide order.
    pub fn iter(&self) -> std::slice::Iter<'_, SlideUnit> {
        self.units.iter()
    }

    /// Take ownership of the units.
    #[must_use]
    pub fn into_units(self) -> Vec<SlideUnit> {
        self.units
    }
}

impl IntoIterator for Segmentation {
    type Item = SlideUnit;
    type IntoIter = std::vec::IntoIter<SlideUnit>;

    fn into_iter(self) -> Self::IntoIter {
        self.units.into_iter()
    }
}

impl<'a> IntoIterator for &'a Segmentation {
    type Item = &'a SlideUnit;
    type IntoIter = std::slice::Iter<'a, SlideUnit>;

    fn into_iter(self) -> Self::IntoIter {
        self.units.iter()
    }
}
