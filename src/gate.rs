//! Merge gates: may two adjacent sentences share a slide?
//!
//! The packer always enforces line capacity. A gate adds a second,
//! content-based condition on top of it.
//!
//! ## Similarity Gating
//!
//! Adjacent sentences about the same thing read well on one slide. When the
//! topic moves, starting a fresh slide helps the presenter breathe:
//!
//! ```text
//! Sentences:    [S1]  [S2]  [S3]  [S4]
//! Similarity:      0.91  0.42  0.88
//!                         ↑
//!                    below 0.85: S3 starts a new slide,
//!                    even if S2's slide has room left
//! ```
//!
//! ## Why Precompute?
//!
//! A gate answers for the whole sentence stream at once: entry `i` says
//! whether sentence `i` may join the slide holding sentence `i - 1`. That
//! lets an embedding model run one batch instead of one call per pair,
//! while the packing loop itself stays strictly sequential.

use crate::{Error, Result};

/// Decides which adjacent sentences may share a slide.
pub trait MergeGate: Send + Sync {
    /// For each sentence, whether it may join the slide of the previous one.
    ///
    /// Must return exactly `sentences.len()` entries. Entry 0 is ignored.
    ///
    /// # Errors
    ///
    /// Implementations backed by a model may fail to score the sentences.
    fn joinable(&self, sentences: &[&str]) -> Result<Vec<bool>>;
}

/// The default gate: capacity alone decides.
#[derive(Debug, Clone, Copy, Default)]
pub struct CapacityOnly;

impl MergeGate for CapacityOnly {
    fn joinable(&self, sentences: &[&str]) -> Result<Vec<bool>> {
        Ok(vec![true; sentences.len()])
    }
}

/// A gate built from a pairwise predicate `(previous, next) -> bool`.
///
/// ```rust
/// use promptdeck::{MergeGate, PairwiseGate};
///
/// // Never put a question on the same slide as what precedes it
/// let gate = PairwiseGate::new(|_prev: &str, next: &str| !next.ends_with('?'));
/// let joinable = gate.joinable(&["Hi.", "Ready?", "Go."]).unwrap();
/// assert_eq!(joinable[1..], [false, true]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PairwiseGate<F>(F);

impl<F> PairwiseGate<F>
where
    F: Fn(&str, &str) -> bool + Send + Sync,
{
    /// Wrap a predicate.
    pub fn new(predicate: F) -> Self {
        Self(predicate)
    }
}

impl<F> MergeGate for PairwiseGate<F>
where
    F: Fn(&str, &str) -> bool + Send + Sync,
{
    fn joinable(&self, sentences: &[&str]) -> Result<Vec<bool>> {
        let mut out = Vec::with_capacity(sentences.len());
        for (i, next) in sentences.iter().enumerate() {
            out.push(i == 0 || (self.0)(sentences[i - 1], next));
        }
        Ok(out)
    }
}

/// Turns sentences into embedding vectors.
pub trait Embedder: Send + Sync {
    /// Embed every text, in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Embedding`] if the model fails.
    fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>>;
}

/// Default similarity threshold for [`SimilarityGate`].
pub const DEFAULT_SIMILARITY_THRESHOLD: f32 = 0.85;

/// Gate that keeps adjacent sentences together only while their embeddings
/// stay similar.
///
/// ## Example
///
/// ```rust
/// use promptdeck::{Embedder, MergeGate, Result, SimilarityGate};
///
/// // Toy embedder: questions point one way, statements the other
/// struct Toy;
/// impl Embedder for Toy {
///     fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
///         Ok(texts
///             .iter()
///             .map(|t| if t.ends_with('?') { vec![0.0, 1.0] } else { vec![1.0, 0.0] })
///             .collect())
///     }
/// }
///
/// let gate = SimilarityGate::new(Toy);
/// let joinable = gate.joinable(&["One.", "Two.", "Three?"]).unwrap();
/// assert_eq!(joinable[1..], [true, false]);
/// ```
#[derive(Debug, Clone)]
pub struct SimilarityGate<E> {
    embedder: E,
    threshold: f32,
}

impl<E: Embedder> SimilarityGate<E> {
    /// Create a gate with the default threshold (0.85).
    pub fn new(embedder: E) -> Self {
        Self {
            embedder,
            threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }

    /// Set the minimum similarity for two sentences to share a slide.
    ///
    /// Lower values give longer slides; higher values split on smaller
    /// topic shifts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidThreshold`] outside `0.0..=1.0` (or NaN).
    pub fn with_threshold(mut self, threshold: f32) -> Result<Self> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(Error::InvalidThreshold(threshold));
        }
        self.threshold = threshold;
        Ok(self)
    }

    /// The configured threshold.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }
}

impl<E: Embedder> MergeGate for SimilarityGate<E> {
    fn joinable(&self, sentences: &[&str]) -> Result<Vec<bool>> {
        if sentences.len() <= 1 {
            return Ok(vec![true; sentences.len()]);
        }

        let embeddings = self.embedder.embed(sentences)?;
        if embeddings.len() != sentences.len() {
            return Err(Error::Embedding(format!(
                "expected {} embeddings, got {}",
                sentences.len(),
                embeddings.len()
            )));
        }

        let mut out = Vec::with_capacity(sentences.len());
        out.push(true);
        for pair in embeddings.windows(2) {
            let sim = cosine_similarity(&pair[0], &pair[1]);
            out.push(sim >= self.threshold);
        }
        Ok(out)
    }
}

/// Cosine similarity of two vectors; 0.0 when either has zero norm.
#[must_use]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a > 0.0 && norm_b > 0.0 {
        dot / (norm_a * norm_b)
    } else {
        0.0
    }
}
