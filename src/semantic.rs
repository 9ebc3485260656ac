//! Sentence embeddings via fastembed.
//!
//! Plugs a local embedding model into [`SimilarityGate`](crate::SimilarityGate):
//!
//! ```rust,ignore
//! use promptdeck::{Constraints, FastEmbedder, Segmenter, SimilarityGate};
//!
//! let gate = SimilarityGate::new(FastEmbedder::new()?).with_threshold(0.85)?;
//! let segmenter = Segmenter::new(Constraints::new(5, 18)?).with_gate(gate);
//! let result = segmenter.segment(script)?;
//! ```
//!
//! ## Performance
//!
//! All sentences of a script are embedded in one batch. For a 10-minute
//! script (~150 sentences) with a 384-dim model this takes on the order of
//! a second on CPU; packing afterwards is negligible.

use crate::{Embedder, Error, Result};

/// Embedder backed by a fastembed model.
pub struct FastEmbedder {
    model: fastembed::TextEmbedding,
    batch_size: Option<usize>,
}

impl FastEmbedder {
    /// Load fastembed's default model (BGE-small-en, 384 dimensions).
    ///
    /// # Errors
    ///
    /// Returns an error if the model fails to load.
    pub fn new() -> Result<Self> {
        Self::with_options(fastembed::InitOptions::default())
    }

    /// Load a model with explicit options.
    ///
    /// Scripts that are not in English want a multilingual model here.
    ///
    /// # Errors
    ///
    /// Returns an error if the model fails to load.
    pub fn with_options(options: fastembed::InitOptions) -> Result<Self> {
        let model = fastembed::TextEmbedding::try_new(options)
            .map_err(|e| Error::Embedding(e.to_string()))?;

        Ok(Self {
            model,
            batch_size: None,
        })
    }

    /// Set the embedding batch size.
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = Some(batch_size);
        self
    }
}

impl Embedder for FastEmbedder {
    fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        self.model
            .embed(texts.to_vec(), self.batch_size)
            .map_err(|e| Error::Embedding(e.to_string()))
    }
}

impl std::fmt::Debug for FastEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FastEmbedder")
            .field("batch_size", &self.batch_size)
            .finish_non_exhaustive()
    }
}
