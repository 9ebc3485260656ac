//! Similarity-Gated Slides
//!
//! Keep sentences on one slide only while they stay on topic.
//!
//! This demo uses a toy keyword embedder so it runs offline. With the
//! `semantic` feature, swap in `promptdeck::FastEmbedder::new()?`.
//!
//! ```bash
//! cargo run --example similarity_gate
//! ```

use promptdeck::{Constraints, Embedder, Segmenter, SimilarityGate};

/// Two-topic bag-of-words embedder.
struct Keywords;

impl Embedder for Keywords {
    fn embed(&self, texts: &[&str]) -> promptdeck::Result<Vec<Vec<f32>>> {
        Ok(texts
            .iter()
            .map(|t| {
                let t = t.to_lowercase();
                let food = ["rice", "pan", "cook"].iter().filter(|w| t.contains(*w)).count();
                let weather = ["rain", "sun", "weather"].iter().filter(|w| t.contains(*w)).count();
                vec![food as f32 + 0.1, weather as f32 + 0.1]
            })
            .collect())
    }
}

fn main() -> promptdeck::Result<()> {
    let script = "Heat the pan. Add the rice and cook it. \
        Speaking of weather, rain is coming. The sun returns on Friday.";

    let constraints = Constraints::new(6, 24)?;

    let plain = Segmenter::new(constraints).segment(script)?;
    let gated = Segmenter::new(constraints)
        .with_gate(SimilarityGate::new(Keywords).with_threshold(0.85)?)
        .segment(script)?;

    println!("Capacity only: {} slides", plain.len());
    println!("With similarity gate: {} slides\n", gated.len());

    for unit in &gated {
        println!("[{}]\n{}\n", unit.index + 1, unit.text);
    }

    Ok(())
}
