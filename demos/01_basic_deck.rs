//! Basic Script Segmentation
//!
//! The minimal example: turn a script into teleprompter slides.
//!
//! ```bash
//! cargo run --example 01_basic_deck
//! ```

use promptdeck::{Constraints, DeckPlan, Segmenter};

fn main() -> promptdeck::Result<()> {
    let script = "Welcome back to the kitchen. \
        Today we are making a quick weeknight dinner that takes less than twenty minutes, \
        uses one pan, and needs nothing you do not already have at home. \
        Let's get started!\n\
        First, wash the rice. Then set it aside.";

    // 4 lines per slide, 18 characters per line
    let segmenter = Segmenter::new(Constraints::new(4, 18)?);
    let result = segmenter.segment(script)?;

    println!("Script: {} chars", script.len());
    println!(
        "Slides: {} ({} need review)\n",
        result.len(),
        result.review_count()
    );

    // Page counters, review markers and the end marker
    let deck = DeckPlan::assemble(&result, 18)?;
    print!("{deck}");

    Ok(())
}
