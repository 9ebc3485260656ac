//! CLI tool for turning a script into teleprompter slides.

use anyhow::{Context, Result};
use clap::Parser;
use promptdeck::{Constraints, DeckPlan, ParagraphPolicy, Segmenter, SentenceSplitter};
use std::io::Read;
use std::path::PathBuf;

/// Split a script into line-bounded teleprompter slides.
#[derive(Parser, Debug)]
#[command(name = "promptdeck")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input script (UTF-8 text). Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Maximum lines per slide
    #[arg(short = 'l', long, default_value = "5")]
    max_lines: usize,

    /// Maximum characters per line
    #[arg(short = 'c', long, default_value = "18")]
    max_chars: usize,

    /// Merge clause fragments narrower than this when force-splitting
    #[arg(long)]
    min_chars: Option<usize>,

    /// Characters per line when rendering (default: same as --max-chars)
    #[arg(long)]
    render_width: Option<usize>,

    /// Start every paragraph on a new slide
    #[arg(short = 'p', long)]
    paragraph_breaks: bool,

    /// Use Unicode sentence boundaries instead of punctuation
    #[arg(long)]
    unicode_sentences: bool,

    /// Print the deck plan as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let text = read_input(args.input.as_ref())?;
    if text.trim().is_empty() {
        log::warn!("no script text supplied");
        return Ok(());
    }

    let mut constraints = Constraints::new(args.max_lines, args.max_chars)?;
    if let Some(min) = args.min_chars {
        constraints = constraints.with_min_chars(min)?;
    }

    let splitter = if args.unicode_sentences {
        SentenceSplitter::unicode()
    } else {
        SentenceSplitter::new()
    };
    let paragraphs = if args.paragraph_breaks {
        ParagraphPolicy::SlideBreak
    } else {
        ParagraphPolicy::Soft
    };

    let segmenter = Segmenter::new(constraints)
        .with_splitter(splitter)
        .with_paragraphs(paragraphs);
    let result = segmenter.segment(&text)?;

    if result.review_count() > 0 {
        log::warn!(
            "{} of {} slides were force-split and need review",
            result.review_count(),
            result.len()
        );
    }

    let render_width = args.render_width.unwrap_or(args.max_chars);
    let deck = DeckPlan::assemble(&result, render_width)?;

    if args.json {
        let json = serde_json::to_string_pretty(&deck).context("Failed to serialize deck")?;
        println!("{json}");
    } else {
        print!("{deck}");
    }

    Ok(())
}

/// Read the script from a file, or stdin when no path is given.
fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}
