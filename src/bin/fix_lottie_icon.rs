use anyhow::{Context, Result};
use clap::Parser;
use lottie_retouch::document::{load_document, save_document};
use lottie_retouch::edits::remove_shape_item;
use std::path::PathBuf;

// "Path 2" is the circle background behind the bolt icon. "Path 3" (the
// bolt) and the styling items (Merge, Gradient, Transform) are kept.
const TARGET_SHAPE: &str = "Path 2";

const DEFAULT_INPUT: &str = "src/assets/animations/quick-links.json";

#[derive(Parser)]
#[command(name = "fix-lottie-icon")]
#[command(version, about = "Remove the circle background shape from the quick-links animation")]
#[command(long_about = "Remove the circle background shape from the quick-links animation\n\n\
    Drops every item named 'Path 2' from the first shape group of the first\n\
    layer and rewrites the file in place, pretty-printed with indentation:\n  \
    fix-lottie-icon [animation.json] [--compact] [-v]")]
struct Cli {
    /// Animation JSON file path (edited in place)
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Compact JSON output (default is pretty-printed with indentation)
    #[arg(long)]
    compact: bool,

    /// Verbose output for debugging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        eprintln!("Reading animation file: {}", cli.input.display());
    }

    let mut tree = load_document(&cli.input)
        .with_context(|| format!("Failed to read animation file: {}", cli.input.display()))?;

    let removed = remove_shape_item(&mut tree, TARGET_SHAPE)
        .context("Failed to locate the icon shape group")?;

    if removed > 0 {
        println!("Successfully removed '{}' from the animation.", TARGET_SHAPE);
    } else {
        println!("'{}' not found in the items.", TARGET_SHAPE);
    }

    // The file is rewritten either way, matching the previous formatting
    save_document(&cli.input, &tree, cli.compact)
        .with_context(|| format!("Failed to write animation file: {}", cli.input.display()))?;

    if cli.verbose {
        eprintln!("Done!");
    }

    Ok(())
}
