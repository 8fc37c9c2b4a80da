use anyhow::{Context, Result};
use clap::Parser;
use lottie_retouch::document::{load_document, save_document};
use lottie_retouch::edits::hide_named_groups;
use std::path::PathBuf;

const DEFAULT_INPUT: &str = "src/assets/animations/hero-pharmacy.json";

#[derive(Parser)]
#[command(name = "hide-lottie-text")]
#[command(version, about = "Hide the PHARMACY letter groups in the hero animation")]
#[command(long_about = "Hide the PHARMACY letter groups in the hero animation\n\n\
    Sets the transform opacity of every group named 'Group 23' through\n\
    'Group 30' to zero and rewrites the file in place:\n  \
    hide-lottie-text [animation.json] [--compact] [-v]")]
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

    // Groups 23 to 30 are the PHARMACY letter groups
    let target_groups: Vec<String> = (23..=30).map(|i| format!("Group {}", i)).collect();

    let hidden = hide_named_groups(&mut tree, &target_groups)
        .context("Failed to edit the animation")?;

    for name in &hidden {
        println!("Set opacity of {} to 0", name);
    }

    save_document(&cli.input, &tree, cli.compact)
        .with_context(|| format!("Failed to write animation file: {}", cli.input.display()))?;

    println!("Successfully hidden PHARMACY text groups.");

    Ok(())
}
