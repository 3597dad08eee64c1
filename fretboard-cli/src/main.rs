//! # Fretboard - Command-Line Board Viewer
//!
//! Generates a fretboard diagram with `fretboard-core` and prints it either
//! as a text grid or as JSON for an external renderer.
//!
//! ## Settings
//! - Defaults: reference tuning, 16 frets, numeric sharp names on C,
//!   markers on degrees 1, 2, 3, 5, 6
//! - `--config <file>` loads a JSON settings file
//! - Flags given on the command line override the file

mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use fretboard_core::{config, BoardSettings, Letter, MarkerPolicy, Notation, Spelling};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fretboard", about = "Print a fretboard diagram", version)]
struct Args {
    /// JSON settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of frets to generate, nut included
    #[arg(short, long, value_parser = parse_fret_count)]
    frets: Option<usize>,

    /// Name strings by letter instead of scale degree
    #[arg(short, long)]
    alphabet: bool,

    /// Spell chromatic notes with flats
    #[arg(long)]
    flat: bool,

    /// Letter that degree 1 is named after
    #[arg(short, long)]
    base: Option<Letter>,

    /// Comma-separated degrees that get a marker, e.g. "1,3,5"
    #[arg(long, value_delimiter = ',', conflicts_with = "root_only")]
    visible: Option<Vec<String>>,

    /// Only mark the root
    #[arg(long)]
    root_only: bool,

    /// Print the board as JSON
    #[arg(long)]
    json: bool,
}

fn parse_fret_count(value: &str) -> Result<usize, String> {
    let count = value
        .parse::<usize>()
        .map_err(|e| format!("invalid fret count {value:?}: {e}"))?;
    config::check_fret_count(count)
}

/// Loads the settings file if one was given, then applies flag overrides.
fn resolve_settings(args: &Args) -> Result<BoardSettings> {
    let mut settings = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read settings file {}", path.display()))?;
            BoardSettings::from_json(&json)
                .with_context(|| format!("invalid settings file {}", path.display()))?
        }
        None => BoardSettings::default(),
    };

    if let Some(frets) = args.frets {
        settings.fret_count = frets;
    }
    if args.alphabet {
        settings.naming.notation = Notation::Alphabet;
    }
    if args.flat {
        settings.naming.spelling = Spelling::Flat;
    }
    if let Some(base) = args.base {
        settings.naming.base = base;
    }

    let policy = if args.root_only {
        Some(MarkerPolicy::root_only())
    } else {
        args.visible
            .as_ref()
            .map(|degrees| MarkerPolicy::with_visible(degrees.iter().map(|d| d.trim())))
    };
    if let Some(policy) = policy {
        settings.visible_degrees = policy.visible_degrees;
        settings.emphasized_degrees = policy.emphasized_degrees;
    }

    Ok(settings)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let settings = resolve_settings(&args)?;
    tracing::info!(
        frets = settings.fret_count,
        notation = ?settings.naming.notation,
        "generating fretboard"
    );

    let board = settings.generate().context("failed to generate fretboard")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&board)?);
    } else {
        print!("{}", ui::board_view::render(&board));
    }
    Ok(())
}
