//! Command-Line Interface

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Cursor Weaver - Replay recorded human pointer motion between arbitrary points
#[derive(Parser, Debug)]
#[command(name = "cursor-weaver")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Bin a raw recording file into the bucketed corpus layout
    Ingest {
        /// Raw recording file written by the capture tool
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for the bucketed corpus
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Drop samples whose net displacement leaves their bucket's range
    Clean {
        /// Bucketed corpus file
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for the cleaned corpus
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Show per-bucket sample counts for a corpus file
    Stats {
        /// Corpus file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Synthesize moves through the trace pointer
    Play {
        /// Cleaned corpus file
        #[arg(long)]
        corpus: PathBuf,

        /// Starting position as X,Y
        #[arg(long, value_parser = parse_point)]
        from: (f64, f64),

        /// Target position as X,Y (repeat for a sequence of moves)
        #[arg(long = "to", value_parser = parse_point, required = true)]
        targets: Vec<(f64, f64)>,

        /// RNG seed for reproducible playback
        #[arg(long)]
        seed: Option<u64>,

        /// Pin the base speed (seconds per step) instead of drawing it
        #[arg(long)]
        speed: Option<f64>,
    },

    /// View or modify configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Write the default configuration to the default location
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

/// Parse an "X,Y" coordinate pair.
fn parse_point(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let x: f64 = x.trim().parse().map_err(|_| format!("invalid X in {s:?}"))?;
    let y: f64 = y.trim().parse().map_err(|_| format!("invalid Y in {s:?}"))?;
    if !x.is_finite() || !y.is_finite() {
        return Err(format!("coordinates must be finite, got {s:?}"));
    }
    Ok((x, y))
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
