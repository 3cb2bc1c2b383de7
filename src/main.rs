//! Cursor Weaver - Human-like pointer trajectory synthesis
//!
//! Replays recorded human pointer motion between arbitrary screen points.

use cursor_weaver::app::cli::{Cli, Commands, ConfigAction};
use cursor_weaver::app::config::Config;
use cursor_weaver::corpus::hygiene;
use cursor_weaver::corpus::ingest;
use cursor_weaver::corpus::model::{self, Corpus};
use cursor_weaver::synthesis::playback::{PlaybackDriver, PointerDevice, TracePointer};
use cursor_weaver::synthesis::reconstruction::Point;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments first so we can use --verbose to set log level
    let cli = Cli::parse_args();

    // Initialize tracing (--verbose enables debug-level output)
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    // Load config
    let config = if let Some(path) = &cli.config {
        Config::load(path)?
    } else {
        Config::load_default()?
    };

    // Execute command
    match cli.command {
        Commands::Ingest { input, output } => {
            run_ingest(&input, &output)?;
        }
        Commands::Clean { input, output } => {
            run_clean(&input, &output, &config)?;
        }
        Commands::Stats { input } => {
            run_stats(&input)?;
        }
        Commands::Play {
            corpus,
            from,
            targets,
            seed,
            speed,
        } => {
            run_play(&corpus, from, &targets, seed, speed, &config)?;
        }
        Commands::Config { action } => {
            run_config(action, &config)?;
        }
    }

    Ok(())
}

fn run_ingest(input: &Path, output: &Path) -> anyhow::Result<()> {
    let raw = ingest::load_raw(input)?;
    let entry_count: usize = raw.values().map(|entries| entries.len()).sum();
    let doc = ingest::bucket_by_direction(&raw);
    model::save_document(output, &doc)?;

    info!(
        "Bucketed {} recorded drags into {} thresholds -> {}",
        entry_count,
        doc.len(),
        output.display()
    );
    Ok(())
}

fn run_clean(input: &Path, output: &Path, config: &Config) -> anyhow::Result<()> {
    let doc = model::load_document(input)?;
    let (cleaned, report) = hygiene::remove_outliers(&doc, &config.ingest.thresholds)?;
    model::save_document(output, &cleaned)?;

    info!(
        "Kept {} samples, removed {} -> {}",
        report.total_kept(),
        report.total_removed(),
        output.display()
    );
    Ok(())
}

fn run_stats(input: &Path) -> anyhow::Result<()> {
    let corpus = Corpus::load(input)?;

    for (threshold, directions) in corpus.bucket_counts() {
        println!("Threshold: {threshold}");
        for (direction, count) in directions {
            println!("  {direction}: {count}");
        }
        println!();
    }
    println!("Total samples: {}", corpus.sample_count());
    Ok(())
}

fn run_play(
    corpus_path: &Path,
    from: (f64, f64),
    targets: &[(f64, f64)],
    seed: Option<u64>,
    speed: Option<f64>,
    config: &Config,
) -> anyhow::Result<()> {
    let corpus = Corpus::load(corpus_path)?;

    let mut driver = PlaybackDriver::with_timing(&corpus, config.timing.clone());
    if let Some(speed) = speed {
        driver = driver.override_speed(speed);
    }

    let mut rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let mut pointer = TracePointer::new(Point::new(from.0, from.1));
    for (i, &(x, y)) in targets.iter().enumerate() {
        driver.play_from_current(&mut pointer, &mut rng, Point::new(x, y));
        info!("Arrived at ({:.1}, {:.1})", x, y);

        // Brief settle pause between consecutive targets
        if i + 1 < targets.len() {
            let pause = rng.random_range(0.2..=0.25);
            std::thread::sleep(std::time::Duration::from_secs_f64(pause));
        }
    }

    let final_pos = pointer.position();
    info!("Playback complete at ({:.1}, {:.1})", final_pos.x, final_pos.y);
    Ok(())
}

fn run_config(action: ConfigAction, config: &Config) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {
            println!("{}", config.to_toml()?);
        }
        ConfigAction::Init { force } => {
            let path = Config::default_path();
            if path.exists() && !force {
                anyhow::bail!(
                    "config already exists at {} (use --force to overwrite)",
                    path.display()
                );
            }
            Config::default().save(&path)?;
            println!("Wrote default config to {}", path.display());
        }
    }
    Ok(())
}
