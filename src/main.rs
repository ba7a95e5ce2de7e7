//! Tabletop tic-tac-toe - command-line entry point.

use anyhow::{Context, Result};
use clap::Parser;
use tabletop_tictactoe::cli::{Cli, Command};
use tabletop_tictactoe::{ReplayReport, TableConfig, ThemeChoice, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            theme,
            no_mirror,
        } => play(config, theme, no_mirror),
        Command::Replay { json, cells } => replay(json, cells),
    }
}

/// Run the terminal table.
fn play(
    config_path: Option<std::path::PathBuf>,
    theme: Option<ThemeChoice>,
    no_mirror: bool,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => TableConfig::from_file(path)?,
        None => TableConfig::default(),
    };
    if let Some(theme) = theme {
        config = config.with_theme(theme);
    }
    if no_mirror {
        config = config.with_mirror_top(false);
    }

    // Log to a file; the terminal belongs to the UI.
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    let colorfgbg = std::env::var("COLORFGBG").ok();
    run_tui(&config, colorfgbg.as_deref())
}

/// Replay a move list and print where it ends.
fn replay(json: bool, cells: Vec<u8>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cells: Vec<usize> = cells.into_iter().map(usize::from).collect();
    let report = ReplayReport::from_cells(&cells).context("Illegal move sequence")?;
    info!(outcome = %report.outcome, "Replay finished");

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.render());
    }
    Ok(())
}
