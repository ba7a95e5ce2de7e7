//! Command-line interface for tabletop_tictactoe.

use clap::{Parser, Subcommand};

use crate::theme::ThemeChoice;

/// Tabletop tic-tac-toe - two mirrored boards, one game
#[derive(Parser, Debug)]
#[command(name = "tabletop_tictactoe")]
#[command(about = "Pass-and-play tic-tac-toe for two players facing each other", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the terminal table
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Color scheme (light, dark, auto); overrides the config file
        #[arg(long)]
        theme: Option<ThemeChoice>,

        /// Draw the top board upright instead of turned around
        #[arg(long)]
        no_mirror: bool,
    },

    /// Replay cell indices (0-8), X first, and print the result
    Replay {
        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,

        /// Cells in the order they were played
        #[arg(value_parser = clap::value_parser!(u8).range(0..=8))]
        cells: Vec<u8>,
    },
}
