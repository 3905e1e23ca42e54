use clap::Parser;
use std::path::PathBuf;

/// Defines the top-level interface for the Meeple CLI with clap.
#[derive(Parser, Debug)]
#[command(name = "meeple")]
#[command(version, about = "Meeple CLI: Plan board game nights in the terminal.")]
pub struct MeepleCli {
    /// Path to the game catalog JSON file.
    pub catalog: PathBuf,

    /// Default file for the save command.
    #[arg(short, long, default_value = "games_list.txt")]
    pub output: PathBuf,

    /// Enable verbose output?
    #[arg(short, long)]
    pub verbose: bool,
}
