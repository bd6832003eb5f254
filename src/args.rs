//! Command line arguments

use std::path::PathBuf;

use clap::Parser;
use daifugo::{Difficulty, Settings};

#[derive(Debug, Clone, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Load settings from a JSON file.
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Write the effective settings to a JSON file.
    #[arg(long)]
    pub save_settings: Option<PathBuf>,

    /// Number of players, 3 or 4.
    #[arg(short, long)]
    pub players: Option<usize>,

    #[arg(short, long)]
    pub difficulty: Option<Difficulty>,

    /// Seed for the deal and the robots.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of rounds to play.
    #[arg(short, long, default_value_t = 1)]
    pub rounds: usize,

    #[arg(long)]
    pub no_revolution: bool,

    #[arg(long)]
    pub no_eight_cut: bool,

    #[arg(long)]
    pub no_spade3_return: bool,

    #[arg(long)]
    pub no_stairs: bool,

    #[arg(long)]
    pub no_jokers: bool,

    /// Let the robots pause before each move.
    #[arg(long)]
    pub think: bool,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,

    /// Replay a round log previously written to stderr, instead of playing.
    #[arg(long)]
    pub replay: Option<PathBuf>,
}

impl Args {
    /// Applies command line overrides to the settings.
    pub fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(players) = self.players {
            settings.player_count = players;
        }
        if let Some(difficulty) = self.difficulty {
            settings.difficulty = difficulty;
        }
        settings.revolution &= !self.no_revolution;
        settings.eight_cut &= !self.no_eight_cut;
        settings.spade3_return &= !self.no_spade3_return;
        settings.stairs &= !self.no_stairs;
        settings.jokers &= !self.no_jokers;
        settings
    }
}
