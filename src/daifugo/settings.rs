//! Game settings.

use std::fmt::Display;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::{RoundError, Rules};

/// CPU difficulty.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}
impl Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        })
    }
}

/// Settings for a game. These are fixed for the duration of a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// The number of players at the table, 3 or 4.
    pub player_count: usize,
    /// How well the CPU players play.
    pub difficulty: Difficulty,
    pub revolution: bool,
    pub eight_cut: bool,
    pub spade3_return: bool,
    pub stairs: bool,
    /// Whether the deck includes two jokers.
    pub jokers: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_count: 4,
            difficulty: Difficulty::default(),
            revolution: true,
            eight_cut: true,
            spade3_return: true,
            stairs: true,
            jokers: true,
        }
    }
}

impl Settings {
    /// The optional rules in effect.
    pub fn rules(&self) -> Rules {
        Rules {
            revolution: self.revolution,
            eight_cut: self.eight_cut,
            spade3_return: self.spade3_return,
            stairs: self.stairs,
        }
    }

    /// Checks that the settings describe a playable game.
    pub fn validate(self) -> Result<Self, RoundError> {
        match self.player_count {
            3 | 4 => Ok(self),
            n => Err(RoundError::InvalidPlayerCount(n)),
        }
    }

    /// Loads settings from a JSON file. Missing fields take their default values.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        let settings: Settings = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(settings.validate()?)
    }

    /// Saves settings to a JSON file.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_partial_json() {
        let settings: Settings =
            serde_json::from_str(r#"{"player_count": 3, "difficulty": "hard"}"#).unwrap();
        assert_eq!(
            settings,
            Settings {
                player_count: 3,
                difficulty: Difficulty::Hard,
                ..Settings::default()
            }
        );
    }

    #[test]
    fn test_validate() {
        assert!(Settings::default().validate().is_ok());
        let settings = Settings {
            player_count: 5,
            ..Settings::default()
        };
        assert_matches!(settings.validate(), Err(RoundError::InvalidPlayerCount(5)));
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir()
            .join(format!("daifugo-settings-{}.json", std::process::id()));
        let settings = Settings {
            stairs: false,
            difficulty: Difficulty::Easy,
            ..Settings::default()
        };
        settings.save(&path).unwrap();
        let loaded = Settings::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, settings);
        assert!(!loaded.rules().stairs);
    }
}
