use crate::core::PlayerId;
use crate::error::Error;
use crate::player::ai::{ScoreTable, Searcher};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

pub const CONFIG_PATH: &str = "tictactoe_config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub version: String,
    /// Side the human plays in "Human vs AI" mode. Player1 (X) always opens.
    pub human_player: PlayerId,
    pub ai: AiConfig,
    pub scores: ScoreTable,
    pub selfplay: SelfPlaySettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Alpha-beta pruning; off runs the plain minimax traversal
    pub pruning: bool,
    /// Pause before the AI moves so the human can follow the game
    pub think_delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfPlaySettings {
    pub num_games: usize,
    pub seed: u64,
}

impl GameConfig {
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(CONFIG_PATH)
    }

    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let config_str = std::fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read {}", path.display()),
            source,
        })?;
        let config: GameConfig = serde_json::from_str(&config_str).map_err(Error::from)?;
        config.scores.validate()?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        if !Path::new(CONFIG_PATH).exists() {
            return Self::default();
        }
        Self::load().unwrap_or_else(|err| {
            warn!(path = CONFIG_PATH, error = %err, "ignoring config file, using defaults");
            Self::default()
        })
    }

    pub fn searcher(&self) -> Searcher {
        Searcher::new(self.scores, self.ai.pruning)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            version: "1.0".to_string(),
            human_player: PlayerId::Player1,
            ai: AiConfig::default(),
            scores: ScoreTable::default(),
            selfplay: SelfPlaySettings::default(),
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig {
            pruning: true,
            think_delay_ms: 400,
        }
    }
}

impl Default for SelfPlaySettings {
    fn default() -> Self {
        SelfPlaySettings {
            num_games: 200,
            seed: 2024,
        }
    }
}
