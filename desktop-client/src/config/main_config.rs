use common::config::Validate;
use common::snake::GameSettings;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{ConfigManager, FileContentConfigProvider, HighScoreConfig, YamlConfigSerializer};

pub const DEFAULT_CONFIG_FILE: &str = "snake_config.yaml";

pub type ClientConfigManager = ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

pub fn get_config_manager(path: impl AsRef<Path>) -> ClientConfigManager {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub game: GameSettings,
    pub highscore: HighScoreConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.highscore.validate()?;
        Ok(())
    }
}
