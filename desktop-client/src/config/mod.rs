mod highscore_config;
mod main_config;

pub(crate) use common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

pub use highscore_config::HighScoreConfig;
pub use main_config::{get_config_manager, Config, DEFAULT_CONFIG_FILE};
