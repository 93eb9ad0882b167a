use common::config::Validate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_HIGHSCORE_FILE: &str = "snake_highscore.yaml";

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct HighScoreConfig {
    pub location: String,
}

impl Default for HighScoreConfig {
    fn default() -> Self {
        Self {
            location: DEFAULT_HIGHSCORE_FILE.to_string(),
        }
    }
}

impl Validate for HighScoreConfig {
    fn validate(&self) -> Result<(), String> {
        if self.location.trim().is_empty() {
            return Err("highscore location must not be empty".to_string());
        }
        Ok(())
    }
}
