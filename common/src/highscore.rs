use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, YamlConfigSerializer,
};

/// Where the best score survives between runs.
pub trait HighScoreStore {
    fn get(&self) -> Result<u32, String>;
    fn set(&mut self, score: u32) -> Result<(), String>;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MemoryHighScoreStore {
    highscore: u32,
}

impl MemoryHighScoreStore {
    pub fn new(highscore: u32) -> Self {
        Self { highscore }
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn get(&self) -> Result<u32, String> {
        Ok(self.highscore)
    }

    fn set(&mut self, score: u32) -> Result<(), String> {
        self.highscore = score;
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    pub highscore: u32,
}

/// Persists a `HighScoreRecord` through a content provider. Missing content
/// reads as zero.
pub struct FileHighScoreStore<TContentProvider = FileContentConfigProvider, TSerializer = YamlConfigSerializer>
where
    TContentProvider: ConfigContentProvider,
    TSerializer: ConfigSerializer<HighScoreRecord>,
{
    content_provider: TContentProvider,
    serializer: TSerializer,
}

impl FileHighScoreStore {
    pub fn from_yaml_file(file_path: impl AsRef<Path>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path.as_ref()),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TContentProvider, TSerializer> FileHighScoreStore<TContentProvider, TSerializer>
where
    TContentProvider: ConfigContentProvider,
    TSerializer: ConfigSerializer<HighScoreRecord>,
{
    pub fn new(content_provider: TContentProvider, serializer: TSerializer) -> Self {
        Self {
            content_provider,
            serializer,
        }
    }
}

impl<TContentProvider, TSerializer> HighScoreStore for FileHighScoreStore<TContentProvider, TSerializer>
where
    TContentProvider: ConfigContentProvider,
    TSerializer: ConfigSerializer<HighScoreRecord>,
{
    fn get(&self) -> Result<u32, String> {
        match self.content_provider.get_config_content()? {
            Some(content) => Ok(self.serializer.deserialize(&content)?.highscore),
            None => Ok(0),
        }
    }

    fn set(&mut self, score: u32) -> Result<(), String> {
        let content = self.serializer.serialize(&HighScoreRecord { highscore: score })?;
        self.content_provider.set_config_content(&content)
    }
}
