use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub trait ConfigContentProvider {
    fn get_config_content(&self) -> Result<Option<String>, String>;
    fn set_config_content(&self, content: &str) -> Result<(), String>;
}

pub struct FileContentConfigProvider {
    file_path: PathBuf,
}

impl FileContentConfigProvider {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self { file_path: file_path.into() }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) => match err.kind() {
                ErrorKind::NotFound => Ok(None),
                _ => Err(format!(
                    "Failed to read {}: {}",
                    self.file_path.display(),
                    err
                )),
            },
        }
    }

    fn set_config_content(&self, content: &str) -> Result<(), String> {
        if let Some(parent) = self.file_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {}", parent.display(), e))?;
        }
        std::fs::write(&self.file_path, content)
            .map_err(|e| format!("Failed to write {}: {}", self.file_path.display(), e))
    }
}

/// Keeps content in memory. Used where no file should be touched.
#[derive(Default)]
pub struct MemoryContentProvider {
    content: Mutex<Option<String>>,
}

impl MemoryContentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: &str) -> Self {
        Self {
            content: Mutex::new(Some(content.to_string())),
        }
    }
}

impl ConfigContentProvider for MemoryContentProvider {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        self.content
            .lock()
            .map(|content| content.clone())
            .map_err(|e| format!("Content lock poisoned: {}", e))
    }

    fn set_config_content(&self, content: &str) -> Result<(), String> {
        let mut current = self
            .content
            .lock()
            .map_err(|e| format!("Content lock poisoned: {}", e))?;
        *current = Some(content.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reads_as_none() {
        let provider = FileContentConfigProvider::new("this_file_does_not_exist.yaml");
        assert_eq!(provider.get_config_content(), Ok(None));
    }

    #[test]
    fn test_file_provider_creates_parent_directories() {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("snake_provider_test_{}", random_number));
        path.push("nested");
        path.push("content.yaml");

        let provider = FileContentConfigProvider::new(path.clone());
        provider.set_config_content("highscore: 3\n").unwrap();
        assert_eq!(
            provider.get_config_content().unwrap().as_deref(),
            Some("highscore: 3\n")
        );
        assert_eq!(provider.file_path(), path.as_path());
    }

    #[test]
    fn test_memory_provider_round_trip() {
        let provider = MemoryContentProvider::new();
        assert_eq!(provider.get_config_content(), Ok(None));
        provider.set_config_content("a: 1").unwrap();
        assert_eq!(provider.get_config_content(), Ok(Some("a: 1".to_string())));
        let seeded = MemoryContentProvider::with_content("b: 2");
        assert_eq!(seeded.get_config_content(), Ok(Some("b: 2".to_string())));
    }
}
