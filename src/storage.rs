use crate::error::AppError;
use std::fs;
use std::path::PathBuf;

/// Flat key-value store holding whole serialized documents. Values are
/// always read and written in one piece; there are no partial updates.
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError>;
}

/// File-backed storage, one JSON document per key under the data directory.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::collections::HashMap;

    /// In-memory stand-in for tests that don't need a filesystem.
    #[derive(Default)]
    pub struct MemoryStorage {
        pub entries: HashMap<String, String>,
    }

    impl Storage for MemoryStorage {
        fn get(&self, key: &str) -> Result<Option<String>, AppError> {
            Ok(self.entries.get(key).cloned())
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
            self.entries.insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    /// Storage whose writes always fail, for exercising the swallow path.
    pub struct FailingStorage;

    impl Storage for FailingStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, AppError> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), AppError> {
            Err(AppError::IoError(std::io::Error::other("disk full")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key_is_none() {
        let temp_dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(temp_dir.path().to_path_buf());
        assert!(storage.get("progress").unwrap().is_none());
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(temp_dir.path().join("data"));
        storage.set("badges", "[{\"id\":\"x\"}]").unwrap();
        assert_eq!(
            storage.get("badges").unwrap().as_deref(),
            Some("[{\"id\":\"x\"}]")
        );
    }

    #[test]
    fn test_set_overwrites_whole_document() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(temp_dir.path().to_path_buf());
        storage.set("progress", "{\"a\":1}").unwrap();
        storage.set("progress", "{}").unwrap();
        assert_eq!(storage.get("progress").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn test_keys_map_to_separate_files() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(temp_dir.path().to_path_buf());
        storage.set("progress", "{}").unwrap();
        storage.set("badges", "[]").unwrap();
        assert!(temp_dir.path().join("progress.json").exists());
        assert!(temp_dir.path().join("badges.json").exists());
    }
}
