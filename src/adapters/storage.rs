use crate::domain::ports::Storage;
use crate::utils::error::{Result, SequenceError};
use std::fs;
use std::path::PathBuf;

/// 本機檔案系統存儲；相對路徑以 `base_path` 為根
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn resolve(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new("")
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.resolve(path);
        fs::read(&full_path).map_err(|source| SequenceError::ReadError {
            path: full_path.display().to_string(),
            source,
        })
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);
        fs::write(&full_path, data).map_err(|source| SequenceError::WriteError {
            path: full_path.display().to_string(),
            source,
        })
    }
}
