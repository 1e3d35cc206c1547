use crate::core::Storage;
use crate::utils::error::{DupesError, Result};
use std::fs;
use std::path::PathBuf;

/// Reads input files from the local filesystem, relative to `base_path`.
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
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.base_path.join(path);
        tracing::debug!("Reading input file: {}", full_path.display());

        // fs::read 在返回前就關閉檔案，解析失敗時也不會佔用
        fs::read(&full_path).map_err(|source| DupesError::IoError {
            path: full_path.display().to_string(),
            source,
        })
    }
}
