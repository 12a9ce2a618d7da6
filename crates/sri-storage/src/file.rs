use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::store::KeyValueStore;

/// One file per key under a root directory.
///
/// `/` in a key maps to a subdirectory, so `sri_sessions/{id}` lands in
/// `{root}/sri_sessions/{id}.json`. Key segments are limited to ASCII
/// alphanumerics, `_` and `-`.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let mut path = self.root.clone();
        let segments: Vec<&str> = key.split('/').collect();
        for segment in &segments {
            let valid = !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'));
            if !valid {
                return Err(StorageError::InvalidKey(key.to_string()));
            }
        }
        for segment in segments {
            path.push(segment);
        }
        path.set_extension("json");
        Ok(path)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }

        // Write to a temp file then rename for atomicity
        let tmp_path = path.with_extension("json.tmp");
        std::fs::write(&tmp_path, value.as_bytes())?;
        std::fs::rename(&tmp_path, &path)?;

        tracing::debug!(path = %path.display(), "key written");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
