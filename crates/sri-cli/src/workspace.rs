use std::path::{Path, PathBuf};

use sri_core::config::{SriConfig, load_config};
use sri_core::error::CoreError;
use sri_storage::file::FileStore;

/// On-disk layout of the data directory:
///
/// ```text
/// {root}/config.json
/// {root}/progress/sri_assessment_progress.json
/// {root}/archive/sri_session_index.json
/// {root}/archive/sri_sessions/{id}.json
/// ```
#[derive(Debug, Clone)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.json")
    }

    pub fn progress_store(&self) -> FileStore {
        FileStore::new(self.root.join("progress"))
    }

    pub fn archive_store(&self) -> FileStore {
        FileStore::new(self.root.join("archive"))
    }

    /// An explicit path must exist. Otherwise `{root}/config.json` is used
    /// when present, and the defaults when not.
    pub fn load_config(&self, explicit: Option<&Path>) -> Result<SriConfig, CoreError> {
        if let Some(path) = explicit {
            return load_config(path);
        }
        let path = self.config_path();
        if path.exists() {
            load_config(&path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(SriConfig::default())
        }
    }
}
