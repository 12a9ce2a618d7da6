//! sri-storage
//!
//! Key-value persistence for in-progress and completed assessments. The
//! storage backend is injected through [`store::KeyValueStore`]; every
//! write degrades to memory when the backend fails.

pub mod archive;
pub mod error;
pub mod file;
pub mod memory;
pub mod progress;
pub mod store;

use error::StorageError;

/// Result of a write that is allowed to fall back to memory.
#[derive(Debug)]
pub enum FlushOutcome {
    /// Nothing was pending.
    Idle,
    /// Written to the backing store.
    Persisted,
    /// The store rejected the write; the value is held in memory only.
    MemoryOnly(StorageError),
}

impl FlushOutcome {
    pub fn is_persisted(&self) -> bool {
        matches!(self, FlushOutcome::Persisted)
    }
}
