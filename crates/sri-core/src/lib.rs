//! sri-core
//!
//! Pure domain types, configuration, and storage key conventions.
//! No UI dependency. This is the shared vocabulary of the
//! SRI engine.

pub mod config;
pub mod error;
pub mod models;
pub mod storage_keys;
