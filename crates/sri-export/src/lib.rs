//! sri-export
//!
//! Everything that leaves the engine: compact share tokens, JSON and CSV
//! exports of archived sessions, and rendered text reports.

pub mod error;
pub mod export;
pub mod render;
pub mod share;
