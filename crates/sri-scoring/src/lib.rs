//! sri-scoring
//!
//! Turns a completed response set into the SRI: per-scale raw and z
//! scores, four weighted dimension scores, the composite index, its
//! severity level, and the narrative that goes with it.

pub mod classify;
pub mod engine;
pub mod error;
pub mod narrative;
pub mod normal;
