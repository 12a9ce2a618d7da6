//! sri-cli library root.
//!
//! Exposes the answer-file format and data-directory layout so that
//! integration tests can exercise them without spawning the binary.

pub mod input;
pub mod workspace;
