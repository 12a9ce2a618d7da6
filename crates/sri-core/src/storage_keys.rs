//! Key conventions for the client-local key-value store.
//!
//! Pure string functions. These define the canonical layout of everything
//! the engine persists.

use uuid::Uuid;

/// The single in-progress assessment snapshot.
pub const ASSESSMENT_PROGRESS: &str = "sri_assessment_progress";

/// Ordered list of archived session ids, most recent last.
pub const SESSION_INDEX: &str = "sri_session_index";

pub const SESSIONS_PREFIX: &str = "sri_sessions/";

pub fn session(id: Uuid) -> String {
    format!("{SESSIONS_PREFIX}{id}")
}
