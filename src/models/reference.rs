//! Persisted file reference

use serde::{Deserialize, Serialize};

use super::SourceHandle;

/// Pointer to a remote asset, persisted by the host's storage.
///
/// Created once per reference-mode fetch and never mutated; fetching the
/// same asset again produces a new value. `resolved_url` is a transient,
/// time-limited DAM URL captured at materialization time; later accesses
/// re-derive a fresh one from `source` instead of reusing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileReference {
    /// Host user id the reference was created for
    pub user_id: String,

    /// Display name of that user
    pub user_display_name: String,

    /// The opaque source handle, the stable part of the reference
    pub source: SourceHandle,

    /// Download URL at materialization time, set only in reference mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_url: Option<String>,

    /// Filename recorded alongside the resolved URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_filename: Option<String>,
}
