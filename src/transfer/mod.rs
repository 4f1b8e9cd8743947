//! Two-phase file access
//!
//! Search results carry only an opaque source handle; the actual download
//! location is derived from it on demand. This module owns that second
//! phase: resolving a transient URL, materializing a persistable
//! reference, and streaming bytes to a host-prepared path.

pub mod codec;

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::client::{ApiCall, DamApi};
use crate::error::{FetchError, Result};
use crate::host::HostUser;
use crate::models::{FileReference, SourceHandle};

const GET_RESOURCE_PATH: &str = "get_resource_path";

/// `get_resource_path` param2: return a URL, not a server filesystem path.
const PATH_AS_URL: &str = "0";
/// `get_resource_path` param3: original size class.
const ORIGINAL_SIZE: &str = "";

/// A file fetched to local storage.
///
/// `source` is the asset's stable identifier for the host to persist; the
/// transient URL the bytes came from is deliberately not reported.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedFile {
    pub source: SourceHandle,
    pub path: PathBuf,
    pub bytes: u64,
}

/// Resolves opaque source handles into downloads or persisted references.
pub struct FileReferenceResolver<C> {
    client: C,
}

impl<C: DamApi> FileReferenceResolver<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Derive a direct download URL for the asset behind `source`.
    ///
    /// The URL is transient; it is valid for immediate use only and must
    /// never be persisted as the asset's identifier.
    pub async fn resolve_direct_url(&self, source: &SourceHandle) -> Result<String> {
        let call = ApiCall::new(GET_RESOURCE_PATH)
            .param(1, source.resource_id())
            .param(2, PATH_AS_URL)
            .param(3, ORIGINAL_SIZE)
            .param(5, source.extension());
        let value = self.client.call(call).await?;

        match value {
            Value::String(url) if !url.is_empty() => Ok(url),
            _ => Err(FetchError::Resolution(source.to_string()).into()),
        }
    }

    /// Build the reference object the host persists for `source`.
    ///
    /// Identity and source are always recorded. When `use_reference` is
    /// set (the host opted into reference mode), the current download URL
    /// and filename are resolved and recorded as well; otherwise they stay
    /// unset and the host is expected to fall back to an immediate
    /// download.
    pub async fn materialize_reference(
        &self,
        source: &SourceHandle,
        user: &HostUser,
        use_reference: bool,
    ) -> Result<FileReference> {
        let mut reference = FileReference {
            user_id: user.id.clone(),
            user_display_name: user.display_name.clone(),
            source: source.clone(),
            resolved_url: None,
            resolved_filename: None,
        };

        if use_reference {
            reference.resolved_url = Some(self.resolve_direct_url(source).await?);
            reference.resolved_filename = Some(source.to_string());
        }

        Ok(reference)
    }

    /// Download the asset behind `source` to `destination`.
    ///
    /// On failure no partial file is left at `destination`.
    pub async fn fetch_to_local_path(
        &self,
        source: &SourceHandle,
        destination: &Path,
    ) -> Result<FetchedFile> {
        let url = self.resolve_direct_url(source).await?;
        let bytes = self.client.download(&url, destination).await?;

        Ok(FetchedFile {
            source: source.clone(),
            path: destination.to_path_buf(),
            bytes,
        })
    }

    /// Current download URL for a persisted reference.
    ///
    /// DAM URLs are time-limited, so every access re-derives a fresh one
    /// from the embedded handle; the URL captured at materialization time
    /// is never reused.
    pub async fn refresh_url(&self, reference: &FileReference) -> Result<String> {
        self.resolve_direct_url(&reference.source).await
    }
}
