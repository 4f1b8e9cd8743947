//! `search_get_previews` rows

use log::warn;
use serde::Deserialize;

use super::{parse_timestamp, string_or_number};
use crate::models::{ResourceEntry, SourceHandle};

/// One resource row as the DAM returns it.
///
/// The search response carries no download location; the ref and file
/// extension together form the source handle the host persists, and a
/// download URL is derived from them on demand.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResourceRecord {
    /// Resource ref; older DAM versions emit it as a number
    #[serde(rename = "ref", deserialize_with = "string_or_number")]
    pub reference: String,

    /// Title field; null for untitled resources
    #[serde(rename = "field8", default)]
    pub title: Option<String>,

    /// File extension without a leading dot
    #[serde(default)]
    pub file_extension: Option<String>,

    /// Thumbnail-size preview URL
    #[serde(default)]
    pub url_thm: Option<String>,

    /// Last modification timestamp, `YYYY-MM-DD HH:MM:SS`
    #[serde(default)]
    pub file_modified: Option<String>,
}

impl ResourceRecord {
    /// Convert to a host-facing entry, or `None` when the row cannot form
    /// a valid source handle.
    pub(crate) fn into_entry(self) -> Option<ResourceEntry> {
        let extension = self.file_extension.unwrap_or_default();
        let source = match SourceHandle::new(&self.reference, &extension) {
            Ok(source) => source,
            Err(err) => {
                warn!("skipping resource row with unusable ref: {err}");
                return None;
            }
        };

        let title = match self.title.filter(|title| !title.is_empty()) {
            Some(title) => title,
            None => self.reference,
        };

        Some(ResourceEntry {
            title,
            thumbnail_url: self.url_thm.unwrap_or_default(),
            source,
            modified: self.file_modified.as_deref().and_then(parse_timestamp),
        })
    }
}
