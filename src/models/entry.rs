//! Listing entries and pages

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::SourceHandle;

/// A browsable collection in the DAM
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionEntry {
    /// Collection name
    pub title: String,

    /// Collection ref, used as the browse path for drill-down
    pub path: String,

    /// Creation time, when the DAM reported a parseable one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// Always empty; the host expands collections lazily via `browse`
    #[serde(default)]
    pub children: Vec<ListingEntry>,
}

/// A single asset in the DAM
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceEntry {
    /// Resource title, falling back to the resource id for untitled assets
    pub title: String,

    /// Preview thumbnail URL
    pub thumbnail_url: String,

    /// Opaque address the host persists for later fetches
    pub source: SourceHandle,

    /// Last modification time, when the DAM reported a parseable one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,
}

/// One row of a listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ListingEntry {
    Collection(CollectionEntry),
    Resource(ResourceEntry),
}

/// One page of browse or search results.
///
/// The DAM calls behind a page do not paginate server-side, so a page
/// always holds the full result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingPage {
    /// Ordered entries: collections first, then resources
    pub entries: Vec<ListingEntry>,

    /// Whether this page came from a text search rather than browsing
    pub is_search_result: bool,

    /// Whether the host may load collection children on demand
    pub dynamic_load: bool,

    /// Optional help link the host can surface next to the listing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_url: Option<String>,
}
