//! Host-facing result model
//!
//! These are the types the adapter hands across the host boundary:
//! listing entries for the host's picker UI, the opaque source handle the
//! host persists as an asset's address, and the file reference object for
//! reference-mode fetches. Nothing in here knows about the DAM's wire
//! format.

mod entry;
mod reference;
mod source;

pub use entry::{CollectionEntry, ListingEntry, ListingPage, ResourceEntry};
pub use reference::FileReference;
pub use source::SourceHandle;
