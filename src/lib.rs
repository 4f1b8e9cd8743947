//! Integration adapter for a remote digital-asset-management (DAM)
//! service with a signed HTTP GET API.
//!
//! The adapter lets a host content-management application browse, search,
//! and fetch DAM assets without re-hosting the catalog. Search results
//! carry an opaque [`SourceHandle`](models::SourceHandle) per asset;
//! actual binary retrieval is deferred until the host asks for it, either
//! as an immediate download or as a persisted reference that is resolved
//! to a fresh, time-limited URL on every access.
//!
//! ```no_run
//! use damlink::{ApiCredentials, DamClient, DamRepository, Repository, Settings};
//!
//! # async fn example() -> damlink::Result<()> {
//! let credentials = ApiCredentials::new("https://dam.example/api/?", "bot", "private-key");
//! let client = DamClient::new(credentials)?;
//! let repository = DamRepository::new(client, &Settings::default());
//!
//! let page = repository.search("winter catalogue", 0).await?;
//! for entry in &page.entries {
//!     println!("{entry:?}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Credentials are injected at construction and search is always scoped
//! to the connected account; uploads, caching, and credential lifecycle
//! are out of scope.

pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod host;
pub mod models;
pub mod transfer;

pub use catalog::CatalogSearchService;
pub use client::{ApiCall, DamApi, DamClient};
pub use config::{ApiCredentials, Settings};
pub use error::{ApiError, Error, FetchError, ReferenceError, Result};
pub use host::{DamRepository, FileStorage, HostUser, Repository, ReturnMode};
pub use models::{
    CollectionEntry, FileReference, ListingEntry, ListingPage, ResourceEntry, SourceHandle,
};
pub use transfer::{FetchedFile, FileReferenceResolver};
