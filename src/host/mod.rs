//! Host collaborator boundary
//!
//! The host application consumes the adapter through the [`Repository`]
//! capability trait rather than subclassing anything; [`DamRepository`]
//! is the concrete implementation, composed from the catalog and transfer
//! services. Collaborators the adapter needs from the host come in the
//! other direction: a per-call [`HostUser`] identity and a [`FileStorage`]
//! for preparing download destinations.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::catalog::CatalogSearchService;
use crate::client::DamApi;
use crate::config::Settings;
use crate::error::Result;
use crate::models::{CollectionEntry, ListingPage, ResourceEntry, SourceHandle};
use crate::transfer::{codec, FetchedFile, FileReferenceResolver};

/// Identity of the host user a call is made for.
///
/// Supplied per call from the host's session context; the adapter keeps
/// no ambient user state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostUser {
    pub id: String,
    pub display_name: String,
}

/// Ways the host may take delivery of an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnMode {
    /// Download the bytes into host storage
    InternalCopy,
    /// Hand the user a direct external link
    ExternalLink,
    /// Persist a reference and resolve it on each access
    PersistedReference,
    /// Serve through the host with access control, redirecting per access
    ControlledLink,
}

/// Host-side file storage the adapter downloads into.
pub trait FileStorage: Send + Sync {
    /// Reserve a writable destination for `filename` and return its path.
    fn prepare_destination_path(&self, filename: &str) -> Result<PathBuf>;
}

/// The capability surface the adapter offers a host.
#[async_trait]
pub trait Repository: Send + Sync {
    /// List the catalog at `path`; empty path means top level.
    async fn browse(&self, path: &str, page: u32) -> Result<ListingPage>;

    /// Full-catalog text search, scoped to the connected account.
    async fn search(&self, query: &str, page: u32) -> Result<ListingPage>;

    /// Collections matching `query`.
    async fn list_collections(&self, query: &str) -> Result<Vec<CollectionEntry>>;

    /// Resources matching `query`.
    async fn list_resources(&self, query: &str) -> Result<Vec<ResourceEntry>>;

    /// Download an asset into host storage.
    async fn get_file(
        &self,
        source: &SourceHandle,
        filename: &str,
        storage: &dyn FileStorage,
    ) -> Result<FetchedFile>;

    /// Materialize and encode the reference blob the host persists.
    async fn get_file_reference(
        &self,
        source: &SourceHandle,
        user: &HostUser,
        use_reference: bool,
    ) -> Result<String>;

    /// Current external link for a persisted reference blob.
    async fn get_link(&self, reference_blob: &str) -> Result<String>;

    /// Redirect target for serving a persisted reference blob to a user.
    ///
    /// Recomputed on every access; response streaming itself stays on the
    /// host side of the boundary.
    async fn send_file(&self, reference_blob: &str) -> Result<String>;

    /// Direct download URL for immediate use.
    async fn resolve_direct_url(&self, source: &SourceHandle) -> Result<String>;

    /// File type filter the host should apply ("*" = any).
    fn supported_filetypes(&self) -> &'static str {
        "*"
    }

    /// Delivery modes this adapter supports.
    fn supported_return_modes(&self) -> &'static [ReturnMode] {
        &[
            ReturnMode::InternalCopy,
            ReturnMode::ExternalLink,
            ReturnMode::PersistedReference,
            ReturnMode::ControlledLink,
        ]
    }

    /// Whether the adapter can join the host's global full-text search.
    /// Search here is always scoped to the connected DAM account.
    fn global_search(&self) -> bool {
        false
    }
}

/// [`Repository`] implementation over a DAM API client.
pub struct DamRepository<C> {
    catalog: CatalogSearchService<C>,
    resolver: FileReferenceResolver<C>,
}

impl<C: DamApi + Clone> DamRepository<C> {
    pub fn new(client: C, settings: &Settings) -> Self {
        let mut catalog = CatalogSearchService::new(client.clone());
        if let Some(url) = &settings.help_url {
            catalog = catalog.with_help_url(url);
        }

        Self {
            catalog,
            resolver: FileReferenceResolver::new(client),
        }
    }

    /// The listing/search half of the adapter.
    pub fn catalog(&self) -> &CatalogSearchService<C> {
        &self.catalog
    }

    /// The resolution/fetch half of the adapter.
    pub fn resolver(&self) -> &FileReferenceResolver<C> {
        &self.resolver
    }
}

#[async_trait]
impl<C: DamApi + Clone> Repository for DamRepository<C> {
    async fn browse(&self, path: &str, page: u32) -> Result<ListingPage> {
        self.catalog.browse(path, page).await
    }

    async fn search(&self, query: &str, page: u32) -> Result<ListingPage> {
        self.catalog.search(query, page).await
    }

    async fn list_collections(&self, query: &str) -> Result<Vec<CollectionEntry>> {
        self.catalog.list_collections(query).await
    }

    async fn list_resources(&self, query: &str) -> Result<Vec<ResourceEntry>> {
        self.catalog.list_resources(query).await
    }

    async fn get_file(
        &self,
        source: &SourceHandle,
        filename: &str,
        storage: &dyn FileStorage,
    ) -> Result<FetchedFile> {
        let destination = storage.prepare_destination_path(filename)?;
        self.resolver.fetch_to_local_path(source, &destination).await
    }

    async fn get_file_reference(
        &self,
        source: &SourceHandle,
        user: &HostUser,
        use_reference: bool,
    ) -> Result<String> {
        let reference = self
            .resolver
            .materialize_reference(source, user, use_reference)
            .await?;
        codec::encode(&reference)
    }

    async fn get_link(&self, reference_blob: &str) -> Result<String> {
        let reference = codec::decode(reference_blob)?;
        self.resolver.refresh_url(&reference).await
    }

    async fn send_file(&self, reference_blob: &str) -> Result<String> {
        self.get_link(reference_blob).await
    }

    async fn resolve_direct_url(&self, source: &SourceHandle) -> Result<String> {
        self.resolver.resolve_direct_url(source).await
    }
}
