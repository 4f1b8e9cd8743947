//! Search and listing aggregation over the DAM catalog

use log::debug;

use crate::client::models::{CollectionRecord, ResourceRecord, records_from_value};
use crate::client::{ApiCall, DamApi};
use crate::error::Result;
use crate::models::{CollectionEntry, ListingEntry, ListingPage, ResourceEntry};

const SEARCH_PUBLIC_COLLECTIONS: &str = "search_public_collections";
const SEARCH_GET_PREVIEWS: &str = "search_get_previews";

/// `search_get_previews` param5: no server-side row limit.
const FETCH_ALL_ROWS: &str = "-1";
/// `search_get_previews` param8: thumbnail preview size class.
const THUMBNAIL_SIZE: &str = "thm";

/// Composes the DAM's collection and resource searches into host-ready
/// listings.
///
/// Page numbers are accepted for host interface compatibility, but the
/// DAM functions used here do not paginate server-side: every listing is
/// the full result set as a single page.
pub struct CatalogSearchService<C> {
    client: C,
    help_url: Option<String>,
}

impl<C: DamApi> CatalogSearchService<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            help_url: None,
        }
    }

    /// Attach a help link to every listing page.
    pub fn with_help_url(mut self, url: impl Into<String>) -> Self {
        self.help_url = Some(url.into());
        self
    }

    /// Search collections matching `query` (empty matches all).
    pub async fn list_collections(&self, query: &str) -> Result<Vec<CollectionEntry>> {
        let call = ApiCall::new(SEARCH_PUBLIC_COLLECTIONS).param(1, query);
        let value = self.client.call(call).await?;

        let records: Vec<CollectionRecord> = records_from_value(value, SEARCH_PUBLIC_COLLECTIONS);
        Ok(records
            .into_iter()
            .map(CollectionRecord::into_entry)
            .collect())
    }

    /// Search resources matching `query` (empty matches all).
    pub async fn list_resources(&self, query: &str) -> Result<Vec<ResourceEntry>> {
        let call = ApiCall::new(SEARCH_GET_PREVIEWS)
            .param(1, query)
            .param(5, FETCH_ALL_ROWS)
            .param(8, THUMBNAIL_SIZE);
        let value = self.client.call(call).await?;

        let records: Vec<ResourceRecord> = records_from_value(value, SEARCH_GET_PREVIEWS);
        Ok(records
            .into_iter()
            .filter_map(ResourceRecord::into_entry)
            .collect())
    }

    /// Full-catalog search: matching collections first, then matching
    /// resources, each group in DAM response order.
    pub async fn search(&self, query: &str, _page: u32) -> Result<ListingPage> {
        let collections = self.list_collections(query).await?;
        let resources = self.list_resources(query).await?;
        debug!(
            "search {query:?}: {} collections, {} resources",
            collections.len(),
            resources.len()
        );

        let mut entries: Vec<ListingEntry> = Vec::with_capacity(collections.len() + resources.len());
        entries.extend(collections.into_iter().map(ListingEntry::Collection));
        entries.extend(resources.into_iter().map(ListingEntry::Resource));

        Ok(self.page(entries, true))
    }

    /// Browse the catalog.
    ///
    /// An empty path lists the top-level collections. A collection ref as
    /// the path lists that collection's contents, which the DAM models as
    /// a search scoped by its `!collection<ref>` filter query.
    pub async fn browse(&self, path: &str, page: u32) -> Result<ListingPage> {
        if !path.is_empty() {
            return self.search(&format!("!collection{path}"), page).await;
        }

        let collections = self.list_collections("").await?;
        let entries = collections
            .into_iter()
            .map(ListingEntry::Collection)
            .collect();
        Ok(self.page(entries, false))
    }

    fn page(&self, entries: Vec<ListingEntry>, is_search_result: bool) -> ListingPage {
        ListingPage {
            entries,
            is_search_result,
            dynamic_load: true,
            help_url: self.help_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockDamClient;
    use crate::error::{ApiError, Error};
    use serde_json::json;

    fn collections_json() -> serde_json::Value {
        json!([
            {"ref": "7", "name": "Press photos", "created": "2018-03-09 09:57:46"},
            {"ref": "9", "name": "Logos", "created": "2019-01-02 10:00:00"},
        ])
    }

    fn resources_json() -> serde_json::Value {
        json!([
            {"ref": "41", "field8": "Cat", "file_extension": "jpg", "url_thm": "https://dam.example/t/41.jpg"},
            {"ref": "42", "field8": "Dog", "file_extension": "png", "url_thm": "https://dam.example/t/42.png"},
            {"ref": "43", "field8": "Fox", "file_extension": "tif", "url_thm": "https://dam.example/t/43.tif"},
        ])
    }

    #[tokio::test]
    async fn test_search_merges_collections_before_resources() {
        let client = MockDamClient::new()
            .with_response(collections_json())
            .with_response(resources_json());
        let catalog = CatalogSearchService::new(client);

        let page = catalog.search("cat", 0).await.unwrap();

        assert!(page.is_search_result);
        assert_eq!(page.entries.len(), 5);
        let titles: Vec<&str> = page
            .entries
            .iter()
            .map(|entry| match entry {
                ListingEntry::Collection(c) => c.title.as_str(),
                ListingEntry::Resource(r) => r.title.as_str(),
            })
            .collect();
        assert_eq!(titles, ["Press photos", "Logos", "Cat", "Dog", "Fox"]);
    }

    #[tokio::test]
    async fn test_search_issues_both_calls_in_order() {
        let client = std::sync::Arc::new(
            MockDamClient::new()
                .with_response(collections_json())
                .with_response(resources_json()),
        );
        let catalog = CatalogSearchService::new(client.clone());

        catalog.search("cat", 0).await.unwrap();

        let calls = client.captured_calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].function(), SEARCH_PUBLIC_COLLECTIONS);
        assert_eq!(calls[0].param_value(1), Some("cat"));
        assert_eq!(calls[1].function(), SEARCH_GET_PREVIEWS);
        assert_eq!(calls[1].param_value(5), Some(FETCH_ALL_ROWS));
        assert_eq!(calls[1].param_value(8), Some(THUMBNAIL_SIZE));
    }

    #[tokio::test]
    async fn test_zero_match_objects_absorbed_as_empty() {
        let client = MockDamClient::new()
            .with_response(json!({"error": "no collections"}))
            .with_response(json!({"error": "no resources"}));
        let catalog = CatalogSearchService::new(client);

        let page = catalog.search("", 0).await.unwrap();

        assert!(page.entries.is_empty());
        assert!(page.is_search_result);
    }

    #[tokio::test]
    async fn test_transport_errors_propagate() {
        let client = MockDamClient::new()
            .with_error(ApiError::Transport("connection refused".to_string()).into());
        let catalog = CatalogSearchService::new(client);

        let result = catalog.search("cat", 0).await;

        assert!(matches!(result, Err(Error::Api(ApiError::Transport(_)))));
    }

    #[tokio::test]
    async fn test_browse_without_path_lists_collections_only() {
        let client = std::sync::Arc::new(MockDamClient::new().with_response(collections_json()));
        let catalog = CatalogSearchService::new(client.clone());

        let page = catalog.browse("", 0).await.unwrap();

        assert!(!page.is_search_result);
        assert!(page.dynamic_load);
        assert_eq!(page.entries.len(), 2);

        // Only the collection search ran; resources are loaded on demand.
        let calls = client.captured_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].function(), SEARCH_PUBLIC_COLLECTIONS);
        assert_eq!(calls[0].param_value(1), Some(""));
    }

    #[tokio::test]
    async fn test_browse_with_path_scopes_search_to_collection() {
        let client = std::sync::Arc::new(
            MockDamClient::new()
                .with_response(json!([]))
                .with_response(resources_json()),
        );
        let catalog = CatalogSearchService::new(client.clone());

        let page = catalog.browse("7", 0).await.unwrap();

        assert!(page.is_search_result);
        assert_eq!(page.entries.len(), 3);

        let calls = client.captured_calls();
        assert_eq!(calls[0].param_value(1), Some("!collection7"));
        assert_eq!(calls[1].param_value(1), Some("!collection7"));
    }

    #[tokio::test]
    async fn test_help_url_is_attached_to_pages() {
        let client = MockDamClient::new().with_response(collections_json());
        let catalog =
            CatalogSearchService::new(client).with_help_url("https://docs.example/picker");

        let page = catalog.browse("", 0).await.unwrap();

        assert_eq!(page.help_url.as_deref(), Some("https://docs.example/picker"));
    }
}
