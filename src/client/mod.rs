//! DAM API client

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

pub mod call;
pub mod dam;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod sign;

pub use call::ApiCall;
pub use dam::DamClient;
#[cfg(test)]
pub use mock::MockDamClient;

/// DAM API transport trait.
///
/// One implementation talks HTTP ([`DamClient`]); tests inject
/// [`MockDamClient`]. Each method is a single synchronous round trip with
/// a bounded timeout; there is no retry or caching at this layer.
#[async_trait]
pub trait DamApi: Send + Sync {
    /// Issue a signed API call and decode the JSON response body.
    ///
    /// Returns the body verbatim; callers decide what shape they expect.
    /// In particular a zero-match search comes back as a JSON object
    /// rather than an array, which is not an error here.
    async fn call(&self, call: ApiCall) -> Result<Value>;

    /// Stream the body of `url` into `destination`, returning the number
    /// of bytes written. No partial file survives a failed transfer.
    async fn download(&self, url: &str, destination: &Path) -> Result<u64>;
}

#[async_trait]
impl<T: DamApi + ?Sized> DamApi for Arc<T> {
    async fn call(&self, call: ApiCall) -> Result<Value> {
        (**self).call(call).await
    }

    async fn download(&self, url: &str, destination: &Path) -> Result<u64> {
        (**self).download(url, destination).await
    }
}
