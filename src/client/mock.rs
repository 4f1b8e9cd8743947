//! Mock DAM client for testing
//!
//! Provides a scripted implementation of [`DamApi`] for unit testing
//! without a network. Responses are consumed in FIFO order, one per
//! `call`; every issued call is captured for assertions.

use std::collections::VecDeque;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use super::{ApiCall, DamApi};
use crate::error::{Error, FetchError, Result};

/// Scripted [`DamApi`] implementation.
///
/// # Example
/// ```ignore
/// let client = MockDamClient::new()
///     .with_response(json!([{"ref": "7", "name": "Press"}]));
/// let value = client.call(ApiCall::new("search_public_collections")).await?;
/// ```
#[derive(Default)]
pub struct MockDamClient {
    responses: Mutex<VecDeque<std::result::Result<Value, Error>>>,
    captured: Mutex<Vec<ApiCall>>,
    download: Mutex<Option<DownloadScript>>,
    downloaded_urls: Mutex<Vec<String>>,
}

enum DownloadScript {
    Bytes(Vec<u8>),
    Fail(String),
}

impl MockDamClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful JSON response.
    pub fn with_response(self, value: Value) -> Self {
        self.responses.lock().unwrap().push_back(Ok(value));
        self
    }

    /// Queue a failed call.
    pub fn with_error(self, error: Error) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Make `download` write the given bytes to the destination.
    pub fn with_download(self, bytes: &[u8]) -> Self {
        *self.download.lock().unwrap() = Some(DownloadScript::Bytes(bytes.to_vec()));
        self
    }

    /// Make `download` fail without touching the destination.
    pub fn with_download_failure(self, message: &str) -> Self {
        *self.download.lock().unwrap() = Some(DownloadScript::Fail(message.to_string()));
        self
    }

    /// Calls issued so far, in order.
    pub fn captured_calls(&self) -> Vec<ApiCall> {
        self.captured.lock().unwrap().clone()
    }

    /// URLs passed to `download`, in order.
    pub fn downloaded_urls(&self) -> Vec<String> {
        self.downloaded_urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DamApi for MockDamClient {
    async fn call(&self, call: ApiCall) -> Result<Value> {
        self.captured.lock().unwrap().push(call);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Value::Array(Vec::new())))
    }

    async fn download(&self, url: &str, destination: &Path) -> Result<u64> {
        self.downloaded_urls.lock().unwrap().push(url.to_string());
        match self.download.lock().unwrap().as_ref() {
            Some(DownloadScript::Bytes(bytes)) => {
                std::fs::write(destination, bytes)
                    .map_err(|err| FetchError::NotFound(err.to_string()))?;
                Ok(bytes.len() as u64)
            }
            Some(DownloadScript::Fail(message)) => {
                Err(FetchError::Download(message.clone()).into())
            }
            None => Ok(0),
        }
    }
}
