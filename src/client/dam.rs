//! DAM API client implementation

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
use log::debug;
use reqwest::{Client as HttpClient, StatusCode};
use serde_json::Value;
use tokio::io::AsyncWriteExt;

use super::{ApiCall, DamApi, sign};
use crate::config::{ApiCredentials, Settings};
use crate::error::{ApiError, FetchError, Result};

/// HTTP client for the DAM's signed GET API.
///
/// Holds no mutable state beyond the connection pool, so a clone is cheap
/// and concurrent calls from multiple host requests need no locking.
/// Dropping an in-flight future aborts the request at the connection
/// level rather than waiting it out.
#[derive(Debug, Clone)]
pub struct DamClient {
    http: HttpClient,
    credentials: ApiCredentials,
    download_timeout: Duration,
}

impl DamClient {
    /// Create a client with default settings.
    pub fn new(credentials: ApiCredentials) -> Result<Self> {
        Self::with_settings(credentials, &Settings::default())
    }

    /// Create a client with explicit timeouts.
    pub fn with_settings(credentials: ApiCredentials, settings: &Settings) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        Ok(Self {
            http,
            credentials,
            download_timeout: settings.download_timeout,
        })
    }

    /// Full request URL for `call`: endpoint, canonical query, signature.
    fn request_url(&self, call: &ApiCall) -> String {
        let query = call.canonical_query(self.credentials.user_name());
        let signature = sign::sign(&self.credentials, &query);
        format!(
            "{}{}&sign={}",
            self.credentials.endpoint_url(),
            query,
            signature
        )
    }
}

#[async_trait]
impl DamApi for DamClient {
    async fn call(&self, call: ApiCall) -> Result<Value> {
        // The signed URL embeds credential-derived material; log only the
        // function name.
        debug!("DAM call: function={}", call.function());

        let url = self.request_url(&call);
        let response = self.http.get(&url).send().await.map_err(ApiError::from)?;

        match response.status() {
            StatusCode::OK => {}
            StatusCode::UNAUTHORIZED => return Err(ApiError::Unauthorized.into()),
            status => return Err(ApiError::Status(status.as_u16()).into()),
        }

        let body = response.text().await.map_err(ApiError::from)?;
        let value = serde_json::from_str(&body).map_err(|err| ApiError::Decode(err.to_string()))?;
        Ok(value)
    }

    async fn download(&self, url: &str, destination: &Path) -> Result<u64> {
        let response = self
            .http
            .get(url)
            .timeout(self.download_timeout)
            .send()
            .await
            .map_err(|err| FetchError::Download(ApiError::from(err).to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Download(format!("HTTP status {status}")).into());
        }

        // Guard created before the file: from here until `keep`, any exit
        // (error or dropped future) removes what was written.
        let mut guard = PartialFileGuard::new(destination);
        let mut file = tokio::fs::File::create(destination)
            .await
            .map_err(|err| FetchError::NotFound(format!("{}: {err}", destination.display())))?;

        let mut written = 0u64;
        let mut body = response.bytes_stream();
        while let Some(chunk) = body.next().await {
            let chunk = chunk.map_err(|err| FetchError::Download(err.to_string()))?;
            file.write_all(&chunk)
                .await
                .map_err(|err| FetchError::Download(err.to_string()))?;
            written += chunk.len() as u64;
        }
        file.flush()
            .await
            .map_err(|err| FetchError::Download(err.to_string()))?;

        guard.keep();
        debug!("downloaded {written} bytes to {}", destination.display());
        Ok(written)
    }
}

/// Removes a partially written download unless `keep` is called.
///
/// The host must never see a truncated file where a completed download is
/// expected, including when the transfer future is cancelled mid-stream.
struct PartialFileGuard {
    path: PathBuf,
    armed: bool,
}

impl PartialFileGuard {
    fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            armed: true,
        }
    }

    fn keep(&mut self) {
        self.armed = false;
    }
}

impl Drop for PartialFileGuard {
    fn drop(&mut self) {
        if self.armed {
            let _ = std::fs::remove_file(&self.path);
        }
    }
}
