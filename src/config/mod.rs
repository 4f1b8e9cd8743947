//! Adapter configuration
//!
//! Both types are supplied by the host at construction time; the crate
//! never reads configuration storage of its own.

use std::fmt;
use std::time::Duration;

/// Credentials for the DAM's signed API.
///
/// Immutable once constructed. The private key is readable only inside the
/// crate and is redacted from `Debug` output so it cannot leak into logs.
#[derive(Clone)]
pub struct ApiCredentials {
    endpoint_url: String,
    user_name: String,
    private_key: String,
}

impl ApiCredentials {
    /// Create credentials for an endpoint.
    ///
    /// `endpoint_url` is the full API base including the query prefix,
    /// e.g. `https://dam.example/api/?`.
    pub fn new(
        endpoint_url: impl Into<String>,
        user_name: impl Into<String>,
        private_key: impl Into<String>,
    ) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            user_name: user_name.into(),
            private_key: private_key.into(),
        }
    }

    /// API base URL the query string is appended to
    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    /// API user account name
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub(crate) fn private_key(&self) -> &str {
        &self.private_key
    }
}

impl fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("endpoint_url", &self.endpoint_url)
            .field("user_name", &self.user_name)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// Host-tunable adapter settings
#[derive(Debug, Clone)]
pub struct Settings {
    /// Bound on a single API round trip
    pub request_timeout: Duration,

    /// Bound on a streaming file download
    pub download_timeout: Duration,

    /// Help link attached to every listing when set
    pub help_url: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            download_timeout: Duration::from_secs(300),
            help_url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_private_key() {
        let credentials = ApiCredentials::new("https://dam.example/api/?", "bot", "k123");
        let rendered = format!("{:?}", credentials);

        assert!(rendered.contains("bot"));
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("k123"));
    }

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();

        assert_eq!(settings.request_timeout, Duration::from_secs(30));
        assert_eq!(settings.download_timeout, Duration::from_secs(300));
        assert!(settings.help_url.is_none());
    }
}
