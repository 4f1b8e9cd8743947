//! Opaque resource address

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, FetchError, Result};

/// Address of a DAM resource: `"<resourceId>,<extension>"`.
///
/// The DAM's search responses do not include a download location, so the
/// id/extension composite is what the host persists as the asset's source
/// and hands back later to have a download URL derived on demand. The
/// string form carries exactly one comma; it is only ever split on the
/// first one, and the resource id never contains one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SourceHandle {
    resource_id: String,
    extension: String,
}

impl SourceHandle {
    /// Build a handle from its parts.
    ///
    /// The resource id must be non-empty and comma-free; the extension may
    /// be empty (extensionless assets) but may not contain a comma.
    pub fn new(resource_id: impl Into<String>, extension: impl Into<String>) -> Result<Self> {
        let resource_id = resource_id.into();
        let extension = extension.into();

        if resource_id.is_empty() || resource_id.contains(',') {
            return Err(FetchError::InvalidSource(format!(
                "unusable resource id {resource_id:?}"
            ))
            .into());
        }
        if extension.contains(',') {
            return Err(FetchError::InvalidSource(format!(
                "unusable extension {extension:?}"
            ))
            .into());
        }

        Ok(Self {
            resource_id,
            extension,
        })
    }

    /// Numeric DAM resource id (kept as text; the DAM echoes it back)
    pub fn resource_id(&self) -> &str {
        &self.resource_id
    }

    /// File extension, without a leading dot
    pub fn extension(&self) -> &str {
        &self.extension
    }
}

impl FromStr for SourceHandle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (resource_id, extension) = s
            .split_once(',')
            .ok_or_else(|| FetchError::InvalidSource(format!("missing separator in {s:?}")))?;
        Self::new(resource_id, extension)
    }
}

impl fmt::Display for SourceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.resource_id, self.extension)
    }
}

impl TryFrom<String> for SourceHandle {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<SourceHandle> for String {
    fn from(handle: SourceHandle) -> Self {
        handle.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_on_comma() {
        let handle: SourceHandle = "42,png".parse().unwrap();

        assert_eq!(handle.resource_id(), "42");
        assert_eq!(handle.extension(), "png");
    }

    #[test]
    fn test_display_round_trips() {
        let handle: SourceHandle = "42,png".parse().unwrap();

        assert_eq!(handle.to_string(), "42,png");
        assert_eq!(handle.to_string().parse::<SourceHandle>().unwrap(), handle);
    }

    #[test]
    fn test_empty_extension_is_allowed() {
        let handle: SourceHandle = "42,".parse().unwrap();

        assert_eq!(handle.resource_id(), "42");
        assert_eq!(handle.extension(), "");
    }

    #[test]
    fn test_missing_separator_is_rejected() {
        assert!("42".parse::<SourceHandle>().is_err());
    }

    #[test]
    fn test_second_comma_is_rejected() {
        assert!("42,tar,gz".parse::<SourceHandle>().is_err());
    }

    #[test]
    fn test_empty_resource_id_is_rejected() {
        assert!(",png".parse::<SourceHandle>().is_err());
        assert!(SourceHandle::new("", "png").is_err());
    }

    #[test]
    fn test_comma_in_parts_is_rejected() {
        assert!(SourceHandle::new("4,2", "png").is_err());
        assert!(SourceHandle::new("42", "t,gz").is_err());
    }

    #[test]
    fn test_serde_uses_composite_string() {
        let handle: SourceHandle = "42,png".parse().unwrap();

        let encoded = serde_json::to_string(&handle).unwrap();
        assert_eq!(encoded, "\"42,png\"");

        let decoded: SourceHandle = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, handle);
    }
}
