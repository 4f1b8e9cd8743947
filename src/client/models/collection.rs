//! `search_public_collections` rows

use serde::Deserialize;

use super::{parse_timestamp, string_or_number};
use crate::models::CollectionEntry;

/// One collection row as the DAM returns it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CollectionRecord {
    /// Collection ref; older DAM versions emit it as a number
    #[serde(rename = "ref", deserialize_with = "string_or_number")]
    pub reference: String,

    /// Collection name
    pub name: String,

    /// Creation timestamp, `YYYY-MM-DD HH:MM:SS`
    #[serde(default)]
    pub created: Option<String>,
}

impl CollectionRecord {
    pub(crate) fn into_entry(self) -> CollectionEntry {
        CollectionEntry {
            title: self.name,
            path: self.reference,
            created: self.created.as_deref().and_then(parse_timestamp),
            children: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_string_ref() {
        let record: CollectionRecord = serde_json::from_value(json!({
            "ref": "119",
            "name": "Press photos",
            "created": "2018-03-09 09:57:46",
        }))
        .unwrap();

        let entry = record.into_entry();
        assert_eq!(entry.title, "Press photos");
        assert_eq!(entry.path, "119");
        assert!(entry.created.is_some());
        assert!(entry.children.is_empty());
    }

    #[test]
    fn test_decodes_numeric_ref() {
        let record: CollectionRecord = serde_json::from_value(json!({
            "ref": 119,
            "name": "Press photos",
        }))
        .unwrap();

        assert_eq!(record.reference, "119");
        assert!(record.created.is_none());
    }
}
