//! Frontend Models
//!
//! Data structures matching the remote collection resource.

use serde::{Deserialize, Serialize};

/// A grocery list entry as stored by the remote collection.
///
/// The `id` is assigned by the server; client-created items carry no id
/// until the create call returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    /// Display name (the resource calls this field `item`)
    pub item: String,
    pub checked: bool,
}

/// POST body for creating an item
#[derive(Debug, Clone, Serialize)]
pub struct NewItem {
    pub checked: bool,
    pub item: String,
}

impl NewItem {
    /// New unchecked entry with the given name
    pub fn named(item: impl Into<String>) -> Self {
        Self {
            checked: false,
            item: item.into(),
        }
    }
}

/// PUT body for updating the checked flag
#[derive(Debug, Clone, Serialize)]
pub struct CheckedPatch {
    pub checked: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_matches_collection_payload() {
        let payload = r#"[{"id":"1","item":"Milk","checked":false},{"id":"2","item":"Bread","checked":true}]"#;
        let items: Vec<Item> = serde_json::from_str(payload).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "1");
        assert_eq!(items[0].item, "Milk");
        assert!(!items[0].checked);
        assert!(items[1].checked);
    }

    #[test]
    fn test_new_item_starts_unchecked() {
        let body = NewItem::named("Eggs");
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["checked"], false);
        assert_eq!(json["item"], "Eggs");
    }

    #[test]
    fn test_checked_patch_carries_only_the_flag() {
        let json = serde_json::to_value(&CheckedPatch { checked: true }).unwrap();
        assert_eq!(json, serde_json::json!({ "checked": true }));
    }
}
