//! Schemaless record shapes exchanged with the record store.
//!
//! Records travel between repositories and store backends as JSON object
//! maps. Typed entities are converted at the repository boundary with
//! `serde_json`, so a backend never needs to know about `User` or `Card`.

use serde_json::{Map, Value};

/// A single stored record: attribute name to attribute value.
pub type Item = Map<String, Value>;

/// A key-value table: its name and the attribute that acts as partition key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDef {
    /// Physical table name.
    pub name: String,
    /// Name of the string partition-key attribute.
    pub key_attribute: String,
}

impl TableDef {
    /// Create a new table definition.
    pub fn new(name: impl Into<String>, key_attribute: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key_attribute: key_attribute.into(),
        }
    }

    /// Read this table's key from an item, if present and a string.
    pub fn key_of<'a>(&self, item: &'a Item) -> Option<&'a str> {
        item.get(&self.key_attribute).and_then(Value::as_str)
    }
}

/// Equality filter on a single string attribute, applied during a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanFilter {
    /// Attribute to compare.
    pub attribute: String,
    /// Value the attribute must equal.
    pub equals: String,
}

impl ScanFilter {
    /// Build an `attribute == value` filter.
    pub fn eq(attribute: impl Into<String>, equals: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            equals: equals.into(),
        }
    }

    /// Evaluate this filter against an item.
    pub fn matches(&self, item: &Item) -> bool {
        item.get(&self.attribute).and_then(Value::as_str) == Some(self.equals.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(value: Value) -> Item {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_key_of() {
        let table = TableDef::new("cards", "card_id");
        let record = item(json!({"card_id": "card-0a1b2c3d", "nome": "A"}));
        assert_eq!(table.key_of(&record), Some("card-0a1b2c3d"));
        assert_eq!(table.key_of(&item(json!({"card_id": 7}))), None);
    }

    #[test]
    fn test_filter_matches_only_string_equality() {
        let filter = ScanFilter::eq("emailContato", "a@x.com");
        assert!(filter.matches(&item(json!({"emailContato": "a@x.com"}))));
        assert!(!filter.matches(&item(json!({"emailContato": "b@x.com"}))));
        assert!(!filter.matches(&item(json!({"nome": "A"}))));
    }
}
