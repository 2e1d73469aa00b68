//! Dynamic row record

use std::collections::HashMap;

use super::TableRow;
use super::Value;

/// A dynamic row with a string identity and named field values.
///
/// Useful when rows come from JSON or another untyped source. Typed rows
/// implement [`TableRow`] directly instead.
///
/// # Example
///
/// ```
/// use dataview_lib::model::{Record, Value};
///
/// let record = Record::new("prod-1")
///     .set("name", "Blue Dream")
///     .set("stock", 12i64);
///
/// assert_eq!(record.get("name"), Some(&Value::from("Blue Dream")));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    /// The row identity.
    pub(crate) id: String,

    /// The field values.
    pub(crate) fields: HashMap<String, Value>,
}

impl Record {
    /// Creates a new empty record with the given identity.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: HashMap::new(),
        }
    }

    /// Creates a record from a JSON object.
    ///
    /// The identity is read from `id_field`, which must be a string or a
    /// number. Returns `None` if `value` is not an object or has no usable
    /// identity.
    pub fn from_json(value: serde_json::Value, id_field: &str) -> Option<Self> {
        let serde_json::Value::Object(map) = value else {
            return None;
        };

        let id = match map.get(id_field)? {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Number(n) => n.to_string(),
            _ => return None,
        };

        let fields = map
            .into_iter()
            .map(|(name, value)| (name, Value::from(value)))
            .collect();

        Some(Self { id, fields })
    }

    // =========================================================================
    // Field access
    // =========================================================================

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns the field value, or [`Value::Null`] when it is missing.
    pub fn value(&self, field: &str) -> Value {
        self.fields.get(field).cloned().unwrap_or_default()
    }

    /// Sets a field value (builder style).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Sets a field value in place.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Returns the field names, sorted.
    pub fn field_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.fields.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl TableRow for Record {
    fn id(&self) -> String {
        self.id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_string_id() {
        let record = Record::from_json(
            serde_json::json!({"_id": "c1", "name": "Flower", "active": true}),
            "_id",
        )
        .unwrap();
        assert_eq!(record.id(), "c1");
        assert_eq!(record.value("name"), Value::from("Flower"));
        assert_eq!(record.value("missing"), Value::Null);
    }

    #[test]
    fn test_from_json_numeric_id() {
        let record = Record::from_json(serde_json::json!({"id": 7}), "id").unwrap();
        assert_eq!(record.id(), "7");
    }

    #[test]
    fn test_from_json_rejects_missing_id() {
        assert!(Record::from_json(serde_json::json!({"name": "x"}), "id").is_none());
        assert!(Record::from_json(serde_json::json!([1, 2]), "id").is_none());
        assert!(Record::from_json(serde_json::json!({"id": null}), "id").is_none());
    }
}
