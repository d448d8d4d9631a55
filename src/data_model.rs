use serde::{Deserialize, Serialize};

/// One key/value pair in a `dataModelUpdate` contents list.
///
/// The value tag carries the type on the wire: `valueString`, `valueNumber`,
/// `valueBool`, or a nested `valueMap` list of entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataModelEntry {
    pub key: String,
    #[serde(flatten)]
    pub value: DataModelValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DataModelValue {
    #[serde(rename = "valueString")]
    String(String),
    #[serde(rename = "valueNumber")]
    Number(f64),
    #[serde(rename = "valueBool")]
    Bool(bool),
    #[serde(rename = "valueMap")]
    Map(Vec<DataModelEntry>),
}

impl DataModelEntry {
    pub fn string(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { key: key.into(), value: DataModelValue::String(value.into()) }
    }

    pub fn number(key: impl Into<String>, value: f64) -> Self {
        Self { key: key.into(), value: DataModelValue::Number(value) }
    }

    pub fn bool(key: impl Into<String>, value: bool) -> Self {
        Self { key: key.into(), value: DataModelValue::Bool(value) }
    }

    pub fn map(key: impl Into<String>, entries: Vec<DataModelEntry>) -> Self {
        Self { key: key.into(), value: DataModelValue::Map(entries) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_flat_entry() {
        let entry = DataModelEntry::string("name", "The Fancy Place");
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value, json!({ "key": "name", "valueString": "The Fancy Place" }));
    }

    #[test]
    fn serializes_nested_map() {
        let entry = DataModelEntry::map(
            "item1",
            vec![DataModelEntry::string("name", "Quick Bites"), DataModelEntry::number("rating", 4.2)],
        );
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["key"], "item1");
        assert_eq!(value["valueMap"][1]["valueNumber"], 4.2);
    }

    #[test]
    fn round_trips_wire_form() {
        let wire = json!({ "key": "items", "valueMap": [
            { "key": "rating", "valueNumber": 4.8 },
            { "key": "open", "valueBool": true }
        ] });
        let entry: DataModelEntry = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(serde_json::to_value(&entry).unwrap(), wire);
    }
}
