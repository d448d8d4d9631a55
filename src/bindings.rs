use serde::{Deserialize, Serialize};

/// A string value that is either a literal or a path reference into the
/// surface data model.
///
/// Wire form is a single-key object: `{"literalString": "..."}` or
/// `{"path": "/items/0/address"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DynamicString {
    #[serde(rename = "literalString")]
    Literal(String),
    #[serde(rename = "path")]
    Path(String),
}

impl DynamicString {
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    pub fn path(path: impl Into<String>) -> Self {
        Self::Path(path.into())
    }
}

/// A number value that is either a literal or a path reference into the
/// surface data model.
///
/// Renderers accept three wire forms for numeric props: a bare JSON number
/// (the form the shipped payloads use for lat/lng/zoom), a tagged
/// `{"literalNumber": 12}` object, or a `{"path": "..."}` reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DynamicNumber {
    Literal(f64),
    LiteralNumber {
        #[serde(rename = "literalNumber")]
        literal_number: f64,
    },
    Path {
        path: String,
    },
}

impl DynamicNumber {
    pub fn literal(value: f64) -> Self {
        Self::Literal(value)
    }

    pub fn literal_number(value: f64) -> Self {
        Self::LiteralNumber { literal_number: value }
    }

    pub fn path(path: impl Into<String>) -> Self {
        Self::Path { path: path.into() }
    }
}

impl From<f64> for DynamicNumber {
    fn from(value: f64) -> Self {
        Self::Literal(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_literal_as_single_key_object() {
        let value = serde_json::to_value(DynamicString::literal("Get Directions")).unwrap();
        assert_eq!(value, json!({ "literalString": "Get Directions" }));
    }

    #[test]
    fn deserializes_path_reference() {
        let binding: DynamicString =
            serde_json::from_value(json!({ "path": "/items/0/address" })).unwrap();
        assert_eq!(binding, DynamicString::path("/items/0/address"));
    }

    #[test]
    fn serializes_literal_number_as_bare_number() {
        let value = serde_json::to_value(DynamicNumber::literal(47.0)).unwrap();
        assert_eq!(value, json!(47.0));
    }

    #[test]
    fn deserializes_bare_number_as_literal() {
        let binding: DynamicNumber = serde_json::from_value(json!(47)).unwrap();
        assert_eq!(binding, DynamicNumber::literal(47.0));
    }

    #[test]
    fn round_trips_tagged_number_forms() {
        let tagged: DynamicNumber =
            serde_json::from_value(json!({ "literalNumber": 12.0 })).unwrap();
        assert_eq!(tagged, DynamicNumber::literal_number(12.0));
        assert_eq!(serde_json::to_value(&tagged).unwrap(), json!({ "literalNumber": 12.0 }));

        let bound: DynamicNumber = serde_json::from_value(json!({ "path": "zoom" })).unwrap();
        assert_eq!(bound, DynamicNumber::path("zoom"));
        assert_eq!(serde_json::to_value(&bound).unwrap(), json!({ "path": "zoom" }));
    }
}
