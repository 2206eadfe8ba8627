//! The generated schema tree.
//!
//! A [`Schema`] is built once by the [`TypeMapper`](crate::mapper::TypeMapper)
//! and is read-only afterwards.  Every attribute is skipped during
//! serialization when it is empty, so a leaf renders as `{"type": "integer"}`
//! and an unrepresentable type renders as `{}`.
//!
//! ```rust
//! use typeschema_core::{kind::SchemaKind, schema::Schema};
//!
//! let schema = Schema::load(&vec![1_u32, 2, 3]).unwrap();
//! assert_eq!(schema.kind(), Some(SchemaKind::Array));
//! assert_eq!(schema.to_string(), "{\n  \"type\": \"array\",\n  \"items\": {\n    \"type\": \"integer\"\n  }\n}");
//! ```

use std::{collections::BTreeMap, fmt::Display};

use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    kind::SchemaKind,
    mapper::TypeMapper,
    reflect::Reflect,
};

/// One node of the output tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<SchemaKind>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    items: Option<Items>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    properties: BTreeMap<String, Schema>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    required: Vec<String>,

    /// Set when the object describes a map rather than a record.  Not part of
    /// the JSON encoding, so deserialized schemas always read as records.
    #[serde(skip)]
    wildcard: bool,
}

/// Element description of an array schema.  Only ever a flat kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Items {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<SchemaKind>,
}

impl Items {
    pub fn kind(&self) -> Option<SchemaKind> {
        self.kind
    }
}

impl Schema {
    /// Map `value`'s type with a default [`TypeMapper`].
    pub fn load<T>(value: &T) -> Result<Self>
    where
        T: Reflect + ?Sized,
    {
        TypeMapper::default().load(value)
    }

    /// A schema carrying only a type (or nothing, for `None`).
    pub fn leaf(kind: Option<SchemaKind>) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// An array whose elements are classified as `items`.
    pub fn array(items: Option<SchemaKind>) -> Self {
        Self {
            kind: Some(SchemaKind::Array),
            items: Some(Items { kind: items }),
            ..Self::default()
        }
    }

    /// An object with the given properties and required names.
    ///
    /// Duplicate names in `required` are dropped, keeping the first position.
    pub fn object(properties: BTreeMap<String, Schema>, required: Vec<String>) -> Self {
        let mut deduped: Vec<String> = Vec::with_capacity(required.len());
        for name in required {
            if !deduped.contains(&name) {
                deduped.push(name);
            }
        }

        Self {
            kind: Some(SchemaKind::Object),
            properties,
            required: deduped,
            ..Self::default()
        }
    }

    /// An object describing a map: one `key` property whose type is `value`.
    pub fn map(key: impl Into<String>, value: Option<SchemaKind>) -> Self {
        let mut properties = BTreeMap::new();
        properties.insert(key.into(), Self::leaf(value));

        Self {
            wildcard: true,
            ..Self::object(properties, Vec::new())
        }
    }

    pub fn kind(&self) -> Option<SchemaKind> {
        self.kind
    }

    /// `true` if this object was mapped from a map type, i.e. its single
    /// property stands for "any key".
    pub fn is_map(&self) -> bool {
        self.wildcard
    }

    pub fn items(&self) -> Option<&Items> {
        self.items.as_ref()
    }

    pub fn properties(&self) -> &BTreeMap<String, Schema> {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<&Schema> {
        self.properties.get(name)
    }

    /// Names of required properties, in field declaration order.
    pub fn required(&self) -> &[String] {
        &self.required
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|required| required == name)
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn marshal(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    /// The schema as a [`serde_json::Value`].
    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl Display for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let json = serde_json::to_string_pretty(self).map_err(|_| std::fmt::Error)?;
        f.write_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_attributes_are_not_serialized() {
        assert_eq!(serde_json::to_value(Schema::leaf(None)).unwrap(), json!({}));
        assert_eq!(
            serde_json::to_value(Schema::leaf(Some(SchemaKind::Number))).unwrap(),
            json!({ "type": "number" })
        );
        assert_eq!(
            serde_json::to_value(Schema::array(None)).unwrap(),
            json!({ "type": "array", "items": {} })
        );
        assert_eq!(
            serde_json::to_value(Schema::object(BTreeMap::new(), vec![])).unwrap(),
            json!({ "type": "object" })
        );
    }

    #[test]
    fn object_deduplicates_required() {
        let mut properties = BTreeMap::new();
        properties.insert("a".to_owned(), Schema::leaf(Some(SchemaKind::String)));
        let schema = Schema::object(properties, vec!["a".into(), "b".into(), "a".into()]);

        assert_eq!(schema.required(), ["a", "b"]);
        assert!(schema.is_required("b"));
        assert!(!schema.is_required("c"));
    }

    #[test]
    fn map_origin_is_kept_but_not_serialized() {
        let map = Schema::map(".*", Some(SchemaKind::String));
        let mut properties = BTreeMap::new();
        properties.insert(".*".to_owned(), Schema::leaf(Some(SchemaKind::String)));
        let record = Schema::object(properties, vec![]);

        assert!(map.is_map());
        assert!(!record.is_map());
        assert_eq!(map.to_value().unwrap(), record.to_value().unwrap());
    }

    #[test]
    fn marshal_uses_two_space_indent() {
        let schema = Schema::array(Some(SchemaKind::Bool));
        let bytes = schema.marshal().unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert_eq!(
            text,
            "{\n  \"type\": \"array\",\n  \"items\": {\n    \"type\": \"bool\"\n  }\n}"
        );
        assert_eq!(text, schema.to_string());
    }

    #[test]
    fn deserializes_what_it_serializes() {
        let text = r#"{
            "type": "object",
            "properties": { "A": { "type": "string" }, "tags": { "type": "array", "items": { "type": "string" } } },
            "required": ["A"]
        }"#;
        let schema: Schema = serde_json::from_str(text).unwrap();

        assert_eq!(schema.kind(), Some(SchemaKind::Object));
        assert_eq!(
            schema.property("tags").and_then(Schema::items).and_then(Items::kind),
            Some(SchemaKind::String)
        );
        assert_eq!(schema.required(), ["A"]);
    }
}
