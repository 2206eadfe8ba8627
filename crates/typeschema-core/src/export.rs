//! Conversion of a [`Schema`] into a standard draft-07 document built with
//! [`schemars`].
//!
//! The native output keeps a few quirks of the mapping (`"bool"` as a type
//! name, map values under a `.*` property).  Tools that expect a strict
//! draft-07 document can use [`Schema::to_root_schema`] instead, which
//!
//! * renames `bool` to `boolean`,
//! * moves the wildcard property of a map schema to `patternProperties`,
//! * stamps the `$schema` meta-schema URI.
//!
//! ```rust
//! use std::collections::HashMap;
//! use typeschema_core::schema::Schema;
//!
//! let schema = Schema::load(&HashMap::<String, bool>::new()).unwrap();
//! let root = schema.to_root_schema();
//!
//! assert_eq!(
//!     serde_json::to_value(&root).unwrap(),
//!     serde_json::json!({
//!         "$schema": "http://json-schema.org/draft-07/schema#",
//!         "type": "object",
//!         "patternProperties": { ".*": { "type": "boolean" } }
//!     })
//! );
//! ```

use schemars::schema::{
    ArrayValidation, InstanceType, ObjectValidation, RootSchema, Schema as SchemaNode,
    SchemaObject,
};

use crate::{kind::SchemaKind, schema::Schema};

/// Meta-schema URI stamped on exported documents.
pub const DRAFT_07: &str = "http://json-schema.org/draft-07/schema#";

impl From<SchemaKind> for InstanceType {
    fn from(kind: SchemaKind) -> Self {
        match kind {
            SchemaKind::Bool => InstanceType::Boolean,
            SchemaKind::Integer => InstanceType::Integer,
            SchemaKind::Number => InstanceType::Number,
            SchemaKind::String => InstanceType::String,
            SchemaKind::Array => InstanceType::Array,
            SchemaKind::Object => InstanceType::Object,
        }
    }
}

impl Schema {
    /// Export as a draft-07 [`RootSchema`].
    ///
    /// Only objects mapped from a map type become `patternProperties`; a
    /// record whose sole field happens to be named like the wildcard stays a
    /// plain property.  Schemas read back through `Deserialize` carry no map
    /// origin and always export their properties as `properties`.
    pub fn to_root_schema(&self) -> RootSchema {
        RootSchema {
            meta_schema: Some(DRAFT_07.to_owned()),
            schema: to_schema_object(self),
            definitions: schemars::Map::new(),
        }
    }
}

fn kind_object(kind: Option<SchemaKind>) -> SchemaObject {
    SchemaObject {
        instance_type: kind.map(|kind| InstanceType::from(kind).into()),
        ..SchemaObject::default()
    }
}

fn to_schema_object(schema: &Schema) -> SchemaObject {
    let mut object = kind_object(schema.kind());

    if let Some(items) = schema.items() {
        object.array = Some(Box::new(ArrayValidation {
            items: Some(SchemaNode::Object(kind_object(items.kind())).into()),
            ..ArrayValidation::default()
        }));
    }

    if schema.properties().is_empty() && schema.required().is_empty() {
        return object;
    }

    let mut validation = ObjectValidation::default();
    for (name, child) in schema.properties() {
        let child = SchemaNode::Object(to_schema_object(child));
        if schema.is_map() {
            validation.pattern_properties.insert(name.clone(), child);
        } else {
            validation.properties.insert(name.clone(), child);
        }
    }
    // Needs schemars' `preserve_order` to keep declaration order.
    validation.required.extend(schema.required().iter().cloned());

    object.object = Some(Box::new(validation));
    object
}
