//! Structural kinds and the table that maps them onto JSON Schema types.
//!
//! [`Kind`] is the coarse, closed classification of a Rust type as seen by the
//! mapper.  It deliberately keeps every integer width apart: the sequence
//! branch needs to tell a byte blob (`Vec<u8>`) from any other list of
//! integers.  [`SchemaKind`] is what ends up in the `"type"` key of the
//! generated document.
//!
//! ```rust
//! use typeschema_core::kind::{Kind, SchemaKind};
//!
//! assert_eq!(Kind::U16.schema_kind(), Some(SchemaKind::Integer));
//! assert_eq!(Kind::Opaque.schema_kind(), None);
//! ```

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Structural kind of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    F32,
    F64,
    Char,
    Str,
    /// List-like collections: `Vec`, slices, arrays, sets, ...
    Sequence,
    /// Associative containers: `HashMap`, `BTreeMap`.
    Map,
    /// Structs with named fields.
    Record,
    /// Anything the table does not recognise (unit, tuples, function and raw
    /// pointers, dynamically typed values).
    Opaque,
}

impl Kind {
    /// Classify this kind through the schema type table.
    ///
    /// Returns `None` for kinds that have no JSON Schema counterpart.  The
    /// caller is expected to emit an empty type rather than fail.
    pub const fn schema_kind(self) -> Option<SchemaKind> {
        match self {
            Kind::Bool => Some(SchemaKind::Bool),
            Kind::I8
            | Kind::I16
            | Kind::I32
            | Kind::I64
            | Kind::I128
            | Kind::Isize
            | Kind::U8
            | Kind::U16
            | Kind::U32
            | Kind::U64
            | Kind::U128
            | Kind::Usize => Some(SchemaKind::Integer),
            Kind::F32 | Kind::F64 => Some(SchemaKind::Number),
            Kind::Char | Kind::Str => Some(SchemaKind::String),
            Kind::Sequence => Some(SchemaKind::Array),
            Kind::Map | Kind::Record => Some(SchemaKind::Object),
            Kind::Opaque => None,
        }
    }

    /// `true` for the element kind that turns a sequence into a byte blob.
    pub const fn is_byte(self) -> bool {
        matches!(self, Kind::U8)
    }
}

/// Value of the `"type"` key in a generated schema.
///
/// `Bool` renders as `"bool"` rather than the draft's `"boolean"`; the
/// [`crate::export`] module translates it when producing a standard document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaKind {
    Bool,
    Integer,
    Number,
    String,
    Array,
    Object,
}

impl SchemaKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            SchemaKind::Bool => "bool",
            SchemaKind::Integer => "integer",
            SchemaKind::Number => "number",
            SchemaKind::String => "string",
            SchemaKind::Array => "array",
            SchemaKind::Object => "object",
        }
    }
}

impl Display for SchemaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_integer_width_is_an_integer() {
        for kind in [
            Kind::I8,
            Kind::I16,
            Kind::I32,
            Kind::I64,
            Kind::I128,
            Kind::Isize,
            Kind::U8,
            Kind::U16,
            Kind::U32,
            Kind::U64,
            Kind::U128,
            Kind::Usize,
        ] {
            assert_eq!(kind.schema_kind(), Some(SchemaKind::Integer), "{kind:?}");
        }
    }

    #[test]
    fn composites_and_leaves() {
        assert_eq!(Kind::Bool.schema_kind(), Some(SchemaKind::Bool));
        assert_eq!(Kind::F32.schema_kind(), Some(SchemaKind::Number));
        assert_eq!(Kind::F64.schema_kind(), Some(SchemaKind::Number));
        assert_eq!(Kind::Str.schema_kind(), Some(SchemaKind::String));
        assert_eq!(Kind::Char.schema_kind(), Some(SchemaKind::String));
        assert_eq!(Kind::Sequence.schema_kind(), Some(SchemaKind::Array));
        assert_eq!(Kind::Map.schema_kind(), Some(SchemaKind::Object));
        assert_eq!(Kind::Record.schema_kind(), Some(SchemaKind::Object));
        assert_eq!(Kind::Opaque.schema_kind(), None);
    }

    #[test]
    fn only_u8_is_a_byte() {
        assert!(Kind::U8.is_byte());
        assert!(!Kind::I8.is_byte());
        assert!(!Kind::U16.is_byte());
    }

    #[test]
    fn serde_names_match_display() {
        for kind in [
            SchemaKind::Bool,
            SchemaKind::Integer,
            SchemaKind::Number,
            SchemaKind::String,
            SchemaKind::Array,
            SchemaKind::Object,
        ] {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, serde_json::Value::String(kind.to_string()));
        }
    }
}
