//! # `typeschema-core`
//!
//! Derives a JSON Schema document from the *shape* of a Rust type.
//!
//! | Module       | What it provides                                                  |
//! |--------------|-------------------------------------------------------------------|
//! | [`kind`]     | Structural kinds and the kind-to-schema-type table                |
//! | [`reflect`]  | The [`Reflect`] trait, shapes and the [`impl_reflect!`] macro     |
//! | [`tag`]      | Parser for `name,opt1,opt2` field tags                            |
//! | [`mapper`]   | [`TypeMapper`], the recursive type-to-schema mapping              |
//! | [`schema`]   | The generated [`Schema`] tree and its JSON encoding               |
//! | [`export`]   | Draft-07 export through [`schemars`]                              |
//! | [`error`]    | [`SchemaError`] and the crate-wide `Result` alias                 |
//!
//! ```rust
//! use typeschema_core::{impl_reflect, schema_for};
//!
//! struct Doc {
//!     title: String,
//!     pages: Vec<u32>,
//! }
//!
//! impl_reflect!(Doc { title, pages: "pages,omitempty" });
//!
//! let schema = schema_for::<Doc>().unwrap();
//! assert_eq!(schema.required(), ["title"]);
//! ```

pub mod error;
pub mod export;
pub mod kind;
pub mod mapper;
pub mod reflect;
pub mod schema;
pub mod tag;

pub use error::{Result, SchemaError};
pub use kind::{Kind, SchemaKind};
pub use mapper::{MapperConfig, TypeMapper, TypeMapperBuilder, schema_for};
pub use reflect::{FieldShape, RecordShape, Reflect, Shape};
pub use schema::{Items, Schema};
pub use tag::{Tag, TagOptions};
