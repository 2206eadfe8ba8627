//! # `typeschema` – The umbrella crate
//!
//! Derive a JSON Schema document from the shape of a Rust type, without
//! writing the schema by hand.  Everything lives in
//! [`typeschema-core`](typeschema_core); this crate re-exports it so a single
//! dependency line is enough:
//!
//! ```toml
//! [dependencies]
//! typeschema = { version = "0.1", features = ["chrono"] }
//! ```
//!
//! ## Design philosophy
//!
//! * **No procedural macros** – Types describe themselves through the ordinary
//!   [`Reflect`] trait.  Structs are wired up with the declarative
//!   [`impl_reflect!`] macro, which is just sugar over [`RecordShape`].
//! * **Tags, not types, decide optionality** – A field is required unless its
//!   tag carries `omitempty`.  `Option<T>` is mapped like `T`.
//! * **Shallow collections** – Record fields are described recursively;
//!   sequence elements and map values are described by their kind only.
//!
//! ## Quick example
//!
//! ```rust
//! use typeschema::{impl_reflect, Schema};
//!
//! struct Record {
//!     a: String,
//!     b: i64,
//! }
//!
//! impl_reflect!(Record {
//!     a: "A",
//!     b: "b,omitempty",
//! });
//!
//! let record = Record { a: String::new(), b: 0 };
//! let schema = Schema::load(&record)?;
//!
//! assert_eq!(
//!     schema.to_value()?,
//!     serde_json::json!({
//!         "type": "object",
//!         "properties": { "A": { "type": "string" }, "b": { "type": "integer" } },
//!         "required": ["A"]
//!     })
//! );
//! # let _ = (record.a, record.b);
//! # Ok::<(), typeschema::SchemaError>(())
//! ```
//!
//! ## Cargo features
//!
//! * `chrono` – `Reflect` for `chrono` date and time types (as strings).
//! * `tracing` – emit `tracing` events while mapping.
#![doc(html_root_url = "https://docs.rs/typeschema/latest")]

pub use typeschema_core::*;
