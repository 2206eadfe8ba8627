//! Unified error type exposed by **`typeschema-core`**.
//!
//! Mapping a type onto a schema is almost infallible: unknown kinds degrade to
//! an empty schema type and malformed tags fall back to the field name.  The
//! variants below cover the few places where something can actually go wrong.

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, SchemaError>;

#[derive(Debug, Error)]
pub enum SchemaError {
    /// Record nesting went deeper than the configured limit.  In practice this
    /// means a self-referential record (e.g. `next: Option<Box<Self>>`).
    ///
    /// `path` is the dotted property path at which the limit was hit.
    #[error("record nesting exceeds the depth limit of {limit} at `{path}`")]
    DepthLimitExceeded { limit: usize, path: String },

    /// Failure while serialising a schema into JSON.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid: {0}")]
    Invalid(String),
}
