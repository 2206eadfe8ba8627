//! Recursive mapping from a type's [`Shape`] to a [`Schema`].
//!
//! ```rust
//! use typeschema_core::{impl_reflect, mapper::TypeMapper};
//!
//! struct Config {
//!     #[allow(dead_code)]
//!     a: String,
//!     #[allow(dead_code)]
//!     b: i64,
//! }
//!
//! impl_reflect!(Config { a, b: "b,omitempty" });
//!
//! let config = Config { a: "x".into(), b: 1 };
//! let schema = TypeMapper::default().load(&config).unwrap();
//!
//! assert_eq!(
//!     schema.to_value().unwrap(),
//!     serde_json::json!({
//!         "type": "object",
//!         "properties": {
//!             "a": { "type": "string" },
//!             "b": { "type": "integer" }
//!         },
//!         "required": ["a"]
//!     })
//! );
//! ```
//!
//! Only record fields are followed recursively.  Sequence elements and map
//! values are classified by their kind alone, so a `Vec<Record>` renders as
//! `{"type": "array", "items": {"type": "object"}}` without the record's
//! properties.

use std::{collections::BTreeMap, env};

use crate::{
    error::{Result, SchemaError},
    kind::{Kind, SchemaKind},
    reflect::{RecordShape, Reflect, Shape},
    schema::Schema,
    tag::Tag,
};

/// Default limit for nested record fields.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Property key standing for "any key" in schemas generated from maps.
pub const DEFAULT_WILDCARD_KEY: &str = ".*";

/// Environment variable read by [`TypeMapperBuilder::new_from_env`].
pub const MAX_DEPTH_ENV: &str = "TYPESCHEMA_MAX_DEPTH";

/// Map the type `T` with a default [`TypeMapper`].
pub fn schema_for<T>() -> Result<Schema>
where
    T: Reflect + ?Sized,
{
    TypeMapper::default().map::<T>()
}

/// Settings of a [`TypeMapper`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapperConfig {
    /// Maximum number of nested record fields followed before giving up.
    pub max_depth: usize,
    /// Property key used for the single property of a map schema.
    pub wildcard_key: String,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            wildcard_key: DEFAULT_WILDCARD_KEY.to_owned(),
        }
    }
}

/// Turns [`Reflect`] types into [`Schema`] trees.
///
/// The mapper is stateless apart from its configuration, so one instance can
/// be shared freely and every call is independent.
#[derive(Debug, Clone, Default)]
pub struct TypeMapper {
    config: MapperConfig,
}

impl TypeMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> TypeMapperBuilder {
        TypeMapperBuilder::new()
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Map the type of `value`.  The value itself is never read.
    ///
    /// # Errors
    ///
    /// * [`SchemaError::DepthLimitExceeded`] – record fields nest deeper than
    ///   [`MapperConfig::max_depth`], which usually means the type refers to
    ///   itself through a `Box`, `Rc`, `Arc` or `Option`.
    pub fn load<T>(&self, _value: &T) -> Result<Schema>
    where
        T: Reflect + ?Sized,
    {
        self.map::<T>()
    }

    /// Map the type `T`.  See [`Self::load`].
    pub fn map<T>(&self) -> Result<Schema>
    where
        T: Reflect + ?Sized,
    {
        let mut path = Vec::new();
        self.map_shape(T::shape(), &mut path)
    }

    fn map_shape(&self, shape: Shape, path: &mut Vec<&'static str>) -> Result<Schema> {
        #[cfg(feature = "tracing")]
        tracing::trace!(kind = ?shape.kind(), path = %path.join("."), "mapping shape");

        match shape {
            Shape::Leaf(kind) => Ok(Schema::leaf(kind.schema_kind())),
            Shape::Sequence { element } => Ok(Self::map_sequence(element)),
            Shape::Map { value } => Ok(self.map_map(value)),
            Shape::Record(record) => self.map_record(record, path),
        }
    }

    fn map_sequence(element: Kind) -> Schema {
        // Byte blobs are encoded as strings.
        if element.is_byte() {
            return Schema::leaf(Some(SchemaKind::String));
        }

        Schema::array(element.schema_kind())
    }

    fn map_map(&self, value: Kind) -> Schema {
        Schema::map(self.config.wildcard_key.as_str(), value.schema_kind())
    }

    fn map_record(&self, record: RecordShape, path: &mut Vec<&'static str>) -> Result<Schema> {
        if path.len() > self.config.max_depth {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                record = record.name(),
                limit = self.config.max_depth,
                "record nesting exceeds depth limit"
            );

            return Err(SchemaError::DepthLimitExceeded {
                limit: self.config.max_depth,
                path: path.join("."),
            });
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            record = record.name(),
            fields = record.fields().len(),
            "mapping record"
        );

        let mut properties = BTreeMap::new();
        let mut required = Vec::new();

        for field in record.fields() {
            let tag = Tag::parse(field.tag());
            let name = tag.name_or(field.name());

            path.push(name);
            let child = self.map_shape(field.shape(), path);
            path.pop();

            properties.insert(name.to_owned(), child?);
            if tag.is_required() {
                required.push(name.to_owned());
            }
        }

        Ok(Schema::object(properties, required))
    }
}

/// Builder for [`TypeMapper`].
///
/// ```rust
/// use typeschema_core::mapper::TypeMapperBuilder;
///
/// let mapper = TypeMapperBuilder::new()
///     .with_max_depth(8)
///     .with_wildcard_key("^.*$")
///     .build()
///     .unwrap();
///
/// assert_eq!(mapper.config().max_depth, 8);
/// ```
#[derive(Debug, Default)]
pub struct TypeMapperBuilder {
    max_depth: Option<usize>,
    max_depth_env: Option<String>,
    wildcard_key: Option<String>,
}

impl TypeMapperBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the `TYPESCHEMA_MAX_DEPTH` environment variable, if set.
    ///
    /// Never fails. A malformed value only surfaces during [`Self::build`].
    pub fn new_from_env() -> Self {
        Self {
            max_depth_env: env::var(MAX_DEPTH_ENV).ok(),
            ..Self::default()
        }
    }

    /// Explicit depth limit.  Takes precedence over the environment.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn with_wildcard_key(mut self, key: impl Into<String>) -> Self {
        self.wildcard_key = Some(key.into());
        self
    }

    /// Finalise the builder.
    ///
    /// # Errors
    ///
    /// * [`SchemaError::Invalid`] – the depth limit is zero or not a number,
    ///   or the wildcard key is empty.
    pub fn build(self) -> Result<TypeMapper> {
        let max_depth = match (self.max_depth, self.max_depth_env) {
            (Some(max_depth), _) => max_depth,
            (None, Some(raw)) => raw.trim().parse().map_err(|_| {
                SchemaError::Invalid(format!("`{MAX_DEPTH_ENV}` is not a number: `{raw}`"))
            })?,
            (None, None) => DEFAULT_MAX_DEPTH,
        };

        if max_depth == 0 {
            return Err(SchemaError::Invalid("max depth must be positive".into()));
        }

        let wildcard_key = self
            .wildcard_key
            .unwrap_or_else(|| DEFAULT_WILDCARD_KEY.to_owned());
        if wildcard_key.is_empty() {
            return Err(SchemaError::Invalid("wildcard key must not be empty".into()));
        }

        Ok(TypeMapper {
            config: MapperConfig {
                max_depth,
                wildcard_key,
            },
        })
    }
}
