//! Parser for per-field serialization tags.
//!
//! A tag has the shape `name,opt1,opt2,...`.  Everything before the first
//! comma is the serialized field name (empty means "keep the field's own
//! name"); the remainder is a comma-separated list of option tokens.
//!
//! ```rust
//! use typeschema_core::tag::Tag;
//!
//! let tag = Tag::parse("id,omitempty");
//! assert_eq!(tag.name(), Some("id"));
//! assert!(!tag.is_required());
//!
//! // No tag at all: default name, required.
//! let tag = Tag::parse("");
//! assert_eq!(tag.name(), None);
//! assert!(tag.is_required());
//! ```

/// Option token that marks a field as optional.
pub const OMIT_EMPTY: &str = "omitempty";

/// A parsed field tag borrowing from the raw tag string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tag<'a> {
    name: Option<&'a str>,
    options: TagOptions<'a>,
}

impl<'a> Tag<'a> {
    /// Split `raw` at the first comma.  Never fails.
    pub fn parse(raw: &'a str) -> Self {
        let (name, options) = match raw.split_once(',') {
            Some((name, options)) => (name, options),
            None => (raw, ""),
        };

        Self {
            name: (!name.is_empty()).then_some(name),
            options: TagOptions(options),
        }
    }

    /// Explicit serialized name, if the tag carries one.
    pub fn name(&self) -> Option<&'a str> {
        self.name
    }

    /// The serialized name, falling back to `field` when the tag has none.
    pub fn name_or(&self, field: &'a str) -> &'a str {
        self.name.unwrap_or(field)
    }

    pub fn options(&self) -> TagOptions<'a> {
        self.options
    }

    /// Fields are required unless their tag carries [`OMIT_EMPTY`].
    ///
    /// This is independent of whether the field type is an `Option<T>`.
    pub fn is_required(&self) -> bool {
        !self.options.contains(OMIT_EMPTY)
    }
}

/// Comma-separated option tokens following the tag name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TagOptions<'a>(&'a str);

impl<'a> TagOptions<'a> {
    /// Exact membership test against the option tokens.
    pub fn contains(&self, option: &str) -> bool {
        !self.0.is_empty() && self.iter().any(|token| token == option)
    }

    pub fn iter(self) -> impl Iterator<Item = &'a str> {
        let raw = self.0;
        raw.split(',').filter(move |_| !raw.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_only() {
        let tag = Tag::parse("b");
        assert_eq!(tag.name(), Some("b"));
        assert!(tag.options().is_empty());
        assert!(tag.is_required());
    }

    #[test]
    fn options_without_name_keep_field_name() {
        let tag = Tag::parse(",omitempty");
        assert_eq!(tag.name(), None);
        assert_eq!(tag.name_or("Field"), "Field");
        assert!(!tag.is_required());
    }

    #[test]
    fn only_first_comma_splits_the_name() {
        let tag = Tag::parse("b,string,omitempty");
        assert_eq!(tag.name(), Some("b"));
        assert_eq!(tag.options().as_str(), "string,omitempty");
        assert_eq!(tag.options().iter().collect::<Vec<_>>(), ["string", "omitempty"]);
        assert!(tag.options().contains("string"));
        assert!(!tag.is_required());
    }

    #[test]
    fn membership_is_exact() {
        let tag = Tag::parse("b,omitemptyish,notomitempty");
        assert!(!tag.options().contains(OMIT_EMPTY));
        assert!(tag.is_required());
    }

    #[test]
    fn empty_tokens_are_tolerated() {
        let tag = Tag::parse("b,,omitempty,");
        assert!(tag.options().contains(OMIT_EMPTY));
        assert!(!tag.options().contains("x"));
    }

    #[test]
    fn missing_tag_is_default_and_required() {
        let tag = Tag::parse("");
        assert_eq!(tag, Tag::default());
        assert!(tag.is_required());
        assert_eq!(tag.options().iter().count(), 0);
    }
}
