//! Type introspection consumed by the [`TypeMapper`](crate::mapper::TypeMapper).
//!
//! Rust has no runtime reflection, so every type that should end up in a
//! schema describes itself through the [`Reflect`] trait:
//!
//! * [`Reflect::KIND`] – the structural [`Kind`], available as a constant so
//!   container types can classify their elements without recursion.
//! * [`Reflect::shape`] – the full [`Shape`].  Leaf types use the default
//!   implementation; containers and records override it.
//!
//! Primitives, strings, the standard collections and the usual smart pointers
//! are covered out of the box.  Records are wired up with the
//! [`impl_reflect!`](crate::impl_reflect) macro:
//!
//! ```rust
//! use typeschema_core::{impl_reflect, reflect::{Reflect, Shape}};
//!
//! struct Config {
//!     host: String,
//!     port: u16,
//! }
//!
//! impl_reflect!(Config {
//!     host,
//!     port: "port,omitempty",
//! });
//!
//! let Shape::Record(record) = Config::shape() else { unreachable!() };
//! assert_eq!(record.fields().len(), 2);
//! ```
//!
//! Field shapes are stored as plain function pointers and only evaluated by
//! the mapper.  Building the shape of a self-referential record therefore
//! terminates; the mapper decides how deep it is willing to follow it.

use std::{
    borrow::Cow,
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque},
    rc::Rc,
    sync::Arc,
};

use crate::kind::Kind;

/// Describes the structural shape of `Self`.
pub trait Reflect {
    /// Structural kind of the type.
    const KIND: Kind;

    /// Full shape of the type.  Defaults to a leaf of [`Self::KIND`].
    fn shape() -> Shape {
        Shape::Leaf(Self::KIND)
    }
}

/// Shape of a type, one variant per mapper branch.
#[derive(Debug, Clone)]
pub enum Shape {
    /// Primitive or unrepresentable type.
    Leaf(Kind),
    /// List-like collection.  Only the element kind is known, not its shape.
    Sequence { element: Kind },
    /// Associative container.  Only the value kind is kept; keys are dropped.
    Map { value: Kind },
    /// Struct with named fields.
    Record(RecordShape),
}

impl Shape {
    pub fn kind(&self) -> Kind {
        match self {
            Shape::Leaf(kind) => *kind,
            Shape::Sequence { .. } => Kind::Sequence,
            Shape::Map { .. } => Kind::Map,
            Shape::Record(_) => Kind::Record,
        }
    }
}

/// Ordered field list of a record.
#[derive(Debug, Clone)]
pub struct RecordShape {
    name: &'static str,
    fields: Vec<FieldShape>,
}

impl RecordShape {
    /// Start an empty record description.  `name` is the Rust type name and is
    /// only used for diagnostics.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: Vec::new(),
        }
    }

    /// Append a field.  Declaration order is preserved.
    pub fn with_field(mut self, field: FieldShape) -> Self {
        self.fields.push(field);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &[FieldShape] {
        &self.fields
    }
}

/// A single record field: its Rust name, its raw tag and a lazy shape.
#[derive(Debug, Clone)]
pub struct FieldShape {
    name: &'static str,
    tag: &'static str,
    shape: fn() -> Shape,
}

impl FieldShape {
    /// Describe a field of type `T`.  Pass `""` when the field has no tag.
    pub fn new<T>(name: &'static str, tag: &'static str) -> Self
    where
        T: Reflect + ?Sized,
    {
        Self {
            name,
            tag,
            shape: T::shape,
        }
    }

    /// Like [`Self::new`], but infers `T` from an accessor closure.
    ///
    /// This is what [`impl_reflect!`](crate::impl_reflect) expands to; it
    /// saves restating every field type next to the struct definition.
    pub fn of<S, T, F>(name: &'static str, tag: &'static str, _accessor: F) -> Self
    where
        T: Reflect + ?Sized,
        F: for<'a> Fn(&'a S) -> &'a T,
    {
        Self::new::<T>(name, tag)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Evaluate the field's shape.
    pub fn shape(&self) -> Shape {
        (self.shape)()
    }
}

/// Implement [`Reflect`] for an existing struct with named fields.
///
/// List the fields in declaration order.  A field may be followed by a tag
/// literal in the `name,opt1,opt2` format:
///
/// ```rust
/// use typeschema_core::{impl_reflect, mapper::schema_for};
///
/// struct Point {
///     x: f64,
///     y: f64,
///     label: Option<String>,
/// }
///
/// impl_reflect!(Point {
///     x,
///     y,
///     label: "label,omitempty",
/// });
///
/// let schema = schema_for::<Point>().unwrap();
/// assert_eq!(schema.required(), ["x", "y"]);
/// ```
#[macro_export]
macro_rules! impl_reflect {
    ($ty:ident { $( $field:ident $( : $tag:literal )? ),* $(,)? }) => {
        impl $crate::reflect::Reflect for $ty {
            const KIND: $crate::kind::Kind = $crate::kind::Kind::Record;

            fn shape() -> $crate::reflect::Shape {
                $crate::reflect::Shape::Record(
                    $crate::reflect::RecordShape::new(stringify!($ty))
                    $(
                        .with_field($crate::reflect::FieldShape::of(
                            stringify!($field),
                            $crate::impl_reflect!(@tag $( $tag )?),
                            |value: &$ty| &value.$field,
                        ))
                    )*
                )
            }
        }
    };
    (@tag $tag:literal) => {
        $tag
    };
    (@tag) => {
        ""
    };
}

macro_rules! impl_leaf {
    ($kind:ident => $($ty:ty),+ $(,)?) => {
        $(
            impl Reflect for $ty {
                const KIND: Kind = Kind::$kind;
            }
        )+
    };
}

impl_leaf!(Bool => bool);
impl_leaf!(I8 => i8);
impl_leaf!(I16 => i16);
impl_leaf!(I32 => i32);
impl_leaf!(I64 => i64);
impl_leaf!(I128 => i128);
impl_leaf!(Isize => isize);
impl_leaf!(U8 => u8);
impl_leaf!(U16 => u16);
impl_leaf!(U32 => u32);
impl_leaf!(U64 => u64);
impl_leaf!(U128 => u128);
impl_leaf!(Usize => usize);
impl_leaf!(F32 => f32);
impl_leaf!(F64 => f64);
impl_leaf!(Char => char);
impl_leaf!(Str => str, String);
impl_leaf!(Opaque => (), serde_json::Value);

impl<T: ?Sized> Reflect for *const T {
    const KIND: Kind = Kind::Opaque;
}

impl<T: ?Sized> Reflect for *mut T {
    const KIND: Kind = Kind::Opaque;
}

macro_rules! impl_fn_pointer {
    ($($arg:ident),*) => {
        impl<R, $($arg),*> Reflect for fn($($arg),*) -> R {
            const KIND: Kind = Kind::Opaque;
        }
    };
}

impl_fn_pointer!();
impl_fn_pointer!(A);
impl_fn_pointer!(A, B);
impl_fn_pointer!(A, B, C);

macro_rules! impl_sequence {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl<T: Reflect> Reflect for $ty {
                const KIND: Kind = Kind::Sequence;

                fn shape() -> Shape {
                    Shape::Sequence { element: T::KIND }
                }
            }
        )+
    };
}

impl_sequence!(Vec<T>, VecDeque<T>, LinkedList<T>, [T], HashSet<T>, BTreeSet<T>);

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    const KIND: Kind = Kind::Sequence;

    fn shape() -> Shape {
        Shape::Sequence { element: T::KIND }
    }
}

impl<K, V: Reflect, S> Reflect for HashMap<K, V, S> {
    const KIND: Kind = Kind::Map;

    fn shape() -> Shape {
        Shape::Map { value: V::KIND }
    }
}

impl<K, V: Reflect> Reflect for BTreeMap<K, V> {
    const KIND: Kind = Kind::Map;

    fn shape() -> Shape {
        Shape::Map { value: V::KIND }
    }
}

// Wrappers that serialize as their contents.  `Option` does not make a field
// optional; only the `omitempty` tag option does.
macro_rules! impl_transparent {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl<T: Reflect + ?Sized> Reflect for $ty {
                const KIND: Kind = T::KIND;

                fn shape() -> Shape {
                    T::shape()
                }
            }
        )+
    };
}

impl_transparent!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

impl<T: Reflect> Reflect for Option<T> {
    const KIND: Kind = T::KIND;

    fn shape() -> Shape {
        T::shape()
    }
}

impl<T> Reflect for Cow<'_, T>
where
    T: Reflect + ToOwned + ?Sized,
{
    const KIND: Kind = T::KIND;

    fn shape() -> Shape {
        T::shape()
    }
}

#[cfg(feature = "chrono")]
mod chrono_impls {
    use super::{Kind, Reflect};

    impl<Tz: chrono::TimeZone> Reflect for chrono::DateTime<Tz> {
        const KIND: Kind = Kind::Str;
    }

    impl_leaf!(Str => chrono::NaiveDate, chrono::NaiveDateTime, chrono::NaiveTime);

    #[cfg(test)]
    mod tests {
        use serde_json::json;

        use crate::{impl_reflect, mapper::schema_for};

        #[allow(dead_code)]
        struct Booking {
            day: chrono::NaiveDate,
            starts: chrono::NaiveTime,
            created: chrono::NaiveDateTime,
        }

        impl_reflect!(Booking {
            day,
            starts,
            created: "created,omitempty",
        });

        #[test]
        fn date_times_are_strings() {
            let string = json!({ "type": "string" });

            for schema in [
                schema_for::<chrono::DateTime<chrono::Utc>>(),
                schema_for::<chrono::DateTime<chrono::FixedOffset>>(),
                schema_for::<chrono::NaiveDate>(),
            ] {
                assert_eq!(schema.unwrap().to_value().unwrap(), string);
            }
        }

        #[test]
        fn date_fields_in_records_are_strings() {
            let schema = schema_for::<Booking>().unwrap();

            assert_eq!(
                schema.to_value().unwrap(),
                json!({
                    "type": "object",
                    "properties": {
                        "day": { "type": "string" },
                        "starts": { "type": "string" },
                        "created": { "type": "string" }
                    },
                    "required": ["day", "starts"]
                })
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element_of<T: Reflect + ?Sized>() -> Option<Kind> {
        match T::shape() {
            Shape::Sequence { element } => Some(element),
            _ => None,
        }
    }

    #[test]
    fn leaves_report_their_kind() {
        assert!(matches!(<bool as Reflect>::shape(), Shape::Leaf(Kind::Bool)));
        assert!(matches!(<str as Reflect>::shape(), Shape::Leaf(Kind::Str)));
        assert!(matches!(<() as Reflect>::shape(), Shape::Leaf(Kind::Opaque)));
        assert_eq!(<*const u8 as Reflect>::KIND, Kind::Opaque);
        assert_eq!(<fn(u8) -> bool as Reflect>::KIND, Kind::Opaque);
    }

    #[test]
    fn sequences_keep_element_kind_only() {
        assert_eq!(element_of::<Vec<u8>>(), Some(Kind::U8));
        assert_eq!(element_of::<[i32]>(), Some(Kind::I32));
        assert_eq!(element_of::<[f32; 3]>(), Some(Kind::F32));
        assert_eq!(element_of::<BTreeSet<String>>(), Some(Kind::Str));
        assert_eq!(element_of::<Vec<Vec<u8>>>(), Some(Kind::Sequence));
    }

    #[test]
    fn maps_keep_value_kind_only() {
        assert!(matches!(
            <HashMap<String, i64> as Reflect>::shape(),
            Shape::Map { value: Kind::I64 }
        ));
        assert!(matches!(
            <BTreeMap<u32, Vec<String>> as Reflect>::shape(),
            Shape::Map { value: Kind::Sequence }
        ));
    }

    #[test]
    fn wrappers_are_transparent() {
        assert_eq!(<Option<u8> as Reflect>::KIND, Kind::U8);
        assert_eq!(<Box<str> as Reflect>::KIND, Kind::Str);
        assert_eq!(<Arc<Vec<u8>> as Reflect>::KIND, Kind::Sequence);
        assert_eq!(<Cow<'static, str> as Reflect>::KIND, Kind::Str);
        assert_eq!(element_of::<&Vec<u8>>(), Some(Kind::U8));
    }

    struct Sample {
        id: u64,
        name: Option<String>,
    }

    impl_reflect!(Sample {
        id,
        name: "name,omitempty",
    });

    #[test]
    fn macro_preserves_declaration_order_and_tags() {
        let Shape::Record(record) = Sample::shape() else {
            panic!("expected a record shape");
        };

        assert_eq!(record.name(), "Sample");
        let fields = record.fields();
        assert_eq!(fields.len(), 2);
        assert_eq!((fields[0].name(), fields[0].tag()), ("id", ""));
        assert_eq!((fields[1].name(), fields[1].tag()), ("name", "name,omitempty"));
        assert_eq!(fields[0].shape().kind(), Kind::U64);
        assert_eq!(fields[1].shape().kind(), Kind::Str);

        // Fields are only read through the accessor types, never at runtime.
        let sample = Sample { id: 1, name: None };
        assert_eq!((sample.id, sample.name), (1, None));
    }
}
