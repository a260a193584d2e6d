//! Declaration machinery shared by every Jellyfin model.
//!
//! Jellyfin's OpenAPI document describes each resource as a flat bag of
//! optional properties. Rather than hand-writing the struct, serde attributes,
//! builder, fluent setters and hashing for several thousand properties, every
//! model is declared once through [`jellyfin_dto!`](crate::jellyfin_dto) and
//! every string enum through [`string_enum!`](crate::string_enum).

use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::{Serialize, de::DeserializeOwned};
use uuid::Uuid;

/// String map as the server sends it; individual values may be `null`.
pub type StringMap = BTreeMap<String, Option<String>>;

/// Common surface of every generated model.
pub trait Schema:
    Serialize + DeserializeOwned + Default + Clone + PartialEq + std::fmt::Debug
{
    /// Schema name as it appears in the OpenAPI document.
    const NAME: &'static str;

    /// Single-use builder that produces this model.
    type Builder: SchemaBuilder<Output = Self>;

    /// Starts a builder over a default instance.
    fn builder() -> Self::Builder;

    /// Starts a builder over a copy of `self`.
    fn to_builder(&self) -> Self::Builder;
}

/// Accumulates field values and yields the model exactly once.
pub trait SchemaBuilder {
    type Output;

    /// Consumes the builder.
    fn build(self) -> Self::Output;
}

/// Structural hashing and equality for model fields.
///
/// Floats implement neither [`Hash`] nor [`Eq`], so models compare and hash
/// each field through this trait instead. Floats use their bit pattern with
/// `-0.0` folded onto `0.0` and every NaN folded onto one canonical NaN, so
/// `eq_field` is reflexive and agrees with `hash_field`.
pub trait FieldHash {
    fn hash_field<H: Hasher>(&self, state: &mut H);

    fn eq_field(&self, other: &Self) -> bool;
}

macro_rules! field_hash_via_hash {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FieldHash for $ty {
                fn hash_field<H: Hasher>(&self, state: &mut H) {
                    Hash::hash(self, state);
                }

                fn eq_field(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

field_hash_via_hash!(bool, i32, i64, u32, u64, String, Uuid, DateTime<Utc>);

fn f32_bits(value: f32) -> u32 {
    if value == 0.0 {
        0
    } else if value.is_nan() {
        f32::NAN.to_bits()
    } else {
        value.to_bits()
    }
}

fn f64_bits(value: f64) -> u64 {
    if value == 0.0 {
        0
    } else if value.is_nan() {
        f64::NAN.to_bits()
    } else {
        value.to_bits()
    }
}

impl FieldHash for f32 {
    fn hash_field<H: Hasher>(&self, state: &mut H) {
        state.write_u32(f32_bits(*self));
    }

    fn eq_field(&self, other: &Self) -> bool {
        f32_bits(*self) == f32_bits(*other)
    }
}

impl FieldHash for f64 {
    fn hash_field<H: Hasher>(&self, state: &mut H) {
        state.write_u64(f64_bits(*self));
    }

    fn eq_field(&self, other: &Self) -> bool {
        f64_bits(*self) == f64_bits(*other)
    }
}

impl<T: FieldHash> FieldHash for Option<T> {
    fn hash_field<H: Hasher>(&self, state: &mut H) {
        match self {
            Some(value) => {
                state.write_u8(1);
                value.hash_field(state);
            }
            None => state.write_u8(0),
        }
    }

    fn eq_field(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.eq_field(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: FieldHash> FieldHash for Vec<T> {
    fn hash_field<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for item in self {
            item.hash_field(state);
        }
    }

    fn eq_field(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.eq_field(b))
    }
}

impl<K: FieldHash, V: FieldHash> FieldHash for BTreeMap<K, V> {
    fn hash_field<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for (key, value) in self {
            key.hash_field(state);
            value.hash_field(state);
        }
    }

    fn eq_field(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|((ka, va), (kb, vb))| ka.eq_field(kb) && va.eq_field(vb))
    }
}

impl<T: FieldHash + ?Sized> FieldHash for Box<T> {
    fn hash_field<H: Hasher>(&self, state: &mut H) {
        (**self).hash_field(state);
    }

    fn eq_field(&self, other: &Self) -> bool {
        (**self).eq_field(&**other)
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! __dto_default {
    () => {
        ::std::option::Option::None
    };
    ($default:expr) => {
        ::std::option::Option::Some(::std::convert::Into::into($default))
    };
}

/// Declares a Jellyfin model.
///
/// Each entry is `"JsonName" rust_name: Type` with an optional `= default`.
/// Every field becomes `Option<Type>`; a declared default is what a freshly
/// constructed instance carries and what decoding keeps when the key is
/// absent. An explicit JSON `null` always decodes to `None`.
///
/// A trailing `tag "JsonName" rust_name: Type` declares a discriminant
/// field. It is not optional, always serializes and has no setters; a
/// missing key decodes to `Type::default()`, and the tag type itself is
/// expected to decode `null` the same way.
///
/// Alongside the struct the macro emits `<Name>Builder`, `with_<field>`
/// fluent setters, structural `PartialEq`/`Eq` and [`Hash`] through
/// [`FieldHash`], the [`Schema`] impl and the query-string helpers.
#[macro_export]
macro_rules! jellyfin_dto {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $json:literal $field:ident : $ty:ty $(= $default:expr)?
            ),* $(,)?
        }
        $(
            $(#[$tmeta:meta])*
            tag $tjson:literal $tfield:ident : $tty:ty
        )?
    ) => {
        $crate::__paste::paste! {
            $(#[$meta])*
            #[derive(Debug, Clone, ::serde::Serialize, ::serde::Deserialize)]
            #[serde(default)]
            pub struct $name {
                $(
                    $(#[$fmeta])*
                    #[serde(rename = $json, skip_serializing_if = "Option::is_none")]
                    pub $field: ::std::option::Option<$ty>,
                )*
                $(
                    $(#[$tmeta])*
                    #[serde(rename = $tjson)]
                    pub $tfield: $tty,
                )?
            }

            impl ::std::default::Default for $name {
                fn default() -> Self {
                    Self {
                        $( $field: $crate::__dto_default!($($default)?), )*
                        $( $tfield: <$tty as ::std::default::Default>::default(), )?
                    }
                }
            }

            impl $name {
                /// Instance with every documented default applied.
                pub fn new() -> Self {
                    Self::default()
                }

                pub fn builder() -> [<$name Builder>] {
                    [<$name Builder>]::new()
                }

                /// Builder seeded with a copy of this instance.
                pub fn to_builder(&self) -> [<$name Builder>] {
                    [<$name Builder>] { instance: self.clone() }
                }

                $(
                    pub fn [<with_ $field>](mut self, value: impl ::std::convert::Into<$ty>) -> Self {
                        self.$field = ::std::option::Option::Some(value.into());
                        self
                    }

                    pub fn [<clear_ $field>](mut self) -> Self {
                        self.$field = ::std::option::Option::None;
                        self
                    }
                )*

                /// Form-style query string (`Name=a&Id=...`).
                pub fn to_url_query_string(&self) -> $crate::error::Result<::std::string::String> {
                    $crate::query::to_query_string(self, ::std::option::Option::None)
                }

                /// Deep-object query string nested under `prefix`
                /// (`prefix[Name]=a&prefix[Id]=...`).
                pub fn to_url_query_string_with_prefix(
                    &self,
                    prefix: &str,
                ) -> $crate::error::Result<::std::string::String> {
                    $crate::query::to_query_string(self, ::std::option::Option::Some(prefix))
                }
            }

            impl ::std::cmp::PartialEq for $name {
                fn eq(&self, other: &Self) -> bool {
                    true
                        $( && $crate::schema::FieldHash::eq_field(&self.$field, &other.$field) )*
                        $( && $crate::schema::FieldHash::eq_field(&self.$tfield, &other.$tfield) )?
                }
            }

            impl ::std::cmp::Eq for $name {}

            impl ::std::hash::Hash for $name {
                fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                    $( $crate::schema::FieldHash::hash_field(&self.$field, state); )*
                    $( $crate::schema::FieldHash::hash_field(&self.$tfield, state); )?
                }
            }

            impl $crate::schema::FieldHash for $name {
                fn hash_field<H: ::std::hash::Hasher>(&self, state: &mut H) {
                    ::std::hash::Hash::hash(self, state);
                }

                fn eq_field(&self, other: &Self) -> bool {
                    self == other
                }
            }

            impl $crate::schema::Schema for $name {
                const NAME: &'static str = stringify!($name);
                type Builder = [<$name Builder>];

                fn builder() -> Self::Builder {
                    [<$name Builder>]::new()
                }

                fn to_builder(&self) -> Self::Builder {
                    $name::to_builder(self)
                }
            }

            /// Single-use builder; `build` consumes it.
            #[derive(Debug, Default)]
            pub struct [<$name Builder>] {
                instance: $name,
            }

            impl [<$name Builder>] {
                pub fn new() -> Self {
                    Self { instance: $name::default() }
                }

                $(
                    pub fn $field(mut self, value: impl ::std::convert::Into<$ty>) -> Self {
                        self.instance.$field = ::std::option::Option::Some(value.into());
                        self
                    }
                )*

                /// Yields the accumulated instance, consuming the builder.
                pub fn build(self) -> $name {
                    self.instance
                }
            }

            impl $crate::schema::SchemaBuilder for [<$name Builder>] {
                type Output = $name;

                fn build(self) -> $name {
                    self.instance
                }
            }
        }
    };
}

/// Declares a string-valued wire enum with its exact Jellyfin spellings.
#[macro_export]
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )*
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            pub const fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire, )*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::ModelError;

            fn from_str(value: &str) -> ::std::result::Result<Self, Self::Err> {
                match value {
                    $( $wire => Ok($name::$variant), )*
                    other => Err($crate::error::ModelError::UnknownVariant {
                        kind: stringify!($name),
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl $crate::schema::FieldHash for $name {
            fn hash_field<H: ::std::hash::Hasher>(&self, state: &mut H) {
                ::std::hash::Hash::hash(self, state);
            }

            fn eq_field(&self, other: &Self) -> bool {
                self == other
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::FieldHash;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::Hasher;

    fn hash_of<T: FieldHash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash_field(&mut hasher);
        hasher.finish()
    }

    crate::jellyfin_dto! {
        /// Small model used to exercise the macro.
        pub struct Sample {
            "Name" name: String,
            "Score" score: f64,
            "Ratio" ratio: f32 = 1.5_f32,
            "Tags" tags: Vec<String> = Vec::new(),
        }
    }

    crate::string_enum! {
        pub enum Flavor {
            Plain => "Plain",
            DoubleShot => "Double-Shot",
        }
    }

    #[test]
    fn signed_zero_hashes_like_zero() {
        assert_eq!(hash_of(&0.0_f64), hash_of(&-0.0_f64));
        assert_eq!(hash_of(&0.0_f32), hash_of(&-0.0_f32));
        assert_ne!(hash_of(&1.0_f64), hash_of(&2.0_f64));
    }

    #[test]
    fn option_presence_contributes_to_hash() {
        assert_ne!(hash_of(&Some(0_i32)), hash_of(&None::<i32>));
    }

    #[test]
    fn declared_defaults_apply_to_new_instances() {
        let sample = Sample::new();
        assert_eq!(sample.name, None);
        assert_eq!(sample.score, None);
        assert_eq!(sample.ratio, Some(1.5));
        assert_eq!(sample.tags, Some(Vec::new()));
    }

    #[test]
    fn fluent_setters_and_builder_agree() {
        let fluent = Sample::new().with_name("sample").with_score(2.0);
        let built = Sample::builder().name("sample").score(2.0).build();
        assert_eq!(fluent, built);
        assert_eq!(hash_of(&fluent), hash_of(&built));
    }

    #[test]
    fn to_builder_copies_instead_of_moving() {
        let original = Sample::new().with_name("first");
        let changed = original.to_builder().name("second").build();
        assert_eq!(original.name.as_deref(), Some("first"));
        assert_eq!(changed.name.as_deref(), Some("second"));
        assert_eq!(changed.ratio, original.ratio);
    }

    #[test]
    fn string_enum_uses_wire_spelling() {
        assert_eq!(Flavor::DoubleShot.to_string(), "Double-Shot");
        assert_eq!("Plain".parse::<Flavor>().ok(), Some(Flavor::Plain));
        assert!("plain".parse::<Flavor>().is_err());
        assert_eq!(Flavor::ALL.len(), 2);
        assert_eq!(
            serde_json::to_string(&Flavor::DoubleShot).expect("encode"),
            "\"Double-Shot\""
        );
    }
}
