//! Closed string enums
//!
//! Every wire enum is declared with [`wire_enum!`], which fixes its allowed
//! values once and derives exact-match parsing and serde support from them.
//! Deserialization is strict: a value outside the allowed set fails, which in
//! turn makes the enclosing record fall back to its raw form.

use crate::error::EnumError;

/// A closed set of wire strings.
pub trait WireEnum: Sized + Copy + 'static {
    /// Type name used in error messages.
    const NAME: &'static str;

    /// Every accepted wire value, in declaration order.
    const ALLOWED: &'static [&'static str];

    /// The wire value of this variant.
    fn as_str(&self) -> &'static str;

    /// Exact membership check against [`Self::ALLOWED`].
    fn is_valid(value: &str) -> bool {
        Self::ALLOWED.contains(&value)
    }

    /// Parse a wire value, rejecting anything outside the allowed set.
    fn from_value(value: &str) -> Result<Self, EnumError>;
}

/// Declare a wire enum.
///
/// Attributes on the enum and its variants pass through, so a default variant
/// is declared with `#[derive(Default)]` and `#[default]`.
///
/// ```ignore
/// wire_enum! {
///     /// How to align text
///     #[derive(Default)]
///     pub enum WidgetTextAlign {
///         #[default]
///         Center => "center",
///         Left => "left",
///     }
/// }
/// ```
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $crate::enums::WireEnum for $name {
            const NAME: &'static str = stringify!($name);
            const ALLOWED: &'static [&'static str] = &[$($wire),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire ),+
                }
            }

            fn from_value(value: &str) -> ::std::result::Result<Self, $crate::error::EnumError> {
                match value {
                    $( $wire => Ok($name::$variant), )+
                    _ => Err($crate::error::EnumError::InvalidValue {
                        name: stringify!($name),
                        value: value.to_string(),
                        allowed: <$name as $crate::enums::WireEnum>::ALLOWED,
                    }),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::enums::WireEnum::as_str(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::EnumError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <$name as $crate::enums::WireEnum>::from_value(s)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str($crate::enums::WireEnum::as_str(self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(
                deserializer: D,
            ) -> ::std::result::Result<Self, D::Error> {
                let value = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                <$name as $crate::enums::WireEnum>::from_value(&value)
                    .map_err(::serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use wire_enum;

#[cfg(test)]
mod tests {
    use super::*;

    wire_enum! {
        /// Test enum
        enum Align {
            Center => "center",
            Left => "left",
            Right => "right",
        }
    }

    #[test]
    fn test_allowed_in_declaration_order() {
        assert_eq!(Align::ALLOWED, &["center", "left", "right"]);
        assert_eq!(Align::NAME, "Align");
    }

    #[test]
    fn test_is_valid_exact_match() {
        assert!(Align::is_valid("left"));
        assert!(!Align::is_valid("Left"));
        assert!(!Align::is_valid(" left"));
        assert!(!Align::is_valid(""));
    }

    #[test]
    fn test_from_value() {
        assert_eq!(Align::from_value("right").unwrap(), Align::Right);
        let err = Align::from_value("Center").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("`Center`"));
        assert!(msg.contains("center, left, right"));
    }

    #[test]
    fn test_display_and_from_str() {
        assert_eq!(Align::Center.to_string(), "center");
        assert_eq!("left".parse::<Align>().unwrap(), Align::Left);
        assert!("middle".parse::<Align>().is_err());
    }

    #[test]
    fn test_serde() {
        assert_eq!(serde_json::to_string(&Align::Right).unwrap(), r#""right""#);
        let parsed: Align = serde_json::from_str(r#""center""#).unwrap();
        assert_eq!(parsed, Align::Center);
        assert!(serde_json::from_str::<Align>(r#""justify""#).is_err());
        assert!(serde_json::from_str::<Align>("1").is_err());
    }
}
