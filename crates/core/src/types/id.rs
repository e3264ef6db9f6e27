//! Serde-transparent id newtypes.
//!
//! Catalog ids are small integers in the product data; wrapping them keeps
//! a cart line's product reference from ever being confused with a plain
//! count or index.

/// Define an `i32` id newtype.
///
/// The wrapper serializes transparently (a bare JSON number on the wire),
/// parses from a string for CLI arguments, and converts to and from `i32`.
///
/// ```rust
/// # use twenzee_core::define_id;
/// define_id!(ProductId);
///
/// let id = ProductId::new(3);
/// assert_eq!(id.as_i32(), 3);
/// assert_eq!("3".parse::<ProductId>().unwrap(), id);
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            #[must_use]
            pub const fn as_i32(&self) -> i32 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = ::core::num::ParseIntError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                s.parse::<i32>().map(Self)
            }
        }
    };
}

define_id!(ProductId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    define_id!(OtherId);

    #[test]
    fn test_wire_format_is_bare_number() {
        assert_eq!(serde_json::to_string(&ProductId::new(7)).unwrap(), "7");
        let parsed: ProductId = serde_json::from_str("7").unwrap();
        assert_eq!(parsed, ProductId::new(7));
    }

    #[test]
    fn test_parses_cli_argument() {
        assert_eq!("42".parse::<ProductId>().unwrap().as_i32(), 42);
        assert!("4.2".parse::<ProductId>().is_err());
        assert!("".parse::<ProductId>().is_err());
    }

    #[test]
    fn test_display_and_conversions() {
        let id = ProductId::from(3);
        assert_eq!(id.to_string(), "3");
        assert_eq!(i32::from(id), 3);
        // Distinct id types never compare; OtherId exists only to prove
        // the macro expands cleanly more than once.
        let _ = OtherId::new(3);
    }
}
