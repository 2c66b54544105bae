//! Numeric entity identifiers.
//!
//! Identifiers are assigned by the store from a per-kind monotonic counter, so
//! each kind gets its own newtype to keep a `ReceiptId` from being passed where
//! a `UserId` is expected.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! define_numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw identifier value.
            #[must_use]
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Raw identifier value.
            #[must_use]
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<u64>().map(Self)
            }
        }
    };
}

define_numeric_id! {
    /// Identifier of a stored [`crate::domain::User`].
    UserId
}

define_numeric_id! {
    /// Identifier of a stored [`crate::domain::Receipt`].
    ReceiptId
}

define_numeric_id! {
    /// Identifier of a stored [`crate::domain::ReceiptItem`].
    ReceiptItemId
}
