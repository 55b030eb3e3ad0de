//! Surrogate identifiers assigned by the store on insert
//!
//! Both ids wrap the `BIGSERIAL` value of their table. They serialize as
//! plain JSON numbers and parse from path segments.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error when parsing an identifier from a string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    #[error("invalid identifier format")]
    InvalidFormat,

    #[error("identifier must be positive")]
    NotPositive,
}

macro_rules! surrogate_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw key value
            #[inline]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the inner i64 value
            #[inline]
            pub const fn into_inner(self) -> i64 {
                self.0
            }

            /// Parse from a decimal string, rejecting zero and negatives
            pub fn parse(s: &str) -> Result<Self, IdParseError> {
                let id = s.trim().parse::<i64>().map_err(|_| IdParseError::InvalidFormat)?;
                if id <= 0 {
                    return Err(IdParseError::NotPositive);
                }
                Ok(Self(id))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

surrogate_id!(
    /// Member identifier (`members.member_no`)
    MemberNo
);

surrogate_id!(
    /// Profile identifier (`profiles.profile_no`)
    ProfileNo
);
