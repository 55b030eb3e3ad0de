//! Closed status enums for members and profiles
//!
//! Both are stored and serialized by their upper-case names. Parsing is the
//! only way in from external strings and yields `DomainError::InvalidStatus`
//! for anything outside the variant set.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Member lifecycle state (soft delete is a status flip)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum MemberStatus {
    #[default]
    Active,
    Deleted,
}

impl MemberStatus {
    /// Storage/wire representation
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Deleted => "DELETED",
        }
    }
}

impl fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MemberStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(Self::Active),
            "DELETED" => Ok(Self::Deleted),
            other => Err(DomainError::InvalidStatus {
                kind: "member",
                value: other.to_string(),
            }),
        }
    }
}

/// Profile role within its member's profile set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProfileStatus {
    /// The profile shown by default; at most one per member
    Main,
    Normal,
}

impl ProfileStatus {
    /// Storage/wire representation
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Main => "MAIN",
            Self::Normal => "NORMAL",
        }
    }

    #[inline]
    pub const fn is_main(self) -> bool {
        matches!(self, Self::Main)
    }
}

impl fmt::Display for ProfileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MAIN" => Ok(Self::Main),
            "NORMAL" => Ok(Self::Normal),
            other => Err(DomainError::InvalidStatus {
                kind: "profile",
                value: other.to_string(),
            }),
        }
    }
}
