//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{MemberNo, ProfileNo};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Member not found: {0}")]
    MemberNotFound(MemberNo),

    #[error("Profile not found: {0}")]
    ProfileNotFound(ProfileNo),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid {kind} status: {value}")]
    InvalidStatus { kind: &'static str, value: String },

    // =========================================================================
    // Rule Violations (client mistakes against existing state)
    // =========================================================================
    #[error("Login id is already in use: {0}")]
    DuplicateLoginId(String),

    #[error("Profile belongs to member {owner_no}, not member {member_no}")]
    NonMatchMemberNo { member_no: MemberNo, owner_no: MemberNo },

    #[error("Member {0} has no profiles")]
    EmptyProfile(MemberNo),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Member {0} must keep at least one profile")]
    CannotDeleteProfile(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::MemberNotFound(_) => "UNKNOWN_MEMBER",
            Self::ProfileNotFound(_) => "UNKNOWN_PROFILE",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidStatus { .. } => "INVALID_STATUS",

            // Rule violations
            Self::DuplicateLoginId(_) => "DUPLICATE_LOGIN_ID",
            Self::NonMatchMemberNo { .. } => "NON_MATCH_MEMBER_NO",
            Self::EmptyProfile(_) => "EMPTY_PROFILE",

            // Conflict
            Self::CannotDeleteProfile(_) => "CANNOT_DELETE_PROFILE",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::MemberNotFound(_) | Self::ProfileNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::InvalidStatus { .. })
    }

    /// Check if the request was well-formed but breaks a rule given the current state
    pub fn is_rule_violation(&self) -> bool {
        matches!(
            self,
            Self::DuplicateLoginId(_) | Self::NonMatchMemberNo { .. } | Self::EmptyProfile(_)
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::CannotDeleteProfile(_))
    }
}
