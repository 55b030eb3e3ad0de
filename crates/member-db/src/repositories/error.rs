//! Error handling utilities for repositories

use member_core::error::DomainError;
use member_core::value_objects::{MemberNo, ProfileNo};
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "member not found" error
pub fn member_not_found(member_no: MemberNo) -> DomainError {
    DomainError::MemberNotFound(member_no)
}

/// Create a "profile not found" error
pub fn profile_not_found(profile_no: ProfileNo) -> DomainError {
    DomainError::ProfileNotFound(profile_no)
}
