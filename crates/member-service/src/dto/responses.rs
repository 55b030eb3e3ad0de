//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output with camelCase keys.
//! Passwords never appear in any response.

use chrono::{DateTime, Utc};
use serde::Serialize;

use member_core::value_objects::{MemberNo, MemberStatus, ProfileNo, ProfileStatus};

// ============================================================================
// Common Response Types
// ============================================================================

/// Success envelope: `{code, message, data}`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// HTTP status name, e.g. `OK` or `CREATED`
    pub code: &'static str,
    pub message: &'static str,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(message: &'static str, data: T) -> Self {
        Self {
            code: "OK",
            message,
            data,
        }
    }

    pub fn created(message: &'static str, data: T) -> Self {
        Self {
            code: "CREATED",
            message,
            data,
        }
    }
}

// ============================================================================
// Profile Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub profile_no: ProfileNo,
    pub nickname: String,
    pub phone_number: String,
    pub address: Option<String>,
    pub profile_status: ProfileStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Member Responses
// ============================================================================

/// Newly created member with its first profile
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponse {
    pub member_no: MemberNo,
    pub login_id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub profile: ProfileResponse,
}

/// Member with every profile
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDetailsResponse {
    pub member_no: MemberNo,
    pub login_id: String,
    pub name: String,
    pub member_status: MemberStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub profiles: Vec<ProfileResponse>,
}

/// Member list row with the profile shown for that member
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberInfoResponse {
    pub member_no: MemberNo,
    pub login_id: String,
    pub name: String,
    pub member_status: MemberStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub main_profile: ProfileResponse,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
