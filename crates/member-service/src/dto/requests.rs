//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Required fields are `Option` so a missing field is reported as a validation
//! error instead of a JSON parse error.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use member_core::entities::{NewMember, ProfileDraft, ProfileUpdate};
use member_core::error::DomainError;
use member_core::value_objects::{PageRequest, ProfileStatus, DEFAULT_PAGE_SIZE};

// ============================================================================
// Field Patterns
// ============================================================================

static LOGIN_ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9]{4,20}$").expect("LOGIN_ID_REGEX should compile - this is a bug")
});

static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[가-힣]{2,8}$").expect("NAME_REGEX should compile - this is a bug"));

static PASSWORD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z\d~!@#$%\^&*()+|=]{8,16}$")
        .expect("PASSWORD_REGEX should compile - this is a bug")
});

static NICKNAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[가-힣a-zA-Z0-9_-]{2,8}$").expect("NICKNAME_REGEX should compile - this is a bug")
});

static PHONE_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^01(?:0|1|[6-9])(?:\d{7}|\d{8})$")
        .expect("PHONE_NUMBER_REGEX should compile - this is a bug")
});

/// Unwrap a field that validation already proved present
fn required(value: Option<String>, field: &str) -> Result<String, DomainError> {
    value.ok_or_else(|| DomainError::ValidationError(format!("{field} is required")))
}

// ============================================================================
// Member Requests
// ============================================================================

/// Create member request, carrying the member's first profile
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemberRequest {
    #[validate(
        required(message = "loginId is required"),
        regex(
            path = *LOGIN_ID_REGEX,
            message = "loginId must be 4-20 lowercase letters or digits"
        )
    )]
    pub login_id: Option<String>,

    #[validate(
        required(message = "name is required"),
        regex(path = *NAME_REGEX, message = "name must be 2-8 Hangul syllables")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "password is required"),
        regex(
            path = *PASSWORD_REGEX,
            message = "password must be 8-16 letters, digits or ~!@#$%^&*()+|="
        )
    )]
    pub password: Option<String>,

    #[validate(required(message = "profile is required"), nested)]
    pub profile: Option<CreateProfileRequest>,
}

impl CreateMemberRequest {
    /// Split into the member to insert and its first profile
    pub fn into_parts(self) -> Result<(NewMember, ProfileDraft), DomainError> {
        let member = NewMember::new(
            required(self.login_id, "loginId")?,
            required(self.name, "name")?,
            required(self.password, "password")?,
        );
        let profile = self
            .profile
            .ok_or_else(|| DomainError::ValidationError("profile is required".to_string()))?
            .into_draft()?;
        Ok((member, profile))
    }
}

/// Member list query: `?page=0&size=10&name=...`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemberSearchQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub name: Option<String>,
}

impl MemberSearchQuery {
    /// Page request with defaults applied and size clamped
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(
            self.page.unwrap_or(0),
            self.size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }

    /// Name filter; empty matches every member
    pub fn name(&self) -> &str {
        self.name.as_deref().map_or("", str::trim)
    }
}

// ============================================================================
// Profile Requests
// ============================================================================

/// Create profile request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileRequest {
    #[validate(
        required(message = "nickname is required"),
        regex(
            path = *NICKNAME_REGEX,
            message = "nickname must be 2-8 Hangul, letters, digits, '_' or '-'"
        )
    )]
    pub nickname: Option<String>,

    #[validate(
        required(message = "phoneNumber is required"),
        regex(path = *PHONE_NUMBER_REGEX, message = "phoneNumber must be a mobile number")
    )]
    pub phone_number: Option<String>,

    #[validate(length(max = 255, message = "address must be at most 255 characters"))]
    pub address: Option<String>,
}

impl CreateProfileRequest {
    pub fn into_draft(self) -> Result<ProfileDraft, DomainError> {
        Ok(ProfileDraft {
            nickname: required(self.nickname, "nickname")?,
            phone_number: required(self.phone_number, "phoneNumber")?,
            address: self.address,
        })
    }
}

/// Update profile request; every field is overwritten
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[validate(
        required(message = "nickname is required"),
        regex(
            path = *NICKNAME_REGEX,
            message = "nickname must be 2-8 Hangul, letters, digits, '_' or '-'"
        )
    )]
    pub nickname: Option<String>,

    #[validate(
        required(message = "phoneNumber is required"),
        regex(path = *PHONE_NUMBER_REGEX, message = "phoneNumber must be a mobile number")
    )]
    pub phone_number: Option<String>,

    #[validate(length(max = 255, message = "address must be at most 255 characters"))]
    pub address: Option<String>,

    /// `MAIN` or `NORMAL`; anything else is rejected by [`Self::to_update`]
    #[validate(required(message = "profileStatus is required"))]
    pub profile_status: Option<String>,
}

impl UpdateProfileRequest {
    /// Convert to a domain update, parsing the status
    pub fn to_update(self) -> Result<ProfileUpdate, DomainError> {
        let status = required(self.profile_status, "profileStatus")?.parse::<ProfileStatus>()?;
        Ok(ProfileUpdate {
            nickname: required(self.nickname, "nickname")?,
            phone_number: required(self.phone_number, "phoneNumber")?,
            address: self.address,
            status,
        })
    }
}
