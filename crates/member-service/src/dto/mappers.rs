//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use member_core::entities::{Member, Profile};

use super::responses::{MemberDetailsResponse, MemberInfoResponse, MemberResponse, ProfileResponse};

// ============================================================================
// Helper Structs
// ============================================================================

/// Member together with one profile (creation result)
#[derive(Debug, Clone)]
pub struct MemberWithProfile {
    pub member: Member,
    pub profile: Profile,
}

/// Member together with all of its profiles
#[derive(Debug, Clone)]
pub struct MemberWithProfiles {
    pub member: Member,
    pub profiles: Vec<Profile>,
}

/// Member together with its viewable main profile
#[derive(Debug, Clone)]
pub struct MemberWithMainProfile {
    pub member: Member,
    pub main_profile: Profile,
}

// ============================================================================
// Profile Mappers
// ============================================================================

impl From<&Profile> for ProfileResponse {
    fn from(profile: &Profile) -> Self {
        Self {
            profile_no: profile.profile_no,
            nickname: profile.nickname.clone(),
            phone_number: profile.phone_number.clone(),
            address: profile.address.clone(),
            profile_status: profile.status,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self::from(&profile)
    }
}

// ============================================================================
// Member Mappers
// ============================================================================

impl From<MemberWithProfile> for MemberResponse {
    fn from(data: MemberWithProfile) -> Self {
        Self {
            member_no: data.member.member_no,
            login_id: data.member.login_id,
            name: data.member.name,
            created_at: data.member.created_at,
            profile: ProfileResponse::from(data.profile),
        }
    }
}

impl From<MemberWithProfiles> for MemberDetailsResponse {
    fn from(data: MemberWithProfiles) -> Self {
        Self {
            member_no: data.member.member_no,
            login_id: data.member.login_id,
            name: data.member.name,
            member_status: data.member.status,
            created_at: data.member.created_at,
            updated_at: data.member.updated_at,
            profiles: data.profiles.iter().map(ProfileResponse::from).collect(),
        }
    }
}

impl From<MemberWithMainProfile> for MemberInfoResponse {
    fn from(data: MemberWithMainProfile) -> Self {
        Self {
            member_no: data.member.member_no,
            login_id: data.member.login_id,
            name: data.member.name,
            member_status: data.member.status,
            created_at: data.member.created_at,
            updated_at: data.member.updated_at,
            main_profile: ProfileResponse::from(data.main_profile),
        }
    }
}
