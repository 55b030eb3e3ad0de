//! Profile entity <-> model mapper

use member_core::entities::{NewProfile, Profile};
use member_core::error::DomainError;
use member_core::value_objects::{MemberNo, ProfileNo, ProfileStatus};

use crate::models::ProfileModel;

/// Convert ProfileModel to Profile entity
impl TryFrom<ProfileModel> for Profile {
    type Error = DomainError;

    fn try_from(model: ProfileModel) -> Result<Self, Self::Error> {
        Ok(Profile {
            profile_no: ProfileNo::new(model.profile_no),
            member_no: MemberNo::new(model.member_no),
            nickname: model.nickname,
            phone_number: model.phone_number,
            address: model.address,
            status: model.profile_status.parse::<ProfileStatus>()?,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Values for inserting a profile row
pub struct ProfileInsert<'a> {
    pub member_no: i64,
    pub nickname: &'a str,
    pub phone_number: &'a str,
    pub address: Option<&'a str>,
    pub profile_status: &'static str,
}

impl<'a> ProfileInsert<'a> {
    pub fn new(profile: &'a NewProfile) -> Self {
        Self {
            member_no: profile.member_no.into_inner(),
            nickname: &profile.nickname,
            phone_number: &profile.phone_number,
            address: profile.address.as_deref(),
            profile_status: profile.status.as_str(),
        }
    }
}

/// Values for updating a profile row
pub struct ProfileUpdateRow<'a> {
    pub profile_no: i64,
    pub nickname: &'a str,
    pub phone_number: &'a str,
    pub address: Option<&'a str>,
    pub profile_status: &'static str,
}

impl<'a> ProfileUpdateRow<'a> {
    pub fn new(profile: &'a Profile) -> Self {
        Self {
            profile_no: profile.profile_no.into_inner(),
            nickname: &profile.nickname,
            phone_number: &profile.phone_number,
            address: profile.address.as_deref(),
            profile_status: profile.status.as_str(),
        }
    }
}

/// Convert a batch of rows, failing on the first bad one
pub(crate) fn profiles_from_models(models: Vec<ProfileModel>) -> Result<Vec<Profile>, DomainError> {
    models.into_iter().map(Profile::try_from).collect()
}
