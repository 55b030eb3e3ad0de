//! Profile entity - a member's public persona

use chrono::{DateTime, Utc};

use crate::value_objects::{MemberNo, ProfileNo, ProfileStatus};

/// Profile belonging to exactly one member for its whole lifetime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub profile_no: ProfileNo,
    pub member_no: MemberNo,
    pub nickname: String,
    pub phone_number: String,
    pub address: Option<String>,
    pub status: ProfileStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    #[inline]
    pub fn is_main(&self) -> bool {
        self.status.is_main()
    }

    /// Check if the profile belongs to the given member
    #[inline]
    pub fn is_owned_by(&self, member_no: MemberNo) -> bool {
        self.member_no == member_no
    }

    /// Change the status, bumping `updated_at`
    pub fn set_status(&mut self, status: ProfileStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Overwrite the editable fields
    pub fn apply(&mut self, update: &ProfileUpdate, status: ProfileStatus) {
        self.nickname = update.nickname.clone();
        self.phone_number = update.phone_number.clone();
        self.address = update.address.clone();
        self.set_status(status);
    }
}

/// Fields needed to insert a profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProfile {
    pub member_no: MemberNo,
    pub nickname: String,
    pub phone_number: String,
    pub address: Option<String>,
    pub status: ProfileStatus,
}

/// Profile fields supplied by a client before a status is decided
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDraft {
    pub nickname: String,
    pub phone_number: String,
    pub address: Option<String>,
}

impl ProfileDraft {
    /// Attach the draft to its owner with the decided status
    pub fn into_new(self, member_no: MemberNo, status: ProfileStatus) -> NewProfile {
        NewProfile {
            member_no,
            nickname: self.nickname,
            phone_number: self.phone_number,
            address: self.address,
            status,
        }
    }
}

/// Editable profile fields plus the requested status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub nickname: String,
    pub phone_number: String,
    pub address: Option<String>,
    pub status: ProfileStatus,
}
