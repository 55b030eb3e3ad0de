//! Member entity - an account that owns one or more profiles

use chrono::{DateTime, Utc};

use crate::value_objects::{MemberNo, MemberStatus};

/// Member account. Soft-deleted by flipping `status`; never physically removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub member_no: MemberNo,
    pub login_id: String,
    pub name: String,
    pub password: String,
    pub status: MemberStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Member {
    /// Check if the member is still active
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == MemberStatus::Active
    }

    /// Soft-delete the member
    pub fn mark_deleted(&mut self) {
        self.status = MemberStatus::Deleted;
        self.updated_at = Utc::now();
    }
}

/// Fields needed to insert a member; the store assigns `member_no` and timestamps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub login_id: String,
    pub name: String,
    pub password: String,
}

impl NewMember {
    pub fn new(
        login_id: impl Into<String>,
        name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            login_id: login_id.into(),
            name: name.into(),
            password: password.into(),
        }
    }
}
