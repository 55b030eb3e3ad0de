//! Member entity <-> model mapper

use member_core::entities::{Member, NewMember};
use member_core::error::DomainError;
use member_core::value_objects::{MemberNo, MemberStatus};

use crate::models::MemberModel;

/// Convert MemberModel to Member entity
impl TryFrom<MemberModel> for Member {
    type Error = DomainError;

    fn try_from(model: MemberModel) -> Result<Self, Self::Error> {
        Ok(Member {
            member_no: MemberNo::new(model.member_no),
            login_id: model.login_id,
            name: model.name,
            password: model.password,
            status: model.member_status.parse::<MemberStatus>()?,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Values for inserting a member row
pub struct MemberInsert<'a> {
    pub login_id: &'a str,
    pub name: &'a str,
    pub password: &'a str,
    pub member_status: &'static str,
}

impl<'a> MemberInsert<'a> {
    pub fn new(member: &'a NewMember) -> Self {
        Self {
            login_id: &member.login_id,
            name: &member.name,
            password: &member.password,
            member_status: MemberStatus::Active.as_str(),
        }
    }
}
