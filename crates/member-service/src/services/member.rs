//! Member service
//!
//! Handles member registration, lookup, search and soft deletion.

use tracing::{info, instrument};

use member_core::entities::{Member, NewMember};
use member_core::traits::UnitOfWork;
use member_core::value_objects::{MemberNo, MemberStatus, PageRequest};
use member_core::DomainError;

use super::error::ServiceResult;

/// Member service bound to one unit of work
pub struct MemberService<'a> {
    uow: &'a mut dyn UnitOfWork,
}

impl<'a> MemberService<'a> {
    /// Create a new MemberService
    pub fn new(uow: &'a mut dyn UnitOfWork) -> Self {
        Self { uow }
    }

    /// Insert a member whose login id is not used by any active member
    #[instrument(skip(self, member), fields(login_id = %member.login_id))]
    pub async fn register(&mut self, member: NewMember) -> ServiceResult<Member> {
        if self
            .uow
            .members()
            .find_by_login_id(&member.login_id)
            .await?
            .is_some()
        {
            return Err(DomainError::DuplicateLoginId(member.login_id).into());
        }

        // A concurrent insert still trips the unique index and maps to the same error
        let member = self.uow.members().insert(&member).await?;

        info!(member_no = %member.member_no, "Member registered");

        Ok(member)
    }

    /// Get an active member or fail with `MemberNotFound`
    #[instrument(skip(self))]
    pub async fn get_active(&mut self, member_no: MemberNo) -> ServiceResult<Member> {
        let member = self
            .uow
            .members()
            .find_by_no(member_no)
            .await?
            .ok_or(DomainError::MemberNotFound(member_no))?;

        Ok(member)
    }

    /// Soft-delete an active member, returning it in its deleted state
    #[instrument(skip(self))]
    pub async fn withdraw(&mut self, member_no: MemberNo) -> ServiceResult<Member> {
        let mut member = self.get_active(member_no).await?;

        self.uow
            .members()
            .update_status(member_no, MemberStatus::Deleted)
            .await?;
        member.mark_deleted();

        info!(member_no = %member_no, login_id = %member.login_id, "Member deleted");

        Ok(member)
    }

    /// Search active members by name substring
    #[instrument(skip(self))]
    pub async fn search(&mut self, name: &str, page: PageRequest) -> ServiceResult<Vec<Member>> {
        Ok(self.uow.members().search_by_name(name, page).await?)
    }
}
