//! Member/profile use cases
//!
//! Each operation runs on the unit of work the caller opened. The caller
//! commits it on `Ok` and rolls it back on `Err` (see [`finish`]).
//!
//! [`finish`]: super::unit_of_work::finish

use tracing::instrument;

use member_core::traits::UnitOfWork;
use member_core::value_objects::{MemberNo, ProfileNo};
use member_core::DomainError;

use crate::dto::{
    CreateMemberRequest, CreateProfileRequest, MemberDetailsResponse, MemberInfoResponse,
    MemberResponse, MemberSearchQuery, MemberWithMainProfile, MemberWithProfile,
    MemberWithProfiles, ProfileResponse, UpdateProfileRequest,
};

use super::error::ServiceResult;
use super::member::MemberService;
use super::profile::ProfileService;

/// Coordinates member and profile operations inside one unit of work
pub struct MemberProfileFacade<'a> {
    uow: &'a mut dyn UnitOfWork,
}

impl<'a> MemberProfileFacade<'a> {
    /// Create a new MemberProfileFacade
    pub fn new(uow: &'a mut dyn UnitOfWork) -> Self {
        Self { uow }
    }

    fn members(&mut self) -> MemberService<'_> {
        MemberService::new(&mut *self.uow)
    }

    fn profiles(&mut self) -> ProfileService<'_> {
        ProfileService::new(&mut *self.uow)
    }

    /// Create a member together with its first (MAIN) profile
    #[instrument(skip(self, request))]
    pub async fn create_member(
        &mut self,
        request: CreateMemberRequest,
    ) -> ServiceResult<MemberResponse> {
        let (new_member, draft) = request.into_parts()?;

        let member = self.members().register(new_member).await?;
        let profile = self.profiles().add(member.member_no, draft).await?;

        Ok(MemberResponse::from(MemberWithProfile { member, profile }))
    }

    /// Soft-delete a member, returning its login id. Profiles are kept.
    #[instrument(skip(self))]
    pub async fn delete_member(&mut self, member_no: MemberNo) -> ServiceResult<String> {
        let member = self.members().withdraw(member_no).await?;
        Ok(member.login_id)
    }

    /// Member with every profile
    #[instrument(skip(self))]
    pub async fn find_member_details(
        &mut self,
        member_no: MemberNo,
    ) -> ServiceResult<MemberDetailsResponse> {
        let member = self.members().get_active(member_no).await?;
        let profiles = self.profiles().list(member_no).await?;

        if profiles.is_empty() {
            return Err(DomainError::EmptyProfile(member_no).into());
        }

        Ok(MemberDetailsResponse::from(MemberWithProfiles { member, profiles }))
    }

    /// One page of active members, each with its viewable main profile.
    /// A member without profiles fails the whole page.
    #[instrument(skip(self))]
    pub async fn find_members(
        &mut self,
        query: &MemberSearchQuery,
    ) -> ServiceResult<Vec<MemberInfoResponse>> {
        let members = self
            .members()
            .search(query.name(), query.page_request())
            .await?;

        let mut rows = Vec::with_capacity(members.len());
        for member in members {
            let main_profile = self.profiles().viewable_main(member.member_no).await?;
            rows.push(MemberInfoResponse::from(MemberWithMainProfile {
                member,
                main_profile,
            }));
        }

        Ok(rows)
    }

    /// Add a profile to an active member
    #[instrument(skip(self, request))]
    pub async fn create_profile(
        &mut self,
        member_no: MemberNo,
        request: CreateProfileRequest,
    ) -> ServiceResult<ProfileResponse> {
        let draft = request.into_draft()?;

        self.members().get_active(member_no).await?;
        let profile = self.profiles().add(member_no, draft).await?;

        Ok(ProfileResponse::from(profile))
    }

    /// Overwrite a profile of an active member
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &mut self,
        member_no: MemberNo,
        profile_no: ProfileNo,
        request: UpdateProfileRequest,
    ) -> ServiceResult<ProfileResponse> {
        let update = request.to_update()?;

        self.members().get_active(member_no).await?;
        let profile = self.profiles().update(member_no, profile_no, update).await?;

        Ok(ProfileResponse::from(profile))
    }

    /// Delete a profile of an active member, returning its nickname
    #[instrument(skip(self))]
    pub async fn delete_profile(
        &mut self,
        member_no: MemberNo,
        profile_no: ProfileNo,
    ) -> ServiceResult<String> {
        let member = self.members().get_active(member_no).await?;
        let profile = self
            .profiles()
            .remove(member_no, &member.login_id, profile_no)
            .await?;

        Ok(profile.nickname)
    }
}
