//! Profile service
//!
//! Loads a member's profile set, asks the status policy for a decision, and
//! persists it. Callers check that the member is active first.

use tracing::{debug, info, instrument};

use member_core::entities::{Profile, ProfileDraft, ProfileUpdate};
use member_core::policy;
use member_core::traits::UnitOfWork;
use member_core::value_objects::{MemberNo, ProfileNo, ProfileStatus};
use member_core::DomainError;

use super::error::ServiceResult;

/// Profile service bound to one unit of work
pub struct ProfileService<'a> {
    uow: &'a mut dyn UnitOfWork,
}

impl<'a> ProfileService<'a> {
    /// Create a new ProfileService
    pub fn new(uow: &'a mut dyn UnitOfWork) -> Self {
        Self { uow }
    }

    /// All profiles of a member in store order
    #[instrument(skip(self))]
    pub async fn list(&mut self, member_no: MemberNo) -> ServiceResult<Vec<Profile>> {
        Ok(self.uow.profiles().find_by_member(member_no).await?)
    }

    /// Get a profile and check it belongs to `member_no`
    #[instrument(skip(self))]
    pub async fn get_owned(
        &mut self,
        member_no: MemberNo,
        profile_no: ProfileNo,
    ) -> ServiceResult<Profile> {
        let profile = self
            .uow
            .profiles()
            .find_by_no(profile_no)
            .await?
            .ok_or(DomainError::ProfileNotFound(profile_no))?;

        policy::verify_ownership(member_no, &profile)?;

        Ok(profile)
    }

    /// Add a profile; it becomes MAIN only if the member has no MAIN yet
    #[instrument(skip(self, draft))]
    pub async fn add(&mut self, member_no: MemberNo, draft: ProfileDraft) -> ServiceResult<Profile> {
        let existing = self.list(member_no).await?;
        let status = policy::status_for_new_profile(&existing);

        let profile = self
            .uow
            .profiles()
            .insert(&draft.into_new(member_no, status))
            .await?;

        info!(
            member_no = %member_no,
            profile_no = %profile.profile_no,
            status = %profile.status,
            "Profile created"
        );

        Ok(profile)
    }

    /// Overwrite a profile and rebalance MAIN across its siblings
    #[instrument(skip(self, update), fields(requested = %update.status))]
    pub async fn update(
        &mut self,
        member_no: MemberNo,
        profile_no: ProfileNo,
        update: ProfileUpdate,
    ) -> ServiceResult<Profile> {
        let profile = self.get_owned(member_no, profile_no).await?;
        let siblings = self.list(member_no).await?;

        let outcome = policy::apply_update(&profile, &update, &siblings);

        for changed in &outcome.side_effects {
            debug!(
                profile_no = %changed.profile_no,
                status = %changed.status,
                "Reassigning profile status"
            );
            self.uow.profiles().update(changed).await?;
        }
        let updated = self.uow.profiles().update(&outcome.profile).await?;

        info!(
            member_no = %member_no,
            profile_no = %profile_no,
            status = %updated.status,
            side_effects = outcome.side_effects.len(),
            "Profile updated"
        );

        Ok(updated)
    }

    /// Delete a profile unless it is the member's last one
    #[instrument(skip(self))]
    pub async fn remove(
        &mut self,
        member_no: MemberNo,
        login_id: &str,
        profile_no: ProfileNo,
    ) -> ServiceResult<Profile> {
        let profile = self.get_owned(member_no, profile_no).await?;
        let siblings = self.list(member_no).await?;

        policy::authorize_deletion(&profile, &siblings, login_id)?;

        // MAIN is not reassigned here; viewable_main falls back to the first profile
        self.uow.profiles().delete(profile_no).await?;

        info!(member_no = %member_no, profile_no = %profile_no, "Profile deleted");

        Ok(profile)
    }

    /// The profile shown for a member: MAIN if flagged, else the first one
    #[instrument(skip(self))]
    pub async fn viewable_main(&mut self, member_no: MemberNo) -> ServiceResult<Profile> {
        if let Some(main) = self
            .uow
            .profiles()
            .find_by_member_and_status(member_no, ProfileStatus::Main)
            .await?
        {
            return Ok(main);
        }

        let profiles = self.list(member_no).await?;
        Ok(policy::resolve_viewable_main(member_no, profiles)?)
    }
}
