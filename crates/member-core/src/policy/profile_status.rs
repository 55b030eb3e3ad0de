//! MAIN/NORMAL assignment rules for a member's profile set
//!
//! Every function here is pure. Callers load the member's complete profile
//! set (`siblings`, including the profile being changed), ask for a decision,
//! and persist the result in the same unit of work.
//!
//! Creating a profile, or updating one to MAIN, leaves the member with exactly
//! one MAIN profile. An update of a set that already has exactly one MAIN keeps
//! it at one. Deletion does not reassign MAIN, so a set can have none; a
//! NORMAL to NORMAL update then leaves it with none, and
//! [`resolve_viewable_main`] falls back to the first profile.

use tracing::debug;

use crate::entities::{Profile, ProfileUpdate};
use crate::error::DomainError;
use crate::value_objects::{MemberNo, ProfileStatus};

/// Result of applying an update to one profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdateOutcome {
    /// The updated profile
    pub profile: Profile,
    /// Siblings whose status changed and must be persisted too
    pub side_effects: Vec<Profile>,
}

/// Status for a profile about to be added to `existing`
pub fn status_for_new_profile(existing: &[Profile]) -> ProfileStatus {
    if existing.iter().any(Profile::is_main) {
        ProfileStatus::Normal
    } else {
        ProfileStatus::Main
    }
}

/// Apply `update` to `profile`, reassigning MAIN among `siblings` as needed
pub fn apply_update(
    profile: &Profile,
    update: &ProfileUpdate,
    siblings: &[Profile],
) -> ProfileUpdateOutcome {
    let others: Vec<&Profile> = siblings
        .iter()
        .filter(|p| p.profile_no != profile.profile_no)
        .collect();

    let mut updated = profile.clone();

    // Sole profile: always MAIN
    if others.is_empty() {
        updated.apply(update, ProfileStatus::Main);
        return ProfileUpdateOutcome {
            profile: updated,
            side_effects: Vec::new(),
        };
    }

    let mut side_effects = Vec::new();

    match (profile.status, update.status) {
        // Promotion. Also runs when already MAIN so a doubled MAIN gets repaired.
        (_, ProfileStatus::Main) => {
            for other in others.iter().filter(|p| p.is_main()) {
                debug!(profile_no = %other.profile_no, "Demoting profile to NORMAL");
                let mut demoted = (*other).clone();
                demoted.set_status(ProfileStatus::Normal);
                side_effects.push(demoted);
            }
        }
        // Demotion of the current MAIN: hand MAIN to the oldest sibling
        (ProfileStatus::Main, ProfileStatus::Normal) => {
            if !others.iter().any(|p| p.is_main()) {
                if let Some(successor) = others
                    .iter()
                    .min_by_key(|p| (p.created_at, p.profile_no))
                {
                    debug!(profile_no = %successor.profile_no, "Promoting profile to MAIN");
                    let mut promoted = (*successor).clone();
                    promoted.set_status(ProfileStatus::Main);
                    side_effects.push(promoted);
                }
            }
        }
        (ProfileStatus::Normal, ProfileStatus::Normal) => {}
    }

    updated.apply(update, update.status);

    ProfileUpdateOutcome {
        profile: updated,
        side_effects,
    }
}

/// Check that deleting `profile` leaves its member with at least one profile
pub fn authorize_deletion(
    profile: &Profile,
    siblings: &[Profile],
    login_id: &str,
) -> Result<(), DomainError> {
    let remaining = siblings
        .iter()
        .filter(|p| p.profile_no != profile.profile_no)
        .count();

    if remaining == 0 {
        return Err(DomainError::CannotDeleteProfile(login_id.to_string()));
    }
    Ok(())
}

/// Pick the profile shown for a member: MAIN if flagged, else the first in store order
pub fn resolve_viewable_main(
    member_no: MemberNo,
    profiles: Vec<Profile>,
) -> Result<Profile, DomainError> {
    let mut first = None;
    for profile in profiles {
        if profile.is_main() {
            return Ok(profile);
        }
        if first.is_none() {
            first = Some(profile);
        }
    }
    first.ok_or(DomainError::EmptyProfile(member_no))
}

/// Check that `profile` belongs to `member_no`
pub fn verify_ownership(member_no: MemberNo, profile: &Profile) -> Result<(), DomainError> {
    if profile.is_owned_by(member_no) {
        Ok(())
    } else {
        Err(DomainError::NonMatchMemberNo {
            member_no,
            owner_no: profile.member_no,
        })
    }
}
