//! Domain policies

mod profile_status;

pub use profile_status::{
    ProfileUpdateOutcome, apply_update, authorize_deletion, resolve_viewable_main,
    status_for_new_profile, verify_ownership,
};
