//! Domain entities

mod member;
mod profile;

pub use member::{Member, NewMember};
pub use profile::{NewProfile, Profile, ProfileDraft, ProfileUpdate};
