//! Database models - SQLx-compatible structs for PostgreSQL tables

mod member;
mod profile;

pub use member::MemberModel;
pub use profile::ProfileModel;
