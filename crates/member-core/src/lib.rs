//! # member-core
//!
//! Domain layer containing entities, value objects, store traits, and the
//! profile status rules. This crate has zero dependencies on infrastructure
//! (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod policy;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Member, NewMember, NewProfile, Profile, ProfileDraft, ProfileUpdate};
pub use error::DomainError;
pub use policy::ProfileUpdateOutcome;
pub use traits::{
    MemberRepository, ProfileRepository, RepoResult, UnitOfWork, UnitOfWorkFactory,
};
pub use value_objects::{
    IdParseError, MemberNo, MemberStatus, PageRequest, ProfileNo, ProfileStatus,
    DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
