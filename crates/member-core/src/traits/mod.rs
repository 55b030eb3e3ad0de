//! Store traits

mod repositories;

pub use repositories::{
    MemberRepository, ProfileRepository, RepoResult, UnitOfWork, UnitOfWorkFactory,
};
