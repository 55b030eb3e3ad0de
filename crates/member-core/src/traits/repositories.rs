//! Store traits (ports) - define the interface for data access
//!
//! Every store call runs inside a [`UnitOfWork`]: the infrastructure layer
//! opens one transaction per request and hands out the member and profile
//! stores bound to it. Nothing here touches a database directly.

use async_trait::async_trait;

use crate::entities::{Member, NewMember, NewProfile, Profile};
use crate::error::DomainError;
use crate::value_objects::{MemberNo, MemberStatus, PageRequest, ProfileNo, ProfileStatus};

/// Result type for store operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Member Repository
// ============================================================================

/// Member store. Every lookup only sees ACTIVE members.
#[async_trait]
pub trait MemberRepository: Send {
    /// Find an active member by number
    async fn find_by_no(&mut self, member_no: MemberNo) -> RepoResult<Option<Member>>;

    /// Find an active member by login id
    async fn find_by_login_id(&mut self, login_id: &str) -> RepoResult<Option<Member>>;

    /// Active members whose name contains `name`, ordered by member number.
    /// An empty `name` matches everyone.
    async fn search_by_name(&mut self, name: &str, page: PageRequest) -> RepoResult<Vec<Member>>;

    /// Insert a member; fails with `DuplicateLoginId` if the login id is taken
    async fn insert(&mut self, member: &NewMember) -> RepoResult<Member>;

    /// Change the status of an active member
    async fn update_status(&mut self, member_no: MemberNo, status: MemberStatus) -> RepoResult<()>;
}

// ============================================================================
// Profile Repository
// ============================================================================

#[async_trait]
pub trait ProfileRepository: Send {
    /// Find profile by number
    async fn find_by_no(&mut self, profile_no: ProfileNo) -> RepoResult<Option<Profile>>;

    /// All profiles of a member, ordered by creation time then profile number
    async fn find_by_member(&mut self, member_no: MemberNo) -> RepoResult<Vec<Profile>>;

    /// First profile of a member with the given status
    async fn find_by_member_and_status(
        &mut self,
        member_no: MemberNo,
        status: ProfileStatus,
    ) -> RepoResult<Option<Profile>>;

    /// Insert a profile
    async fn insert(&mut self, profile: &NewProfile) -> RepoResult<Profile>;

    /// Persist nickname, phone number, address and status of a profile
    async fn update(&mut self, profile: &Profile) -> RepoResult<Profile>;

    /// Hard delete a profile
    async fn delete(&mut self, profile_no: ProfileNo) -> RepoResult<()>;
}

// ============================================================================
// Unit of Work
// ============================================================================

/// One atomic unit of work. Changes become visible only after [`commit`];
/// dropping without committing discards them.
///
/// [`commit`]: UnitOfWork::commit
#[async_trait]
pub trait UnitOfWork: Send {
    /// Member store bound to this unit of work
    fn members(&mut self) -> &mut dyn MemberRepository;

    /// Profile store bound to this unit of work
    fn profiles(&mut self) -> &mut dyn ProfileRepository;

    /// Make every change permanent
    async fn commit(self: Box<Self>) -> RepoResult<()>;

    /// Discard every change
    async fn rollback(self: Box<Self>) -> RepoResult<()>;
}

/// Opens units of work
#[async_trait]
pub trait UnitOfWorkFactory: Send + Sync {
    /// Begin a read-write unit of work
    async fn begin(&self) -> RepoResult<Box<dyn UnitOfWork>>;

    /// Begin a unit of work that rejects writes
    async fn begin_read_only(&self) -> RepoResult<Box<dyn UnitOfWork>>;
}
