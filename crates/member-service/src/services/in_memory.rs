//! In-memory unit of work for service tests
//!
//! Each unit of work edits a private copy of the store; `commit` publishes the
//! copy, `rollback` (or dropping) discards it.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};

use member_core::entities::{Member, NewMember, NewProfile, Profile};
use member_core::traits::{MemberRepository, ProfileRepository, RepoResult, UnitOfWork};
use member_core::value_objects::{
    MemberNo, MemberStatus, PageRequest, ProfileNo, ProfileStatus,
};
use member_core::DomainError;

#[derive(Debug, Clone, Default)]
struct StoreState {
    members: Vec<Member>,
    profiles: Vec<Profile>,
    next_member_no: i64,
    next_profile_no: i64,
    tick: i64,
}

impl StoreState {
    /// Strictly increasing timestamps so creation order is observable
    fn now(&mut self) -> DateTime<Utc> {
        self.tick += 1;
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(self.tick)
    }

    fn sorted_profiles(&self, member_no: MemberNo) -> Vec<Profile> {
        let mut profiles: Vec<Profile> = self
            .profiles
            .iter()
            .filter(|p| p.member_no == member_no)
            .cloned()
            .collect();
        profiles.sort_by_key(|p| (p.created_at, p.profile_no));
        profiles
    }
}

/// Shared committed state
#[derive(Clone, Default)]
pub(crate) struct InMemoryStore {
    state: Arc<Mutex<StoreState>>,
}

impl InMemoryStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn begin(&self) -> Box<dyn UnitOfWork> {
        let working = self.state.lock().unwrap().clone();
        Box::new(InMemoryUnitOfWork {
            store: self.clone(),
            working,
        })
    }

    /// Every committed member, deleted ones included
    pub(crate) fn members(&self) -> Vec<Member> {
        self.state.lock().unwrap().members.clone()
    }

    /// Committed profiles of one member in store order
    pub(crate) fn profiles_of(&self, member_no: MemberNo) -> Vec<Profile> {
        self.state.lock().unwrap().sorted_profiles(member_no)
    }
}

struct InMemoryUnitOfWork {
    store: InMemoryStore,
    working: StoreState,
}

#[async_trait]
impl UnitOfWork for InMemoryUnitOfWork {
    fn members(&mut self) -> &mut dyn MemberRepository {
        self
    }

    fn profiles(&mut self) -> &mut dyn ProfileRepository {
        self
    }

    async fn commit(self: Box<Self>) -> RepoResult<()> {
        let Self { store, working } = *self;
        *store.state.lock().unwrap() = working;
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> RepoResult<()> {
        Ok(())
    }
}

#[async_trait]
impl MemberRepository for InMemoryUnitOfWork {
    async fn find_by_no(&mut self, member_no: MemberNo) -> RepoResult<Option<Member>> {
        Ok(self
            .working
            .members
            .iter()
            .find(|m| m.member_no == member_no && m.is_active())
            .cloned())
    }

    async fn find_by_login_id(&mut self, login_id: &str) -> RepoResult<Option<Member>> {
        Ok(self
            .working
            .members
            .iter()
            .find(|m| m.login_id == login_id && m.is_active())
            .cloned())
    }

    async fn search_by_name(&mut self, name: &str, page: PageRequest) -> RepoResult<Vec<Member>> {
        let mut found: Vec<Member> = self
            .working
            .members
            .iter()
            .filter(|m| m.is_active() && m.name.contains(name))
            .cloned()
            .collect();
        found.sort_by_key(|m| m.member_no);
        Ok(found
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect())
    }

    async fn insert(&mut self, member: &NewMember) -> RepoResult<Member> {
        if self
            .working
            .members
            .iter()
            .any(|m| m.login_id == member.login_id && m.is_active())
        {
            return Err(DomainError::DuplicateLoginId(member.login_id.clone()));
        }

        self.working.next_member_no += 1;
        let now = self.working.now();
        let created = Member {
            member_no: MemberNo::new(self.working.next_member_no),
            login_id: member.login_id.clone(),
            name: member.name.clone(),
            password: member.password.clone(),
            status: MemberStatus::Active,
            created_at: now,
            updated_at: now,
        };
        self.working.members.push(created.clone());
        Ok(created)
    }

    async fn update_status(&mut self, member_no: MemberNo, status: MemberStatus) -> RepoResult<()> {
        let now = self.working.now();
        let member = self
            .working
            .members
            .iter_mut()
            .find(|m| m.member_no == member_no && m.is_active())
            .ok_or(DomainError::MemberNotFound(member_no))?;
        member.status = status;
        member.updated_at = now;
        Ok(())
    }
}

#[async_trait]
impl ProfileRepository for InMemoryUnitOfWork {
    async fn find_by_no(&mut self, profile_no: ProfileNo) -> RepoResult<Option<Profile>> {
        Ok(self
            .working
            .profiles
            .iter()
            .find(|p| p.profile_no == profile_no)
            .cloned())
    }

    async fn find_by_member(&mut self, member_no: MemberNo) -> RepoResult<Vec<Profile>> {
        Ok(self.working.sorted_profiles(member_no))
    }

    async fn find_by_member_and_status(
        &mut self,
        member_no: MemberNo,
        status: ProfileStatus,
    ) -> RepoResult<Option<Profile>> {
        Ok(self
            .working
            .sorted_profiles(member_no)
            .into_iter()
            .find(|p| p.status == status))
    }

    async fn insert(&mut self, profile: &NewProfile) -> RepoResult<Profile> {
        self.working.next_profile_no += 1;
        let now = self.working.now();
        let created = Profile {
            profile_no: ProfileNo::new(self.working.next_profile_no),
            member_no: profile.member_no,
            nickname: profile.nickname.clone(),
            phone_number: profile.phone_number.clone(),
            address: profile.address.clone(),
            status: profile.status,
            created_at: now,
            updated_at: now,
        };
        self.working.profiles.push(created.clone());
        Ok(created)
    }

    async fn update(&mut self, profile: &Profile) -> RepoResult<Profile> {
        let now = self.working.now();
        let stored = self
            .working
            .profiles
            .iter_mut()
            .find(|p| p.profile_no == profile.profile_no)
            .ok_or(DomainError::ProfileNotFound(profile.profile_no))?;
        stored.nickname = profile.nickname.clone();
        stored.phone_number = profile.phone_number.clone();
        stored.address = profile.address.clone();
        stored.status = profile.status;
        stored.updated_at = now;
        Ok(stored.clone())
    }

    async fn delete(&mut self, profile_no: ProfileNo) -> RepoResult<()> {
        let before = self.working.profiles.len();
        self.working.profiles.retain(|p| p.profile_no != profile_no);
        if self.working.profiles.len() == before {
            return Err(DomainError::ProfileNotFound(profile_no));
        }
        Ok(())
    }
}
