//! PostgreSQL implementation of MemberRepository

use async_trait::async_trait;
use tracing::instrument;

use member_core::entities::{Member, NewMember};
use member_core::error::DomainError;
use member_core::traits::{MemberRepository, RepoResult};
use member_core::value_objects::{MemberNo, MemberStatus, PageRequest};

use crate::mappers::MemberInsert;
use crate::models::MemberModel;

use super::error::{map_db_error, map_unique_violation, member_not_found};
use super::unit_of_work::PgUnitOfWork;

/// Status value every member query filters on. Deleted members are invisible.
const ACTIVE_MEMBER_FILTER: &str = MemberStatus::Active.as_str();

#[async_trait]
impl MemberRepository for PgUnitOfWork {
    #[instrument(skip(self))]
    async fn find_by_no(&mut self, member_no: MemberNo) -> RepoResult<Option<Member>> {
        let result = sqlx::query_as::<_, MemberModel>(
            r"
            SELECT member_no, login_id, name, password, member_status, created_at, updated_at
            FROM members
            WHERE member_no = $1 AND member_status = $2
            ",
        )
        .bind(member_no.into_inner())
        .bind(ACTIVE_MEMBER_FILTER)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        result.map(Member::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_login_id(&mut self, login_id: &str) -> RepoResult<Option<Member>> {
        let result = sqlx::query_as::<_, MemberModel>(
            r"
            SELECT member_no, login_id, name, password, member_status, created_at, updated_at
            FROM members
            WHERE login_id = $1 AND member_status = $2
            ",
        )
        .bind(login_id)
        .bind(ACTIVE_MEMBER_FILTER)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        result.map(Member::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn search_by_name(&mut self, name: &str, page: PageRequest) -> RepoResult<Vec<Member>> {
        // strpos avoids LIKE wildcards in user input; strpos(x, '') is 1
        let rows = sqlx::query_as::<_, MemberModel>(
            r"
            SELECT member_no, login_id, name, password, member_status, created_at, updated_at
            FROM members
            WHERE member_status = $1 AND strpos(name, $2) > 0
            ORDER BY member_no ASC
            LIMIT $3 OFFSET $4
            ",
        )
        .bind(ACTIVE_MEMBER_FILTER)
        .bind(name)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Member::try_from).collect()
    }

    #[instrument(skip(self, member), fields(login_id = %member.login_id))]
    async fn insert(&mut self, member: &NewMember) -> RepoResult<Member> {
        let values = MemberInsert::new(member);

        let row = sqlx::query_as::<_, MemberModel>(
            r"
            INSERT INTO members (login_id, name, password, member_status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, NOW(), NOW())
            RETURNING member_no, login_id, name, password, member_status, created_at, updated_at
            ",
        )
        .bind(values.login_id)
        .bind(values.name)
        .bind(values.password)
        .bind(values.member_status)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(|e| {
            map_unique_violation(e, || DomainError::DuplicateLoginId(member.login_id.clone()))
        })?;

        Member::try_from(row)
    }

    #[instrument(skip(self))]
    async fn update_status(&mut self, member_no: MemberNo, status: MemberStatus) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE members
            SET member_status = $2, updated_at = NOW()
            WHERE member_no = $1 AND member_status = $3
            ",
        )
        .bind(member_no.into_inner())
        .bind(status.as_str())
        .bind(ACTIVE_MEMBER_FILTER)
        .execute(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(member_not_found(member_no));
        }

        Ok(())
    }
}
