//! PostgreSQL implementation of ProfileRepository

use async_trait::async_trait;
use tracing::instrument;

use member_core::entities::{NewProfile, Profile};
use member_core::traits::{ProfileRepository, RepoResult};
use member_core::value_objects::{MemberNo, ProfileNo, ProfileStatus};

use crate::mappers::{profiles_from_models, ProfileInsert, ProfileUpdateRow};
use crate::models::ProfileModel;

use super::error::{map_db_error, profile_not_found};
use super::unit_of_work::PgUnitOfWork;

#[async_trait]
impl ProfileRepository for PgUnitOfWork {
    #[instrument(skip(self))]
    async fn find_by_no(&mut self, profile_no: ProfileNo) -> RepoResult<Option<Profile>> {
        let result = sqlx::query_as::<_, ProfileModel>(
            r"
            SELECT profile_no, member_no, nickname, phone_number, address, profile_status,
                   created_at, updated_at
            FROM profiles
            WHERE profile_no = $1
            ",
        )
        .bind(profile_no.into_inner())
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        result.map(Profile::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_member(&mut self, member_no: MemberNo) -> RepoResult<Vec<Profile>> {
        let rows = sqlx::query_as::<_, ProfileModel>(
            r"
            SELECT profile_no, member_no, nickname, phone_number, address, profile_status,
                   created_at, updated_at
            FROM profiles
            WHERE member_no = $1
            ORDER BY created_at ASC, profile_no ASC
            ",
        )
        .bind(member_no.into_inner())
        .fetch_all(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        profiles_from_models(rows)
    }

    #[instrument(skip(self))]
    async fn find_by_member_and_status(
        &mut self,
        member_no: MemberNo,
        status: ProfileStatus,
    ) -> RepoResult<Option<Profile>> {
        let result = sqlx::query_as::<_, ProfileModel>(
            r"
            SELECT profile_no, member_no, nickname, phone_number, address, profile_status,
                   created_at, updated_at
            FROM profiles
            WHERE member_no = $1 AND profile_status = $2
            ORDER BY created_at ASC, profile_no ASC
            LIMIT 1
            ",
        )
        .bind(member_no.into_inner())
        .bind(status.as_str())
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        result.map(Profile::try_from).transpose()
    }

    #[instrument(skip(self, profile), fields(member_no = %profile.member_no))]
    async fn insert(&mut self, profile: &NewProfile) -> RepoResult<Profile> {
        let values = ProfileInsert::new(profile);

        let row = sqlx::query_as::<_, ProfileModel>(
            r"
            INSERT INTO profiles (member_no, nickname, phone_number, address, profile_status,
                                  created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, NOW(), NOW())
            RETURNING profile_no, member_no, nickname, phone_number, address, profile_status,
                      created_at, updated_at
            ",
        )
        .bind(values.member_no)
        .bind(values.nickname)
        .bind(values.phone_number)
        .bind(values.address)
        .bind(values.profile_status)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Profile::try_from(row)
    }

    #[instrument(skip(self, profile), fields(profile_no = %profile.profile_no))]
    async fn update(&mut self, profile: &Profile) -> RepoResult<Profile> {
        let values = ProfileUpdateRow::new(profile);

        let row = sqlx::query_as::<_, ProfileModel>(
            r"
            UPDATE profiles
            SET nickname = $2, phone_number = $3, address = $4, profile_status = $5,
                updated_at = NOW()
            WHERE profile_no = $1
            RETURNING profile_no, member_no, nickname, phone_number, address, profile_status,
                      created_at, updated_at
            ",
        )
        .bind(values.profile_no)
        .bind(values.nickname)
        .bind(values.phone_number)
        .bind(values.address)
        .bind(values.profile_status)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| profile_not_found(profile.profile_no))?;

        Profile::try_from(row)
    }

    #[instrument(skip(self))]
    async fn delete(&mut self, profile_no: ProfileNo) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM profiles WHERE profile_no = $1
            ",
        )
        .bind(profile_no.into_inner())
        .execute(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(profile_not_found(profile_no));
        }

        Ok(())
    }
}
