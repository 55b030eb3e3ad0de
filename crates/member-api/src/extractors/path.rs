//! Path parameter extractors
//!
//! Type-safe extraction of member and profile numbers from path parameters.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use member_core::{MemberNo, ProfileNo};
use serde::Deserialize;

use crate::response::ApiError;

#[derive(Debug, Deserialize)]
struct RawMemberPath {
    member_no: String,
}

#[derive(Debug, Deserialize)]
struct RawProfilePath {
    member_no: String,
    profile_no: String,
}

fn parse_member_no(raw: &str) -> Result<MemberNo, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path(format!("Invalid memberNo: {raw}")))
}

fn parse_profile_no(raw: &str) -> Result<ProfileNo, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path(format!("Invalid profileNo: {raw}")))
}

async fn raw_path<T, S>(parts: &mut Parts, state: &S) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned + Send,
    S: Send + Sync,
{
    let Path(raw) = Path::<T>::from_request_parts(parts, state)
        .await
        .map_err(|e| ApiError::invalid_path(e.body_text()))?;
    Ok(raw)
}

/// `/members/:member_no`
#[derive(Debug, Clone, Copy)]
pub struct MemberPath {
    pub member_no: MemberNo,
}

#[async_trait]
impl<S> FromRequestParts<S> for MemberPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw: RawMemberPath = raw_path(parts, state).await?;
        Ok(Self {
            member_no: parse_member_no(&raw.member_no)?,
        })
    }
}

/// `/members/:member_no/profiles/:profile_no`
#[derive(Debug, Clone, Copy)]
pub struct ProfilePath {
    pub member_no: MemberNo,
    pub profile_no: ProfileNo,
}

#[async_trait]
impl<S> FromRequestParts<S> for ProfilePath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw: RawProfilePath = raw_path(parts, state).await?;
        Ok(Self {
            member_no: parse_member_no(&raw.member_no)?,
            profile_no: parse_profile_no(&raw.profile_no)?,
        })
    }
}
