//! Member list query extractor
//!
//! Extracts `page`, `size` and `name` from the query string.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use member_service::dto::MemberSearchQuery;

use crate::response::ApiError;

/// Member list query; a malformed value is `INVALID_QUERY_PARAMETER`
#[derive(Debug, Clone, Default)]
pub struct SearchQuery(pub MemberSearchQuery);

#[async_trait]
impl<S> FromRequestParts<S> for SearchQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<MemberSearchQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        Ok(SearchQuery(query))
    }
}
