//! Member handlers
//!
//! Endpoints for member registration, lookup, listing and withdrawal.

use axum::{extract::State, Json};
use member_service::dto::{
    ApiResponse, CreateMemberRequest, MemberDetailsResponse, MemberInfoResponse, MemberResponse,
};
use member_service::{finish, MemberProfileFacade};

use crate::extractors::{MemberPath, SearchQuery, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Create a member with its first profile
///
/// POST /api/members
pub async fn create_member(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateMemberRequest>,
) -> ApiResult<Created<ApiResponse<MemberResponse>>> {
    let mut uow = state.service_context().begin().await?;
    let result = MemberProfileFacade::new(uow.as_mut())
        .create_member(request)
        .await;
    let member = finish(uow, result).await?;

    let location = format!("/api/members/{}", member.member_no);
    Ok(Created::new(
        location,
        ApiResponse::created("Member created", member),
    ))
}

/// Soft-delete a member
///
/// DELETE /api/members/{member_no}
pub async fn delete_member(
    State(state): State<AppState>,
    path: MemberPath,
) -> ApiResult<Json<ApiResponse<String>>> {
    let mut uow = state.service_context().begin().await?;
    let result = MemberProfileFacade::new(uow.as_mut())
        .delete_member(path.member_no)
        .await;
    let login_id = finish(uow, result).await?;

    Ok(Json(ApiResponse::ok(
        "Member deleted",
        format!("Deleted member login id: {login_id}"),
    )))
}

/// Get a member with all of its profiles
///
/// GET /api/members/{member_no}
pub async fn get_member(
    State(state): State<AppState>,
    path: MemberPath,
) -> ApiResult<Json<ApiResponse<MemberDetailsResponse>>> {
    let mut uow = state.service_context().begin_read_only().await?;
    let result = MemberProfileFacade::new(uow.as_mut())
        .find_member_details(path.member_no)
        .await;
    let details = finish(uow, result).await?;

    Ok(Json(ApiResponse::ok("Member details found", details)))
}

/// List members with their main profile
///
/// GET /api/members?page=&size=&name=
pub async fn list_members(
    State(state): State<AppState>,
    SearchQuery(query): SearchQuery,
) -> ApiResult<Json<ApiResponse<Vec<MemberInfoResponse>>>> {
    let mut uow = state.service_context().begin_read_only().await?;
    let result = MemberProfileFacade::new(uow.as_mut())
        .find_members(&query)
        .await;
    let members = finish(uow, result).await?;

    Ok(Json(ApiResponse::ok("Members found", members)))
}
