//! Profile handlers

use axum::{extract::State, Json};
use member_service::dto::{
    ApiResponse, CreateProfileRequest, ProfileResponse, UpdateProfileRequest,
};
use member_service::{finish, MemberProfileFacade};

use crate::extractors::{MemberPath, ProfilePath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Add a profile to a member
///
/// POST /api/members/{member_no}/profiles
pub async fn create_profile(
    State(state): State<AppState>,
    path: MemberPath,
    ValidatedJson(request): ValidatedJson<CreateProfileRequest>,
) -> ApiResult<Created<ApiResponse<ProfileResponse>>> {
    let mut uow = state.service_context().begin().await?;
    let result = MemberProfileFacade::new(uow.as_mut())
        .create_profile(path.member_no, request)
        .await;
    let profile = finish(uow, result).await?;

    let location = format!(
        "/api/members/{}/profiles/{}",
        path.member_no, profile.profile_no
    );
    Ok(Created::new(
        location,
        ApiResponse::created("Profile created", profile),
    ))
}

/// Overwrite a profile
///
/// PATCH /api/members/{member_no}/profiles/{profile_no}
pub async fn update_profile(
    State(state): State<AppState>,
    path: ProfilePath,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<ApiResponse<ProfileResponse>>> {
    let mut uow = state.service_context().begin().await?;
    let result = MemberProfileFacade::new(uow.as_mut())
        .update_profile(path.member_no, path.profile_no, request)
        .await;
    let profile = finish(uow, result).await?;

    Ok(Json(ApiResponse::ok("Profile updated", profile)))
}

/// Delete a profile
///
/// DELETE /api/members/{member_no}/profiles/{profile_no}
pub async fn delete_profile(
    State(state): State<AppState>,
    path: ProfilePath,
) -> ApiResult<Json<ApiResponse<String>>> {
    let mut uow = state.service_context().begin().await?;
    let result = MemberProfileFacade::new(uow.as_mut())
        .delete_profile(path.member_no, path.profile_no)
        .await;
    let nickname = finish(uow, result).await?;

    Ok(Json(ApiResponse::ok(
        "Profile deleted",
        format!("Deleted profile nickname: {nickname}"),
    )))
}
