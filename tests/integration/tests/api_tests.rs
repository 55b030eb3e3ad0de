//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

async fn create_member(server: &TestServer, request: &CreateMemberRequest) -> MemberCreated {
    let response = server.post("/api/members", request).await.unwrap();
    let body: Envelope<MemberCreated> = assert_json(response, StatusCode::CREATED).await.unwrap();
    body.data
}

async fn create_profile(server: &TestServer, member_no: i64, nickname: &str) -> ProfileData {
    let response = server
        .post(
            &format!("/api/members/{member_no}/profiles"),
            &ProfileRequest::new(nickname),
        )
        .await
        .unwrap();
    let body: Envelope<ProfileData> = assert_json(response, StatusCode::CREATED).await.unwrap();
    body.data
}

async fn member_details(server: &TestServer, member_no: i64) -> MemberDetails {
    let response = server
        .get(&format!("/api/members/{member_no}"))
        .await
        .unwrap();
    let body: Envelope<MemberDetails> = assert_json(response, StatusCode::OK).await.unwrap();
    body.data
}

async fn expect_error(response: reqwest::Response, status: StatusCode, code: &str) -> ErrorEnvelope {
    let body: ErrorEnvelope = assert_json(response, status).await.unwrap();
    assert_eq!(body.status, status.as_u16());
    assert_eq!(body.code, code);
    body
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "healthy");
}

// ============================================================================
// Member Tests
// ============================================================================

#[tokio::test]
async fn test_create_member() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateMemberRequest::unique();

    let response = server.post("/api/members", &request).await.unwrap();
    let location = response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .map(String::from)
        .expect("Location header");
    let body: serde_json::Value = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(body["code"], "CREATED");
    assert_eq!(body["message"], "Member created");
    assert_eq!(body["data"]["loginId"], request.login_id.as_str());
    assert_eq!(body["data"]["profile"]["profileStatus"], "MAIN");
    assert!(body["data"].get("password").is_none());

    let member_no = body["data"]["memberNo"].as_i64().unwrap();
    assert_eq!(location, format!("/api/members/{member_no}"));
}

#[tokio::test]
async fn test_create_member_duplicate_login_id() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateMemberRequest::unique();
    create_member(&server, &request).await;

    let response = server.post("/api/members", &request).await.unwrap();
    expect_error(response, StatusCode::BAD_REQUEST, "DUPLICATE_LOGIN_ID").await;

    let query = format!("/api/members?name={}", request.name);
    let response = server.get(&query).await.unwrap();
    let body: Envelope<Vec<MemberInfo>> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.data.len(), 1);
}

#[tokio::test]
async fn test_create_member_validation() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = CreateMemberRequest::unique();
    request.name = "Alice".to_string();

    let response = server.post("/api/members", &request).await.unwrap();
    let body = expect_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
    assert_eq!(body.error, "BAD_REQUEST");
    assert!(body.message.contains("name must be 2-8 Hangul syllables"));

    let response = server
        .post("/api/members", &json!({ "loginId": "abcd" }))
        .await
        .unwrap();
    expect_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

#[tokio::test]
async fn test_create_member_malformed_body() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.post_raw("/api/members", "{\"loginId\": ").await.unwrap();
    let body = expect_error(response, StatusCode::BAD_REQUEST, "INVALID_BODY").await;
    assert_eq!(body.message, "JSON parse error");
}

#[tokio::test]
async fn test_get_member_details() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let created = create_member(&server, &CreateMemberRequest::unique()).await;
    create_profile(&server, created.member_no, "둘째").await;

    let details = member_details(&server, created.member_no).await;
    assert_eq!(details.login_id, created.login_id);
    assert_eq!(details.member_status, "ACTIVE");
    assert_eq!(details.profiles.len(), 2);
    assert_eq!(details.profiles[0].profile_status, "MAIN");
    assert_eq!(details.profiles[1].profile_status, "NORMAL");
}

#[tokio::test]
async fn test_get_unknown_member() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/members/9223372036854775807").await.unwrap();
    let body = expect_error(response, StatusCode::NOT_FOUND, "UNKNOWN_MEMBER").await;
    assert_eq!(body.error, "NOT_FOUND");

    let response = server.get("/api/members/abc").await.unwrap();
    expect_error(response, StatusCode::BAD_REQUEST, "INVALID_PATH_PARAMETER").await;
}

#[tokio::test]
async fn test_delete_member() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateMemberRequest::unique();
    let created = create_member(&server, &request).await;

    let response = server
        .delete(&format!("/api/members/{}", created.member_no))
        .await
        .unwrap();
    let body: Envelope<String> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "Member deleted");
    assert_eq!(
        body.data,
        format!("Deleted member login id: {}", request.login_id)
    );

    // Gone from every read
    let response = server
        .get(&format!("/api/members/{}", created.member_no))
        .await
        .unwrap();
    expect_error(response, StatusCode::NOT_FOUND, "UNKNOWN_MEMBER").await;

    let response = server
        .delete(&format!("/api/members/{}", created.member_no))
        .await
        .unwrap();
    expect_error(response, StatusCode::NOT_FOUND, "UNKNOWN_MEMBER").await;

    // Login id can be registered again
    let again = create_member(&server, &request).await;
    assert_ne!(again.member_no, created.member_no);
}

#[tokio::test]
async fn test_list_members_filter_and_paging() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let name = unique_name();
    let mut created = Vec::new();
    for _ in 0..3 {
        created.push(create_member(&server, &CreateMemberRequest::named(&name)).await);
    }

    let response = server
        .get(&format!("/api/members?name={name}&page=0&size=2"))
        .await
        .unwrap();
    let first: Envelope<Vec<MemberInfo>> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(first.code, "OK");
    assert_eq!(first.message, "Members found");
    assert_eq!(first.data.len(), 2);
    assert_eq!(first.data[0].member_no, created[0].member_no);
    assert_eq!(first.data[1].member_no, created[1].member_no);
    assert!(first.data.iter().all(|m| m.main_profile.profile_status == "MAIN"));

    let response = server
        .get(&format!("/api/members?name={name}&page=1&size=2"))
        .await
        .unwrap();
    let second: Envelope<Vec<MemberInfo>> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(second.data.len(), 1);
    assert_eq!(second.data[0].member_no, created[2].member_no);
    assert_eq!(second.data[0].name, name);

    let response = server.get("/api/members?page=abc").await.unwrap();
    expect_error(response, StatusCode::BAD_REQUEST, "INVALID_QUERY_PARAMETER").await;
}

#[tokio::test]
async fn test_list_members_without_main_profile() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateMemberRequest::unique();
    let created = create_member(&server, &request).await;
    let second = create_profile(&server, created.member_no, "둘째").await;

    // Removing the MAIN profile leaves no MAIN behind
    let response = server
        .delete(&format!(
            "/api/members/{}/profiles/{}",
            created.member_no, created.profile.profile_no
        ))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get(&format!("/api/members?name={}", request.name))
        .await
        .unwrap();
    let body: Envelope<Vec<MemberInfo>> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.data.len(), 1);
    assert_eq!(body.data[0].main_profile.profile_no, second.profile_no);
    assert_eq!(body.data[0].main_profile.profile_status, "NORMAL");
}

// ============================================================================
// Profile Tests
// ============================================================================

#[tokio::test]
async fn test_create_profile() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let created = create_member(&server, &CreateMemberRequest::unique()).await;

    let response = server
        .post(
            &format!("/api/members/{}/profiles", created.member_no),
            &ProfileRequest::new("둘째"),
        )
        .await
        .unwrap();
    let location = response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .map(String::from)
        .expect("Location header");
    let body: Envelope<ProfileData> = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(body.message, "Profile created");
    assert_eq!(body.data.profile_status, "NORMAL");
    assert_eq!(
        location,
        format!(
            "/api/members/{}/profiles/{}",
            created.member_no, body.data.profile_no
        )
    );

    let response = server
        .post("/api/members/9223372036854775807/profiles", &ProfileRequest::new("유령"))
        .await
        .unwrap();
    expect_error(response, StatusCode::NOT_FOUND, "UNKNOWN_MEMBER").await;
}

#[tokio::test]
async fn test_profile_lifecycle_scenario() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateMemberRequest::unique();
    let created = create_member(&server, &request).await;
    let member_no = created.member_no;
    let a = created.profile;

    // B joins as NORMAL
    let b = create_profile(&server, member_no, "비비").await;
    assert_eq!(b.profile_status, "NORMAL");

    // B becomes MAIN, A is demoted
    let response = server
        .patch(
            &format!("/api/members/{member_no}/profiles/{}", b.profile_no),
            &UpdateProfileRequest::new("비비", "MAIN"),
        )
        .await
        .unwrap();
    let body: Envelope<ProfileData> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "Profile updated");
    assert_eq!(body.data.profile_status, "MAIN");
    assert_eq!(body.data.address.as_deref(), Some("Seoul"));

    let details = member_details(&server, member_no).await;
    let mains: Vec<i64> = details
        .profiles
        .iter()
        .filter(|p| p.profile_status == "MAIN")
        .map(|p| p.profile_no)
        .collect();
    assert_eq!(mains, vec![b.profile_no]);

    // A can be deleted
    let response = server
        .delete(&format!("/api/members/{member_no}/profiles/{}", a.profile_no))
        .await
        .unwrap();
    let body: Envelope<String> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "Profile deleted");
    assert_eq!(body.data, format!("Deleted profile nickname: {}", a.nickname));

    // B is the last one
    let response = server
        .delete(&format!("/api/members/{member_no}/profiles/{}", b.profile_no))
        .await
        .unwrap();
    let body = expect_error(response, StatusCode::CONFLICT, "CANNOT_DELETE_PROFILE").await;
    assert_eq!(body.error, "CONFLICT");

    assert_eq!(member_details(&server, member_no).await.profiles.len(), 1);
}

#[tokio::test]
async fn test_lone_profile_stays_main() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let created = create_member(&server, &CreateMemberRequest::unique()).await;

    let response = server
        .patch(
            &format!(
                "/api/members/{}/profiles/{}",
                created.member_no, created.profile.profile_no
            ),
            &UpdateProfileRequest::new("새이름", "NORMAL"),
        )
        .await
        .unwrap();
    let body: Envelope<ProfileData> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.data.profile_status, "MAIN");
    assert_eq!(body.data.nickname, "새이름");
}

#[tokio::test]
async fn test_demoting_main_promotes_oldest() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let created = create_member(&server, &CreateMemberRequest::unique()).await;
    let member_no = created.member_no;
    let second = create_profile(&server, member_no, "둘째").await;
    create_profile(&server, member_no, "셋째").await;

    let response = server
        .patch(
            &format!(
                "/api/members/{member_no}/profiles/{}",
                created.profile.profile_no
            ),
            &UpdateProfileRequest::new("첫째", "NORMAL"),
        )
        .await
        .unwrap();
    let body: Envelope<ProfileData> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.data.profile_status, "NORMAL");

    let details = member_details(&server, member_no).await;
    let mains: Vec<i64> = details
        .profiles
        .iter()
        .filter(|p| p.profile_status == "MAIN")
        .map(|p| p.profile_no)
        .collect();
    assert_eq!(mains, vec![second.profile_no]);
}

#[tokio::test]
async fn test_update_profile_of_other_member() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = create_member(&server, &CreateMemberRequest::unique()).await;
    let other = create_member(&server, &CreateMemberRequest::unique()).await;

    let response = server
        .patch(
            &format!(
                "/api/members/{}/profiles/{}",
                other.member_no, owner.profile.profile_no
            ),
            &UpdateProfileRequest::new("탈취", "MAIN"),
        )
        .await
        .unwrap();
    expect_error(response, StatusCode::BAD_REQUEST, "NON_MATCH_MEMBER_NO").await;

    let details = member_details(&server, owner.member_no).await;
    assert_eq!(details.profiles[0].nickname, owner.profile.nickname);
    assert_eq!(details.profiles[0].profile_status, "MAIN");
}

#[tokio::test]
async fn test_update_profile_invalid_status() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let created = create_member(&server, &CreateMemberRequest::unique()).await;

    let response = server
        .patch(
            &format!(
                "/api/members/{}/profiles/{}",
                created.member_no, created.profile.profile_no
            ),
            &UpdateProfileRequest::new("바뀜", "BOSS"),
        )
        .await
        .unwrap();
    expect_error(response, StatusCode::BAD_REQUEST, "INVALID_STATUS").await;

    let details = member_details(&server, created.member_no).await;
    assert_eq!(details.profiles[0].nickname, created.profile.nickname);
}

#[tokio::test]
async fn test_unknown_profile() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let created = create_member(&server, &CreateMemberRequest::unique()).await;

    let response = server
        .delete(&format!(
            "/api/members/{}/profiles/9223372036854775807",
            created.member_no
        ))
        .await
        .unwrap();
    expect_error(response, StatusCode::NOT_FOUND, "UNKNOWN_PROFILE").await;
}
