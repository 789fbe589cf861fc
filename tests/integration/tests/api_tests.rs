//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET (local identity provider)
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_error, assert_json, assert_status, check_test_env, fixtures::*, TestServer,
    TEST_ADMIN_KEY,
};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_endpoints() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    for path in ["/health", "/health/live", "/health/ready"] {
        let response = server.get(path).await.expect("Request failed");
        assert_status(response, StatusCode::OK).await.unwrap();
    }
}

// ============================================================================
// Account Tests
// ============================================================================

#[tokio::test]
async fn test_signup_creates_inactive_account() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = SignupRequest::unique();

    let response = server.post("/api/v1/user/signup", &request).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(user.username, request.username);
    assert!(!user.is_active);
    assert!(!user.is_verified);
    assert!(uuid::Uuid::parse_str(&user.id).is_ok());
}

#[tokio::test]
async fn test_signup_duplicate_username() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = SignupRequest::unique();

    let response = server.post("/api/v1/user/signup", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.post("/api/v1/user/signup", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_signup_validation_errors() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let mut short_name = SignupRequest::unique();
    short_name.username = "ab".to_string();
    let response = server.post("/api/v1/user/signup", &short_name).await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "VALIDATION_ERROR");

    let mut weak = SignupRequest::unique();
    weak.password = "alllowercase".to_string();
    let response = server.post("/api/v1/user/signup", &weak).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login_requires_activation() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let signup = SignupRequest::unique();

    let response = server.post("/api/v1/user/signup", &signup).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let login = LoginRequest::from_signup(&signup);
    let response = server.post("/api/v1/user/login", &login).await.unwrap();
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "ACCOUNT_INACTIVE");

    let activate_path = format!("/api/v1/admin/users/{}/activate", user.id);
    let response = server.post_admin(&activate_path, None).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .post_admin(&activate_path, Some(TEST_ADMIN_KEY))
        .await
        .unwrap();
    let activated: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(activated.is_active);

    let response = server.post("/api/v1/user/login", &login).await.unwrap();
    let session: LoginResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(session.token_type, "Bearer");
    assert!(!session.access_token.is_empty());
    assert!(session.user.last_login.is_some());
}

#[tokio::test]
async fn test_login_wrong_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::create(&server).await.unwrap();

    let response = server
        .post(
            "/api/v1/user/login",
            &LoginRequest {
                username: user.username.clone(),
                password: "WrongPass123!".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_protected_routes_require_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/user/me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server.get_auth("/api/v1/user", "not-a-token").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_admin_verify() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::create(&server).await.unwrap();
    let path = format!("/api/v1/admin/users/{}/verify", user.id);

    let response = server.post_admin(&path, Some("wrong")).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.post_admin(&path, Some(TEST_ADMIN_KEY)).await.unwrap();
    let first: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(first.is_verified);

    let response = server.post_admin(&path, Some(TEST_ADMIN_KEY)).await.unwrap();
    let second: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(first.verified_at, second.verified_at);

    let ghost = format!("/api/v1/admin/users/{}/verify", uuid::Uuid::new_v4());
    let response = server.post_admin(&ghost, Some(TEST_ADMIN_KEY)).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Profile / Preferences Tests
// ============================================================================

#[tokio::test]
async fn test_profile_upsert_is_idempotent() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::create(&server).await.unwrap();
    let path = format!("/api/v1/user/{}/profile", user.id);
    let body = ProfileRequest::aged(27, "F", "Lisbon");

    let response = server.put_auth(&path, &user.token, &body).await.unwrap();
    let first: ProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(first.age, 27);

    let response = server.put_auth(&path, &user.token, &body).await.unwrap();
    let second: ProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(first.created_at, second.created_at);

    let response = server.get_auth("/api/v1/user/me", &user.token).await.unwrap();
    let me: UserDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.user.id, user.id);
    assert_eq!(me.profile.map(|p| p.id), Some(first.id));
    assert!(me.preferences.is_none());
}

#[tokio::test]
async fn test_cannot_edit_other_users_profile() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = TestUser::create(&server).await.unwrap();
    let bob = TestUser::create(&server).await.unwrap();

    let path = format!("/api/v1/user/{}/profile", bob.id);
    let response = server
        .put_auth(&path, &alice.token, &ProfileRequest::aged(30, "M", "Porto"))
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let path = format!("/api/v1/user/{}/preferences", bob.id);
    let response = server
        .put_auth(&path, &alice.token, &PreferencesRequest::default())
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_preferences_reject_inverted_age_range() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::create(&server).await.unwrap();
    let path = format!("/api/v1/user/{}/preferences", user.id);

    let inverted = PreferencesRequest {
        min_age: Some(40),
        max_age: Some(20),
        ..Default::default()
    };
    let response = server.put_auth(&path, &user.token, &inverted).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let valid = PreferencesRequest {
        min_age: Some(20),
        max_age: Some(40),
        ..Default::default()
    };
    let response = server.put_auth(&path, &user.token, &valid).await.unwrap();
    let saved: PreferencesResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(saved.min_age, Some(20));
    assert_eq!(saved.max_age, Some(40));
}

// ============================================================================
// Discovery / Swipe Tests
// ============================================================================

#[tokio::test]
async fn test_discovery_and_swipe_flow() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    // A city nobody else uses keeps the candidate pool to this test's users
    let city = format!("city-{}", unique_tag());

    let seeker = TestUser::create(&server).await.unwrap();
    let match_a = TestUser::create(&server).await.unwrap();
    let match_b = TestUser::create(&server).await.unwrap();
    let wrong_gender = TestUser::create(&server).await.unwrap();
    let too_old = TestUser::create(&server).await.unwrap();

    for (user, profile) in [
        (&seeker, ProfileRequest::aged(31, "M", &city)),
        (&match_a, ProfileRequest::aged(25, "F", &city)),
        (&match_b, ProfileRequest::aged(22, "F", &city)),
        (&wrong_gender, ProfileRequest::aged(25, "M", &city)),
        (&too_old, ProfileRequest::aged(45, "F", &city)),
    ] {
        let path = format!("/api/v1/user/{}/profile", user.id);
        let response = server.put_auth(&path, &user.token, &profile).await.unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let prefs = PreferencesRequest {
        min_age: Some(20),
        max_age: Some(30),
        gender: Some("F".to_string()),
        city: Some(city.clone()),
    };
    let path = format!("/api/v1/user/{}/preferences", seeker.id);
    let response = server.put_auth(&path, &seeker.token, &prefs).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get_auth("/api/v1/user", &seeker.token).await.unwrap();
    let page: Page<CandidateResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let mut ids: Vec<_> = page.data.iter().map(|c| c.id.clone()).collect();
    let mut expected = vec![match_a.id.clone(), match_b.id.clone()];
    ids.sort();
    expected.sort();
    assert_eq!(ids, expected);
    assert_eq!(page.pagination.count, 2);
    assert!(page.data.iter().all(|c| c.profile.is_some()));

    // Swipe on one match; it must never come back
    let swipe = SwipeRequest {
        swiped_user_id: match_a.id.clone(),
        is_liked: true,
    };
    let response = server
        .post_auth("/api/v1/swipe", &seeker.token, &swipe)
        .await
        .unwrap();
    let recorded: SwipeResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(recorded.user_id, seeker.id);
    assert_eq!(recorded.swiped_user_id, match_a.id);
    assert!(recorded.is_liked);

    let response = server.get_auth("/api/v1/user", &seeker.token).await.unwrap();
    let page: Page<CandidateResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let ids: Vec<_> = page.data.iter().map(|c| c.id.clone()).collect();
    assert_eq!(ids, vec![match_b.id.clone()]);

    // Page-based pagination past the end is empty, not an error
    let response = server
        .get_auth("/api/v1/user?page=3&limit=5", &seeker.token)
        .await
        .unwrap();
    let page: Page<CandidateResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(page.data.is_empty());
    assert_eq!(page.pagination.offset, 10);
    assert_eq!(page.pagination.limit, 0);
    assert_eq!(page.pagination.quota_reached, Some(true));

    let response = server.get_auth("/api/v1/swipe", &seeker.token).await.unwrap();
    let history: Page<SwipeResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(history.data.len(), 1);
    assert_eq!(history.data[0].id, recorded.id);
}

#[tokio::test]
async fn test_swipe_errors() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::create(&server).await.unwrap();

    let malformed = SwipeRequest {
        swiped_user_id: "not-a-uuid".to_string(),
        is_liked: false,
    };
    let response = server
        .post_auth("/api/v1/swipe", &user.token, &malformed)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let unknown = SwipeRequest {
        swiped_user_id: uuid::Uuid::new_v4().to_string(),
        is_liked: true,
    };
    let response = server
        .post_auth("/api/v1/swipe", &user.token, &unknown)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_unverified_quota_caps_reachable_positions() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = TestUser::create(&server).await.unwrap();

    // No preferences: every active user is eligible, but only positions [0, 10) are reachable
    let response = server
        .get_auth("/api/v1/user?offset=0&limit=100", &user.token)
        .await
        .unwrap();
    let page: Page<CandidateResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(page.data.len() <= 10);
    assert_eq!(page.pagination.limit, 10);
    assert_eq!(page.pagination.quota_reached, Some(true));

    let response = server
        .get_auth("/api/v1/user?offset=10", &user.token)
        .await
        .unwrap();
    let page: Page<CandidateResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(page.data.is_empty());
    assert_eq!(page.pagination.quota_reached, Some(true));

    let response = server.get_auth("/api/v1/swipe", &user.token).await.unwrap();
    let history: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(history["pagination"].get("quota_reached").is_none());
}
