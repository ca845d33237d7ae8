//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET, API_PORT
//!
//! The upstream joke source is replaced by a local stub server.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    access_token_cookie, assert_json, assert_status, check_test_env, fixtures::*, Session,
    TestServer, UpstreamBehavior,
};
use reqwest::StatusCode;

async fn signed_up(server: &TestServer) -> (Session, UserResponse) {
    let session = server.session().unwrap();
    let response = session
        .post("/api/auth/signup", &SignUpRequest::unique())
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    (session, user)
}

async fn fetch_joke(session: &Session) -> JokeResponse {
    let response = session.get("/api/joke").await.unwrap();
    assert!(response.status().is_success(), "status {}", response.status());
    response.json().await.unwrap()
}

async fn vote(session: &Session, joke_id: &str, emoji: &str) -> VoteResponse {
    let response = session
        .post(&format!("/api/joke/{joke_id}/vote"), &VoteRequest::new(emoji))
        .await
        .unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
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
    let response = server.session().unwrap().get("/health").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.session().unwrap().get("/health/ready").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_sign_up() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let session = server.session().unwrap();
    let request = SignUpRequest::unique();

    let response = session.post("/api/auth/signup", &request).await.unwrap();
    assert!(access_token_cookie(&response).is_some());
    let user: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(user.email, request.email);
    assert_eq!(user.first_name, "Test");
    assert_eq!(user.last_name, "User");
    assert!(user.voted_jokes.is_empty());
}

#[tokio::test]
async fn test_sign_up_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let session = server.session().unwrap();
    let request = SignUpRequest::unique();

    session.post("/api/auth/signup", &request).await.unwrap();
    let response = session.post("/api/auth/signup", &request).await.unwrap();

    let body: ErrorBody = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(body.error.message, "User already exists");
}

#[tokio::test]
async fn test_sign_up_weak_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = SignUpRequest {
        password: "weakpass".to_string(),
        ..SignUpRequest::unique()
    };

    let response = server
        .session()
        .unwrap()
        .post("/api/auth/signup", &request)
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "WEAK_PASSWORD");
}

#[tokio::test]
async fn test_log_in_and_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = SignUpRequest::unique();
    server
        .session()
        .unwrap()
        .post("/api/auth/signup", &request)
        .await
        .unwrap();

    let session = server.session().unwrap();
    let response = session
        .post("/api/auth/login", &LogInRequest::from_sign_up(&request))
        .await
        .unwrap();
    let token = access_token_cookie(&response).expect("access_token cookie");
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(user.email, request.email);

    let response = session.get("/api/auth/check").await.unwrap();
    let checked: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(checked.id, user.id);

    // Bearer tokens work without the cookie
    let fresh = server.session().unwrap();
    let response = fresh.get_bearer("/api/auth/check", &token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_log_in_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = LogInRequest {
        email: "nonexistent@example.com".to_string(),
        password: "WrongPass123".to_string(),
    };

    let response = server
        .session()
        .unwrap()
        .post("/api/auth/login", &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_logout_clears_session() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (session, _) = signed_up(&server).await;

    let response = session
        .post("/api/auth/logout", &serde_json::json!({}))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = session.get("/api/auth/check").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_protected_route_without_session() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.session().unwrap().get("/api/joke").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.error.code, "MISSING_AUTH");
}

// ============================================================================
// Joke Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_joke_dedups_by_upstream_id() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (session, _) = signed_up(&server).await;

    let response = session.get("/api/joke").await.unwrap();
    let first: JokeResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(first.counts(), vec![0, 0, 0]);
    assert_eq!(
        first.votes.iter().map(|v| v.label.as_str()).collect::<Vec<_>>(),
        vec!["😂", "👍", "❤️"]
    );

    let response = session.get("/api/joke").await.unwrap();
    let second: JokeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(second.id, first.id);
    assert_eq!(second.question, first.question);
}

#[tokio::test]
async fn test_numeric_upstream_id() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start_with_upstream(UpstreamBehavior::unique_numeric_id())
        .await
        .expect("Failed to start server");
    let (session, _) = signed_up(&server).await;

    let joke = fetch_joke(&session).await;
    assert!(joke.external_id.parse::<i64>().is_ok());
}

#[tokio::test]
async fn test_upstream_failure() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start_with_upstream(UpstreamBehavior::Failing)
        .await
        .expect("Failed to start server");
    let (session, _) = signed_up(&server).await;

    let response = session.get("/api/joke").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
    assert_eq!(body.error.code, "UPSTREAM_ERROR");
}

// ============================================================================
// Vote Tests
// ============================================================================

#[tokio::test]
async fn test_vote_cast_retract_switch() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (session, _) = signed_up(&server).await;
    let joke = fetch_joke(&session).await;
    let base = joke.counts();

    let cast = vote(&session, &joke.id, "😂").await;
    assert_eq!(cast.message, "Vote updated!");
    assert_eq!(cast.joke.counts(), vec![base[0] + 1, base[1], base[2]]);

    let retracted = vote(&session, &joke.id, "😂").await;
    assert_eq!(retracted.joke.counts(), base);

    vote(&session, &joke.id, "😂").await;
    let switched = vote(&session, &joke.id, "❤️").await;
    assert_eq!(switched.joke.counts(), vec![base[0], base[1], base[2] + 1]);

    let response = session.get("/api/auth/check").await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    let entries: Vec<_> = user.voted_jokes.iter().filter(|v| v.joke_id == joke.id).collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].emoji, "❤️");
}

#[tokio::test]
async fn test_vote_rejects_unknown_emoji() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (session, _) = signed_up(&server).await;
    let joke = fetch_joke(&session).await;

    let response = session
        .post(&format!("/api/joke/{}/vote", joke.id), &VoteRequest::new("X"))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "INVALID_EMOJI");

    let after = fetch_joke(&session).await;
    assert_eq!(after.counts(), joke.counts());
}

#[tokio::test]
async fn test_vote_on_missing_joke() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (session, _) = signed_up(&server).await;

    let path = format!("/api/joke/{}/vote", uuid::Uuid::new_v4());
    let response = session.post(&path, &VoteRequest::new("👍")).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_concurrent_votes_from_many_users() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (first, _) = signed_up(&server).await;
    let joke = fetch_joke(&first).await;
    let base = joke.counts();

    let mut sessions = Vec::new();
    for _ in 0..8 {
        sessions.push(signed_up(&server).await.0);
    }

    let mut tasks = tokio::task::JoinSet::new();
    for (i, session) in sessions.into_iter().enumerate() {
        let joke_id = joke.id.clone();
        tasks.spawn(async move {
            let emoji = ["😂", "👍", "❤️"][i % 3];
            vote(&session, &joke_id, emoji).await;
        });
    }
    while let Some(result) = tasks.join_next().await {
        result.unwrap();
    }

    let after = fetch_joke(&first).await;
    let added: u32 = after.counts().iter().sum::<u32>() - base.iter().sum::<u32>();
    assert_eq!(added, 8);
    assert_eq!(after.counts(), vec![base[0] + 3, base[1] + 3, base[2] + 2]);
}

// ============================================================================
// Stats Tests
// ============================================================================

#[tokio::test]
async fn test_user_stats() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (session, _) = signed_up(&server).await;

    let response = session.get("/api/user/common-emoji").await.unwrap();
    let common: MostCommonEmoji = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(common.most_common_emoji, None);

    let joke = fetch_joke(&session).await;
    vote(&session, &joke.id, "👍").await;

    let response = session.get("/api/user/voted-jokes").await.unwrap();
    let voted: Vec<VotedJoke> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(voted.len(), 1);
    assert_eq!(voted[0].joke_id, joke.id);
    assert_eq!(voted[0].user_vote, "👍");
    assert_eq!(voted[0].question, joke.question);

    let response = session.get("/api/user/common-emoji").await.unwrap();
    let common: MostCommonEmoji = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(common.most_common_emoji.as_deref(), Some("👍"));

    let response = session.get("/api/user/vote-count-24h").await.unwrap();
    let count: VoteCount = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(count.vote_count, 1);

    let response = session.get("/api/user/vote-count-24h?hours=1000").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}
