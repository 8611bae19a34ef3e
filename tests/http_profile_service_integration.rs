//! Integration tests for the HTTP profile service adapter.
//!
//! An in-process axum app stands in for the profile service on an ephemeral
//! port. The tests verify:
//! 1. Request bodies use the service's wire format
//! 2. Status codes and error details map onto `ServiceError`
//! 3. The login, read and fan-out paths work end to end

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use secrecy::Secret;
use serde_json::{json, Value};

use profile_wizard::adapters::{
    HttpProfileService, HttpProfileServiceConfig, InMemoryCredentialStore,
};
use profile_wizard::application::{
    AccessError, FetchProfileHandler, LoginCommand, LoginHandler, SubmissionError,
    SubmissionOrchestrator,
};
use profile_wizard::domain::foundation::{AccessToken, ProfileId};
use profile_wizard::domain::profile::{ExperienceField, PersonalInfoField, ProfileDraft};
use profile_wizard::ports::{AuthProvider, ServiceError};

// =============================================================================
// Fake profile service
// =============================================================================

const USER_ID: &str = "6f1b7c1e-2a3d-4c36-9d67-5c4f6f8f8a10";
const TOKEN: &str = "tok-123";

#[derive(Clone, Default)]
struct FakeService {
    /// (path, body) of every JSON request received.
    requests: Arc<Mutex<Vec<(String, Value)>>>,
}

impl FakeService {
    fn record(&self, path: impl Into<String>, body: Value) {
        self.requests.lock().unwrap().push((path.into(), body));
    }

    fn requests(&self) -> Vec<(String, Value)> {
        self.requests.lock().unwrap().clone()
    }
}

async fn signup(State(fake): State<FakeService>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    fake.record("auth/signup", body.clone());
    if body["email"] == "taken@example.com" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "detail": "Email already registered" })),
        );
    }
    (
        StatusCode::CREATED,
        Json(json!({ "id": USER_ID, "email": body["email"], "name": body["name"] })),
    )
}

async fn token(Form(form): Form<HashMap<String, String>>) -> (StatusCode, Json<Value>) {
    let valid = form.get("grant_type").map(String::as_str) == Some("password")
        && form.get("username").map(String::as_str) == Some("ada@example.com")
        && form.get("password").map(String::as_str) == Some("engine");
    if valid {
        (
            StatusCode::OK,
            Json(json!({ "access_token": TOKEN, "token_type": "bearer" })),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "detail": "Incorrect username or password" })),
        )
    }
}

async fn profile(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    let expected = format!("Bearer {}", TOKEN);
    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        == Some(expected.as_str());
    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "detail": "Could not validate credentials" })),
        );
    }
    (
        StatusCode::OK,
        Json(json!({
            "id": USER_ID,
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "location": "London",
            "experiences": [],
            "educations": [],
            "projects": [],
            "skills": [
                { "id": 1, "name": "Mathematics", "category": "Science" },
                { "id": 2, "name": "Poetry", "category": null }
            ]
        })),
    )
}

async fn create_root(State(fake): State<FakeService>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    fake.record("users", body);
    (StatusCode::CREATED, Json(json!({ "id": USER_ID })))
}

async fn create_sub_item(
    State(fake): State<FakeService>,
    Path((user_id, collection)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    fake.record(format!("users/{}/{}", user_id, collection), body.clone());
    if body["name"] == "Forbidden" {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "detail": [
                { "loc": ["body", "name"], "msg": "name is not allowed", "type": "value_error" }
            ]})),
        );
    }
    let id = fake.requests().len() as i64;
    (StatusCode::CREATED, Json(json!({ "id": id })))
}

async fn spawn_fake() -> (String, FakeService) {
    let fake = FakeService::default();
    let api = Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/token", post(token))
        .route("/users/profile", get(profile))
        .route("/users", post(create_root))
        .route("/users/:id/:collection", post(create_sub_item))
        .with_state(fake.clone());
    let app = Router::new().nest("/api", api);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/api", addr), fake)
}

fn client(base_url: &str) -> Arc<HttpProfileService> {
    Arc::new(HttpProfileService::new(HttpProfileServiceConfig::new(base_url)).unwrap())
}

fn draft(email: &str) -> ProfileDraft {
    let mut draft = ProfileDraft::new();
    let info = &mut draft.personal_info;
    info.set_field(PersonalInfoField::Name, "Ada Lovelace").unwrap();
    info.set_field(PersonalInfoField::Email, email).unwrap();
    info.set_field(PersonalInfoField::Password, "engine").unwrap();
    info.set_field(PersonalInfoField::ConfirmPassword, "engine").unwrap();
    info.set_field(PersonalInfoField::LinkedinUrl, "  ").unwrap();
    draft.experiences.add();
    draft
        .experiences
        .update_at(0, ExperienceField::CompanyName, "Analytical Engines")
        .unwrap();
    draft
        .experiences
        .update_at(0, ExperienceField::StartDate, "1842-01-01")
        .unwrap();
    draft.skill_groups.update_skills("Science", "Mathematics");
    draft
}

// =============================================================================
// Atomic signup
// =============================================================================

#[tokio::test]
async fn signup_sends_snake_case_payload_and_returns_id() {
    let (base_url, fake) = spawn_fake().await;
    let orchestrator = SubmissionOrchestrator::atomic(client(&base_url));

    let receipt = orchestrator.submit(&draft("ada@example.com")).await.unwrap();

    assert_eq!(receipt.profile_id.to_string(), USER_ID);
    let requests = fake.requests();
    assert_eq!(requests.len(), 1);
    let (path, body) = &requests[0];
    assert_eq!(path, "auth/signup");
    assert_eq!(body["password"], json!("engine"));
    assert!(body.get("confirm_password").is_none());
    assert_eq!(body["linkedin_url"], Value::Null);
    assert_eq!(body["experiences"][0]["company_name"], json!("Analytical Engines"));
    assert_eq!(body["experiences"][0]["start_date"], json!("1842-01-01"));
    assert_eq!(body["experiences"][0]["is_current"], json!(false));
    assert_eq!(
        body["skills"],
        json!([{ "name": "Mathematics", "category": "Science" }])
    );
    assert_eq!(body["educations"], json!([]));
}

#[tokio::test]
async fn signup_error_detail_is_surfaced_verbatim() {
    let (base_url, _fake) = spawn_fake().await;
    let orchestrator = SubmissionOrchestrator::atomic(client(&base_url));

    let err = orchestrator.submit(&draft("taken@example.com")).await.unwrap_err();

    assert_eq!(
        err,
        SubmissionError::Service(ServiceError::service(400, "Email already registered"))
    );
    assert_eq!(err.user_message(), "Email already registered");
}

#[tokio::test]
async fn unknown_route_uses_status_reason() {
    let (base_url, _fake) = spawn_fake().await;
    let orchestrator = SubmissionOrchestrator::atomic(client(&format!("{}/v2", base_url)));

    let err = orchestrator.submit(&draft("ada@example.com")).await.unwrap_err();

    assert_eq!(
        err,
        SubmissionError::Service(ServiceError::service(404, "Not Found"))
    );
}

// =============================================================================
// Login and read path
// =============================================================================

#[tokio::test]
async fn login_then_fetch_profile() {
    let (base_url, _fake) = spawn_fake().await;
    let service = client(&base_url);
    let store = InMemoryCredentialStore::new();

    let login = LoginHandler::new(service.clone(), Arc::new(store.clone()));
    let token = login
        .handle(LoginCommand::new("ada@example.com", "engine"))
        .await
        .unwrap();
    assert_eq!(token.expose(), TOKEN);

    let fetch = FetchProfileHandler::new(service);
    let record = fetch.handle_from_store(&store).await.unwrap();

    assert_eq!(record.name, "Ada Lovelace");
    assert_eq!(record.location.as_deref(), Some("London"));
    let groups = record.skill_groups();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[1].category, "General");
    assert_eq!(groups[1].skills, vec!["Poetry".to_string()]);
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let (base_url, _fake) = spawn_fake().await;

    let err = client(&base_url)
        .authenticate("ada@example.com", &Secret::new("wrong".to_string()))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ServiceError::Unauthorized("Incorrect username or password".to_string())
    );
}

#[tokio::test]
async fn stale_token_requires_login() {
    let (base_url, _fake) = spawn_fake().await;
    let fetch = FetchProfileHandler::new(client(&base_url));

    let err = fetch.handle(&AccessToken::new("expired")).await.unwrap_err();

    assert!(err.requires_login());
    assert!(matches!(err, AccessError::Service(ServiceError::Unauthorized(_))));
}

// =============================================================================
// Fan-out
// =============================================================================

#[tokio::test]
async fn fan_out_posts_root_then_each_item() {
    let (base_url, fake) = spawn_fake().await;
    let orchestrator = SubmissionOrchestrator::best_effort_fan_out(client(&base_url));

    let receipt = orchestrator.submit(&draft("ada@example.com")).await.unwrap();

    assert_eq!(receipt.created.len(), 2);
    let mut paths: Vec<String> = fake.requests().into_iter().map(|(p, _)| p).collect();
    assert_eq!(paths.remove(0), "users");
    paths.sort();
    assert_eq!(
        paths,
        vec![
            format!("users/{}/experiences", USER_ID),
            format!("users/{}/skills", USER_ID),
        ]
    );
}

#[tokio::test]
async fn fan_out_item_rejection_is_partial_commit_with_detail() {
    let (base_url, _fake) = spawn_fake().await;
    let orchestrator = SubmissionOrchestrator::best_effort_fan_out(client(&base_url));
    let mut draft = draft("ada@example.com");
    draft.skill_groups.update_skills("Science", "Mathematics, Forbidden");

    let err = orchestrator.submit(&draft).await.unwrap_err();

    match err {
        SubmissionError::PartialCommit {
            profile_id,
            created,
            failures,
        } => {
            assert_eq!(profile_id, USER_ID.parse::<ProfileId>().unwrap());
            assert_eq!(created.len(), 2);
            assert_eq!(failures.len(), 1);
            assert_eq!(
                failures[0].error,
                ServiceError::service(422, "name is not allowed")
            );
        }
        other => panic!("expected partial commit, got {:?}", other),
    }
}
