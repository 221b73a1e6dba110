//! HTTP surface tests: routes wired against the mocked repository.

mod common;

use std::sync::Arc;

use actix_web::{test, web, App};
use serde_json::{json, Value};

use hisab::application::services::UserService;
use hisab::domain::services::AuthService;
use hisab::infrastructure::driving::web::api::handlers::{
    change_password, current_user, login_user, register_user, update_current_user,
};
use hisab::infrastructure::driving::web::api::AppState;

use common::{stored_user, MockUserRepo, TEST_SECRET};

type Service = UserService<MockUserRepo>;

fn app_state(repo: MockUserRepo) -> web::Data<AppState<Service>> {
    let user_service = Arc::new(UserService::new(
        Arc::new(repo),
        TEST_SECRET.to_string(),
        24,
    ));
    web::Data::new(AppState { user_service })
}

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data($state)
                .service(
                    web::scope("/api/auth")
                        .route("/register", web::post().to(register_user::<Service>))
                        .route("/login", web::post().to(login_user::<Service>))
                        .route("/password", web::post().to(change_password::<Service>)),
                )
                .service(
                    web::scope("/api/users")
                        .route("/me", web::get().to(current_user::<Service>))
                        .route("/me", web::patch().to(update_current_user::<Service>)),
                ),
        )
        .await
    };
}

#[actix_web::test]
async fn register_returns_created_user() {
    let mut repo = MockUserRepo::new();
    repo.expect_find_by_username().returning(|_| Ok(None));
    repo.expect_find_by_email().returning(|_| Ok(None));
    repo.expect_create()
        .returning(|record| Ok(stored_user(7, &record.password_hash)));

    let app = test_app!(app_state(repo));

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "username": "amina",
            "first_name": "Amina",
            "last_name": "Haddad",
            "email": "amina@example.com",
            "password": "s3cret"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["user_id"], 7);
    assert_eq!(body["username"], "amina");
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
}

#[actix_web::test]
async fn register_reports_every_invalid_field() {
    // Validation fails before the service is touched, so no expectations.
    let app = test_app!(app_state(MockUserRepo::new()));

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "username": 42,
            "email": "not-an-email"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 422);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "validation failed");
    let fields: Vec<&str> = body["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap())
        .collect();
    assert_eq!(
        fields,
        vec!["username", "first_name", "last_name", "email", "password"]
    );
}

#[actix_web::test]
async fn login_with_bad_credentials_is_unauthorized() {
    let mut repo = MockUserRepo::new();
    repo.expect_find_by_username().returning(|_| Ok(None));

    let app = test_app!(app_state(repo));

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({"username": "amina", "password": "wrong"}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid username or password");
}

#[actix_web::test]
async fn login_returns_bearer_token_envelope() {
    let hash = AuthService::hash_password("s3cret").unwrap();
    let mut repo = MockUserRepo::new();
    repo.expect_find_by_username()
        .returning(move |_| Ok(Some(stored_user(7, &hash))));

    let app = test_app!(app_state(repo));

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({"username": "amina", "password": "s3cret"}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["token_type"], "bearer");
    assert_eq!(body["user"]["user_id"], 7);
    assert!(body["access_token"].as_str().unwrap().len() > 20);
}

#[actix_web::test]
async fn me_without_token_is_unauthorized() {
    let app = test_app!(app_state(MockUserRepo::new()));

    let req = test::TestRequest::get().uri("/api/users/me").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "missing bearer token");
}

#[actix_web::test]
async fn me_with_token_returns_profile() {
    let hash = AuthService::hash_password("s3cret").unwrap();
    let mut repo = MockUserRepo::new();
    let login_hash = hash.clone();
    repo.expect_find_by_username()
        .returning(move |_| Ok(Some(stored_user(7, &login_hash))));
    repo.expect_get()
        .returning(move |_| Ok(Some(stored_user(7, &hash))));

    let app = test_app!(app_state(repo));

    let login = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({"username": "amina", "password": "s3cret"}))
        .to_request();
    let login_body: Value = test::call_and_read_body_json(&app, login).await;
    let token = login_body["access_token"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri("/api/users/me")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["user_id"], 7);
    assert_eq!(body["email"], "amina@example.com");
}

#[actix_web::test]
async fn password_change_returns_no_content() {
    let hash = AuthService::hash_password("old-pass").unwrap();
    let mut repo = MockUserRepo::new();
    let login_hash = hash.clone();
    repo.expect_find_by_username()
        .returning(move |_| Ok(Some(stored_user(7, &login_hash))));
    repo.expect_get()
        .returning(move |_| Ok(Some(stored_user(7, &hash))));
    repo.expect_set_password()
        .times(1)
        .returning(|_, _| Ok(()));

    let app = test_app!(app_state(repo));

    let login = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({"username": "amina", "password": "old-pass"}))
        .to_request();
    let login_body: Value = test::call_and_read_body_json(&app, login).await;
    let token = login_body["access_token"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/api/auth/password")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(json!({
            "old_password": "old-pass",
            "new_password": "new-pass"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 204);
}

#[actix_web::test]
async fn password_change_without_token_is_unauthorized() {
    let mut repo = MockUserRepo::new();
    repo.expect_set_password().never();

    let app = test_app!(app_state(repo));

    let req = test::TestRequest::post()
        .uri("/api/auth/password")
        .set_json(json!({
            "old_password": "old-pass",
            "new_password": "new-pass"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn patch_me_applies_partial_update() {
    let hash = AuthService::hash_password("s3cret").unwrap();
    let mut repo = MockUserRepo::new();
    let login_hash = hash.clone();
    repo.expect_find_by_username()
        .returning(move |_| Ok(Some(stored_user(7, &login_hash))));
    repo.expect_get()
        .returning(move |_| Ok(Some(stored_user(7, &hash))));
    repo.expect_update().returning(|_, changes| {
        let mut user = stored_user(7, "hash");
        if let Some(first_name) = &changes.first_name {
            user.first_name = first_name.clone();
        }
        Ok(user)
    });

    let app = test_app!(app_state(repo));

    let login = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({"username": "amina", "password": "s3cret"}))
        .to_request();
    let login_body: Value = test::call_and_read_body_json(&app, login).await;
    let token = login_body["access_token"].as_str().unwrap().to_string();

    let req = test::TestRequest::patch()
        .uri("/api/users/me")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(json!({"first_name": "Nadia"}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["first_name"], "Nadia");
    assert_eq!(body["last_name"], "Haddad");

    let bad = test::TestRequest::patch()
        .uri("/api/users/me")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(json!({"email": "not-an-email"}))
        .to_request();

    let resp = test::call_service(&app, bad).await;
    assert_eq!(resp.status(), 422);
}
