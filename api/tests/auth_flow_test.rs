//! End-to-end tests for the credential lifecycle: signup, login, the
//! refresh cookie, session probe, logout, and account updates. Runs the
//! full HTTP surface against the in-memory mocks.

use std::sync::Arc;

use actix_web::cookie::Cookie;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{test, web};
use serde_json::Value;

use ct_api::app::{create_app, AppState};
use ct_core::repositories::{MockListingRepository, MockUserRepository};
use ct_core::services::auth::AuthService;
use ct_core::services::listing::ListingService;
use ct_core::services::storage::MockImageStore;
use ct_core::services::token::TokenService;
use ct_shared::config::JwtConfig;

type TestState = AppState<MockUserRepository, MockListingRepository, Arc<MockImageStore>>;

fn test_state() -> web::Data<TestState> {
    let tokens = Arc::new(TokenService::new(&JwtConfig::new(
        "test-access-secret",
        "test-refresh-secret",
    )));
    web::Data::new(AppState {
        auth_service: AuthService::new(MockUserRepository::new(), Arc::clone(&tokens)),
        listing_service: ListingService::new(
            MockListingRepository::new(),
            Arc::new(MockImageStore::new()),
        ),
        token_service: tokens,
    })
}

macro_rules! signup {
    ($app:expr, $email:expr, $password:expr) => {{
        let req = test::TestRequest::post()
            .uri("/signup")
            .set_json(serde_json::json!({ "email": $email, "password": $password }))
            .to_request();
        test::call_service($app, req).await
    }};
}

macro_rules! login {
    ($app:expr, $email:expr, $password:expr) => {{
        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(serde_json::json!({ "email": $email, "password": $password }))
            .to_request();
        test::call_service($app, req).await
    }};
}

fn refresh_cookie_of<B>(resp: &actix_web::dev::ServiceResponse<B>) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == "refreshToken")
        .map(|c| c.into_owned())
}

#[actix_rt::test]
async fn test_signup_then_duplicate_signup() {
    let app = test::init_service(create_app(test_state(), "http://localhost:3000")).await;

    let resp = signup!(&app, "student@campus.edu", "hunter2hunter2");
    assert_eq!(resp.status(), 201);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);

    let resp = signup!(&app, "student@campus.edu", "anotherpassword");
    assert_eq!(resp.status(), 400);
}

#[actix_rt::test]
async fn test_signup_rejects_malformed_input() {
    let app = test::init_service(create_app(test_state(), "http://localhost:3000")).await;

    let resp = signup!(&app, "not-an-email", "hunter2hunter2");
    assert_eq!(resp.status(), 400);

    let resp = signup!(&app, "student@campus.edu", "short");
    assert_eq!(resp.status(), 400);
}

#[actix_rt::test]
async fn test_login_sets_http_only_refresh_cookie() {
    let app = test::init_service(create_app(test_state(), "http://localhost:3000")).await;
    signup!(&app, "student@campus.edu", "hunter2hunter2");

    let resp = login!(&app, "student@campus.edu", "hunter2hunter2");
    assert_eq!(resp.status(), 200);

    let cookie = refresh_cookie_of(&resp).unwrap();
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.secure(), Some(true));
    assert!(!cookie.value().is_empty());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert!(body["accessToken"].is_string());
    // The refresh token never appears in the body
    assert!(body.get("refreshToken").is_none());
}

#[actix_rt::test]
async fn test_login_bad_credentials_is_200_with_success_false() {
    let app = test::init_service(create_app(test_state(), "http://localhost:3000")).await;
    signup!(&app, "student@campus.edu", "hunter2hunter2");

    let resp = login!(&app, "student@campus.edu", "wrong-password");
    assert_eq!(resp.status(), 200);
    assert!(refresh_cookie_of(&resp).is_none());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert!(body.get("accessToken").is_none());
}

#[actix_rt::test]
async fn test_refresh_requires_and_honors_the_cookie() {
    let app = test::init_service(create_app(test_state(), "http://localhost:3000")).await;
    signup!(&app, "student@campus.edu", "hunter2hunter2");
    let login_resp = login!(&app, "student@campus.edu", "hunter2hunter2");
    let cookie = refresh_cookie_of(&login_resp).unwrap();

    // No cookie at all: 401
    let req = test::TestRequest::post().uri("/refresh").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    // Garbage cookie: 403
    let req = test::TestRequest::post()
        .uri("/refresh")
        .cookie(Cookie::new("refreshToken", "not-a-jwt"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);

    // Real cookie: a fresh access token that the guard accepts
    let req = test::TestRequest::post()
        .uri("/refresh")
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    let access_token = body["accessToken"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/get_items_secure")
        .insert_header((AUTHORIZATION, format!("Bearer {access_token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
}

#[actix_rt::test]
async fn test_check_refresh_token_reports_cookie_presence() {
    let app = test::init_service(create_app(test_state(), "http://localhost:3000")).await;

    let req = test::TestRequest::post().uri("/check-refresh-token").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["exists"], false);

    let req = test::TestRequest::post()
        .uri("/check-refresh-token")
        .cookie(Cookie::new("refreshToken", "anything"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["exists"], true);
}

#[actix_rt::test]
async fn test_logout_clears_the_cookie() {
    let app = test::init_service(create_app(test_state(), "http://localhost:3000")).await;

    let req = test::TestRequest::post().uri("/logout").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let cookie = refresh_cookie_of(&resp).unwrap();
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.max_age(), Some(actix_web::cookie::time::Duration::ZERO));
}

#[actix_rt::test]
async fn test_account_updates_require_a_bearer_token() {
    let app = test::init_service(create_app(test_state(), "http://localhost:3000")).await;

    let req = test::TestRequest::post()
        .uri("/update-email")
        .set_json(serde_json::json!({ "email": "new@campus.edu" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    let req = test::TestRequest::post()
        .uri("/update-password")
        .insert_header((AUTHORIZATION, "Bearer not-a-jwt"))
        .set_json(serde_json::json!({ "password": "irrelevantpw1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);
}

#[actix_rt::test]
async fn test_update_email_and_password_round_trip() {
    let app = test::init_service(create_app(test_state(), "http://localhost:3000")).await;
    signup!(&app, "student@campus.edu", "hunter2hunter2");
    let resp = login!(&app, "student@campus.edu", "hunter2hunter2");
    let body: Value = test::read_body_json(resp).await;
    let token = body["accessToken"].as_str().unwrap().to_string();
    let bearer = (AUTHORIZATION, format!("Bearer {token}"));

    let req = test::TestRequest::post()
        .uri("/update-email")
        .insert_header(bearer.clone())
        .set_json(serde_json::json!({ "email": "renamed@campus.edu" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["email"], "renamed@campus.edu");

    let req = test::TestRequest::post()
        .uri("/update-password")
        .insert_header(bearer)
        .set_json(serde_json::json!({ "password": "replacementpw99" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    // Old credentials are gone; the new pair works
    let resp = login!(&app, "student@campus.edu", "hunter2hunter2");
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);

    let resp = login!(&app, "renamed@campus.edu", "replacementpw99");
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
}
