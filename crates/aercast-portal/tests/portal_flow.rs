//! End-to-end portal flow tests driving the real router.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use aercast_portal::router::build_router;
use aercast_portal::state::PortalState;

fn app() -> axum::Router {
    build_router(PortalState::new())
}

async fn send(app: &axum::Router, request: Request<Body>) -> axum::http::Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

fn form_post(uri: &str, username: &str, password: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(format!(
            "username={}&password={}",
            username, password
        )))
        .unwrap()
}

async fn body_text(response: axum::http::Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_login_and_root_render_login_page() {
    let app = app();
    for uri in ["/", "/login"] {
        let response = send(&app, Request::get(uri).body(Body::empty()).unwrap()).await;
        assert_eq!(response.status(), StatusCode::OK);
        let text = body_text(response).await;
        assert!(text.contains("Sign in"), "{} should render the login page", uri);
    }
}

#[tokio::test]
async fn test_register_page_renders() {
    let app = app();
    let response = send(&app, Request::get("/register").body(Body::empty()).unwrap()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Create account"));
}

#[tokio::test]
async fn test_duplicate_registration_rejected() {
    let app = app();

    let first = send(&app, form_post("/register", "alice", "pw1")).await;
    assert_eq!(first.status(), StatusCode::OK);

    let second = send(&app, form_post("/register", "alice", "pw2")).await;
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(second).await, "User already exists");
}

#[tokio::test]
async fn test_login_with_wrong_password_unauthorized() {
    let app = app();
    send(&app, form_post("/register", "alice", "pw1")).await;

    let response = send(&app, form_post("/login", "alice", "wrong")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_text(response).await, "Invalid credentials");
}

#[tokio::test]
async fn test_index_without_session_redirects_to_root() {
    let app = app();
    let response = send(&app, Request::get("/index").body(Body::empty()).unwrap()).await;
    assert!(response.status().is_redirection());
    assert_eq!(response.headers()[header::LOCATION], "/");
}

#[tokio::test]
async fn test_full_register_login_dashboard_flow() {
    let app = app();

    // register("alice", "pw1") → 200
    let registered = send(&app, form_post("/register", "alice", "pw1")).await;
    assert_eq!(registered.status(), StatusCode::OK);

    // register("alice", "pw2") → 400
    let duplicate = send(&app, form_post("/register", "alice", "pw2")).await;
    assert_eq!(duplicate.status(), StatusCode::BAD_REQUEST);

    // login("alice", "pw1") → 200 + session cookie + dashboard
    let logged_in = send(&app, form_post("/login", "alice", "pw1")).await;
    assert_eq!(logged_in.status(), StatusCode::OK);
    let cookie = logged_in.headers()[header::SET_COOKIE]
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("aercast_session="));
    assert!(body_text(logged_in).await.contains("Planning Dashboard"));

    // GET /index with the session cookie → dashboard
    let dashboard = send(
        &app,
        Request::get("/index")
            .header(header::COOKIE, cookie)
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(dashboard.status(), StatusCode::OK);
    assert!(body_text(dashboard).await.contains("Planning Dashboard"));
}

#[tokio::test]
async fn test_stale_cookie_redirects() {
    let app = app();
    let response = send(
        &app,
        Request::get("/index")
            .header(header::COOKIE, "aercast_session=00000000-0000-0000-0000-000000000000")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert!(response.status().is_redirection());
}
