//! Register and login form handlers.

use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;
use tracing::{info, warn};

use crate::handlers::pages::{INDEX_HTML, LOGIN_HTML};
use crate::sessions::SESSION_COOKIE;
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// POST /register — insert-if-absent into the credential store, then show
/// the login page again.
pub async fn register(
    State(state): State<SharedState>,
    Form(form): Form<Credentials>,
) -> Response {
    if !state
        .credentials
        .insert_if_absent(&form.username, &form.password)
    {
        warn!(username = %form.username, "registration rejected: username taken");
        return (StatusCode::BAD_REQUEST, "User already exists").into_response();
    }

    info!(username = %form.username, "user registered");
    Html(LOGIN_HTML).into_response()
}

/// POST /login — on a credential match, create a session and hand the token
/// back as a cookie alongside the dashboard page.
pub async fn login(
    State(state): State<SharedState>,
    jar: CookieJar,
    Form(form): Form<Credentials>,
) -> Response {
    if !state.credentials.verify(&form.username, &form.password) {
        warn!(username = %form.username, "login failed");
        return (StatusCode::UNAUTHORIZED, "Invalid credentials").into_response();
    }

    let token = state.sessions.create(&form.username);
    info!(username = %form.username, "session created");

    let jar = jar.add(Cookie::new(SESSION_COOKIE, token));
    (jar, Html(INDEX_HTML)).into_response()
}
