//! Static page handlers.

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::sessions::SESSION_COOKIE;
use crate::state::SharedState;

pub const LOGIN_HTML: &str = include_str!("../../templates/login.html");
pub const REGISTER_HTML: &str = include_str!("../../templates/register.html");
pub const INDEX_HTML: &str = include_str!("../../templates/index.html");

/// GET / and GET /login
pub async fn login_page() -> Html<&'static str> {
    Html(LOGIN_HTML)
}

/// GET /register
pub async fn register_page() -> Html<&'static str> {
    Html(REGISTER_HTML)
}

/// GET /index — dashboard, gated behind a live session.
pub async fn index_page(State(state): State<SharedState>, jar: CookieJar) -> Response {
    let session = jar
        .get(SESSION_COOKIE)
        .and_then(|cookie| state.sessions.get(cookie.value()));

    match session {
        Some(_) => Html(INDEX_HTML).into_response(),
        None => Redirect::to("/").into_response(),
    }
}
