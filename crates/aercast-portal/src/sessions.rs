//! Server-side session store keyed by an opaque cookie token.
//! Sessions never expire and there is no logout path.

use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "aercast_session";

#[derive(Debug, Clone)]
pub struct Session {
    pub username: String,
}

#[derive(Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<String, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session for an authenticated user, returning the token to
    /// hand back as a cookie.
    pub fn create(&self, username: &str) -> String {
        let token = Uuid::new_v4().to_string();
        self.sessions.lock().unwrap().insert(
            token.clone(),
            Session {
                username: username.to_string(),
            },
        );
        token
    }

    pub fn get(&self, token: &str) -> Option<Session> {
        self.sessions.lock().unwrap().get(token).cloned()
    }
}
