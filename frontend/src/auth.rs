//! Session state management.
//!
//! The backend issues `{token, user}`; the client caches it in local
//! storage and mirrors it into a reactive signal. Storage and signal are
//! always written together, so no render ever observes a half-updated
//! session.

use leptos::prelude::*;

use camwatch_shared::{LoginRequest, RegisterRequest, Session};

use crate::api::{ApiError, CamWatchApi};
use crate::web::{BrowserStorage, StringStore};

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

/// Read a cached session back from storage. The token is stored raw;
/// the user object is stored as JSON. Anything missing or undecodable
/// means "not signed in".
pub fn load_session<S: StringStore>(store: &S) -> Option<Session> {
    let token = store.get(TOKEN_KEY)?;
    let user = serde_json::from_str(&store.get(USER_KEY)?).ok()?;
    Some(Session { token, user })
}

pub fn persist_session<S: StringStore>(store: &S, session: &Session) {
    store.set(TOKEN_KEY, &session.token);
    if let Ok(json) = serde_json::to_string(&session.user) {
        store.set(USER_KEY, &json);
    }
}

pub fn clear_session<S: StringStore>(store: &S) {
    store.remove(TOKEN_KEY);
    store.remove(USER_KEY);
}

/// Reactive session state.
#[derive(Clone, Default)]
pub struct AuthState {
    /// API client carrying the bearer token (present iff signed in).
    pub api: Option<CamWatchApi>,
    pub session: Option<Session>,
}

/// Shared via Leptos context; `Copy` so components can capture it freely.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: ReadSignal<AuthState>,
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState::default());
        Self { state, set_state }
    }

    pub fn has_session_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().session.is_some())
    }

    /// API client for the current session, if any.
    pub fn api(&self) -> Option<CamWatchApi> {
        self.state.get_untracked().api
    }

    fn install(&self, session: Session) {
        self.set_state.update(|state| {
            state.api = Some(CamWatchApi::with_token(session.token.clone()));
            state.session = Some(session);
        });
    }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// Restore a persisted session at startup. Synchronous: there is no
/// loading state for the session itself.
pub fn init_auth(ctx: &AuthContext) {
    if let Some(session) = load_session(&BrowserStorage) {
        web_sys::console::log_1(&"[auth] restored persisted session".into());
        ctx.install(session);
    }
}

/// POST credentials; persist and publish the session on success.
pub async fn login(ctx: &AuthContext, email: String, password: String) -> Result<(), String> {
    let api = CamWatchApi::public();
    let session = api
        .login(&LoginRequest { email, password })
        .await
        .map_err(|e| match e {
            ApiError::Status(_) => "Invalid credentials".to_string(),
            other => other.to_string(),
        })?;
    persist_session(&BrowserStorage, &session);
    ctx.install(session);
    Ok(())
}

/// POST a registration payload; on success behaves exactly like login.
pub async fn register(
    ctx: &AuthContext,
    name: String,
    email: String,
    password: String,
) -> Result<(), String> {
    let api = CamWatchApi::public();
    let session = api
        .register(&RegisterRequest {
            name,
            email,
            password,
        })
        .await
        .map_err(|e| match e {
            ApiError::Status(_) => "Registration failed".to_string(),
            other => other.to_string(),
        })?;
    persist_session(&BrowserStorage, &session);
    ctx.install(session);
    Ok(())
}

/// Clear the persisted and in-memory session. No backend call: the
/// token is simply forgotten.
pub fn logout(ctx: &AuthContext) {
    clear_session(&BrowserStorage);
    ctx.set_state.update(|state| {
        state.api = None;
        state.session = None;
    });
    web_sys::console::log_1(&"[auth] session cleared".into());
}

#[cfg(test)]
mod tests;
