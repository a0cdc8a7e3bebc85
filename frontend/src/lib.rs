//! CamWatch frontend application.
//!
//! A pure presentation layer over the CamWatch backend API:
//! - `api`: HTTP client, bearer-token requests
//! - `auth`: session state, local-storage persistence
//! - `cart`: client-only shopping cart and checkout sequencing
//! - `remote`: per-panel data loading state machine
//! - `components`: UI layer

mod api;
mod auth;
mod cart;
mod config;
mod remote;

mod components {
    pub mod dashboard;
    mod icons;
    pub mod layout;
    pub mod login;
    mod panels {
        pub mod account;
        pub mod admin;
        pub mod alerts;
        pub mod cart;
        pub mod live;
        pub mod recordings;
        pub mod services;
        pub mod shop;
    }
}

// Browser storage access behind a swappable seam, so panel logic never
// talks to `window.localStorage` directly.
pub(crate) mod web {
    mod storage;

    pub use storage::{BrowserStorage, StringStore};

    #[cfg(test)]
    pub use storage::MemoryStore;
}

use leptos::prelude::*;

use crate::auth::{AuthContext, init_auth};
use crate::components::dashboard::DashboardPage;
use crate::components::login::AuthScreen;

#[component]
pub fn App() -> impl IntoView {
    // 1. Create the session context and restore any persisted session.
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);
    init_auth(&auth_ctx);

    // 2. Token presence alone decides which screen renders: no token,
    //    no dashboard, regardless of anything else cached.
    let has_session = auth_ctx.has_session_signal();

    view! {
        <Show when=move || has_session.get() fallback=|| view! { <AuthScreen /> }>
            <DashboardPage />
        </Show>
    }
}
