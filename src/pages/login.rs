//! Login page: Google OAuth start and the OAuth callback landing.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend finishes OAuth by redirecting to `/login?token=<jwt>`. This
//! page strips the token from the visible URL, installs it into the session
//! and moves on to the dashboard. Without a token it offers the Google
//! sign-in button, which leaves the app for the backend's OAuth start URL.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::loading::Loading;
use crate::config::ClientConfig;
use crate::state::session::SessionState;
use crate::util::auth::{DASHBOARD_PATH, LOGIN_PATH, should_skip_login};
use crate::util::browser::{leave_for, replace_url};
use crate::util::clock::now_unix_secs;
use crate::util::token_storage::LocalTokenStore;

pub const LOGIN_FAILED: &str = "Failed to process login token";

/// The OAuth callback token, if the query carries a non-blank one.
pub fn callback_token(raw: Option<String>) -> Option<String> {
    raw.map(|t| t.trim().to_owned()).filter(|t| !t.is_empty())
}

fn replace_history() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let config = expect_context::<StoredValue<ClientConfig>>();
    let query = use_query_map();
    let navigate = use_navigate();

    let pending = callback_token(query.with_untracked(|q| q.get("token")));
    let processing = RwSignal::new(pending.is_some());
    let error = RwSignal::new(None::<String>);

    let navigate_after_login = navigate.clone();
    let pending = StoredValue::new(pending);
    Effect::new(move || {
        let Some(token) = pending.try_update_value(Option::take).flatten() else {
            return;
        };
        replace_url(LOGIN_PATH);
        match session.try_update(|s| s.login(&LocalTokenStore, &token, now_unix_secs())) {
            Some(Ok(())) => {
                log::info!("signed in from OAuth callback");
                navigate_after_login(DASHBOARD_PATH, replace_history());
            }
            Some(Err(e)) => {
                log::error!("login token rejected: {e}");
                error.set(Some(LOGIN_FAILED.to_owned()));
                processing.set(false);
            }
            None => {}
        }
    });

    Effect::new(move || {
        if session.with(|s| should_skip_login(s, processing.get())) {
            navigate(DASHBOARD_PATH, replace_history());
        }
    });

    let on_google = move |_| {
        let url = config.with_value(ClientConfig::oauth_start_url);
        log::debug!("starting OAuth at {url}");
        leave_for(&url);
    };

    view! {
        <Show when=move || !processing.get() fallback=|| view! { <Loading message="Signing you in..."/> }>
            <div class="login-page">
                <div class="login-card">
                    <h1>"Letter Drive"</h1>
                    <p class="login-card__subtitle">"Sign in to write and sync your letters"</p>
                    <Show when=move || error.get().is_some()>
                        <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="login-button" on:click=on_google>
                        "Sign in with Google"
                    </button>
                </div>
            </div>
        </Show>
    }
}
