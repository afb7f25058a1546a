//! Top navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once above the routes. Links depend on the session: signed-in
//! users get the dashboard, editor and (for admins) the admin view, plus a
//! logout button; everyone else gets a login link.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::net::api::HttpApi;
use crate::state::session::{SessionState, notify_logout};
use crate::util::browser::spawn_task;
use crate::util::token_storage::LocalTokenStore;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let config = expect_context::<StoredValue<ClientConfig>>();
    let navigate = use_navigate();

    let user_name = move || session.with(|s| s.user.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let avatar = move || session.with(|s| s.user.as_ref().and_then(|u| u.avatar.clone()));

    let on_logout = move |_| {
        let token = session.try_update(|s| s.sign_out(&LocalTokenStore)).flatten();
        log::info!("signed out");
        let api = HttpApi::new(config.get_value(), None);
        spawn_task(async move {
            notify_logout(&api, token).await;
        });
        navigate("/", NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <a href="/" class="navbar__brand">
                "Letter Drive"
            </a>
            <span class="navbar__spacer"></span>
            <Show
                when=move || session.with(SessionState::is_authenticated)
                fallback=|| {
                    view! {
                        <a href="/login" class="navbar__link">
                            "Login"
                        </a>
                    }
                }
            >
                <a href="/dashboard" class="navbar__link">
                    "Dashboard"
                </a>
                <a href="/editor" class="navbar__link">
                    "New Letter"
                </a>
                <Show when=move || session.with(SessionState::is_admin)>
                    <a href="/admin" class="navbar__link">
                        "Admin"
                    </a>
                </Show>
                <span class="navbar__user">
                    {move || {
                        avatar()
                            .map(|src| {
                                view! { <img class="navbar__avatar" src=src alt="" referrerpolicy="no-referrer"/> }
                            })
                    }}
                    {move || format!("Signed in as {}", user_name())}
                </span>
                <button class="btn navbar__logout" on:click=on_logout.clone()>
                    "Logout"
                </button>
            </Show>
        </nav>
    }
}
