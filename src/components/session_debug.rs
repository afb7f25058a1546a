//! Session inspector shown in debug builds.
//!
//! Lists the session phase, the signed-in user and what the stored token
//! decodes to, which is usually enough to tell why a login did not stick.

#[cfg(test)]
#[path = "session_debug_test.rs"]
mod session_debug_test;

use leptos::prelude::*;

use crate::state::session::{SessionPhase, SessionState};
use crate::util::jwt::decode_claims;
use crate::util::token_storage::{LocalTokenStore, TokenStore};

const TOKEN_PREFIX_CHARS: usize = 16;

/// Label/value rows describing `session` and the `stored` token.
pub fn debug_rows(session: &SessionState, stored: Option<&str>, now_secs: u64) -> Vec<(&'static str, String)> {
    let phase = match session.phase {
        SessionPhase::Init => "init",
        SessionPhase::Ready => "ready",
    };
    let user = session
        .user
        .as_ref()
        .map_or_else(|| "none".to_owned(), |u| format!("{} ({}, {})", u.name, u.id, u.role.as_str()));

    let mut rows = vec![
        ("Phase", phase.to_owned()),
        ("Authenticated", session.is_authenticated().to_string()),
        ("User", user),
        ("Epoch", session.epoch.to_string()),
    ];

    let Some(token) = stored else {
        rows.push(("Stored token", "none".to_owned()));
        return rows;
    };
    let prefix: String = token.chars().take(TOKEN_PREFIX_CHARS).collect();
    rows.push(("Stored token", format!("{prefix}…")));
    rows.push((
        "Claims",
        match decode_claims(token) {
            Ok(claims) => {
                let state = if claims.is_expired(now_secs) { "expired" } else { "valid" };
                let exp = claims.exp.map_or_else(|| "none".to_owned(), |exp| exp.to_string());
                format!("{} ({}), exp {exp} [{state}]", claims.name, claims.role.as_str())
            }
            Err(e) => format!("error: {e}"),
        },
    ));
    rows
}

#[component]
pub fn SessionDebug() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let open = RwSignal::new(false);

    let rows = move || {
        let stored = LocalTokenStore.load();
        let now = crate::util::clock::now_unix_secs();
        session.with(|s| debug_rows(s, stored.as_deref(), now))
    };

    view! {
        <aside class="session-debug">
            <button class="session-debug__toggle" on:click=move |_| open.update(|o| *o = !*o)>
                {move || if open.get() { "Hide session" } else { "Session" }}
            </button>
            <Show when=move || open.get()>
                <dl class="session-debug__rows">
                    {move || {
                        rows()
                            .into_iter()
                            .map(|(label, value)| view! {
                                <dt>{label}</dt>
                                <dd>{value}</dd>
                            })
                            .collect::<Vec<_>>()
                    }}
                </dl>
            </Show>
        </aside>
    }
}
