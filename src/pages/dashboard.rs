//! Dashboard page listing the signed-in user's letters.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated landing route. Fetches the letter list on mount and again
//! whenever the session epoch changes (a new login), and runs the
//! confirm-then-delete flow for individual letters.

use leptos::prelude::*;

use crate::app::session_api;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::letter_card::LetterCard;
use crate::components::loading::Loading;
use crate::components::notice_toast::NoticeToast;
use crate::config::ClientConfig;
use crate::net::api::LetterApi;
use crate::state::dashboard::DashboardState;
use crate::state::session::SessionState;
use crate::util::browser::spawn_task;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let config = expect_context::<StoredValue<ClientConfig>>();
    let state = RwSignal::new(DashboardState::default());
    let epoch = Memo::new(move |_| session.with(|s| s.epoch));

    Effect::new(move || {
        let _ = epoch.get();
        let Some(req) = state.try_update(DashboardState::begin_load) else {
            return;
        };
        let api = session_api(config, session);
        spawn_task(async move {
            let result = api.list_letters().await;
            state.try_update(|s| s.finish_load(req, result));
        });
    });
    on_cleanup(move || {
        state.try_update(DashboardState::cancel);
    });

    let on_delete_request = Callback::new(move |id: String| state.update(|s| s.delete.open(&id)));
    let on_delete_cancel = Callback::new(move |()| {
        state.update(|s| {
            if !s.delete.in_flight {
                s.delete.close();
            }
        });
    });
    let on_delete_confirm = Callback::new(move |()| {
        let Some(id) = state.try_update(|s| s.delete.confirm()).flatten() else {
            return;
        };
        let api = session_api(config, session);
        spawn_task(async move {
            let result = api.delete_letter(&id).await;
            state.try_update(|s| s.finish_delete(&id, result));
        });
    });
    let on_notice_dismiss = Callback::new(move |()| state.update(|s| s.notice = None));

    let first_name = move || {
        session.with(|s| {
            s.user
                .as_ref()
                .and_then(|u| u.name.split_whitespace().next().map(str::to_owned))
                .unwrap_or_default()
        })
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{move || format!("Welcome, {}", first_name())}</h1>
                <a href="/editor" class="btn btn--primary">
                    "+ New Letter"
                </a>
            </header>

            <NoticeToast notice=Signal::derive(move || state.with(|s| s.notice.clone())) on_dismiss=on_notice_dismiss/>

            {move || {
                state.with(|s| {
                    if s.loading {
                        view! { <Loading message="Loading your letters..."/> }.into_any()
                    } else if let Some(error) = s.error.clone() {
                        view! { <p class="dashboard-page__error">{error}</p> }.into_any()
                    } else if s.is_empty() {
                        view! {
                            <div class="empty-state">
                                <h2>"No letters yet"</h2>
                                <p>"Write your first letter and keep it safe in Google Drive."</p>
                                <a href="/editor" class="btn btn--primary">
                                    "Create Letter"
                                </a>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="dashboard-page__cards">
                                {s.letters
                                    .iter()
                                    .cloned()
                                    .map(|letter| view! { <LetterCard letter=letter on_delete=on_delete_request/> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    }
                })
            }}

            <Show when=move || state.with(|s| s.delete.is_open())>
                <ConfirmDialog
                    title="Confirm Deletion"
                    message="Are you sure you want to delete this letter? This action cannot be undone."
                    busy=Signal::derive(move || state.with(|s| s.delete.in_flight))
                    on_confirm=on_delete_confirm
                    on_cancel=on_delete_cancel
                />
            </Show>
        </div>
    }
}
