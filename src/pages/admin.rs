//! Admin page: statistics, search and moderation over every letter.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reachable by any signed-in user; non-admins get a permission message and
//! no request is sent. Admins fetch users then letters, and can preview or
//! delete any letter.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;

use crate::app::session_api;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::loading::Loading;
use crate::components::notice_toast::NoticeToast;
use crate::config::ClientConfig;
use crate::net::api::AdminApi;
use crate::state::admin::{AdminState, fetch_admin_data};
use crate::state::session::SessionState;
use crate::util::auth::DASHBOARD_PATH;
use crate::util::browser::spawn_task;
use crate::util::dates::display_date;

/// One table row, with the owner resolved and dates formatted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminRow {
    pub id: String,
    pub title: String,
    pub owner: String,
    pub created: String,
    pub updated: String,
    pub synced: bool,
}

/// Rows for the letters matching the current search.
pub fn admin_rows(state: &AdminState) -> Vec<AdminRow> {
    state
        .filtered_letters()
        .into_iter()
        .map(|letter| AdminRow {
            id: letter.id.clone(),
            title: letter.title.clone(),
            owner: state.owner_name(&letter.owner_id).to_owned(),
            created: display_date(letter.created_at.as_deref()),
            updated: display_date(letter.updated_at.as_deref()),
            synced: letter.is_synced(),
        })
        .collect()
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let config = expect_context::<StoredValue<ClientConfig>>();
    let state = RwSignal::new(AdminState::default());
    let access = Memo::new(move |_| session.with(|s| (s.epoch, s.is_admin())));

    Effect::new(move || {
        let _ = access.get();
        let Some(req) = session.with_untracked(|sess| state.try_update(|s| s.begin_load(sess))).flatten() else {
            return;
        };
        let api = session_api(config, session);
        spawn_task(async move {
            let result = fetch_admin_data(&api).await;
            state.try_update(|s| s.finish_load(req, result));
        });
    });
    on_cleanup(move || {
        state.try_update(AdminState::cancel);
    });

    let on_delete_request = Callback::new(move |id: String| state.update(|s| s.delete.open(&id)));
    let on_preview = Callback::new(move |id: String| state.update(|s| s.toggle_preview(&id)));
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
            let result = api.delete_any_letter(&id).await;
            state.try_update(|s| s.finish_delete(&id, result));
        });
    });
    let on_notice_dismiss = Callback::new(move |()| state.update(|s| s.notice = None));

    let status = Memo::new(move |_| state.with(|s| (s.loading, s.error.clone())));
    let stats = Memo::new(move |_| state.with(AdminState::stats));

    let body = move || {
        let (loading, error) = status.get();
        if loading {
            return view! { <Loading message="Loading admin data..."/> }.into_any();
        }
        if let Some(error) = error {
            return view! {
                <div class="admin-page__denied">
                    <p class="admin-page__error">{error}</p>
                    <a href=DASHBOARD_PATH class="btn btn--primary">
                        "Go to Dashboard"
                    </a>
                </div>
            }
            .into_any();
        }
        view! {
            <section class="admin-stats">
                <h2>"User Statistics"</h2>
                <div class="admin-stats__tile">
                    <span class="admin-stats__value">{move || stats.get().users}</span>
                    <span class="admin-stats__label">"Total Users"</span>
                </div>
                <div class="admin-stats__tile">
                    <span class="admin-stats__value">{move || stats.get().letters}</span>
                    <span class="admin-stats__label">"Total Letters"</span>
                </div>
                <div class="admin-stats__tile">
                    <span class="admin-stats__value">{move || stats.get().synced}</span>
                    <span class="admin-stats__label">"Drive Synced"</span>
                </div>
            </section>

            <section class="admin-letters">
                <header class="admin-letters__header">
                    <h2>"All Letters"</h2>
                    <input
                        class="admin-letters__search"
                        type="search"
                        placeholder="Search letters or users"
                        prop:value=move || state.with(|s| s.search.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.search = value);
                        }
                    />
                </header>
                <table class="admin-table">
                    <thead>
                        <tr>
                            <th>"Title"</th>
                            <th>"User"</th>
                            <th>"Created"</th>
                            <th>"Last Updated"</th>
                            <th>"Drive Status"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = state.with(admin_rows);
                            if rows.is_empty() {
                                return view! {
                                    <tr>
                                        <td colspan="6" class="admin-table__empty">"No letters found"</td>
                                    </tr>
                                }
                                    .into_any();
                            }
                            rows.into_iter()
                                .map(|row| view! { <AdminLetterRow row=row on_preview=on_preview on_delete=on_delete_request/> })
                                .collect::<Vec<_>>()
                                .into_any()
                        }}
                    </tbody>
                </table>
            </section>

            {move || {
                state
                    .with(|s| s.preview().map(|l| (l.title.clone(), l.content.clone())))
                    .map(|(title, content)| {
                        view! {
                            <section class="admin-preview">
                                <header class="admin-preview__header">
                                    <h3>{title}</h3>
                                    <button class="btn" on:click=move |_| state.update(|s| s.preview_id = None)>
                                        "Close"
                                    </button>
                                </header>
                                <pre class="admin-preview__content">{content}</pre>
                            </section>
                        }
                    })
            }}
        }
        .into_any()
    };

    view! {
        <div class="admin-page">
            <h1>"Admin Dashboard"</h1>
            <NoticeToast notice=Signal::derive(move || state.with(|s| s.notice.clone())) on_dismiss=on_notice_dismiss/>
            {body}
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

#[component]
fn AdminLetterRow(row: AdminRow, on_preview: Callback<String>, on_delete: Callback<String>) -> impl IntoView {
    let preview_id = row.id.clone();
    let delete_id = row.id.clone();
    let (chip_class, chip_label) =
        if row.synced { ("chip chip--drive", "In Drive") } else { ("chip chip--local", "Local Only") };

    view! {
        <tr>
            <td>{row.title}</td>
            <td>{row.owner}</td>
            <td>{row.created}</td>
            <td>{row.updated}</td>
            <td>
                <span class=chip_class>{chip_label}</span>
            </td>
            <td class="admin-table__actions">
                <button class="btn" on:click=move |_| on_preview.run(preview_id.clone())>
                    "View"
                </button>
                <button class="btn btn--danger" on:click=move |_| on_delete.run(delete_id.clone())>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
