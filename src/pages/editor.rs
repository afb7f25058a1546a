//! Letter editor page for `/editor` (create) and `/editor/:id` (edit).
//!
//! SYSTEM CONTEXT
//! ==============
//! One route serves both modes so the component survives the navigation
//! from `/editor` to `/editor/<new id>` after the first save; the route
//! parameter is followed through `EditorState::retarget`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::app::session_api;
use crate::components::loading::Loading;
use crate::components::notice_toast::NoticeToast;
use crate::config::ClientConfig;
use crate::net::api::LetterApi;
use crate::state::editor::{EditorMode, EditorState, submit};
use crate::state::session::SessionState;
use crate::util::auth::DASHBOARD_PATH;
use crate::util::browser::spawn_task;

#[component]
pub fn EditorPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let config = expect_context::<StoredValue<ClientConfig>>();
    let params = use_params_map();
    let navigate = use_navigate();

    let route_id = Memo::new(move |_| params.with(|p| p.get("id")));
    let epoch = Memo::new(move |_| session.with(|s| s.epoch));
    let state = RwSignal::new(EditorState::for_route(route_id.get_untracked()));

    let start_load = move || {
        let Some((req, id)) = state.try_update(EditorState::begin_load).flatten() else {
            return;
        };
        let api = session_api(config, session);
        spawn_task(async move {
            let result = api.get_letter(&id).await;
            state.try_update(|s| s.finish_load(req, result));
        });
    };

    Effect::new(move |prev_epoch: Option<u64>| {
        let id = route_id.get();
        let current_epoch = epoch.get();
        let retargeted = state.try_update(|s| s.retarget(id)).unwrap_or(false);
        if retargeted || prev_epoch != Some(current_epoch) {
            start_load();
        }
        current_epoch
    });
    on_cleanup(move || {
        state.try_update(EditorState::cancel);
    });

    let navigate_after_save = navigate.clone();
    let on_save = move |_| {
        let Some((req, mode, payload)) = state.try_update(EditorState::begin_save).flatten() else {
            return;
        };
        let api = session_api(config, session);
        let navigate = navigate_after_save.clone();
        spawn_task(async move {
            let result = submit(&api, &mode, &payload).await;
            if let Some(path) = state.try_update(|s| s.finish_save(req, result)).flatten() {
                log::info!("letter created; continuing at {path}");
                navigate(&path, NavigateOptions::default());
            }
        });
    };
    let on_back = move |_| navigate(DASHBOARD_PATH, NavigateOptions::default());
    let on_notice_dismiss = Callback::new(move |()| state.update(|s| s.notice = None));

    let heading = move || {
        state.with(|s| match s.mode {
            EditorMode::Create => "New Letter",
            EditorMode::Edit(_) => "Edit Letter",
        })
    };

    view! {
        <NoticeToast notice=Signal::derive(move || state.with(|s| s.notice.clone())) on_dismiss=on_notice_dismiss/>
        <Show
            when=move || !state.with(EditorState::show_loading_screen)
            fallback=|| view! { <Loading message="Loading letter..."/> }
        >
            <div class="editor-page">
                <header class="editor-page__header">
                    <button class="btn" on:click=on_back.clone()>
                        "← Back to Dashboard"
                    </button>
                    <h1 class="editor-page__heading">{heading}</h1>
                    <label class="editor-page__drive-toggle">
                        <input
                            type="checkbox"
                            prop:checked=move || state.with(|s| s.save_to_drive)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                state.update(|s| s.save_to_drive = checked);
                            }
                        />
                        "Save to Google Drive"
                    </label>
                    <button
                        class="btn btn--primary"
                        on:click=on_save.clone()
                        disabled=move || state.with(|s| s.saving)
                    >
                        {move || if state.with(|s| s.saving) { "Saving..." } else { "Save Letter" }}
                    </button>
                </header>

                <div class="editor-page__paper">
                    <label class="editor-page__label">
                        "Letter Title"
                        <input
                            class="editor-page__title"
                            type="text"
                            prop:value=move || state.with(|s| s.title.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                state.update(|s| s.title = value);
                            }
                        />
                    </label>
                    <label class="editor-page__label">
                        "Letter Content"
                        <textarea
                            class="editor-page__content"
                            rows="20"
                            prop:value=move || state.with(|s| s.content.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                state.update(|s| s.content = value);
                            }
                        ></textarea>
                    </label>
                </div>
            </div>
        </Show>
    }
}
