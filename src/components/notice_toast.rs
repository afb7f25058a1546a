//! Toast for transient success/warning/error notices.
//!
//! DESIGN
//! ======
//! The toast owns no notice state: pages keep `notice` inside their own state
//! struct and pass a read signal plus a dismiss callback. Each shown notice
//! auto-hides after `NOTICE_AUTO_HIDE_MS` unless a newer one replaced it.

use leptos::prelude::*;

use crate::state::notice::Notice;

#[component]
pub fn NoticeToast(#[prop(into)] notice: Signal<Option<Notice>>, on_dismiss: Callback<()>) -> impl IntoView {
    #[cfg(feature = "csr")]
    {
        let shown = StoredValue::new(0_u64);
        Effect::new(move || {
            if notice.get().is_none() {
                return;
            }
            let Some(generation) = shown.try_update_value(|g| {
                *g += 1;
                *g
            }) else {
                return;
            };
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(crate::state::notice::NOTICE_AUTO_HIDE_MS).await;
                if shown.try_get_value() == Some(generation) {
                    on_dismiss.run(());
                }
            });
        });
    }

    view! {
        {move || {
            notice
                .get()
                .map(|n| {
                    let class = format!("notice notice--{}", n.kind.css_modifier());
                    view! {
                        <div class=class role="alert">
                            <span class="notice__message">{n.message}</span>
                            <button
                                class="notice__close"
                                aria-label="Dismiss"
                                on:click=move |_| on_dismiss.run(())
                            >
                                "✕"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
