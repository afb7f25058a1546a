//! Centered spinner with a status line.

use leptos::prelude::*;

#[component]
pub fn Loading(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="loading" role="status">
            <span class="loading__spinner" aria-hidden="true"></span>
            <p class="loading__message">{message}</p>
        </div>
    }
}
