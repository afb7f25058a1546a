//! Fallback for unknown routes.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page Not Found"</h1>
            <p>"The page you are looking for does not exist."</p>
            <a href="/" class="btn btn--primary">
                "Go Home"
            </a>
        </div>
    }
}
