//! Public landing page.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::util::auth::{DASHBOARD_PATH, LOGIN_PATH};

const FEATURES: [(&str, &str); 3] = [
    ("Write", "Draft letters in a distraction-free editor."),
    ("Sync", "Keep a copy of every letter in your Google Drive."),
    ("Organize", "Find, edit and clean up your letters from one dashboard."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let signed_in = move || session.with(SessionState::is_authenticated);

    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"Letter Drive"</h1>
                <p class="hero__tagline">"Write letters and save them straight to Google Drive."</p>
                <Show
                    when=signed_in
                    fallback=|| {
                        view! {
                            <a href=LOGIN_PATH class="btn btn--primary">
                                "Get Started"
                            </a>
                        }
                    }
                >
                    <a href=DASHBOARD_PATH class="btn btn--primary">
                        "Go to Dashboard"
                    </a>
                </Show>
            </section>
            <section class="features">
                {FEATURES
                    .iter()
                    .map(|(title, blurb)| {
                        view! {
                            <div class="feature-tile">
                                <h3>{*title}</h3>
                                <p>{*blurb}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>
        </div>
    }
}
