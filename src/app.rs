//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    OptionalParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::private_route::PrivateRoute;
use crate::components::session_debug::SessionDebug;
use crate::config::ClientConfig;
use crate::net::api::HttpApi;
use crate::pages::{
    admin::AdminPage, dashboard::DashboardPage, editor::EditorPage, home::HomePage, login::LoginPage,
    not_found::NotFoundPage,
};
use crate::state::session::{SessionState, check_session};
use crate::util::browser::spawn_task;
use crate::util::clock::now_unix_secs;
use crate::util::token_storage::LocalTokenStore;

/// HTTP client carrying the current session's bearer token.
pub fn session_api(config: StoredValue<ClientConfig>, session: RwSignal<SessionState>) -> HttpApi {
    HttpApi::new(config.get_value(), session.with_untracked(|s| s.token.clone()))
}

/// Root application component.
///
/// Creates the single session store, provides it and the client config to
/// every route, and starts the startup token check.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = StoredValue::new(ClientConfig::from_build_env());
    let session = RwSignal::new(SessionState::default());
    provide_context(config);
    provide_context(session);

    let started_epoch = session.get_untracked().epoch;
    let api = HttpApi::new(config.get_value(), None);
    spawn_task(async move {
        let outcome = check_session(&LocalTokenStore, &api, now_unix_secs()).await;
        session.try_update(|s| s.complete_check(started_epoch, outcome));
    });

    view! {
        <Title text="Letter Drive"/>

        <Router>
            <Navbar/>
            <main class="app-container">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <PrivateRoute><DashboardPage/></PrivateRoute> }
                    />
                    <Route
                        path=(StaticSegment("editor"), OptionalParamSegment("id"))
                        view=|| view! { <PrivateRoute><EditorPage/></PrivateRoute> }
                    />
                    <Route
                        path=StaticSegment("admin")
                        view=|| view! { <PrivateRoute><AdminPage/></PrivateRoute> }
                    />
                </Routes>
            </main>
            {cfg!(debug_assertions).then(|| view! { <SessionDebug/> })}
        </Router>
    }
}
