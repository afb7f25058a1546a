//! Guard wrapper for routes that need a signed-in user.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::components::loading::Loading;
use crate::state::session::SessionState;
use crate::util::auth::{GuardDecision, LOGIN_PATH, guard_decision};

/// Renders `children` only for authenticated sessions.
///
/// The decision is memoized so children are not rebuilt on session changes
/// that keep the same outcome.
#[component]
pub fn PrivateRoute(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let decision = Memo::new(move |_| session.with(guard_decision));

    move || match decision.get() {
        GuardDecision::Wait => view! { <Loading message="Checking authentication..."/> }.into_any(),
        GuardDecision::RedirectToLogin => view! { <Redirect path=LOGIN_PATH/> }.into_any(),
        GuardDecision::Render => children().into_any(),
    }
}
