//! Shared auth routing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded routes and the login page must agree on when a session counts as
//! signed in, so both decide through these functions.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::session::SessionState;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// What a guarded route should render for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Startup check still running: show a waiting indicator.
    Wait,
    RedirectToLogin,
    Render,
}

/// Pure function of session state; loading wins over everything else.
pub fn guard_decision(session: &SessionState) -> GuardDecision {
    if session.is_loading() {
        GuardDecision::Wait
    } else if session.is_authenticated() {
        GuardDecision::Render
    } else {
        GuardDecision::RedirectToLogin
    }
}

/// The login page forwards signed-in users to the dashboard unless it is
/// itself in the middle of processing a token.
pub fn should_skip_login(session: &SessionState, processing_login: bool) -> bool {
    session.is_authenticated() && !processing_login
}
