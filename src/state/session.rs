//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `SessionState` is created by the root `App`, wrapped in an
//! `RwSignal` and provided via context. Route guards, the navbar and every
//! page read it; only `check_session`, `login` and `sign_out` change it.
//!
//! LIFECYCLE
//! =========
//! `Init` (loading) until the startup check completes, then `Ready` for the
//! rest of the run. `epoch` increments on every login and sign-out so pages
//! keyed on it re-initialize their local state without a page reload.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::api::AuthApi;
use crate::net::types::SessionUser;
use crate::util::jwt::{TokenError, decode_claims};
use crate::util::token_storage::TokenStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// Startup token check still running.
    #[default]
    Init,
    Ready,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("could not decode login token: {0}")]
    Decode(#[from] TokenError),
    #[error("login token has expired")]
    Expired,
}

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub phase: SessionPhase,
    pub token: Option<String>,
    pub user: Option<SessionUser>,
    pub epoch: u64,
}

/// Identity confirmed by the startup check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifiedSession {
    pub token: String,
    pub user: SessionUser,
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        self.phase == SessionPhase::Init
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase == SessionPhase::Ready && self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.is_authenticated() && self.user.as_ref().is_some_and(SessionUser::is_admin)
    }

    /// Apply the result of [`check_session`] started at `started_epoch`.
    ///
    /// A login or sign-out that landed while the check was in flight wins;
    /// the check then only ends the loading phase.
    pub fn complete_check(&mut self, started_epoch: u64, outcome: Option<VerifiedSession>) {
        self.phase = SessionPhase::Ready;
        if self.epoch != started_epoch {
            log::debug!("session changed during startup check; keeping newer state");
            return;
        }
        match outcome {
            Some(verified) => {
                self.token = Some(verified.token);
                self.user = Some(verified.user);
            }
            None => {
                self.token = None;
                self.user = None;
            }
        }
    }

    /// Persist `token`, decode it for immediate identity display and mark
    /// the session authenticated.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the token cannot be decoded or has already
    /// expired; the token is discarded and the session left unauthenticated.
    pub fn login<S: TokenStore>(&mut self, store: &S, token: &str, now_secs: u64) -> Result<(), SessionError> {
        let claims = match decode_claims(token) {
            Ok(claims) => claims,
            Err(e) => {
                log::error!("login token decode failed: {e}");
                store.clear();
                return Err(e.into());
            }
        };
        if claims.is_expired(now_secs) {
            log::warn!("login token already expired (exp={:?})", claims.exp);
            store.clear();
            return Err(SessionError::Expired);
        }
        store.save(token);
        self.phase = SessionPhase::Ready;
        self.token = Some(token.to_owned());
        self.user = Some(claims.to_user());
        self.epoch += 1;
        log::info!("signed in as {}", claims.name);
        Ok(())
    }

    /// Clear identity and the persisted token. Returns the token that was in
    /// use so the caller can notify the backend afterwards.
    pub fn sign_out<S: TokenStore>(&mut self, store: &S) -> Option<String> {
        let token = self.token.take().or_else(|| store.load());
        store.clear();
        self.user = None;
        self.phase = SessionPhase::Ready;
        self.epoch += 1;
        token
    }
}

/// Startup validation of the persisted token.
///
/// Missing, undecodable and expired tokens resolve to `None` without calling
/// the backend. Otherwise `/api/auth/check` decides; any rejection or failure
/// discards the stored token unless a newer one was saved meanwhile.
pub async fn check_session<S: TokenStore, A: AuthApi>(store: &S, api: &A, now_secs: u64) -> Option<VerifiedSession> {
    let Some(token) = store.load() else {
        log::debug!("no stored token");
        return None;
    };

    let claims = match decode_claims(&token) {
        Ok(claims) => claims,
        Err(e) => {
            log::warn!("stored token unreadable, discarding: {e}");
            store.clear();
            return None;
        }
    };
    if claims.is_expired(now_secs) {
        log::info!("stored token expired locally, discarding");
        store.clear();
        return None;
    }

    match api.check(&token).await {
        Ok(check) if check.is_authenticated => {
            log::debug!("token validated with backend");
            let user = check.user.unwrap_or_else(|| claims.to_user());
            Some(VerifiedSession { token, user })
        }
        Ok(_) => {
            log::info!("token rejected by backend");
            discard_if_current(store, &token);
            None
        }
        Err(e) if e.is_unauthorized() => {
            log::info!("token rejected by backend: {e}");
            discard_if_current(store, &token);
            None
        }
        Err(e) => {
            log::error!("token validation failed: {e}");
            discard_if_current(store, &token);
            None
        }
    }
}

/// Clear the store only if it still holds `checked`; a login that landed
/// while the check was in flight has already replaced it.
fn discard_if_current<S: TokenStore>(store: &S, checked: &str) {
    if store.load().as_deref() == Some(checked) {
        store.clear();
    } else {
        log::debug!("stored token changed during check; keeping it");
    }
}

/// Best-effort backend logout after local state has been cleared.
///
/// Always reports success: the local session is already gone, so a failed
/// notification is only logged.
pub async fn notify_logout<A: AuthApi>(api: &A, token: Option<String>) -> bool {
    let Some(token) = token else {
        return true;
    };
    if let Err(e) = api.logout(&token).await {
        log::warn!("backend logout failed: {e}");
    }
    true
}
