//! REST API layer for the letters backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, bearer-authenticated.
//! Native builds: every call returns [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! DESIGN
//! ======
//! Endpoints are grouped into `AuthApi`, `LetterApi` and `AdminApi` traits so
//! session and page logic can be driven by in-memory fakes in tests.
//! `HttpApi` implements all three.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` instead of panics so fetch failures
//! degrade UI behavior without crashing the app.

#![allow(clippy::unused_async)]
#![allow(async_fn_in_trait)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{AuthCheck, Letter, LetterPayload, SaveResponse, UserSummary};
use crate::config::ClientConfig;

const AUTH_CHECK_PATH: &str = "/api/auth/check";
const AUTH_LOGOUT_PATH: &str = "/api/auth/logout";
const LETTERS_PATH: &str = "/api/letters";
const ADMIN_USERS_PATH: &str = "/api/admin/users";
const ADMIN_LETTERS_PATH: &str = "/api/admin/letters";

fn letter_path(id: &str) -> String {
    format!("{LETTERS_PATH}/{id}")
}

fn admin_letter_path(id: &str) -> String {
    format!("{ADMIN_LETTERS_PATH}/{id}")
}

#[cfg(any(test, feature = "csr"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Token validation and server-side session termination.
pub trait AuthApi {
    /// `GET /api/auth/check` with `token` as the bearer credential.
    async fn check(&self, token: &str) -> Result<AuthCheck, ApiError>;

    /// `GET /api/auth/logout`; best-effort from the caller's point of view.
    async fn logout(&self, token: &str) -> Result<(), ApiError>;
}

/// The signed-in user's own letters.
pub trait LetterApi {
    async fn list_letters(&self) -> Result<Vec<Letter>, ApiError>;
    async fn get_letter(&self, id: &str) -> Result<Letter, ApiError>;
    async fn create_letter(&self, payload: &LetterPayload) -> Result<SaveResponse, ApiError>;
    async fn update_letter(&self, id: &str, payload: &LetterPayload) -> Result<SaveResponse, ApiError>;
    async fn delete_letter(&self, id: &str) -> Result<(), ApiError>;
}

/// Admin-only listings across all users.
pub trait AdminApi {
    async fn list_users(&self) -> Result<Vec<UserSummary>, ApiError>;
    async fn list_all_letters(&self) -> Result<Vec<Letter>, ApiError>;
    async fn delete_any_letter(&self, id: &str) -> Result<(), ApiError>;
}

/// HTTP implementation of every API trait.
///
/// Cheap to clone; pages build one from the current session token and move
/// it into a `spawn_local` task.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpApi {
    config: ClientConfig,
    token: Option<String>,
}

impl HttpApi {
    pub fn new(config: ClientConfig, token: Option<String>) -> Self {
        Self { config, token }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }
}

#[cfg(not(feature = "csr"))]
fn unavailable<T>(url: &str) -> Result<T, ApiError> {
    log::debug!("{url} is only reachable from the browser");
    Err(ApiError::Unavailable)
}

#[cfg(feature = "csr")]
mod transport {
    use gloo_net::http::{RequestBuilder, Response};
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use super::{ApiError, bearer};

    pub(super) fn network(err: gloo_net::Error) -> ApiError {
        ApiError::Network(err.to_string())
    }

    pub(super) fn authorize(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(token) => builder.header("Authorization", &bearer(token)),
            None => builder,
        }
    }

    pub(super) async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
        let resp = builder.send().await.map_err(network)?;
        if !resp.ok() {
            return Err(ApiError::Status { status: resp.status() });
        }
        Ok(resp)
    }

    pub(super) async fn send_json<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<Response, ApiError> {
        let resp = builder.json(body).map_err(network)?.send().await.map_err(network)?;
        if !resp.ok() {
            return Err(ApiError::Status { status: resp.status() });
        }
        Ok(resp)
    }

    pub(super) async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl AuthApi for HttpApi {
    async fn check(&self, token: &str) -> Result<AuthCheck, ApiError> {
        let url = self.url(AUTH_CHECK_PATH);
        #[cfg(feature = "csr")]
        {
            let builder = transport::authorize(gloo_net::http::Request::get(&url), Some(token));
            let resp = transport::send(builder).await?;
            transport::read_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            unavailable(&url)
        }
    }

    async fn logout(&self, token: &str) -> Result<(), ApiError> {
        let url = self.url(AUTH_LOGOUT_PATH);
        #[cfg(feature = "csr")]
        {
            let builder = transport::authorize(gloo_net::http::Request::get(&url), Some(token));
            transport::send(builder).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            unavailable(&url)
        }
    }
}

impl LetterApi for HttpApi {
    async fn list_letters(&self) -> Result<Vec<Letter>, ApiError> {
        let url = self.url(LETTERS_PATH);
        #[cfg(feature = "csr")]
        {
            let builder = transport::authorize(gloo_net::http::Request::get(&url), self.token());
            let resp = transport::send(builder).await?;
            transport::read_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            unavailable(&url)
        }
    }

    async fn get_letter(&self, id: &str) -> Result<Letter, ApiError> {
        let url = self.url(&letter_path(id));
        #[cfg(feature = "csr")]
        {
            let builder = transport::authorize(gloo_net::http::Request::get(&url), self.token());
            let resp = transport::send(builder).await?;
            transport::read_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            unavailable(&url)
        }
    }

    async fn create_letter(&self, payload: &LetterPayload) -> Result<SaveResponse, ApiError> {
        let url = self.url(LETTERS_PATH);
        #[cfg(feature = "csr")]
        {
            let builder = transport::authorize(gloo_net::http::Request::post(&url), self.token());
            let resp = transport::send_json(builder, payload).await?;
            transport::read_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = payload;
            unavailable(&url)
        }
    }

    async fn update_letter(&self, id: &str, payload: &LetterPayload) -> Result<SaveResponse, ApiError> {
        let url = self.url(&letter_path(id));
        #[cfg(feature = "csr")]
        {
            let builder = transport::authorize(gloo_net::http::Request::put(&url), self.token());
            let resp = transport::send_json(builder, payload).await?;
            transport::read_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = payload;
            unavailable(&url)
        }
    }

    async fn delete_letter(&self, id: &str) -> Result<(), ApiError> {
        let url = self.url(&letter_path(id));
        #[cfg(feature = "csr")]
        {
            let builder = transport::authorize(gloo_net::http::Request::delete(&url), self.token());
            transport::send(builder).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            unavailable(&url)
        }
    }
}

impl AdminApi for HttpApi {
    async fn list_users(&self) -> Result<Vec<UserSummary>, ApiError> {
        let url = self.url(ADMIN_USERS_PATH);
        #[cfg(feature = "csr")]
        {
            let builder = transport::authorize(gloo_net::http::Request::get(&url), self.token());
            let resp = transport::send(builder).await?;
            transport::read_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            unavailable(&url)
        }
    }

    async fn list_all_letters(&self) -> Result<Vec<Letter>, ApiError> {
        let url = self.url(ADMIN_LETTERS_PATH);
        #[cfg(feature = "csr")]
        {
            let builder = transport::authorize(gloo_net::http::Request::get(&url), self.token());
            let resp = transport::send(builder).await?;
            transport::read_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            unavailable(&url)
        }
    }

    async fn delete_any_letter(&self, id: &str) -> Result<(), ApiError> {
        let url = self.url(&admin_letter_path(id));
        #[cfg(feature = "csr")]
        {
            let builder = transport::authorize(gloo_net::http::Request::delete(&url), self.token());
            transport::send(builder).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            unavailable(&url)
        }
    }
}
