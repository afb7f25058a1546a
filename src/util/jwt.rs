//! Local, unverified decoding of the JWT bearer token.
//!
//! The backend signs and verifies tokens; the client only reads the payload
//! segment to show identity immediately and to skip a validation round trip
//! for tokens that have already expired.

#[cfg(test)]
#[path = "jwt_test.rs"]
mod jwt_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

use crate::net::types::{Role, SessionUser};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("token is not a three-part JWT")]
    Malformed,
    #[error("token payload is not base64url: {0}")]
    Base64(String),
    #[error("token claims are invalid: {0}")]
    Claims(String),
}

/// Claims carried in the token payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    #[serde(alias = "sub")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    /// Expiry in seconds since the Unix epoch. Tokens without one are left
    /// to the backend to judge.
    #[serde(default)]
    pub exp: Option<u64>,
}

impl TokenClaims {
    /// Expired when `exp` lies strictly before `now`; never without `exp`.
    pub fn is_expired(&self, now_secs: u64) -> bool {
        self.exp.is_some_and(|exp| exp < now_secs)
    }

    pub fn to_user(&self) -> SessionUser {
        SessionUser {
            id: self.id.clone(),
            name: self.name.clone(),
            role: self.role,
            email: self.email.clone(),
            avatar: self.avatar.clone(),
        }
    }
}

/// Decode the payload segment of `token` into [`TokenClaims`].
///
/// # Errors
///
/// Returns [`TokenError`] if the token is not three dot-separated segments,
/// the payload is not base64url, or the JSON does not match the claims shape.
pub fn decode_claims(token: &str) -> Result<TokenClaims, TokenError> {
    let parts: Vec<&str> = token.trim().split('.').collect();
    if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
        return Err(TokenError::Malformed);
    }
    // Some issuers keep `=` padding; the no-pad engine rejects it.
    let payload = parts[1].trim_end_matches('=');
    let decoded = URL_SAFE_NO_PAD.decode(payload).map_err(|e| TokenError::Base64(e.to_string()))?;
    serde_json::from_slice(&decoded).map_err(|e| TokenError::Claims(e.to_string()))
}
