//! Wire DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! Field names follow the backend's JSON (`_id`, camelCase timestamps) via
//! serde renames so the rest of the client can use Rust naming.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role. Unknown role strings fall back to [`Role::User`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    #[serde(other)]
    User,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

/// Identity of the signed-in user as returned by `/api/auth/check`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl SessionUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Body of `GET /api/auth/check`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthCheck {
    pub is_authenticated: bool,
    #[serde(default)]
    pub user: Option<SessionUser>,
}

/// A letter as stored by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Letter {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    /// Rich-text body as an HTML string.
    #[serde(default)]
    pub content: String,
    /// Owning user id.
    #[serde(rename = "user", default)]
    pub owner_id: String,
    /// Drive file id when the letter has been synced.
    #[serde(default)]
    pub google_drive_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Letter {
    pub fn is_synced(&self) -> bool {
        self.google_drive_id.as_deref().is_some_and(|id| !id.is_empty())
    }
}

/// User row in the admin listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub email: Option<String>,
}

/// Body for `POST /api/letters` and `PUT /api/letters/:id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterPayload {
    pub title: String,
    pub content: String,
    pub save_to_google_drive: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LetterRef {
    #[serde(rename = "_id")]
    pub id: String,
}

/// Response to a create or update. The backend returns either the letter
/// itself or `{ letter, warning }`, so every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SaveResponse {
    #[serde(default)]
    pub warning: Option<String>,
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub letter: Option<LetterRef>,
}

impl SaveResponse {
    /// Identifier of the saved letter: top-level `_id`, else `letter._id`.
    pub fn letter_id(&self) -> Option<&str> {
        self.id
            .as_deref()
            .or_else(|| self.letter.as_ref().map(|l| l.id.as_str()))
            .filter(|id| !id.is_empty())
    }

    /// Non-fatal warning (e.g. Drive sync failed), ignoring blank strings.
    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref().filter(|w| !w.trim().is_empty())
    }
}
