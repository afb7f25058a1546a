//! In-memory API fake for unit tests.

use std::cell::RefCell;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use super::api::{AdminApi, AuthApi, LetterApi};
use super::error::ApiError;
use super::types::{AuthCheck, Letter, LetterPayload, SaveResponse, UserSummary};

/// Scripted responses plus a log of every call as `"METHOD /path"`.
pub struct FakeBackend {
    pub calls: RefCell<Vec<String>>,
    pub bodies: RefCell<Vec<serde_json::Value>>,
    pub check: Result<AuthCheck, ApiError>,
    pub logout: Result<(), ApiError>,
    pub letters: Result<Vec<Letter>, ApiError>,
    pub letter: Result<Letter, ApiError>,
    pub save: Result<SaveResponse, ApiError>,
    pub delete: Result<(), ApiError>,
    pub users: Result<Vec<UserSummary>, ApiError>,
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            bodies: RefCell::new(Vec::new()),
            check: Ok(AuthCheck { is_authenticated: false, user: None }),
            logout: Ok(()),
            letters: Ok(Vec::new()),
            letter: Err(ApiError::Status { status: 404 }),
            save: Ok(SaveResponse::default()),
            delete: Ok(()),
            users: Ok(Vec::new()),
        }
    }
}

impl FakeBackend {
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn record_body(&self, payload: &LetterPayload) {
        self.bodies.borrow_mut().push(serde_json::to_value(payload).unwrap_or_default());
    }
}

impl AuthApi for FakeBackend {
    async fn check(&self, token: &str) -> Result<AuthCheck, ApiError> {
        self.record(format!("GET /api/auth/check bearer={token}"));
        self.check.clone()
    }

    async fn logout(&self, token: &str) -> Result<(), ApiError> {
        self.record(format!("GET /api/auth/logout bearer={token}"));
        self.logout.clone()
    }
}

impl LetterApi for FakeBackend {
    async fn list_letters(&self) -> Result<Vec<Letter>, ApiError> {
        self.record("GET /api/letters".to_owned());
        self.letters.clone()
    }

    async fn get_letter(&self, id: &str) -> Result<Letter, ApiError> {
        self.record(format!("GET /api/letters/{id}"));
        self.letter.clone()
    }

    async fn create_letter(&self, payload: &LetterPayload) -> Result<SaveResponse, ApiError> {
        self.record("POST /api/letters".to_owned());
        self.record_body(payload);
        self.save.clone()
    }

    async fn update_letter(&self, id: &str, payload: &LetterPayload) -> Result<SaveResponse, ApiError> {
        self.record(format!("PUT /api/letters/{id}"));
        self.record_body(payload);
        self.save.clone()
    }

    async fn delete_letter(&self, id: &str) -> Result<(), ApiError> {
        self.record(format!("DELETE /api/letters/{id}"));
        self.delete.clone()
    }
}

impl AdminApi for FakeBackend {
    async fn list_users(&self) -> Result<Vec<UserSummary>, ApiError> {
        self.record("GET /api/admin/users".to_owned());
        self.users.clone()
    }

    async fn list_all_letters(&self) -> Result<Vec<Letter>, ApiError> {
        self.record("GET /api/admin/letters".to_owned());
        self.letters.clone()
    }

    async fn delete_any_letter(&self, id: &str) -> Result<(), ApiError> {
        self.record(format!("DELETE /api/admin/letters/{id}"));
        self.delete.clone()
    }
}

pub fn letter(id: &str, title: &str, owner_id: &str) -> Letter {
    Letter {
        id: id.to_owned(),
        title: title.to_owned(),
        content: String::new(),
        owner_id: owner_id.to_owned(),
        google_drive_id: None,
        created_at: Some("2024-01-01T00:00:00.000Z".to_owned()),
        updated_at: Some("2024-01-02T00:00:00.000Z".to_owned()),
    }
}

pub fn user(id: &str, name: &str) -> UserSummary {
    UserSummary { id: id.to_owned(), name: name.to_owned(), role: super::types::Role::User, email: None }
}

/// Unsigned JWT carrying `claims`.
pub fn token(claims: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.sig")
}
