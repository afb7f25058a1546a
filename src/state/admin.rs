//! Admin dashboard state: every user and every letter.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only sessions with the `admin` role fetch anything; other users get a
//! permission error. Search, statistics and owner resolution run locally
//! over the fetched lists.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use crate::net::api::AdminApi;
use crate::net::error::ApiError;
use crate::net::types::{Letter, UserSummary};
use crate::state::letters::{DeleteConfirm, apply_delete, synced_count};
use crate::state::notice::Notice;
use crate::state::session::SessionState;
use crate::util::request_id::{LatestOnly, RequestId};

pub const PERMISSION_DENIED: &str = "You do not have permission to access this page.";
pub const FETCH_FAILED: &str = "Failed to fetch data. Please try again.";
pub const UNKNOWN_USER: &str = "Unknown User";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdminStats {
    pub users: usize,
    pub letters: usize,
    pub synced: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminState {
    pub users: Vec<UserSummary>,
    pub letters: Vec<Letter>,
    pub loading: bool,
    pub error: Option<String>,
    pub search: String,
    pub preview_id: Option<String>,
    pub delete: DeleteConfirm,
    pub notice: Option<Notice>,
    pub fetches: LatestOnly,
}

impl Default for AdminState {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            letters: Vec::new(),
            loading: true,
            error: None,
            search: String::new(),
            preview_id: None,
            delete: DeleteConfirm::default(),
            notice: None,
            fetches: LatestOnly::default(),
        }
    }
}

impl AdminState {
    /// Start the admin fetch, or record a permission error for non-admins.
    /// Returns `None` when nothing should be fetched.
    pub fn begin_load(&mut self, session: &SessionState) -> Option<RequestId> {
        if !session.is_admin() {
            self.fetches.drop_pending();
            self.loading = false;
            self.error = Some(PERMISSION_DENIED.to_owned());
            return None;
        }
        self.loading = true;
        self.error = None;
        Some(self.fetches.begin())
    }

    /// Apply a fetch result. Returns `false` if the result was stale.
    pub fn finish_load(&mut self, id: RequestId, result: Result<(Vec<UserSummary>, Vec<Letter>), ApiError>) -> bool {
        if !self.fetches.settle(id) {
            return false;
        }
        self.loading = false;
        match result {
            Ok((users, letters)) => {
                self.users = users;
                self.letters = letters;
            }
            Err(e) => {
                log::error!("fetching admin data failed: {e}");
                self.error = Some(FETCH_FAILED.to_owned());
            }
        }
        true
    }

    pub fn cancel(&mut self) {
        if self.fetches.drop_pending() {
            log::debug!("dropped in-flight admin fetch");
        }
        self.loading = false;
    }

    /// Display name for a letter owner.
    pub fn owner_name(&self, owner_id: &str) -> &str {
        self.users
            .iter()
            .find(|u| u.id == owner_id)
            .map_or(UNKNOWN_USER, |u| u.name.as_str())
    }

    /// Letters whose title or owner name contains the search term,
    /// case-insensitively. An empty term matches everything.
    pub fn filtered_letters(&self) -> Vec<&Letter> {
        let needle = self.search.to_lowercase();
        self.letters
            .iter()
            .filter(|letter| {
                needle.is_empty()
                    || letter.title.to_lowercase().contains(&needle)
                    || self.owner_name(&letter.owner_id).to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn stats(&self) -> AdminStats {
        AdminStats { users: self.users.len(), letters: self.letters.len(), synced: synced_count(&self.letters) }
    }

    /// Toggle the read-only preview for `letter_id`.
    pub fn toggle_preview(&mut self, letter_id: &str) {
        if self.preview_id.as_deref() == Some(letter_id) {
            self.preview_id = None;
        } else {
            self.preview_id = Some(letter_id.to_owned());
        }
    }

    pub fn preview(&self) -> Option<&Letter> {
        let id = self.preview_id.as_deref()?;
        self.letters.iter().find(|l| l.id == id)
    }

    /// Apply the backend's answer to a confirmed delete.
    pub fn finish_delete(&mut self, letter_id: &str, result: Result<(), ApiError>) {
        let notice = apply_delete(&mut self.letters, letter_id, result);
        if self.preview().is_none() {
            self.preview_id = None;
        }
        self.delete.close();
        self.notice = Some(notice);
    }
}

/// Fetch all users, then all letters.
///
/// # Errors
///
/// Returns the first [`ApiError`]; letters are not requested if the user
/// listing fails.
pub async fn fetch_admin_data<A: AdminApi>(api: &A) -> Result<(Vec<UserSummary>, Vec<Letter>), ApiError> {
    let users = api.list_users().await?;
    let letters = api.list_all_letters().await?;
    Ok((users, letters))
}
