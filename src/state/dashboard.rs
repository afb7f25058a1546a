//! Dashboard state: the signed-in user's letters.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::error::ApiError;
use crate::net::types::Letter;
use crate::state::letters::{DeleteConfirm, apply_delete};
use crate::state::notice::Notice;
use crate::util::request_id::{LatestOnly, RequestId};

pub const FETCH_FAILED: &str = "Failed to fetch letters. Please try again.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardState {
    pub letters: Vec<Letter>,
    pub loading: bool,
    pub error: Option<String>,
    pub delete: DeleteConfirm,
    pub notice: Option<Notice>,
    pub fetches: LatestOnly,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            letters: Vec::new(),
            loading: true,
            error: None,
            delete: DeleteConfirm::default(),
            notice: None,
            fetches: LatestOnly::default(),
        }
    }
}

impl DashboardState {
    /// Start (or restart) the letter fetch.
    pub fn begin_load(&mut self) -> RequestId {
        self.loading = true;
        self.error = None;
        self.fetches.begin()
    }

    /// Apply a fetch result. Returns `false` if the result was stale.
    pub fn finish_load(&mut self, id: RequestId, result: Result<Vec<Letter>, ApiError>) -> bool {
        if !self.fetches.settle(id) {
            return false;
        }
        self.loading = false;
        match result {
            Ok(letters) => self.letters = letters,
            Err(e) => {
                log::error!("fetching letters failed: {e}");
                self.error = Some(FETCH_FAILED.to_owned());
            }
        }
        true
    }

    /// Drop any in-flight fetch, e.g. on view teardown.
    pub fn cancel(&mut self) {
        if self.fetches.drop_pending() {
            log::debug!("dropped in-flight letter fetch");
        }
        self.loading = false;
    }

    pub fn is_empty(&self) -> bool {
        !self.loading && self.error.is_none() && self.letters.is_empty()
    }

    /// Apply the backend's answer to a confirmed delete.
    pub fn finish_delete(&mut self, letter_id: &str, result: Result<(), ApiError>) {
        let notice = apply_delete(&mut self.letters, letter_id, result);
        self.delete.close();
        self.notice = Some(notice);
    }
}
