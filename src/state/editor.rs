//! Editor state for creating and editing a single letter.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/editor` opens in create mode, `/editor/:id` in edit mode. After the
//! first successful create the page navigates to `/editor/<id>` and the
//! state is retargeted in place, keeping the draft and the success notice.
//!
//! CONCURRENCY
//! ===========
//! A save requested while another is in flight is rejected, so double
//! clicks cannot create duplicate letters.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use crate::net::api::LetterApi;
use crate::net::error::ApiError;
use crate::net::types::{Letter, LetterPayload, SaveResponse};
use crate::state::notice::Notice;
use crate::util::request_id::{LatestOnly, RequestId};

pub const TITLE_REQUIRED: &str = "Please provide a title for your letter.";
pub const SAVED: &str = "Letter saved successfully!";
pub const SAVED_TO_DRIVE: &str = "Letter saved successfully to Google Drive!";
pub const SAVE_FAILED: &str = "Failed to save the letter. Please try again.";
pub const LOAD_FAILED: &str = "Failed to load the letter. Please try again.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EditorMode {
    #[default]
    Create,
    Edit(String),
}

impl EditorMode {
    pub fn from_route(id: Option<String>) -> Self {
        match id.filter(|id| !id.trim().is_empty()) {
            Some(id) => Self::Edit(id),
            None => Self::Create,
        }
    }

    pub fn letter_id(&self) -> Option<&str> {
        match self {
            Self::Create => None,
            Self::Edit(id) => Some(id),
        }
    }
}

/// Editor route for a saved letter.
pub fn editor_path(letter_id: &str) -> String {
    format!("/editor/{letter_id}")
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditorState {
    pub mode: EditorMode,
    pub title: String,
    pub content: String,
    pub save_to_drive: bool,
    /// True only for the first fetch of an edit route; later refetches keep
    /// the form visible.
    pub initial_load: bool,
    pub loading: bool,
    pub saving: bool,
    pub notice: Option<Notice>,
    pub loads: LatestOnly,
    pub saves: LatestOnly,
}

impl EditorState {
    pub fn for_route(id: Option<String>) -> Self {
        let mode = EditorMode::from_route(id);
        let initial_load = matches!(mode, EditorMode::Edit(_));
        Self { mode, initial_load, ..Self::default() }
    }

    /// Follow a route change. Returns `true` if the letter must be (re)loaded.
    ///
    /// Going from create mode to a freshly created letter keeps the draft and
    /// the save notice so the form does not flash empty. Any other switch
    /// starts from a clean form.
    pub fn retarget(&mut self, id: Option<String>) -> bool {
        let mode = EditorMode::from_route(id);
        if mode == self.mode {
            return false;
        }
        let keep_draft = self.mode == EditorMode::Create;
        self.cancel();
        if keep_draft {
            self.mode = mode;
        } else {
            self.reset_to(mode);
        }
        self.mode != EditorMode::Create
    }

    /// Clean form for `mode`, keeping the request counters so ids handed out
    /// earlier can never match a later request.
    fn reset_to(&mut self, mode: EditorMode) {
        let loads = std::mem::take(&mut self.loads);
        let saves = std::mem::take(&mut self.saves);
        *self = Self { loads, saves, ..Self::for_route(mode.letter_id().map(str::to_owned)) };
    }

    pub fn show_loading_screen(&self) -> bool {
        self.loading && self.initial_load
    }

    /// Start fetching the letter in edit mode.
    pub fn begin_load(&mut self) -> Option<(RequestId, String)> {
        let id = self.mode.letter_id()?.to_owned();
        self.loading = true;
        Some((self.loads.begin(), id))
    }

    /// Apply a fetched letter. Returns `false` if the result was stale.
    pub fn finish_load(&mut self, req: RequestId, result: Result<Letter, ApiError>) -> bool {
        if !self.loads.settle(req) {
            return false;
        }
        self.loading = false;
        self.initial_load = false;
        match result {
            Ok(letter) => {
                self.save_to_drive = letter.is_synced();
                self.title = letter.title;
                self.content = letter.content;
            }
            Err(e) => {
                log::error!("fetching letter failed: {e}");
                self.notice = Some(Notice::error(LOAD_FAILED));
            }
        }
        true
    }

    pub fn cancel(&mut self) {
        if self.loads.drop_pending() {
            log::debug!("dropped in-flight letter load");
        }
        if self.saves.drop_pending() {
            log::debug!("dropped in-flight letter save");
        }
        self.loading = false;
        self.saving = false;
    }

    /// Validate the draft into a request body.
    ///
    /// # Errors
    ///
    /// Returns an error notice when the title is empty or whitespace.
    pub fn payload(&self) -> Result<LetterPayload, Notice> {
        if self.title.trim().is_empty() {
            return Err(Notice::error(TITLE_REQUIRED));
        }
        Ok(LetterPayload {
            title: self.title.clone(),
            content: self.content.clone(),
            save_to_google_drive: self.save_to_drive,
        })
    }

    /// Start a save. Returns `None` without touching the network when the
    /// draft is invalid (the validation notice is shown) or a save is
    /// already running.
    pub fn begin_save(&mut self) -> Option<(RequestId, EditorMode, LetterPayload)> {
        if self.saving {
            log::debug!("save already in flight; ignoring");
            return None;
        }
        match self.payload() {
            Ok(payload) => {
                self.saving = true;
                Some((self.saves.begin(), self.mode.clone(), payload))
            }
            Err(notice) => {
                self.notice = Some(notice);
                None
            }
        }
    }

    /// Apply a save result. Returns the route to navigate to after the first
    /// successful create.
    pub fn finish_save(&mut self, req: RequestId, result: Result<SaveResponse, ApiError>) -> Option<String> {
        if !self.saves.settle(req) {
            return None;
        }
        self.saving = false;
        let response = match result {
            Ok(response) => response,
            Err(e) => {
                log::error!("saving letter failed: {e}");
                self.notice = Some(Notice::error(SAVE_FAILED));
                return None;
            }
        };

        self.notice = Some(match response.warning() {
            Some(warning) => {
                log::warn!("letter saved with warning: {warning}");
                Notice::warning(warning)
            }
            None if self.save_to_drive => Notice::success(SAVED_TO_DRIVE),
            None => Notice::success(SAVED),
        });

        if self.mode == EditorMode::Create {
            return response.letter_id().map(editor_path);
        }
        None
    }
}

/// Send the save for `mode`: create in create mode, update in edit mode.
///
/// # Errors
///
/// Propagates the [`ApiError`] from the underlying call.
pub async fn submit<A: LetterApi>(api: &A, mode: &EditorMode, payload: &LetterPayload) -> Result<SaveResponse, ApiError> {
    match mode {
        EditorMode::Create => api.create_letter(payload).await,
        EditorMode::Edit(id) => api.update_letter(id, payload).await,
    }
}
