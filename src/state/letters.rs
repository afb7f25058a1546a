//! Letter-list operations shared by the dashboard and admin screens.
//!
//! DESIGN
//! ======
//! Both screens delete with the same confirm-then-call flow and only drop a
//! row once the backend has confirmed, so the list logic lives here once.

#[cfg(test)]
#[path = "letters_test.rs"]
mod letters_test;

use crate::net::error::ApiError;
use crate::net::types::Letter;
use crate::state::notice::Notice;

pub const DELETE_FAILED: &str = "Failed to delete letter. Please try again.";
pub const DELETED: &str = "Letter deleted.";

/// Pending delete confirmation: which letter, and whether its request is in
/// flight.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeleteConfirm {
    pub letter_id: Option<String>,
    pub in_flight: bool,
}

impl DeleteConfirm {
    pub fn is_open(&self) -> bool {
        self.letter_id.is_some()
    }

    pub fn open(&mut self, letter_id: &str) {
        self.letter_id = Some(letter_id.to_owned());
        self.in_flight = false;
    }

    pub fn close(&mut self) {
        self.letter_id = None;
        self.in_flight = false;
    }

    /// Mark the confirmed delete as sent. Returns the id to delete, or `None`
    /// when nothing is pending or a request is already running.
    pub fn confirm(&mut self) -> Option<String> {
        if self.in_flight {
            return None;
        }
        let id = self.letter_id.clone()?;
        self.in_flight = true;
        Some(id)
    }
}

/// Apply the backend's answer to a delete of `letter_id`.
///
/// Success removes the letter; failure leaves `letters` untouched. Either way
/// the returned notice describes the outcome.
pub fn apply_delete(letters: &mut Vec<Letter>, letter_id: &str, result: Result<(), ApiError>) -> Notice {
    match result {
        Ok(()) => {
            letters.retain(|l| l.id != letter_id);
            Notice::success(DELETED)
        }
        Err(e) => {
            log::error!("deleting letter {letter_id} failed: {e}");
            Notice::error(DELETE_FAILED)
        }
    }
}

/// Number of letters with a Drive file.
pub fn synced_count(letters: &[Letter]) -> usize {
    letters.iter().filter(|l| l.is_synced()).count()
}
