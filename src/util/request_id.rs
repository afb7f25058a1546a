//! Latest-only tracking for page fetches and saves.
//!
//! SYSTEM CONTEXT
//! ==============
//! Page requests run as detached `spawn_local` tasks that may finish after
//! the user has moved on. A page starts a request with [`LatestOnly::begin`]
//! and applies the response only if [`LatestOnly::settle`] accepts its id.
//! A newer request, a route change or view teardown (`on_cleanup` calling
//! [`LatestOnly::drop_pending`]) makes every earlier id stale.

#[cfg(test)]
#[path = "request_id_test.rs"]
mod request_id_test;

/// Ticket handed out for one request; compared, never inspected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestId(u64);

/// At most one pending request per tracker. Ids keep increasing for the
/// tracker's lifetime, so a stale ticket can never match a later request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LatestOnly {
    issued: u64,
    pending: Option<RequestId>,
}

impl LatestOnly {
    /// Issue a ticket for a new request, superseding any pending one.
    pub fn begin(&mut self) -> RequestId {
        self.issued += 1;
        let id = RequestId(self.issued);
        self.pending = Some(id);
        id
    }

    /// Accept the response for `id` if it is still the pending request.
    /// A ticket settles at most once.
    pub fn settle(&mut self, id: RequestId) -> bool {
        if self.pending == Some(id) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Forget the pending request. Returns `true` if one was in flight.
    pub fn drop_pending(&mut self) -> bool {
        self.pending.take().is_some()
    }
}
