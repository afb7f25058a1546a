//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by screen (`dashboard`, `editor`, `admin`) plus the
//! app-wide `session`, so individual pages depend on small focused models.
//! Every async result is applied through a plain method on these models,
//! which keeps the transitions testable without a browser.

pub mod admin;
pub mod dashboard;
pub mod editor;
pub mod letters;
pub mod notice;
pub mod session;
