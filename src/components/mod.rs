//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (navigation, toasts, dialogs, cards) and
//! read the session from the Leptos context provided by `app::App`.

pub mod confirm_dialog;
pub mod letter_card;
pub mod loading;
pub mod navbar;
pub mod notice_toast;
pub mod private_route;
pub mod session_debug;
