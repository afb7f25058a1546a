//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page owns a local state signal from `crate::state` and drives its
//! requests through `crate::net::api`. Session and config come from context.

pub mod admin;
pub mod dashboard;
pub mod editor;
pub mod home;
pub mod login;
pub mod not_found;
