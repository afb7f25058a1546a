//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the endpoint traits and the browser HTTP implementation,
//! `error` the failure taxonomy, and `types` the shared wire schema.

pub mod api;
pub mod error;
#[cfg(test)]
pub(crate) mod fake;
pub mod types;
