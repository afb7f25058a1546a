//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend lives on a separately deployed origin. Its base URL is baked
//! into the WASM bundle from `LETTER_DRIVE_API_URL` when the crate is built;
//! an unset or empty value means "same origin" and endpoints stay relative.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Resolved client configuration, provided to components via context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    api_base_url: String,
}

impl ClientConfig {
    /// Read `LETTER_DRIVE_API_URL` as captured at compile time.
    pub fn from_build_env() -> Self {
        Self::with_base_url(option_env!("LETTER_DRIVE_API_URL").unwrap_or_default())
    }

    /// Build a config from an explicit base URL, trimming whitespace and
    /// trailing slashes.
    pub fn with_base_url(raw: &str) -> Self {
        Self { api_base_url: raw.trim().trim_end_matches('/').to_owned() }
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Absolute (or same-origin relative) URL for an API path such as
    /// `/api/letters`.
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.api_base_url)
        } else {
            format!("{}/{path}", self.api_base_url)
        }
    }

    /// Browser navigation target that starts the Google OAuth flow.
    pub fn oauth_start_url(&self) -> String {
        self.endpoint("/api/auth/google")
    }
}
