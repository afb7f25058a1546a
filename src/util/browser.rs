//! Thin wrappers over `window.location`, `window.history` and task spawning.
//!
//! TRADE-OFFS
//! ==========
//! Browser navigation is best-effort; failures are logged and native builds
//! no-op so page components can call these unconditionally.

/// Replace the visible URL (e.g. to drop `?token=`) without navigating.
pub fn replace_url(path: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
            return;
        };
        if history
            .replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path))
            .is_err()
        {
            log::warn!("could not replace URL with {path}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
    }
}

/// Leave the app for `url` (used for the OAuth redirect).
pub fn leave_for(url: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(url).is_err() {
                log::error!("could not navigate to {url}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
    }
}

/// Run `fut` on the browser event loop. Native builds have no executor for
/// UI tasks, so the future is dropped unpolled.
pub fn spawn_task<F>(fut: F)
where
    F: std::future::Future<Output = ()> + 'static,
{
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "csr"))]
    drop(fut);
}
