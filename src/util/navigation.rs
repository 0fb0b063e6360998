//! Navigation capability used by sign-out.
//!
//! The browser implementation performs a full-page navigation, which also
//! drops any in-memory state belonging to the previous session.

/// Route the sign-out flow lands on.
pub const SIGN_IN_ROUTE: &str = "/signin";

/// Something that can move the user to another route.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Navigates by assigning `window.location.href`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, path: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(path);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = path;
        }
    }
}
