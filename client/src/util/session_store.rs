//! Browser `sessionStorage` persistence for the admin bearer token.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes hydrate-only storage glue so the session state machine can be
//! driven by any [`TokenStore`]. SSR paths no-op.

use crate::state::session::TokenStore;

/// Fixed `sessionStorage` key for the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "yousha-admin-token";

/// [`TokenStore`] backed by the tab's `sessionStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

#[cfg(feature = "hydrate")]
fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            session_storage()?
                .get_item(TOKEN_STORAGE_KEY)
                .ok()
                .flatten()
                .filter(|t| !t.is_empty())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = session_storage() else {
                return;
            };
            let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = session_storage() {
                let _ = storage.remove_item(TOKEN_STORAGE_KEY);
            }
        }
    }
}
