//! Page-level configuration handed from the host to the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host renders the API base into a `<meta>` tag in the SSR shell; the
//! hydrated client reads it back once at startup. A missing or blank value
//! switches login to local demo mode.

#[cfg(test)]
#[path = "page_config_test.rs"]
mod page_config_test;

/// `name` attribute of the meta tag carrying the API base URL.
pub const API_BASE_META: &str = "yousha-api-base";

/// Configuration shared by every panel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageConfig {
    /// Normalized API base URL, or `None` when unconfigured.
    pub api_base: Option<String>,
}

impl PageConfig {
    pub fn new(api_base: Option<&str>) -> Self {
        Self { api_base: normalize_api_base(api_base) }
    }

    /// Base to prefix request paths with. Empty means same-origin.
    pub fn base_url(&self) -> &str {
        self.api_base.as_deref().unwrap_or_default()
    }

    /// Whether login should use the built-in demo credentials.
    pub fn demo_mode(&self) -> bool {
        self.api_base.is_none()
    }
}

/// Trim whitespace and trailing slashes; blank becomes `None`.
pub fn normalize_api_base(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim().trim_end_matches('/');
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Read the page config from the document's meta tag.
pub fn read_page_config() -> PageConfig {
    #[cfg(feature = "hydrate")]
    {
        let selector = format!("meta[name=\"{API_BASE_META}\"]");
        let content = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(&selector).ok().flatten())
            .and_then(|el| el.get_attribute("content"));
        let config = PageConfig::new(content.as_deref());
        if config.demo_mode() {
            leptos::logging::warn!(
                "No API base configured in <meta name=\"{API_BASE_META}\">; using local demo login."
            );
        }
        config
    }
    #[cfg(not(feature = "hydrate"))]
    {
        PageConfig::default()
    }
}
