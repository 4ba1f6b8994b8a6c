//! Thin wrappers over browser primitives used by panel actions.
//!
//! TRADE-OFFS
//! ==========
//! Outside the browser these degrade to safe defaults: confirmation is
//! declined and timestamps are shown verbatim.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Ask the user to confirm a destructive action with `window.confirm`.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

/// Render an ISO timestamp in the browser's locale.
pub fn format_timestamp(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|r| !r.is_empty()) else {
        return String::new();
    };
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(raw));
        if date.get_time().is_nan() {
            return raw.to_owned();
        }
        String::from(date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        raw.to_owned()
    }
}

/// Files currently selected in a file input, in selection order.
#[cfg(feature = "hydrate")]
pub fn selected_files(input: &web_sys::HtmlInputElement) -> Vec<web_sys::File> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}
