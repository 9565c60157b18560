//! Page configuration loading.
//!
//! The host page may embed overrides as JSON:
//!
//! ```html
//! <script id="landmarks-config" type="application/json">{"default_zoom": 12}</script>
//! ```
//!
//! A missing element means defaults. A malformed one is logged and ignored;
//! the page still comes up.

#[cfg(test)]
#[path = "page_config_test.rs"]
mod page_config_test;

use landmarks::AtlasConfig;

pub const CONFIG_ELEMENT_ID: &str = "landmarks-config";

/// Resolve the config from the embedded script text, if any.
pub fn config_from_script(raw: Option<&str>) -> AtlasConfig {
    let Some(raw) = raw else {
        return AtlasConfig::default();
    };
    match AtlasConfig::from_json(raw) {
        Ok(config) => config,
        Err(e) => {
            leptos::logging::warn!("ignoring #{CONFIG_ELEMENT_ID}: {e}");
            AtlasConfig::default()
        }
    }
}

/// Read the config embedded in the current document.
pub fn load_config() -> AtlasConfig {
    #[cfg(feature = "csr")]
    {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        config_from_script(raw.as_deref())
    }
    #[cfg(not(feature = "csr"))]
    {
        config_from_script(None)
    }
}
