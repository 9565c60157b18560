//! Small DOM conveniences. Each is a no-op outside the browser build.

/// Wall-clock milliseconds used to stamp form notices.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn now_ms() -> u64 {
    #[cfg(feature = "csr")]
    {
        let now = js_sys::Date::now();
        if now.is_finite() && now > 0.0 { now as u64 } else { 0 }
    }
    #[cfg(not(feature = "csr"))]
    {
        0
    }
}

/// Move keyboard focus to the element with `id`.
pub fn focus_by_id(id: &str) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return;
        };
        let _ = el.focus();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
    }
}

/// Scroll the element with `id` into view, if it is rendered.
pub fn scroll_into_view_by_id(id: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.get_element_by_id(id)) {
            el.scroll_into_view_with_bool(false);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
    }
}

/// Run `f` once after `ms` milliseconds.
pub fn after_ms(ms: u64, f: impl FnOnce() + 'static) {
    #[cfg(feature = "csr")]
    {
        let ms = u32::try_from(ms).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(ms, f).forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (ms, f);
    }
}
