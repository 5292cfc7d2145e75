//! # client
//!
//! Leptos + WASM front end for the dark mode toggle page.
//!
//! This crate contains the display mode state, the mode toggle controller,
//! its browser bindings, and the Leptos component and shell that render it.
//! Built with `hydrate` it is the WASM bundle; built with `ssr` it is the
//! library the server renders from.

pub mod app;
pub mod components;
pub mod controller;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook and logger, then hydrate `App`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"console logger already installed".into());
    }
    leptos::mount::hydrate_body(app::App);
}

/// Bind the toggle on a plain HTML page (no Leptos), e.g.
/// `bindModeToggle("mode-toggle")` after the module is initialized.
///
/// # Errors
///
/// Returns the `BindError` message when the control or document is missing.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(js_name = bindModeToggle)]
pub fn bind_mode_toggle(control_id: &str) -> Result<(), wasm_bindgen::JsValue> {
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("console logger already installed");
    }
    util::dark_mode::bind(control_id, util::dark_mode::MarkerTarget::Body)
        .map_err(|err| wasm_bindgen::JsValue::from_str(&err.to_string()))
}
