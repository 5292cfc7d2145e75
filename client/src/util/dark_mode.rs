//! Browser bindings for the dark mode toggle.
//!
//! `ClassMarker` toggles the `dark-mode` class on the page root and
//! `ElementLabel` writes the control's text. `bind` wires both to a
//! `ModeToggleController` behind a click listener on `#mode-toggle`, which
//! is what static pages call through `bindModeToggle`. Requires a browser
//! environment; without the `hydrate` feature the marker keeps its state in
//! memory and `bind` reports `BindError::Unavailable`.
//!
//! TRADE-OFFS
//! ==========
//! When the target element exists the class list is the only state. A refused
//! class change is logged and the marker stays as it was, so the controller's
//! read-back leaves the mode unchanged. The in-memory flag is used only when no
//! target element is reachable.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::controller::Marker;
#[cfg(feature = "hydrate")]
use crate::controller::{Label, ModeToggleController};
#[cfg(feature = "hydrate")]
use crate::state::mode::MARKER_CLASS;

/// Element that carries the marker class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MarkerTarget {
    /// `<body>`, the page root the toggle has always marked.
    #[default]
    Body,
    /// `<html>`.
    DocumentElement,
}

/// Errors from binding the toggle to a live document.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BindError {
    #[error("no document available")]
    NoDocument,

    #[error("control #{id} not found")]
    ControlNotFound { id: String },

    #[error("failed to attach click listener: {0}")]
    Listener(String),

    #[error("DOM bindings are only available with the hydrate feature")]
    Unavailable,
}

/// Marker backed by the class list of the target element.
#[derive(Clone, Debug)]
pub struct ClassMarker {
    target: MarkerTarget,
    fallback: bool,
}

impl ClassMarker {
    /// Attach to `target`, adopting whatever marker state the page already has.
    pub fn new(target: MarkerTarget) -> Self {
        let mut marker = Self { target, fallback: false };
        marker.fallback = marker.is_present();
        marker
    }

    pub fn target(&self) -> MarkerTarget {
        self.target
    }
}

impl Marker for ClassMarker {
    fn toggle(&mut self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = target_element(self.target) {
                if let Err(err) = el.class_list().toggle(MARKER_CLASS) {
                    log::warn!("failed to toggle .{MARKER_CLASS}: {err:?}");
                }
                return;
            }
        }
        self.fallback = !self.fallback;
    }

    fn is_present(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = target_element(self.target) {
                return el.class_list().contains(MARKER_CLASS);
            }
        }
        self.fallback
    }
}

#[cfg(feature = "hydrate")]
fn target_element(target: MarkerTarget) -> Option<web_sys::Element> {
    let doc = web_sys::window()?.document()?;
    match target {
        MarkerTarget::Body => doc.body().map(web_sys::Element::from),
        MarkerTarget::DocumentElement => doc.document_element(),
    }
}

/// Label backed by the control element's text content.
#[cfg(feature = "hydrate")]
#[derive(Clone, Debug)]
pub struct ElementLabel {
    element: web_sys::Element,
}

#[cfg(feature = "hydrate")]
impl ElementLabel {
    pub fn new(element: web_sys::Element) -> Self {
        Self { element }
    }
}

#[cfg(feature = "hydrate")]
impl Label for ElementLabel {
    fn set_text(&mut self, text: &str) {
        self.element.set_text_content(Some(text));
    }
}

/// Look up the control by id and toggle the marker on every click.
///
/// The control is resolved once. The listener stays attached for the life
/// of the page.
///
/// # Errors
///
/// Returns `BindError::NoDocument` outside a browser window,
/// `BindError::ControlNotFound` when no element has `control_id`, and
/// `BindError::Unavailable` in builds without the `hydrate` feature.
pub fn bind(control_id: &str, target: MarkerTarget) -> Result<(), BindError> {
    #[cfg(feature = "hydrate")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(BindError::NoDocument)?;
        let control = document
            .get_element_by_id(control_id)
            .ok_or_else(|| BindError::ControlNotFound { id: control_id.to_owned() })?;

        let controller = Rc::new(RefCell::new(ModeToggleController::new(
            ClassMarker::new(target),
            ElementLabel::new(control.clone()),
        )));
        let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            controller.borrow_mut().activate();
        });
        control
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .map_err(|err| BindError::Listener(format!("{err:?}")))?;
        on_click.forget();

        log::info!("mode toggle bound to #{control_id} ({target:?})");
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::debug!("skipping mode toggle binding for #{control_id} ({target:?})");
        Err(BindError::Unavailable)
    }
}
