//! Mode toggle controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the display mode for the single toggle control. Each activation
//! inverts the marker on the page root, reads the marker back, and writes the
//! label for the *next* activation. The marker and label are reached through
//! the `Marker` and `Label` traits so the same controller drives the web-sys
//! binding, the Leptos component, and the in-memory test doubles.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::state::mode::DisplayMode;

/// Boolean marker on the page root that presentation rules key off.
pub trait Marker {
    /// Invert marker presence.
    fn toggle(&mut self);

    /// Whether the marker is currently present.
    fn is_present(&self) -> bool;
}

/// Visible text of the toggle control.
pub trait Label {
    fn set_text(&mut self, text: &str);
}

/// Drives one marker/label pair from activation events.
#[derive(Debug)]
pub struct ModeToggleController<M, L> {
    marker: M,
    label: L,
    mode: DisplayMode,
}

impl<M: Marker, L: Label> ModeToggleController<M, L> {
    /// Bind to a marker and label. The initial mode is read from the marker;
    /// the label is left as the page rendered it.
    pub fn new(marker: M, label: L) -> Self {
        let mode = DisplayMode::from_marker(marker.is_present());
        Self { marker, label, mode }
    }

    /// Handle one activation of the control and return the resulting mode.
    pub fn activate(&mut self) -> DisplayMode {
        self.marker.toggle();
        // Source of truth is the marker as observed after the toggle.
        self.mode = DisplayMode::from_marker(self.marker.is_present());
        self.label.set_text(self.mode.next_action_label());
        log::debug!("display mode switched to {}", self.mode.as_str());
        self.mode
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn marker(&self) -> &M {
        &self.marker
    }

    pub fn label(&self) -> &L {
        &self.label
    }
}
