//! Local UI state for the toggle page.
//!
//! DESIGN
//! ======
//! Provided as `RwSignal<UiState>` context by `App`. The label is written by
//! the controller through `SignalLabel`, not computed by the view, so the
//! rendered text is always whatever the last activation produced.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use super::mode::LABEL_TO_DARK;

/// Reactive page state: the control's visible label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub label: String,
}

impl Default for UiState {
    fn default() -> Self {
        Self { label: LABEL_TO_DARK.to_owned() }
    }
}
