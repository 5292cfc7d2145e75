//! Button that switches the page between light and dark mode.
//!
//! SYSTEM CONTEXT
//! ==============
//! The button owns a `ModeToggleController` for its lifetime. Clicks toggle
//! the `dark-mode` class on `<body>`; the controller writes the next-action
//! label into `UiState`, which the view renders.

#[cfg(test)]
#[path = "mode_toggle_test.rs"]
mod mode_toggle_test;

use leptos::prelude::*;

use crate::controller::{Label, ModeToggleController};
use crate::state::mode::CONTROL_ID;
use crate::state::ui::UiState;
use crate::util::dark_mode::{ClassMarker, MarkerTarget};

/// Label that writes into the shared `UiState` signal.
#[derive(Clone, Copy, Debug)]
pub struct SignalLabel(pub RwSignal<UiState>);

impl Label for SignalLabel {
    fn set_text(&mut self, text: &str) {
        self.0.update(|ui| ui.label = text.to_owned());
    }
}

/// The dark mode toggle control.
#[component]
pub fn ModeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let controller =
        StoredValue::new(ModeToggleController::new(ClassMarker::new(MarkerTarget::Body), SignalLabel(ui)));

    let on_click = move |_| {
        controller.update_value(|c| {
            c.activate();
        });
    };

    view! {
        <button id=CONTROL_ID class="btn mode-toggle" on:click=on_click>
            {move || ui.get().label}
        </button>
    }
}
