//! Display mode model shared by the controller, the DOM bindings, and the
//! Leptos component.
//!
//! DESIGN
//! ======
//! The mode is an explicit two-variant enum. The `dark-mode` marker class and
//! the control label are one-way outputs derived from it.

#[cfg(test)]
#[path = "mode_test.rs"]
mod mode_test;

/// CSS class applied to the page root while dark mode is active.
pub const MARKER_CLASS: &str = "dark-mode";

/// Element id of the single toggle control.
pub const CONTROL_ID: &str = "mode-toggle";

/// Label shown while dark mode is active (next click goes light).
pub const LABEL_TO_LIGHT: &str = "Switch to Light Mode";

/// Label shown while light mode is active (next click goes dark).
pub const LABEL_TO_DARK: &str = "Switch to Dark Mode";

/// Binary display mode of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    /// Marker absent. Initial state on every page load.
    #[default]
    Light,
    /// Marker present.
    Dark,
}

impl DisplayMode {
    /// Derive the mode from marker presence on the page root.
    pub fn from_marker(present: bool) -> Self {
        if present { Self::Dark } else { Self::Light }
    }

    /// The opposite mode. Applying it twice yields the original mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Whether the marker class should be present for this mode.
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Label text describing what the *next* activation will do.
    pub fn next_action_label(self) -> &'static str {
        match self {
            Self::Light => LABEL_TO_DARK,
            Self::Dark => LABEL_TO_LIGHT,
        }
    }

    /// Short lowercase name, used in log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}
