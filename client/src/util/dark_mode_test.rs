#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::controller::{Label, ModeToggleController};
use crate::state::mode::{CONTROL_ID, DisplayMode, LABEL_TO_DARK, LABEL_TO_LIGHT};

#[derive(Debug, Default)]
struct TextLabel(String);

impl Label for TextLabel {
    fn set_text(&mut self, text: &str) {
        self.0 = text.to_owned();
    }
}

#[test]
fn marker_target_defaults_to_body() {
    assert_eq!(MarkerTarget::default(), MarkerTarget::Body);
}

#[test]
fn class_marker_starts_absent_without_dom() {
    let marker = ClassMarker::new(MarkerTarget::Body);
    assert!(!marker.is_present());
    assert_eq!(marker.target(), MarkerTarget::Body);
}

#[test]
fn class_marker_toggles_in_memory_without_dom() {
    let mut marker = ClassMarker::new(MarkerTarget::DocumentElement);
    marker.toggle();
    assert!(marker.is_present());
    marker.toggle();
    assert!(!marker.is_present());
}

#[test]
fn class_marker_without_target_changes_only_on_toggle() {
    let mut marker = ClassMarker::new(MarkerTarget::Body);
    assert!(!marker.is_present());
    assert!(!marker.is_present());
    marker.toggle();
    assert!(marker.is_present());
    assert!(marker.is_present());
}

#[test]
fn controller_over_class_marker_follows_parity() {
    let mut ctrl = ModeToggleController::new(ClassMarker::new(MarkerTarget::Body), TextLabel::default());
    assert_eq!(ctrl.activate(), DisplayMode::Dark);
    assert_eq!(ctrl.label().0, LABEL_TO_LIGHT);
    assert_eq!(ctrl.activate(), DisplayMode::Light);
    assert_eq!(ctrl.label().0, LABEL_TO_DARK);
}

#[test]
fn bind_is_unavailable_in_non_hydrate_builds() {
    assert_eq!(bind(CONTROL_ID, MarkerTarget::Body), Err(BindError::Unavailable));
}

#[test]
fn bind_error_messages_name_the_control() {
    let err = BindError::ControlNotFound { id: "mode-toggle".to_owned() };
    assert_eq!(err.to_string(), "control #mode-toggle not found");
}
