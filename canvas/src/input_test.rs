use uuid::Uuid;

use super::*;

// =============================================================
// Button / Modifiers
// =============================================================

#[test]
fn only_non_primary_buttons_pan() {
    assert!(!Button::Primary.pans());
    assert!(Button::Middle.pans());
    assert!(Button::Secondary.pans());
}

#[test]
fn modifiers_default_all_false() {
    let m = Modifiers::default();
    assert!(!m.shift && !m.ctrl && !m.alt && !m.meta);
}

#[test]
fn wheel_delta_default_is_zero() {
    let d = WheelDelta::default();
    assert!(d.dx.abs() < f64::EPSILON);
    assert!(d.dy.abs() < f64::EPSILON);
}

// =============================================================
// CursorHint
// =============================================================

#[test]
fn cursor_hint_names() {
    let names: Vec<&str> = [
        CursorHint::Default,
        CursorHint::Grab,
        CursorHint::Grabbing,
        CursorHint::Pointer,
        CursorHint::Move,
    ]
    .into_iter()
    .map(CursorHint::as_str)
    .collect();
    assert_eq!(names, vec!["default", "grab", "grabbing", "pointer", "move"]);
}

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    assert_eq!(InputState::default(), InputState::Idle);
}

#[test]
fn node_reports_gesture_target() {
    let id = Uuid::new_v4();
    let grab = Point::new(5.0, 5.0);
    assert_eq!(InputState::Selecting { id, grab }.node(), Some(id));
    assert_eq!(InputState::DraggingNode { id, grab }.node(), Some(id));
    assert_eq!(InputState::Panning { last_screen: grab }.node(), None);
    assert_eq!(InputState::Idle.node(), None);
}

#[test]
fn ui_state_default_has_nothing_hovered() {
    let ui = UiState::default();
    assert!(ui.hovered.is_none());
    assert!(ui.cursor.is_none());
}
