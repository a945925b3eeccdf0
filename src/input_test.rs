#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Key
// =============================================================

#[test]
fn key_from_dom_arrows() {
    assert_eq!(Key::from_dom("ArrowLeft"), Key::ArrowLeft);
    assert_eq!(Key::from_dom("ArrowRight"), Key::ArrowRight);
}

#[test]
fn key_from_dom_other_keys() {
    for raw in ["ArrowUp", "ArrowDown", "Escape", "a", "", "arrowleft"] {
        assert_eq!(Key::from_dom(raw), Key::Other, "{raw}");
    }
}

#[test]
fn key_direction() {
    assert_eq!(Key::ArrowLeft.direction(), Some(Direction::Previous));
    assert_eq!(Key::ArrowRight.direction(), Some(Direction::Next));
    assert_eq!(Key::Other.direction(), None);
}

// =============================================================
// Direction
// =============================================================

#[test]
fn direction_sign() {
    assert_eq!(Direction::Previous.sign(), -1.0);
    assert_eq!(Direction::Next.sign(), 1.0);
}

// =============================================================
// DragState
// =============================================================

#[test]
fn drag_state_default_is_idle() {
    assert_eq!(DragState::default(), DragState::Idle);
    assert!(!DragState::default().is_active());
}

#[test]
fn drag_state_active_at_zero_is_active() {
    let d = DragState::Active { start_x: 0.0, start_offset: 0.0 };
    assert!(d.is_active());
}

// =============================================================
// Motion
// =============================================================

#[test]
fn motion_default_is_idle() {
    assert_eq!(Motion::default(), Motion::Idle);
    assert!(!Motion::default().is_animating());
}

#[test]
fn motion_animating() {
    assert!(Motion::Animating { target: 300.0 }.is_animating());
}
