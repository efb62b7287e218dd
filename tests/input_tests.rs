// Host-side tests for pure pointer helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use carousel_core::{PanController, PanBounds, PanEvent, PointerInput};
use input::*;

#[test]
fn css_to_canvas_x_identity_when_sizes_match() {
    assert_eq!(css_to_canvas_x(150.0, 0.0, 640.0, 640.0), 150.0);
    assert_eq!(css_to_canvas_x(150.0, 50.0, 640.0, 640.0), 100.0);
}

#[test]
fn css_to_canvas_x_scales_to_backing_store() {
    // canvas styled at half its pixel width
    assert_eq!(css_to_canvas_x(160.0, 0.0, 320.0, 640.0), 320.0);
    // deltas scale the same way
    let a = css_to_canvas_x(110.0, 10.0, 320.0, 640.0);
    let b = css_to_canvas_x(135.0, 10.0, 320.0, 640.0);
    assert_eq!(b - a, 50.0);
}

#[test]
fn css_to_canvas_x_left_of_canvas_is_negative() {
    assert!(css_to_canvas_x(5.0, 20.0, 640.0, 640.0) < 0.0);
}

#[test]
fn css_to_canvas_x_zero_width_rect_passes_through() {
    assert_eq!(css_to_canvas_x(42.0, 2.0, 0.0, 640.0), 40.0);
}

#[test]
fn backing_px_rounds_and_never_returns_zero() {
    assert_eq!(backing_px(640.0), 640);
    assert_eq!(backing_px(399.6), 400);
    assert_eq!(backing_px(0.2), 1);
    assert_eq!(backing_px(-5.0), 1);
}

#[test]
fn drag_class_follows_pan_events() {
    assert_eq!(drag_class_change(PanEvent::Started), Some(true));
    assert_eq!(drag_class_change(PanEvent::Ended), Some(false));
    assert_eq!(drag_class_change(PanEvent::Moved { offset: -10.0 }), None);
    assert_eq!(drag_class_change(PanEvent::Ignored), None);
}

#[test]
fn drag_class_is_set_exactly_while_dragging() {
    let mut pan = PanController::new(PanBounds::for_strip(640.0, 2560.0));
    let mut class_on = false;
    let inputs = [
        PointerInput::Move { x: 5.0 },
        PointerInput::Down { x: 300.0 },
        PointerInput::Move { x: 250.0 },
        PointerInput::Down { x: 260.0 },
        PointerInput::Move { x: 200.0 },
        PointerInput::Up,
        PointerInput::Move { x: 100.0 },
        PointerInput::Leave,
        PointerInput::Down { x: 10.0 },
        PointerInput::Leave,
        PointerInput::Up,
    ];
    for input in inputs {
        if let Some(active) = drag_class_change(pan.handle(input)) {
            class_on = active;
        }
        assert_eq!(class_on, pan.is_dragging(), "after {input:?}");
    }
    assert!(!class_on);
}
