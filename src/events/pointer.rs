use crate::constants::{
    EVENT_POINTER_DOWN, EVENT_POINTER_LEAVE, EVENT_POINTER_MOVE, EVENT_POINTER_UP,
};
use crate::input;
use crate::slider::SliderState;
use carousel_core::PointerInput;
use gloo_events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The four pointer subscriptions of a mounted carousel.
///
/// Each `EventListener` unsubscribes itself when dropped, so dropping this
/// value detaches the carousel from its canvas on every exit path.
pub struct PointerListeners {
    _down: EventListener,
    _move: EventListener,
    _up: EventListener,
    _leave: EventListener,
}

pub fn wire_pointer_handlers(
    canvas: &web::HtmlCanvasElement,
    state: &Rc<RefCell<SliderState>>,
) -> PointerListeners {
    PointerListeners {
        _down: wire_pointerdown(canvas, state),
        _move: wire_pointermove(canvas, state),
        _up: wire_pointer_end(canvas, state, EVENT_POINTER_UP, PointerInput::Up),
        _leave: wire_pointer_end(canvas, state, EVENT_POINTER_LEAVE, PointerInput::Leave),
    }
}

fn wire_pointerdown(
    canvas: &web::HtmlCanvasElement,
    state: &Rc<RefCell<SliderState>>,
) -> EventListener {
    let state = state.clone();
    let canvas_for_pos = canvas.clone();

    EventListener::new(canvas, EVENT_POINTER_DOWN, move |ev| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let x = input::pointer_canvas_x(ev, &canvas_for_pos);
        state.borrow_mut().dispatch(PointerInput::Down { x });
        ev.prevent_default();
    })
}

fn wire_pointermove(
    canvas: &web::HtmlCanvasElement,
    state: &Rc<RefCell<SliderState>>,
) -> EventListener {
    let state = state.clone();
    let canvas_for_pos = canvas.clone();

    EventListener::new(canvas, EVENT_POINTER_MOVE, move |ev| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let x = input::pointer_canvas_x(ev, &canvas_for_pos);
        state.borrow_mut().dispatch(PointerInput::Move { x });
    })
}

fn wire_pointer_end(
    canvas: &web::HtmlCanvasElement,
    state: &Rc<RefCell<SliderState>>,
    event_type: &'static str,
    input: PointerInput,
) -> EventListener {
    let state = state.clone();

    EventListener::new(canvas, event_type, move |_| {
        state.borrow_mut().dispatch(input);
    })
}
