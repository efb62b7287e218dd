use crate::canvas::CanvasSurface;
use crate::dom;
use crate::events::{self, PointerListeners};
use crate::input;
use crate::loader;
use anyhow::Context;
use carousel_core::{Carousel, ImageAsset, PointerInput, Viewport};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

/// Everything a mounted carousel needs between pointer events.
pub struct SliderState {
    canvas: web::HtmlCanvasElement,
    surface: CanvasSurface,
    carousel: Carousel<web::HtmlImageElement>,
}

impl SliderState {
    /// Viewport assignment, size fitting, initial draw; in that order.
    fn mount(
        canvas: web::HtmlCanvasElement,
        mut surface: CanvasSurface,
        viewport: Viewport,
        assets: Vec<ImageAsset<web::HtmlImageElement>>,
    ) -> Self {
        dom::assign_viewport(&canvas, &viewport);
        let carousel = Carousel::mount(viewport, assets);
        carousel.render(&mut surface);
        Self {
            canvas,
            surface,
            carousel,
        }
    }

    pub fn dispatch(&mut self, input: PointerInput) {
        let event = self.carousel.handle(input, &mut self.surface);
        if let Some(active) = input::drag_class_change(event) {
            dom::set_drag_active(&self.canvas, active);
        }
    }
}

/// Handle to a mounted carousel. Dropping it (or calling `unmount`/`free`
/// from JS) removes all pointer listeners from the canvas.
#[wasm_bindgen]
pub struct ImageSlider {
    state: Rc<RefCell<SliderState>>,
    listeners: Option<PointerListeners>,
}

#[wasm_bindgen]
impl ImageSlider {
    pub fn offset(&self) -> f64 {
        self.state.borrow().carousel.offset()
    }

    #[wasm_bindgen(js_name = isDragging)]
    pub fn is_dragging(&self) -> bool {
        self.state.borrow().carousel.is_dragging()
    }

    /// Detach from the canvas. The handle is consumed.
    pub fn unmount(self) {}
}

impl Drop for ImageSlider {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.take() {
            drop(listeners);
            let state = self.state.borrow();
            dom::set_drag_active(&state.canvas, false);
            log::info!("[mount] released pointer listeners on #{}", state.canvas.id());
        }
    }
}

pub async fn mount(canvas_id: &str) -> anyhow::Result<ImageSlider> {
    let document = dom::window_document().context("no document")?;
    let canvas = dom::canvas_by_id(&document, canvas_id)?;
    let config = dom::read_config(&canvas)?;
    let viewport = config.viewport()?;
    let surface = CanvasSurface::new(dom::context_2d(&canvas)?);

    let started = Instant::now();
    let assets = loader::load_images(&config.images)?
        .await
        .context("loading carousel images")?;
    log::info!(
        "[loader] {} images ready in {} ms",
        assets.len(),
        started.elapsed().as_millis()
    );

    let state = Rc::new(RefCell::new(SliderState::mount(
        canvas.clone(),
        surface,
        viewport,
        assets,
    )));
    let listeners = events::wire_pointer_handlers(&canvas, &state);
    Ok(ImageSlider {
        state,
        listeners: Some(listeners),
    })
}
