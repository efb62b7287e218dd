use crate::constants::{ATTR_IMAGES, ATTR_VIEWPORT_HEIGHT, ATTR_VIEWPORT_WIDTH, DRAG_ACTIVE_CLASS};
use crate::input::backing_px;
use anyhow::{anyhow, Result};
use carousel_core::{CarouselConfig, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{id}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("#{id} is not a canvas: {:?}", e))
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!("{:?}", e))
}

/// Defaults overridden by the canvas' `data-*` attributes.
pub fn read_config(canvas: &web::HtmlCanvasElement) -> Result<CarouselConfig> {
    let width = canvas.get_attribute(ATTR_VIEWPORT_WIDTH);
    let height = canvas.get_attribute(ATTR_VIEWPORT_HEIGHT);
    let images = canvas.get_attribute(ATTR_IMAGES);
    Ok(CarouselConfig::default().with_overrides(
        width.as_deref(),
        height.as_deref(),
        images.as_deref(),
    )?)
}

pub fn assign_viewport(canvas: &web::HtmlCanvasElement, viewport: &Viewport) {
    canvas.set_width(backing_px(viewport.width()));
    canvas.set_height(backing_px(viewport.height()));
}

#[inline]
pub fn set_drag_active(el: &web::Element, active: bool) {
    let cl = el.class_list();
    if active {
        _ = cl.add_1(DRAG_ACTIVE_CLASS);
    } else {
        _ = cl.remove_1(DRAG_ACTIVE_CLASS);
    }
}
