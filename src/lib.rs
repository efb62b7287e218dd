#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

mod canvas;
mod constants;
mod dom;
mod events;
mod input;
mod loader;
mod slider;

pub use slider::ImageSlider;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("carousel-web starting");
    Ok(())
}

/// Load the images configured on the canvas (default `#image-slider`), draw
/// the first frame and start listening for drags.
///
/// A failed load is logged and rejects the returned promise; nothing is drawn
/// and no listeners are attached for that mount.
#[wasm_bindgen]
pub async fn mount(canvas_id: Option<String>) -> Result<ImageSlider, JsValue> {
    let id = canvas_id.as_deref().unwrap_or(constants::CANVAS_ELEMENT_ID);
    slider::mount(id).await.map_err(|e| {
        log::error!("[mount] #{id}: {e:#}");
        JsValue::from_str(&format!("{e:#}"))
    })
}
