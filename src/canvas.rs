//! Canvas 2D implementation of the compositor's drawing surface.

use carousel_core::{Rect, Rgb, Surface};
use web_sys as web;

pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    type Image = web::HtmlImageElement;

    fn clear_rect(&mut self, rect: Rect) {
        self.ctx
            .clear_rect(rect.origin.x, rect.origin.y, rect.size.x, rect.size.y);
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx
            .fill_rect(rect.origin.x, rect.origin.y, rect.size.x, rect.size.y);
    }

    fn draw_image(&mut self, image: &web::HtmlImageElement, rect: Rect) {
        if let Err(e) = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            image,
            rect.origin.x,
            rect.origin.y,
            rect.size.x,
            rect.size.y,
        ) {
            log::warn!("[draw] draw_image failed: {:?}", e);
        }
    }
}
