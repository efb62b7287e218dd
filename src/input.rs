use carousel_core::PanEvent;
use web_sys as web;

// ---------------- Pointer helpers ----------------

/// Map a client-space x coordinate (CSS pixels) onto the canvas backing store.
///
/// The canvas may be styled to a different CSS width than its pixel width, so
/// drag deltas are scaled to keep the strip moving with the pointer.
#[inline]
pub fn css_to_canvas_x(client_x: f64, rect_left: f64, rect_width: f64, canvas_width: f64) -> f64 {
    let x_css = client_x - rect_left;
    if rect_width > 0.0 {
        x_css / rect_width * canvas_width
    } else {
        x_css
    }
}

#[inline]
pub fn pointer_canvas_x(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> f64 {
    let rect = canvas.get_bounding_client_rect();
    css_to_canvas_x(
        ev.client_x() as f64,
        rect.left(),
        rect.width(),
        canvas.width() as f64,
    )
}

/// Canvas backing size for a viewport dimension; never zero.
#[inline]
pub fn backing_px(dimension: f64) -> u32 {
    dimension.round().max(1.0) as u32
}

// ---------------- Drag class ----------------

/// Whether a pan event should add (`Some(true)`) or remove (`Some(false)`)
/// the drag class; `None` leaves it alone.
#[inline]
pub fn drag_class_change(event: PanEvent) -> Option<bool> {
    match event {
        PanEvent::Started => Some(true),
        PanEvent::Ended => Some(false),
        PanEvent::Moved { .. } | PanEvent::Ignored => None,
    }
}
