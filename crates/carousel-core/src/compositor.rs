//! Paints the strip onto a drawing surface at a given offset.
//!
//! The compositor only talks to the platform through [`Surface`], which
//! mirrors the three raster primitives the canvas 2D API offers. Output
//! depends on nothing but the strip, the viewport and the offset, so repeated
//! calls with the same inputs paint the same pixels.

use crate::constants::BACKGROUND_RGB;
use crate::layout::{Strip, Viewport};
use glam::DVec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BACKGROUND: Rgb = Rgb(BACKGROUND_RGB[0], BACKGROUND_RGB[1], BACKGROUND_RGB[2]);

    /// CSS color string, e.g. `rgb(242, 242, 242)`.
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.0, self.1, self.2)
    }
}

/// Axis-aligned rectangle in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub origin: DVec2,
    pub size: DVec2,
}

impl Rect {
    #[inline]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: DVec2::new(x, y),
            size: DVec2::new(width, height),
        }
    }
}

/// Raster primitives provided by the host platform.
pub trait Surface {
    type Image;

    fn clear_rect(&mut self, rect: Rect);
    fn fill_rect(&mut self, rect: Rect, color: Rgb);
    fn draw_image(&mut self, image: &Self::Image, rect: Rect);
}

/// Where one slot and its image land on the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub index: usize,
    pub slot: Rect,
    pub image: Rect,
}

/// Strip-local position of slot `index` after applying `offset`, wrapped
/// into `[0, total_width)`.
#[inline]
pub fn wrap_position(index: usize, slot_width: f64, offset: f64, total_width: f64) -> f64 {
    if total_width <= 0.0 {
        return 0.0;
    }
    let p = (index as f64 * slot_width + offset).rem_euclid(total_width);
    // rem_euclid can round up to the modulus for tiny negative inputs
    if p >= total_width {
        0.0
    } else {
        p
    }
}

/// Slots that intersect `[-W, viewport.width()]`, in strip order.
///
/// A slot is only folded one loop to the left when part of it would land
/// right of `-W`.
pub fn visible_slots<H>(
    strip: &Strip<H>,
    viewport: &Viewport,
    offset: f64,
) -> SmallVec<[Placement; 4]> {
    let slot_w = strip.slot_width();
    let total = strip.total_width();
    let mut out = SmallVec::new();

    for (index, asset) in strip.iter().enumerate() {
        let mut x = wrap_position(index, slot_w, offset, total);
        // Past the right edge: the same slot one loop to the left may show
        if x > viewport.width() && x - total > -slot_w {
            x -= total;
        }
        if x < -slot_w || x > viewport.width() {
            continue;
        }
        let size = asset.displayed();
        out.push(Placement {
            index,
            slot: Rect::new(x, 0.0, slot_w, viewport.height()),
            image: Rect::new(
                x + (slot_w - size.x) / 2.0,
                (viewport.height() - size.y) / 2.0,
                size.x,
                size.y,
            ),
        });
    }
    out
}

/// Repaint the whole viewport for `offset`.
pub fn draw<S: Surface>(
    surface: &mut S,
    strip: &Strip<S::Image>,
    viewport: &Viewport,
    offset: f64,
) {
    let full = Rect::new(0.0, 0.0, viewport.width(), viewport.height());
    surface.clear_rect(full);
    surface.fill_rect(full, Rgb::BACKGROUND);

    for placement in visible_slots(strip, viewport, offset) {
        let Some(asset) = strip.get(placement.index) else {
            continue;
        };
        surface.fill_rect(placement.slot, Rgb::BACKGROUND);
        surface.draw_image(&asset.handle, placement.image);
    }
}
