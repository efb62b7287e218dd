//! The carousel's single owned state record.
//!
//! Holds the viewport, the fitted strip and the pan controller. The pan
//! controller is the only writer of the offset; the compositor only reads it.

use crate::compositor::{self, Surface};
use crate::layout::{ImageAsset, Strip, Viewport};
use crate::pan::{PanBounds, PanController, PanEvent, PointerInput};

#[derive(Clone, Debug)]
pub struct Carousel<H> {
    viewport: Viewport,
    strip: Strip<H>,
    pan: PanController,
}

impl<H> Carousel<H> {
    /// Fit `assets` to `viewport` and start at offset 0.
    pub fn mount(viewport: Viewport, assets: Vec<ImageAsset<H>>) -> Self {
        let strip = Strip::fitted(assets, &viewport);
        let bounds = PanBounds::for_strip(viewport.width(), strip.total_width());
        log::info!(
            "[mount] {} images, strip {:.0}px, offset range [{:.0}, {:.0}]",
            strip.len(),
            strip.total_width(),
            bounds.min,
            bounds.max
        );
        Self {
            viewport,
            strip,
            pan: PanController::new(bounds),
        }
    }

    #[inline]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[inline]
    pub fn strip(&self) -> &Strip<H> {
        &self.strip
    }

    #[inline]
    pub fn offset(&self) -> f64 {
        self.pan.offset()
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.pan.is_dragging()
    }

    pub fn render<S: Surface<Image = H>>(&self, surface: &mut S) {
        compositor::draw(surface, &self.strip, &self.viewport, self.pan.offset());
    }

    /// Feed one pointer input; redraws before returning when the offset moved.
    pub fn handle<S: Surface<Image = H>>(
        &mut self,
        input: PointerInput,
        surface: &mut S,
    ) -> PanEvent {
        let event = self.pan.handle(input);
        if let PanEvent::Moved { .. } = event {
            self.render(surface);
        }
        event
    }
}
