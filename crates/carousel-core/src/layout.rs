//! Viewport, image assets and the strip they are laid out on.
//!
//! Every image occupies one slot as wide as the viewport; slots are placed end
//! to end starting at x = 0. Image sizes are fitted to the viewport once, when
//! the strip is built, so drawing never sees an unfitted asset.

use crate::error::{CarouselError, Result};
use glam::DVec2;

/// Fixed drawing area of the carousel, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    width: f64,
    height: f64,
}

impl Viewport {
    /// Both dimensions must be finite and strictly positive.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(CarouselError::InvalidConfig(format!(
                "viewport must be positive and finite, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[inline]
    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    #[inline]
    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }
}

/// Aspect-preserving downscale of `natural` so it fits inside the viewport.
///
/// Sizes already within bounds are returned unchanged; images are never
/// upscaled.
pub fn fit_size(natural: DVec2, viewport: &Viewport) -> DVec2 {
    let (w, h) = (viewport.width(), viewport.height());
    if natural.x <= w && natural.y <= h {
        return natural;
    }
    let aspect = natural.x / natural.y;
    if aspect > viewport.aspect() {
        DVec2::new(w, w / aspect)
    } else {
        DVec2::new(h * aspect, h)
    }
}

/// A decoded image plus its natural and displayed sizes.
#[derive(Clone, Debug)]
pub struct ImageAsset<H> {
    pub handle: H,
    natural: DVec2,
    displayed: DVec2,
    fitted: bool,
}

impl<H> ImageAsset<H> {
    pub fn new(handle: H, natural_width: f64, natural_height: f64) -> Self {
        let natural = DVec2::new(natural_width, natural_height);
        Self {
            handle,
            natural,
            displayed: natural,
            fitted: false,
        }
    }

    #[inline]
    pub fn natural(&self) -> DVec2 {
        self.natural
    }

    #[inline]
    pub fn displayed(&self) -> DVec2 {
        self.displayed
    }

    #[inline]
    pub fn is_fitted(&self) -> bool {
        self.fitted
    }

    /// Fit the displayed size to `viewport`. Only the first call has an effect.
    pub fn fit_to(&mut self, viewport: &Viewport) {
        if self.fitted {
            return;
        }
        self.displayed = fit_size(self.natural, viewport);
        self.fitted = true;
    }
}

/// Ordered images, one viewport-wide slot each.
#[derive(Clone, Debug)]
pub struct Strip<H> {
    assets: Vec<ImageAsset<H>>,
    slot_width: f64,
}

impl<H> Strip<H> {
    /// Build a strip for `viewport`, fitting every asset on the way in.
    pub fn fitted(mut assets: Vec<ImageAsset<H>>, viewport: &Viewport) -> Self {
        for asset in &mut assets {
            asset.fit_to(viewport);
        }
        Self {
            assets,
            slot_width: viewport.width(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    #[inline]
    pub fn slot_width(&self) -> f64 {
        self.slot_width
    }

    /// Width of all slots laid end to end.
    #[inline]
    pub fn total_width(&self) -> f64 {
        self.assets.len() as f64 * self.slot_width
    }

    /// Left edge of slot `index` in strip-local coordinates.
    #[inline]
    pub fn slot_x(&self, index: usize) -> f64 {
        index as f64 * self.slot_width
    }

    pub fn get(&self, index: usize) -> Option<&ImageAsset<H>> {
        self.assets.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageAsset<H>> {
        self.assets.iter()
    }
}
