use crate::constants::{DEFAULT_IMAGES, DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH};
use crate::error::{CarouselError, Result};
use crate::layout::Viewport;

/// Host-supplied carousel input: fixed dimensions and ordered image locators.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselConfig {
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub images: Vec<String>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            images: DEFAULT_IMAGES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl CarouselConfig {
    /// Apply optional overrides as read from element attributes.
    ///
    /// `images` is a comma-separated locator list; blank entries are dropped.
    pub fn with_overrides(
        mut self,
        width: Option<&str>,
        height: Option<&str>,
        images: Option<&str>,
    ) -> Result<Self> {
        if let Some(w) = width {
            self.viewport_width = parse_dimension("width", w)?;
        }
        if let Some(h) = height {
            self.viewport_height = parse_dimension("height", h)?;
        }
        if let Some(list) = images {
            self.images = list
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
        }
        Ok(self)
    }

    /// Validate the configuration and produce its viewport.
    pub fn viewport(&self) -> Result<Viewport> {
        if self.images.is_empty() {
            return Err(CarouselError::InvalidConfig(
                "at least one image is required".into(),
            ));
        }
        Viewport::new(self.viewport_width, self.viewport_height)
    }
}

fn parse_dimension(name: &str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|e| CarouselError::InvalidConfig(format!("{name} {raw:?}: {e}")))
}
