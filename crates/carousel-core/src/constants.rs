// Shared layout/drawing constants used by the core and the web frontend.

// Host page defaults
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 640.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 400.0;
pub const DEFAULT_IMAGES: [&str; 4] = [
    "images/0.jpg",
    "images/1.jpg",
    "images/2.jpg",
    "images/3.jpg",
];

// Neutral background painted behind the strip and behind every slot
pub const BACKGROUND_RGB: [u8; 3] = [242, 242, 242];
