// DOM hooks used by the web frontend.

// Element looked up by `mount` when no id is given
pub const CANVAS_ELEMENT_ID: &str = "image-slider";

// Class present on the canvas while a drag session is active
pub const DRAG_ACTIVE_CLASS: &str = "drag-active";

// Optional per-canvas configuration overrides
pub const ATTR_VIEWPORT_WIDTH: &str = "data-width";
pub const ATTR_VIEWPORT_HEIGHT: &str = "data-height";
pub const ATTR_IMAGES: &str = "data-images";

// Pointer events the carousel subscribes to
pub const EVENT_POINTER_DOWN: &str = "pointerdown";
pub const EVENT_POINTER_MOVE: &str = "pointermove";
pub const EVENT_POINTER_UP: &str = "pointerup";
pub const EVENT_POINTER_LEAVE: &str = "pointerleave";
