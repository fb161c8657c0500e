/// Page contract: element ids, attributes and classes the front-end expects
/// in `index.html`.
pub const CARD_ID: &str = "licence-card";

// Looked up inside the card, so several cards can share one page
pub const CANVAS_SELECTOR: &str = "canvas.holo-canvas";
pub const GLARE_SELECTOR: &str = ".licence-glare";

// Set on a card while it is mounted
pub const MOUNTED_ATTR: &str = "data-holo-mounted";

// Optional overrides on the card element (read as attributes)
pub const DATA_SENSITIVITY: &str = "data-sensitivity";
pub const DATA_EASE: &str = "data-ease";

// Added to the card when the shader layer could not be created
pub const FALLBACK_CLASS: &str = "holo-fallback";
// Present while device tilt drives the effect
pub const TILT_ACTIVE_CLASS: &str = "tilt-active";
