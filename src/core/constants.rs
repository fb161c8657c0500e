// Tuning constants for the tilt-to-colour animation.

// Input mapping
pub const DEFAULT_SENSITIVITY: f32 = 1.6; // tilt angle amplification
pub const TILT_FULL_SCALE_DEG: f32 = 90.0; // angle that maps to a full half-span
pub const NEUTRAL_PERCENT: f32 = 50.0; // card centre, in percent
pub const HALF_SPAN_PERCENT: f32 = 50.0; // distance from centre to an edge
pub const BAND_MIN_PERCENT: f32 = 10.0; // keep the effect away from the card edges
pub const BAND_MAX_PERCENT: f32 = 90.0;

// Animation
pub const EASE_FACTOR: f32 = 0.12; // fraction of remaining error closed per frame
pub const MIN_EASE_FACTOR: f32 = 0.01; // smallest accepted override
pub const SETTLE_EPSILON: f32 = 0.01; // per-axis delta at which the loop stops

// Specular glare gradient stops (white, alpha at each stop)
pub const GLARE_CORE_ALPHA: f32 = 0.45;
pub const GLARE_MID_ALPHA: f32 = 0.12;
pub const GLARE_MID_STOP_PERCENT: f32 = 28.0;
pub const GLARE_FADE_STOP_PERCENT: f32 = 60.0;
