use super::constants::{
    BAND_MAX_PERCENT, BAND_MIN_PERCENT, HALF_SPAN_PERCENT, NEUTRAL_PERCENT, TILT_FULL_SCALE_DEG,
};
use glam::Vec2;

/// Position on the card in percent of its width/height.
pub type Point2D = Vec2;

/// Card centre; the resting position for both `current` and `target`.
pub const NEUTRAL: Point2D = Vec2::new(NEUTRAL_PERCENT, NEUTRAL_PERCENT);

/// Bounding box of the element pointer coordinates are measured against,
/// in the same (client) coordinate space as the pointer.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ContainerRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ContainerRect {
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }
}

#[inline]
pub fn clamp(v: f32, lo: f32, hi: f32) -> f32 {
    v.max(lo).min(hi)
}

#[inline]
fn clamp_to_band(v: f32) -> f32 {
    if v.is_nan() {
        NEUTRAL_PERCENT
    } else {
        clamp(v, BAND_MIN_PERCENT, BAND_MAX_PERCENT)
    }
}

#[inline]
fn tilt_axis(angle_deg: f32, sensitivity: f32) -> f32 {
    let offset = (angle_deg / TILT_FULL_SCALE_DEG) * HALF_SPAN_PERCENT * sensitivity;
    clamp_to_band(NEUTRAL_PERCENT + offset)
}

/// Device orientation (gamma: left/right, beta: front/back, degrees) to a
/// target point. Gamma drives x, beta drives y.
#[inline]
pub fn map_tilt(gamma: f32, beta: f32, sensitivity: f32) -> Point2D {
    Vec2::new(tilt_axis(gamma, sensitivity), tilt_axis(beta, sensitivity))
}

/// Pointer position (client coordinates) to a target point relative to
/// `rect`. A collapsed rect yields the neutral point.
#[inline]
pub fn map_pointer(client_x: f32, client_y: f32, rect: ContainerRect) -> Point2D {
    if rect.is_degenerate() {
        return NEUTRAL;
    }
    let x = (client_x - rect.left) / rect.width * 100.0;
    let y = (client_y - rect.top) / rect.height * 100.0;
    Vec2::new(clamp_to_band(x), clamp_to_band(y))
}
