use super::constants::{DEFAULT_SENSITIVITY, EASE_FACTOR, MIN_EASE_FACTOR, SETTLE_EPSILON};

/// Runtime knobs for one mounted card. Defaults come from the tuning
/// constants; the page may override sensitivity and ease through
/// `data-sensitivity` / `data-ease` on the card element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoloConfig {
    pub sensitivity: f32,
    pub ease: f32,
    pub epsilon: f32,
}

impl Default for HoloConfig {
    fn default() -> Self {
        Self {
            sensitivity: DEFAULT_SENSITIVITY,
            ease: EASE_FACTOR,
            epsilon: SETTLE_EPSILON,
        }
    }
}

impl HoloConfig {
    /// Apply optional attribute overrides. Unparseable or out-of-range values
    /// are logged and the default is kept.
    pub fn with_overrides(mut self, sensitivity: Option<&str>, ease: Option<&str>) -> Self {
        if let Some(raw) = sensitivity {
            match parse_positive(raw) {
                Some(v) => self.sensitivity = v,
                None => log::warn!("[config] ignoring data-sensitivity={:?}", raw),
            }
        }
        if let Some(raw) = ease {
            match parse_positive(raw).filter(|v| (MIN_EASE_FACTOR..=1.0).contains(v)) {
                Some(v) => self.ease = v,
                None => log::warn!(
                    "[config] ignoring data-ease={:?} (expected {} <= ease <= 1)",
                    raw,
                    MIN_EASE_FACTOR
                ),
            }
        }
        self
    }
}

fn parse_positive(raw: &str) -> Option<f32> {
    raw.trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}
