use super::constants::{
    GLARE_CORE_ALPHA, GLARE_FADE_STOP_PERCENT, GLARE_MID_ALPHA, GLARE_MID_STOP_PERCENT,
};
use super::mapping::Point2D;

/// CSS background for the glare layer, a white radial highlight centred on
/// `at` (percent coordinates).
pub fn glare_gradient(at: Point2D) -> String {
    format!(
        "radial-gradient(circle at {:.2}% {:.2}%, rgba(255,255,255,{:.2}) 0%, rgba(255,255,255,{:.2}) {:.0}%, rgba(255,255,255,0) {:.0}%)",
        at.x, at.y, GLARE_CORE_ALPHA, GLARE_MID_ALPHA, GLARE_MID_STOP_PERCENT, GLARE_FADE_STOP_PERCENT
    )
}
