// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn band_is_centred_on_neutral() {
    assert!(BAND_MIN_PERCENT < NEUTRAL_PERCENT && NEUTRAL_PERCENT < BAND_MAX_PERCENT);
    assert_eq!(NEUTRAL_PERCENT - BAND_MIN_PERCENT, BAND_MAX_PERCENT - NEUTRAL_PERCENT);
    assert_eq!(NEUTRAL_PERCENT + HALF_SPAN_PERCENT, 100.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn easing_constants_converge() {
    // ease must close part of the gap without overshooting
    assert!(EASE_FACTOR > 0.0 && EASE_FACTOR <= 1.0);
    assert!(SETTLE_EPSILON > 0.0);
    assert!(DEFAULT_SENSITIVITY > 0.0);
    assert!(TILT_FULL_SCALE_DEG > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn glare_stops_fade_outward() {
    assert!(GLARE_CORE_ALPHA > GLARE_MID_ALPHA && GLARE_MID_ALPHA > 0.0);
    assert!(GLARE_MID_STOP_PERCENT < GLARE_FADE_STOP_PERCENT);
    assert!(GLARE_FADE_STOP_PERCENT <= 100.0);
}

#[test]
fn card_parts_are_found_by_class_not_id() {
    // ids are unique per page; parts inside a card must not be
    for selector in [CANVAS_SELECTOR, GLARE_SELECTOR] {
        assert!(!selector.contains('#'), "{}", selector);
        assert!(selector.contains('.'), "{}", selector);
    }
    assert_ne!(CANVAS_SELECTOR, GLARE_SELECTOR);
    assert!(MOUNTED_ATTR.starts_with("data-"));
    assert!(DATA_SENSITIVITY.starts_with("data-"));
    assert!(DATA_EASE.starts_with("data-"));
    assert_ne!(FALLBACK_CLASS, TILT_ACTIVE_CLASS);
}
