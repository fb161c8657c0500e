// Host-side tests for the tilt and pointer mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod holo {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod mapping {
        include!("../src/core/mapping.rs");
    }
}

use holo::mapping::*;

fn sample_values() -> Vec<f32> {
    (-40..=40).map(|i| i as f32 * 7.5).collect()
}

#[test]
fn clamp_is_idempotent_and_bounded() {
    let bounds = [(10.0, 90.0), (-1.0, 1.0), (0.0, 0.0), (5.0, 5.5)];
    for (lo, hi) in bounds {
        for v in sample_values() {
            let once = clamp(v, lo, hi);
            assert_eq!(clamp(once, lo, hi), once, "v={} lo={} hi={}", v, lo, hi);
            assert!(once >= lo && once <= hi, "v={} -> {}", v, once);
        }
    }
}

#[test]
fn clamp_passes_values_inside_range() {
    assert_eq!(clamp(42.0, 10.0, 90.0), 42.0);
    assert_eq!(clamp(10.0, 10.0, 90.0), 10.0);
    assert_eq!(clamp(90.0, 10.0, 90.0), 90.0);
}

#[test]
fn level_device_maps_to_centre_for_any_sensitivity() {
    for s in [0.0, 0.5, 1.0, 1.6, 3.0, 10.0] {
        assert_eq!(map_tilt(0.0, 0.0, s), NEUTRAL, "sensitivity {}", s);
    }
}

#[test]
fn full_right_tilt_lands_near_upper_bound() {
    let p = map_tilt(90.0, 0.0, 1.0);
    assert!(p.x >= 80.0 && p.x <= 90.0, "x={}", p.x);
    assert_eq!(p.y, 50.0);
}

#[test]
fn full_left_and_back_tilt_lands_near_lower_bound() {
    let p = map_tilt(-90.0, -90.0, 1.0);
    assert!(p.x >= 10.0 && p.x <= 20.0, "x={}", p.x);
    assert!(p.y >= 10.0 && p.y <= 20.0, "y={}", p.y);
}

#[test]
fn default_sensitivity_amplifies_small_tilts() {
    let base = map_tilt(20.0, 0.0, 1.0);
    let amplified = map_tilt(20.0, 0.0, holo::constants::DEFAULT_SENSITIVITY);
    assert!(amplified.x > base.x);
    // 50 + (20/90)*50*1.6
    assert!((amplified.x - 67.777_78).abs() < 1e-3, "x={}", amplified.x);
}

#[test]
fn extreme_beta_is_clamped_to_band() {
    let p = map_tilt(0.0, 180.0, 1.6);
    assert_eq!(p.y, 90.0);
    let p = map_tilt(0.0, -180.0, 1.6);
    assert_eq!(p.y, 10.0);
}

#[test]
fn nan_angle_reading_falls_back_to_centre() {
    let p = map_tilt(f32::NAN, 30.0, 1.0);
    assert_eq!(p.x, 50.0);
    assert!(p.y > 50.0);
}

fn card_rect() -> ContainerRect {
    ContainerRect {
        left: 100.0,
        top: 40.0,
        width: 320.0,
        height: 200.0,
    }
}

#[test]
fn pointer_at_card_centre_maps_to_neutral() {
    let r = card_rect();
    let p = map_pointer(r.left + 0.5 * r.width, r.top + 0.5 * r.height, r);
    assert_eq!(p, NEUTRAL);
}

#[test]
fn pointer_at_top_left_corner_is_clamped() {
    let r = card_rect();
    let p = map_pointer(r.left, r.top, r);
    assert_eq!((p.x, p.y), (10.0, 10.0));
}

#[test]
fn pointer_outside_card_stays_in_band() {
    let r = card_rect();
    let p = map_pointer(r.left + 2.0 * r.width, r.top - 50.0, r);
    assert_eq!((p.x, p.y), (90.0, 10.0));
}

#[test]
fn pointer_is_expressed_as_percentage() {
    let r = card_rect();
    let p = map_pointer(r.left + 0.25 * r.width, r.top + 0.75 * r.height, r);
    assert!((p.x - 25.0).abs() < 1e-4, "x={}", p.x);
    assert!((p.y - 75.0).abs() < 1e-4, "y={}", p.y);
}

#[test]
fn collapsed_card_maps_pointer_to_neutral() {
    let r = ContainerRect {
        left: 0.0,
        top: 0.0,
        width: 0.0,
        height: 120.0,
    };
    assert!(r.is_degenerate());
    assert_eq!(map_pointer(10.0, 10.0, r), NEUTRAL);
}

#[test]
fn overflowing_tilt_pins_to_band_edges() {
    let p = map_tilt(90.0, -90.0, 1e37);
    assert_eq!((p.x, p.y), (90.0, 10.0));
    let p = map_tilt(f32::INFINITY, f32::NEG_INFINITY, 1.0);
    assert_eq!((p.x, p.y), (90.0, 10.0));
}

#[test]
fn pointer_at_infinity_pins_to_band_edges() {
    let r = card_rect();
    let p = map_pointer(f32::INFINITY, f32::NEG_INFINITY, r);
    assert_eq!((p.x, p.y), (90.0, 10.0));
}
