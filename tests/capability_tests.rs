// Host-side tests for motion capability detection and frame scheduling.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod holo {
    pub mod capability {
        include!("../src/core/capability.rs");
    }
    pub mod schedule {
        include!("../src/core/schedule.rs");
    }
}

use holo::capability::*;
use holo::schedule::FrameSlot;

#[test]
fn detect_covers_all_browser_shapes() {
    assert_eq!(MotionSupport::detect(false, false), MotionSupport::Unsupported);
    assert_eq!(MotionSupport::detect(false, true), MotionSupport::Unsupported);
    assert_eq!(MotionSupport::detect(true, false), MotionSupport::Available);
    assert_eq!(MotionSupport::detect(true, true), MotionSupport::NeedsPermission);
}

#[test]
fn immediate_permission_only_without_prompt() {
    assert_eq!(
        MotionSupport::Unsupported.immediate(),
        Some(MotionPermission::Unsupported)
    );
    assert_eq!(
        MotionSupport::Available.immediate(),
        Some(MotionPermission::Granted)
    );
    assert_eq!(MotionSupport::NeedsPermission.immediate(), None);
}

#[test]
fn only_granted_response_grants() {
    assert_eq!(classify_permission_response("granted"), MotionPermission::Granted);
    assert_eq!(classify_permission_response("denied"), MotionPermission::Denied);
    assert_eq!(classify_permission_response("prompt"), MotionPermission::Denied);
    assert_eq!(classify_permission_response(""), MotionPermission::Denied);
    assert_eq!(classify_permission_response("Granted"), MotionPermission::Denied);
}

#[test]
fn slot_never_double_schedules() {
    let mut slot = FrameSlot::default();
    assert!(slot.wants_request());
    slot.armed(7);
    assert!(slot.is_pending());
    assert!(!slot.wants_request());
    assert!(slot.fired());
    assert!(slot.wants_request());
}

#[test]
fn close_returns_pending_id_for_cancellation() {
    let mut slot = FrameSlot::default();
    slot.armed(42);
    assert_eq!(slot.close(), Some(42));
    assert!(slot.is_closed());
    assert!(!slot.wants_request());
    // second close has nothing left to cancel
    assert_eq!(slot.close(), None);
}

#[test]
fn late_frame_after_close_is_ignored() {
    let mut slot = FrameSlot::default();
    slot.armed(3);
    slot.close();
    assert!(!slot.fired());
    slot.armed(4);
    assert!(!slot.is_pending());
}
