/// Outcome of probing for device-orientation input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionPermission {
    /// The browser exposes no orientation events.
    Unsupported,
    /// Orientation events may be listened to.
    Granted,
    /// The user (or the platform) refused access.
    Denied,
}

/// What the page must do before orientation events arrive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionSupport {
    Unsupported,
    /// Events flow without asking.
    Available,
    /// `DeviceOrientationEvent.requestPermission()` must be called from a
    /// user gesture first.
    NeedsPermission,
}

impl MotionSupport {
    /// Classify from the two facts the page can observe.
    #[inline]
    pub fn detect(has_event_type: bool, has_request_permission: bool) -> Self {
        match (has_event_type, has_request_permission) {
            (false, _) => MotionSupport::Unsupported,
            (true, false) => MotionSupport::Available,
            (true, true) => MotionSupport::NeedsPermission,
        }
    }

    /// Permission state without prompting, if one can be known yet.
    #[inline]
    pub fn immediate(self) -> Option<MotionPermission> {
        match self {
            MotionSupport::Unsupported => Some(MotionPermission::Unsupported),
            MotionSupport::Available => Some(MotionPermission::Granted),
            MotionSupport::NeedsPermission => None,
        }
    }
}

/// Map the string a permission promise resolves to.
#[inline]
pub fn classify_permission_response(response: &str) -> MotionPermission {
    if response == "granted" {
        MotionPermission::Granted
    } else {
        MotionPermission::Denied
    }
}
