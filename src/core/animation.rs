use super::config::HoloConfig;
use super::mapping::{Point2D, NEUTRAL};

/// Eased position state for the holographic layer.
///
/// `animating` is the Idle/Animating flag: it is `true` from the moment a
/// target change requests a frame until a tick reports convergence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    pub current: Point2D,
    pub target: Point2D,
    pub animating: bool,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            current: NEUTRAL,
            target: NEUTRAL,
            animating: false,
        }
    }
}

impl AnimationState {
    /// Store a new target. Returns `true` when the caller must schedule a
    /// frame, i.e. the target moved while no tick was pending.
    pub fn set_target(&mut self, target: Point2D) -> bool {
        if target == self.target {
            return false;
        }
        self.target = target;
        if self.animating {
            return false;
        }
        self.animating = true;
        true
    }

    /// Current position scaled to the [0,1]² tilt vector fed to the shader.
    #[inline]
    pub fn tilt_vector(&self) -> [f32; 2] {
        (self.current / 100.0).to_array()
    }

    /// Drop back to Idle without moving, e.g. when no frame could be
    /// scheduled. The next target change wakes the loop again.
    #[inline]
    pub fn halt(&mut self) {
        self.animating = false;
    }

    #[inline]
    pub fn is_settled(&self, epsilon: f32) -> bool {
        let d = (self.target - self.current).abs();
        d.x < epsilon && d.y < epsilon
    }
}

/// One frame of exponential easing. Returns the next state and whether the
/// loop should stop; a finished tick leaves the state Idle. A step too small
/// to change `current` at f32 precision also stops the loop.
pub fn tick(state: AnimationState, config: &HoloConfig) -> (AnimationState, bool) {
    let mut next = state;
    next.current += (state.target - state.current) * config.ease;
    let stalled = next.current == state.current;
    let done = stalled || next.is_settled(config.epsilon);
    next.animating = !done;
    (next, done)
}

/// Frames needed for an initial per-axis error `err0` to fall below
/// `epsilon` when each frame keeps `1 - ease` of it.
pub fn ticks_to_settle(err0: f32, ease: f32, epsilon: f32) -> u32 {
    let err0 = err0.abs();
    if err0 < epsilon {
        return 0;
    }
    if ease >= 1.0 {
        return 1;
    }
    let n = ((epsilon / err0).ln() / (1.0 - ease).ln()).ceil();
    n.max(1.0) as u32
}
