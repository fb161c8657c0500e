/// Book-keeping for a single-shot frame request.
///
/// Holds the id of the outstanding `requestAnimationFrame` (if any) so a
/// second request is never issued while one is pending, and so teardown can
/// hand the id back for cancellation. Once closed the slot refuses new
/// requests and ignores late callbacks.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameSlot {
    pending: Option<i32>,
    closed: bool,
}

impl FrameSlot {
    /// `true` when a new frame should be requested.
    #[inline]
    pub fn wants_request(&self) -> bool {
        !self.closed && self.pending.is_none()
    }

    /// Record the id returned by the browser for the request just made.
    #[inline]
    pub fn armed(&mut self, id: i32) {
        if !self.closed {
            self.pending = Some(id);
        }
    }

    /// A frame callback started. Returns `false` if the callback belongs to a
    /// slot that has already been closed and must do nothing.
    #[inline]
    pub fn fired(&mut self) -> bool {
        self.pending = None;
        !self.closed
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Close the slot; returns the id that still needs cancelling.
    #[inline]
    pub fn close(&mut self) -> Option<i32> {
        self.closed = true;
        self.pending.take()
    }
}
