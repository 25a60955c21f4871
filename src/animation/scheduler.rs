use serde::{Deserialize, Serialize};

/// Opaque identifier of one requested display frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameHandle(u64);

impl FrameHandle {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Contract implemented by the host's display-refresh source.
///
/// A request is answered by the host calling back into the chart with the
/// returned handle and the frame timestamp. Timestamps are monotonic
/// milliseconds on the same clock as `now`.
pub trait FrameScheduler {
    /// Current monotonic time in milliseconds.
    fn now(&self) -> f64;

    /// Requests one frame callback.
    fn request_frame(&mut self) -> FrameHandle;

    /// Cancels a pending request. Cancelling an unknown handle is a no-op.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Deterministic scheduler for tests and headless hosts.
///
/// The clock only moves when the caller advances it, and the pending request
/// can be inspected and fired explicitly.
#[derive(Debug, Default)]
pub struct ManualFrameScheduler {
    now_ms: f64,
    next_id: u64,
    pending: Vec<FrameHandle>,
    pub requested_count: usize,
    pub cancelled_count: usize,
    pub max_pending_seen: usize,
}

impl ManualFrameScheduler {
    #[must_use]
    pub fn new(start_ms: f64) -> Self {
        Self {
            now_ms: start_ms,
            ..Self::default()
        }
    }

    pub fn set_now(&mut self, now_ms: f64) {
        self.now_ms = now_ms;
    }

    pub fn advance(&mut self, delta_ms: f64) -> f64 {
        self.now_ms += delta_ms;
        self.now_ms
    }

    #[must_use]
    pub fn pending(&self) -> &[FrameHandle] {
        &self.pending
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Removes and returns the oldest pending request, as a display refresh would.
    pub fn fire(&mut self) -> Option<FrameHandle> {
        if self.pending.is_empty() {
            return None;
        }
        Some(self.pending.remove(0))
    }
}

impl FrameScheduler for ManualFrameScheduler {
    fn now(&self) -> f64 {
        self.now_ms
    }

    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle::new(self.next_id);
        self.pending.push(handle);
        self.requested_count += 1;
        self.max_pending_seen = self.max_pending_seen.max(self.pending.len());
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let before = self.pending.len();
        self.pending.retain(|pending| *pending != handle);
        if self.pending.len() != before {
            self.cancelled_count += 1;
        }
    }
}
