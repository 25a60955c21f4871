mod scheduler;
mod transition;

pub use scheduler::{FrameHandle, FrameScheduler, ManualFrameScheduler};
pub use transition::{AnimationFrame, Transition};

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::core::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationMode {
    Idle,
    Running,
}

#[derive(Debug, Clone, PartialEq)]
enum AnimationState {
    Idle,
    Running {
        transition: Transition,
        pending: FrameHandle,
        last_frame: Option<Vec<Point>>,
    },
}

/// Drives one transition at a time through the frame scheduler.
///
/// At most one frame request is outstanding: starting or cancelling always
/// releases the previous request before anything new is scheduled.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationController {
    state: AnimationState,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self {
            state: AnimationState::Idle,
        }
    }
}

impl AnimationController {
    #[must_use]
    pub fn mode(&self) -> AnimationMode {
        match self.state {
            AnimationState::Idle => AnimationMode::Idle,
            AnimationState::Running { .. } => AnimationMode::Running,
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.mode() == AnimationMode::Running
    }

    #[must_use]
    pub fn transition(&self) -> Option<&Transition> {
        match &self.state {
            AnimationState::Idle => None,
            AnimationState::Running { transition, .. } => Some(transition),
        }
    }

    #[must_use]
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        match self.state {
            AnimationState::Idle => None,
            AnimationState::Running { pending, .. } => Some(pending),
        }
    }

    /// Last interpolated (non-terminal) frame of the running transition.
    #[must_use]
    pub fn last_frame(&self) -> Option<&[Point]> {
        match &self.state {
            AnimationState::Idle => None,
            AnimationState::Running { last_frame, .. } => last_frame.as_deref(),
        }
    }

    /// Point sequence a follow-up transition should continue from: the last
    /// interpolated frame, or the transition's origin when no frame was
    /// produced yet. `None` when idle.
    #[must_use]
    pub fn baseline(&self) -> Option<Vec<Point>> {
        match &self.state {
            AnimationState::Idle => None,
            AnimationState::Running {
                transition,
                last_frame,
                ..
            } => Some(
                last_frame
                    .clone()
                    .unwrap_or_else(|| transition.from().to_vec()),
            ),
        }
    }

    /// Starts `transition`, pre-empting any running one.
    pub fn start<S: FrameScheduler>(&mut self, scheduler: &mut S, transition: Transition) {
        self.cancel(scheduler);
        let pending = scheduler.request_frame();
        trace!(
            handle = pending.raw(),
            points = transition.to().len(),
            duration_ms = transition.duration_ms(),
            "start transition"
        );
        self.state = AnimationState::Running {
            transition,
            pending,
            last_frame: None,
        };
    }

    /// Cancels the running transition and returns its `baseline`.
    pub fn cancel<S: FrameScheduler>(&mut self, scheduler: &mut S) -> Option<Vec<Point>> {
        let baseline = self.baseline();
        if let AnimationState::Running { pending, .. } =
            std::mem::replace(&mut self.state, AnimationState::Idle)
        {
            scheduler.cancel_frame(pending);
            trace!(handle = pending.raw(), "cancel transition");
        }
        baseline
    }

    /// Handles a fired frame request.
    ///
    /// Returns `None` for frames that do not belong to the running
    /// transition. Non-terminal frames schedule the next request; the terminal
    /// frame returns the controller to idle without scheduling anything.
    pub fn on_frame<S: FrameScheduler>(
        &mut self,
        scheduler: &mut S,
        handle: FrameHandle,
        timestamp_ms: f64,
    ) -> Option<AnimationFrame> {
        let AnimationState::Running {
            transition,
            pending,
            last_frame,
        } = &mut self.state
        else {
            warn!(handle = handle.raw(), "ignoring frame while idle");
            return None;
        };
        if *pending != handle {
            warn!(
                handle = handle.raw(),
                pending = pending.raw(),
                "ignoring stale frame"
            );
            return None;
        }

        let frame = transition.frame_at(timestamp_ms);
        trace!(
            handle = handle.raw(),
            progress = frame.progress,
            is_final = frame.is_final,
            "transition frame"
        );
        if frame.is_final {
            self.state = AnimationState::Idle;
        } else {
            *pending = scheduler.request_frame();
            *last_frame = Some(frame.points.clone());
        }
        Some(frame)
    }
}
