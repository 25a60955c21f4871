use crate::core::Point;
use crate::error::{ChartError, ChartResult};

/// Bounded-duration linear interpolation between two equal-length point
/// sequences. Immutable once built; every frame is derived fresh.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    from: Vec<Point>,
    to: Vec<Point>,
    start_time_ms: f64,
    duration_ms: f64,
}

/// Point sequence computed for one frame of a transition.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationFrame {
    pub points: Vec<Point>,
    pub progress: f64,
    pub is_final: bool,
}

impl Transition {
    pub fn new(
        from: Vec<Point>,
        to: Vec<Point>,
        start_time_ms: f64,
        duration_ms: f64,
    ) -> ChartResult<Self> {
        if from.len() != to.len() {
            return Err(ChartError::InvalidInput(format!(
                "transition endpoints must have equal length (from={}, to={})",
                from.len(),
                to.len()
            )));
        }
        if !start_time_ms.is_finite() {
            return Err(ChartError::InvalidInput(
                "transition start time must be finite".to_owned(),
            ));
        }
        if !duration_ms.is_finite() || duration_ms < 0.0 {
            return Err(ChartError::InvalidInput(
                "transition duration must be finite and >= 0".to_owned(),
            ));
        }

        Ok(Self {
            from,
            to,
            start_time_ms,
            duration_ms,
        })
    }

    #[must_use]
    pub fn from(&self) -> &[Point] {
        &self.from
    }

    #[must_use]
    pub fn to(&self) -> &[Point] {
        &self.to
    }

    #[must_use]
    pub fn start_time_ms(&self) -> f64 {
        self.start_time_ms
    }

    #[must_use]
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// Elapsed fraction at `timestamp_ms`. Not clamped; a zero duration is
    /// already complete.
    #[must_use]
    pub fn progress_at(&self, timestamp_ms: f64) -> f64 {
        if self.duration_ms == 0.0 {
            return 1.0;
        }
        (timestamp_ms - self.start_time_ms) / self.duration_ms
    }

    /// Computes the frame at `timestamp_ms`.
    ///
    /// Once progress reaches 1 the frame is terminal and carries exactly the
    /// destination points rather than an extrapolation past them.
    #[must_use]
    pub fn frame_at(&self, timestamp_ms: f64) -> AnimationFrame {
        let progress = self.progress_at(timestamp_ms);
        if progress >= 1.0 {
            return AnimationFrame {
                points: self.to.clone(),
                progress: 1.0,
                is_final: true,
            };
        }

        let points = self
            .from
            .iter()
            .zip(&self.to)
            .map(|(from, to)| from.lerp(*to, progress))
            .collect();
        AnimationFrame {
            points,
            progress,
            is_final: false,
        }
    }
}
