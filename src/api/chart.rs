use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::animation::{
    AnimationController, AnimationMode, FrameHandle, FrameScheduler, Transition,
};
use crate::core::{Point, Viewport, align_segments, map_to_points};
use crate::error::ChartResult;
use crate::render::{DrawingSurface, RenderFrame};

use super::ChartConfig;
use super::validation::{validate_chart_config, validate_frame_timestamp};

/// What a delivered frame did to the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameOutcome {
    /// The frame did not belong to the running transition.
    Ignored,
    /// An intermediate frame was drawn and the next one requested.
    Interpolated,
    /// The destination was drawn and the chart is idle again.
    Settled,
}

/// Line-and-point chart that morphs between successive data sets.
///
/// `CanvasChart` owns the drawing surface and frame scheduler, maps raw
/// samples to pixel space, and runs at most one transition at a time. Hosts
/// forward fired frame requests through `on_frame` and size changes through
/// `resize`.
pub struct CanvasChart<S: DrawingSurface, F: FrameScheduler> {
    surface: S,
    scheduler: F,
    config: ChartConfig,
    viewport: Viewport,
    raw_samples: Option<Vec<f64>>,
    current_points: Option<Vec<Point>>,
    last_rendered: Option<Vec<Point>>,
    animation: AnimationController,
}

impl<S: DrawingSurface, F: FrameScheduler> CanvasChart<S, F> {
    /// Builds a chart over `surface`.
    ///
    /// Fails when the config is invalid or the surface cannot report its
    /// dimensions.
    pub fn new(surface: S, scheduler: F, config: ChartConfig) -> ChartResult<Self> {
        let config = validate_chart_config(config)?;
        let viewport = surface.pixel_dimensions()?;
        debug!(
            width = viewport.width,
            height = viewport.height,
            padding = config.padding,
            degenerate = !viewport.fits_padding(config.padding),
            "create chart"
        );

        Ok(Self {
            surface,
            scheduler,
            config,
            viewport,
            raw_samples: None,
            current_points: None,
            last_rendered: None,
            animation: AnimationController::default(),
        })
    }

    #[must_use]
    pub fn config(&self) -> ChartConfig {
        self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn raw_samples(&self) -> Option<&[f64]> {
        self.raw_samples.as_deref()
    }

    /// Destination of the latest update, as mapped for the current viewport.
    #[must_use]
    pub fn current_points(&self) -> Option<&[Point]> {
        self.current_points.as_deref()
    }

    /// Most recently settled point sequence.
    #[must_use]
    pub fn last_rendered(&self) -> Option<&[Point]> {
        self.last_rendered.as_deref()
    }

    #[must_use]
    pub fn animation_mode(&self) -> AnimationMode {
        self.animation.mode()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_running()
    }

    #[must_use]
    pub fn animation(&self) -> &AnimationController {
        &self.animation
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut F {
        &mut self.scheduler
    }

    #[must_use]
    pub fn into_parts(self) -> (S, F) {
        (self.surface, self.scheduler)
    }

    /// Charts a new sample sequence.
    ///
    /// The first data set is drawn immediately. Later ones morph from what is
    /// on screen: the settled sequence, or the frame a running transition had
    /// reached when it was pre-empted. On error the chart keeps its previous
    /// data and any running transition.
    pub fn draw(&mut self, samples: &[f64]) -> ChartResult<()> {
        let candidate = self.map_samples(samples)?;
        debug!(
            sample_count = samples.len(),
            animating = self.animation.is_running(),
            "draw samples"
        );

        let baseline = self
            .animation
            .baseline()
            .or_else(|| self.last_rendered.clone());

        match baseline {
            Some(baseline) => {
                let transition = self.build_transition(&baseline, &candidate)?;
                self.animation.start(&mut self.scheduler, transition);
                self.current_points = Some(candidate);
            }
            None => self.settle(candidate)?,
        }
        self.raw_samples = Some(samples.to_vec());
        Ok(())
    }

    /// Handles a fired frame request from the scheduler.
    pub fn on_frame(
        &mut self,
        handle: FrameHandle,
        timestamp_ms: f64,
    ) -> ChartResult<FrameOutcome> {
        validate_frame_timestamp(timestamp_ms)?;
        let Some(frame) = self
            .animation
            .on_frame(&mut self.scheduler, handle, timestamp_ms)
        else {
            return Ok(FrameOutcome::Ignored);
        };

        if !frame.is_final {
            self.paint(frame.points)?;
            return Ok(FrameOutcome::Interpolated);
        }

        // The aligned destination may carry duplicated points; draw the
        // mapped sequence itself.
        let destination = self.current_points.clone().unwrap_or(frame.points);
        self.settle(destination)?;
        Ok(FrameOutcome::Settled)
    }

    /// Re-reads the surface dimensions and re-lays-out the stored samples
    /// without animating.
    pub fn resize(&mut self) -> ChartResult<()> {
        self.viewport = self.surface.pixel_dimensions()?;
        debug!(
            width = self.viewport.width,
            height = self.viewport.height,
            degenerate = !self.viewport.fits_padding(self.config.padding),
            "resize chart"
        );

        let Some(samples) = self.raw_samples.clone() else {
            return Ok(());
        };
        self.animation.cancel(&mut self.scheduler);
        let points = self.map_samples(&samples)?;
        self.settle(points)
    }

    fn map_samples(&self, samples: &[f64]) -> ChartResult<Vec<Point>> {
        map_to_points(
            samples,
            self.viewport.width_px(),
            self.viewport.height_px(),
            self.config.padding,
        )
    }

    fn build_transition(
        &self,
        baseline: &[Point],
        candidate: &[Point],
    ) -> ChartResult<Transition> {
        let (from, to) = align_segments(baseline, candidate)?;
        trace!(
            baseline_len = baseline.len(),
            candidate_len = candidate.len(),
            aligned_len = to.len(),
            "align segments"
        );
        Transition::new(
            from,
            to,
            self.scheduler.now(),
            self.config.animation_duration_ms,
        )
    }

    fn settle(&mut self, points: Vec<Point>) -> ChartResult<()> {
        self.paint(points.clone())?;
        self.current_points = Some(points.clone());
        self.last_rendered = Some(points);
        Ok(())
    }

    fn paint(&mut self, points: Vec<Point>) -> ChartResult<()> {
        RenderFrame::new(
            self.viewport,
            points,
            self.config.polyline_style(),
            self.config.marker_style(),
        )
        .paint(&mut self.surface)
    }
}
