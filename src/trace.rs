//! Headless replay of scripted chart sessions.
//!
//! A `TraceScript` drives a `CanvasChart` over a `RecordingSurface` and a
//! `ManualFrameScheduler` at a fixed frame interval. Every marker pass the
//! chart paints is collected as a `TraceFrame`, which makes morph sequences
//! comparable across runs.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::animation::{FrameScheduler, ManualFrameScheduler};
use crate::api::{CanvasChart, ChartConfig, FrameOutcome};
use crate::core::{Point, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{RecordingSurface, SurfaceCommand};

pub const DEFAULT_FRAME_INTERVAL_MS: f64 = 1000.0 / 60.0;

type TraceChart = CanvasChart<RecordingSurface, ManualFrameScheduler>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceScript {
    pub viewport: Viewport,
    #[serde(default)]
    pub config: ChartConfig,
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: f64,
    pub steps: Vec<TraceStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceStep {
    /// Charts a new sample sequence.
    Draw(Vec<f64>),
    /// Moves the clock forward, delivering frames while a transition runs.
    Advance(f64),
    /// Changes the surface size and re-lays-out the chart.
    Resize(Viewport),
    /// Delivers frames until the chart is idle.
    Settle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceOutput {
    pub frame_interval_ms: f64,
    pub frames: Vec<TraceFrame>,
}

/// One painted marker pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceFrame {
    pub time_ms: f64,
    /// Index of the script step that produced the frame.
    pub step: usize,
    pub animating: bool,
    pub points: Vec<Point>,
}

fn default_frame_interval_ms() -> f64 {
    DEFAULT_FRAME_INTERVAL_MS
}

impl TraceScript {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|err| ChartError::InvalidConfig(format!("invalid trace script: {err}")))
    }
}

impl TraceOutput {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| ChartError::InvalidConfig(format!("failed to serialize trace: {err}")))
    }
}

/// Runs `script` from a clock starting at 0 and returns every painted frame.
pub fn replay(script: &TraceScript) -> ChartResult<TraceOutput> {
    let interval_ms = script.frame_interval_ms;
    if !interval_ms.is_finite() || interval_ms <= 0.0 {
        return Err(ChartError::InvalidConfig(
            "frame_interval_ms must be finite and > 0".to_owned(),
        ));
    }

    let surface = RecordingSurface::new(script.viewport.width, script.viewport.height);
    let mut chart = CanvasChart::new(surface, ManualFrameScheduler::new(0.0), script.config)?;
    let mut frames = Vec::new();

    for (index, step) in script.steps.iter().enumerate() {
        debug!(step = index, "replay trace step");
        match step {
            TraceStep::Draw(samples) => chart.draw(samples)?,
            TraceStep::Advance(duration_ms) => {
                if !duration_ms.is_finite() || *duration_ms < 0.0 {
                    return Err(ChartError::InvalidInput(format!(
                        "step {index}: advance duration must be finite and >= 0"
                    )));
                }
                let target = chart.scheduler().now() + duration_ms;
                // Once idle no frame is pending, so the clock jumps.
                while chart.is_animating() && chart.scheduler().now() + interval_ms <= target {
                    step_frame(&mut chart, interval_ms)?;
                    collect_frames(&mut chart, index, &mut frames);
                }
                chart.scheduler_mut().set_now(target);
            }
            TraceStep::Resize(viewport) => {
                chart
                    .surface_mut()
                    .set_dimensions(viewport.width, viewport.height);
                chart.resize()?;
            }
            TraceStep::Settle => {
                while chart.is_animating() {
                    step_frame(&mut chart, interval_ms)?;
                    collect_frames(&mut chart, index, &mut frames);
                }
            }
        }
        collect_frames(&mut chart, index, &mut frames);
    }

    Ok(TraceOutput {
        frame_interval_ms: interval_ms,
        frames,
    })
}

fn step_frame(chart: &mut TraceChart, interval_ms: f64) -> ChartResult<FrameOutcome> {
    let now = chart.scheduler_mut().advance(interval_ms);
    match chart.scheduler_mut().fire() {
        Some(handle) => chart.on_frame(handle, now),
        None => Ok(FrameOutcome::Ignored),
    }
}

fn collect_frames(chart: &mut TraceChart, step: usize, frames: &mut Vec<TraceFrame>) {
    let time_ms = chart.scheduler().now();
    let animating = chart.is_animating();
    for command in chart.surface_mut().take_commands() {
        if let SurfaceCommand::FillAndStrokeMarkers { points, .. } = command {
            frames.push(TraceFrame {
                time_ms,
                step,
                animating,
                points,
            });
        }
    }
}
