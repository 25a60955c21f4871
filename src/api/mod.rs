mod chart;
mod chart_config;
mod validation;

pub use chart::{CanvasChart, FrameOutcome};
pub use chart_config::{
    ChartConfig, DEFAULT_ANIMATION_DURATION_MS, DEFAULT_LINE_COLOR, DEFAULT_LINE_WIDTH,
    DEFAULT_PADDING, DEFAULT_POINT_FILL_COLOR, DEFAULT_POINT_LINE_WIDTH, DEFAULT_POINT_SIZE,
    DEFAULT_POINT_STROKE_COLOR,
};
