pub mod align;
pub mod mapper;
pub mod types;

pub use align::align_segments;
pub use mapper::{map_to_points, sample_range};
pub use types::{Point, SampleRange, Viewport};
