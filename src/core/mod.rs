pub mod donut;
pub mod sparkline;
pub mod types;

pub use donut::{DonutLayout, DonutSegment, donut_layout, project_donut_segments};
pub use sparkline::{CubicSegment, PixelPoint, project_sparkline_points, spline_segments};
pub use types::Viewport;
