mod config;
mod outcome;
mod renderer;

pub use config::{ChartRendererConfig, DonutStyle, SparklineStyle};
pub use outcome::{RenderOutcome, SkipReason};
pub use renderer::ChartRenderer;
