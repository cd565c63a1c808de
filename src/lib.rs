//! microchart: dashboard micro-charts.
//!
//! This crate renders the two chart shapes small dashboards actually use:
//! axis-less trend sparklines and proportional donut rings. It keeps a
//! strict split between pure geometry, backend-agnostic draw primitives,
//! and a façade that binds charts to named drawing surfaces.

pub mod api;
pub mod core;
pub mod error;
pub mod palette;
pub mod render;
pub mod surface;
pub mod telemetry;

pub use api::{ChartRenderer, ChartRendererConfig, RenderOutcome, SkipReason};
pub use error::{ChartError, ChartResult};
pub use palette::Palette;
