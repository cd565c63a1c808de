use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so tests can catch invalid geometry
/// before a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_area_count: usize,
    pub last_bezier_count: usize,
    pub last_arc_count: usize,
    pub last_circle_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_area_count = frame.areas.len();
        self.last_bezier_count = frame.beziers.len();
        self.last_arc_count = frame.arcs.len();
        self.last_circle_count = frame.circles.len();
        Ok(())
    }
}
