use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{ArcPrimitive, AreaPrimitive, BezierPrimitive, CirclePrimitive};

/// Backend-agnostic scene for one chart draw pass.
///
/// Backends draw areas first, then beziers, arcs, and circles.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub areas: Vec<AreaPrimitive>,
    pub beziers: Vec<BezierPrimitive>,
    pub arcs: Vec<ArcPrimitive>,
    pub circles: Vec<CirclePrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            areas: Vec::new(),
            beziers: Vec::new(),
            arcs: Vec::new(),
            circles: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_area(mut self, area: AreaPrimitive) -> Self {
        self.areas.push(area);
        self
    }

    #[must_use]
    pub fn with_bezier(mut self, bezier: BezierPrimitive) -> Self {
        self.beziers.push(bezier);
        self
    }

    #[must_use]
    pub fn with_arc(mut self, arc: ArcPrimitive) -> Self {
        self.arcs.push(arc);
        self
    }

    #[must_use]
    pub fn with_circle(mut self, circle: CirclePrimitive) -> Self {
        self.circles.push(circle);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for area in &self.areas {
            area.validate()?;
        }
        for bezier in &self.beziers {
            bezier.validate()?;
        }
        for arc in &self.arcs {
            arc.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
            && self.beziers.is_empty()
            && self.arcs.is_empty()
            && self.circles.is_empty()
    }
}
