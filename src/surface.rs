//! Drawing-surface lookup keyed by string identifier.
//!
//! A surface is an addressable drawing target with a fixed viewport and at
//! most one chart binding. Rebinding replaces the previous chart wholesale,
//! never layers on top of it.

use indexmap::IndexMap;

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::RenderFrame;

/// Chart kind bound to a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Sparkline,
    Donut,
}

/// One fully materialized chart bound to a surface.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBinding {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub frame: RenderFrame,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    viewport: Viewport,
    binding: Option<ChartBinding>,
}

impl Surface {
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn binding(&self) -> Option<&ChartBinding> {
        self.binding.as_ref()
    }
}

/// Registry of drawing surfaces, insertion ordered.
#[derive(Debug, Default)]
pub struct SurfaceRegistry {
    surfaces: IndexMap<String, Surface>,
}

impl SurfaceRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a surface under `id`.
    ///
    /// Re-registering an existing id replaces its viewport and clears any
    /// chart binding.
    pub fn register(&mut self, id: impl Into<String>, viewport: Viewport) -> ChartResult<()> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.surfaces.insert(
            id.into(),
            Surface {
                viewport,
                binding: None,
            },
        );
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> bool {
        self.surfaces.shift_remove(id).is_some()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.surfaces.contains_key(id)
    }

    #[must_use]
    pub fn viewport(&self, id: &str) -> Option<Viewport> {
        self.surfaces.get(id).map(Surface::viewport)
    }

    #[must_use]
    pub fn surface(&self, id: &str) -> Option<&Surface> {
        self.surfaces.get(id)
    }

    #[must_use]
    pub fn binding(&self, id: &str) -> Option<&ChartBinding> {
        self.surfaces.get(id).and_then(Surface::binding)
    }

    /// Replaces the chart bound to `id`. Returns false for unknown surfaces.
    pub(crate) fn bind(&mut self, id: &str, binding: ChartBinding) -> bool {
        match self.surfaces.get_mut(id) {
            Some(surface) => {
                surface.binding = Some(binding);
                true
            }
            None => false,
        }
    }

    /// Clears the chart bound to `id`, leaving the surface registered.
    pub fn clear_binding(&mut self, id: &str) -> bool {
        match self.surfaces.get_mut(id) {
            Some(surface) => {
                let had_binding = surface.binding.is_some();
                surface.binding = None;
                had_binding
            }
            None => false,
        }
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.surfaces.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}
