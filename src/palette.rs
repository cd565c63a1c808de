//! Shared color palette used by every chart kind.
//!
//! The palette is deliberately small: four base colors plus translucent
//! "soft" variants intended for fills and backgrounds. Dashboards consume
//! these through `ChartRendererConfig` instead of inventing ad-hoc colors.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::ChartResult;
use crate::render::Color;

/// Fixed semantic palette (subtle, not neon).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub primary: Color,
    pub primary_soft: Color,
    pub green: Color,
    pub green_soft: Color,
    pub orange: Color,
    pub orange_soft: Color,
    pub red: Color,
    pub red_soft: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: Color::from_rgb8(11, 27, 59, 0.9),
            primary_soft: Color::from_rgb8(11, 27, 59, 0.25),
            green: Color::from_rgb8(46, 204, 113, 0.9),
            green_soft: Color::from_rgb8(46, 204, 113, 0.25),
            orange: Color::from_rgb8(243, 156, 18, 0.9),
            orange_soft: Color::from_rgb8(243, 156, 18, 0.25),
            red: Color::from_rgb8(231, 76, 60, 0.9),
            red_soft: Color::from_rgb8(231, 76, 60, 0.25),
        }
    }
}

impl Palette {
    /// Ordered fallback sequence used when a donut caller supplies no
    /// explicit segment colors.
    #[must_use]
    pub fn fallback_sequence(&self) -> [Color; 4] {
        [self.primary, self.green, self.orange, self.red]
    }

    /// Resolves default segment colors for `count` donut segments.
    ///
    /// The fallback sequence is cycled so segment counts beyond the palette
    /// length never leave segments uncolored.
    #[must_use]
    pub fn segment_colors(&self, count: usize) -> SmallVec<[Color; 4]> {
        let sequence = self.fallback_sequence();
        (0..count).map(|i| sequence[i % sequence.len()]).collect()
    }

    pub fn validate(&self) -> ChartResult<()> {
        for color in [
            self.primary,
            self.primary_soft,
            self.green,
            self.green_soft,
            self.orange,
            self.orange_soft,
            self.red,
            self.red_soft,
        ] {
            color.validate()?;
        }
        Ok(())
    }
}
