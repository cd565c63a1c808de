/// Why a render call declined to bind a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No surface is registered under the requested id.
    MissingSurface,
    /// The label sequence is empty.
    EmptyLabels,
    /// The value sequence is empty.
    EmptyValues,
    /// Labels and values have different lengths.
    LengthMismatch,
    /// Explicit segment colors do not align with the values.
    ColorLengthMismatch,
    /// A value is NaN or infinite.
    NonFiniteValue,
    /// A donut value is negative.
    NegativeValue,
    /// The donut value total is zero, leaving nothing to apportion.
    ZeroTotal,
}

/// Result of one render call.
///
/// Unrenderable input never raises; it degrades to `Skipped` carrying the
/// reason, so callers and tests can observe the no-op branch without
/// inspecting the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum RenderOutcome {
    Rendered,
    Skipped(SkipReason),
}

impl RenderOutcome {
    #[must_use]
    pub fn is_rendered(self) -> bool {
        matches!(self, Self::Rendered)
    }

    #[must_use]
    pub fn skip_reason(self) -> Option<SkipReason> {
        match self {
            Self::Rendered => None,
            Self::Skipped(reason) => Some(reason),
        }
    }
}
