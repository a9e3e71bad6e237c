use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;

/// Pointer gesture in progress. Panning and rectangle selection exclude each
/// other.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    /// `anchor` is in the coordinates of `origin`, the viewport captured at
    /// the press. The scale does not change during a drag.
    Dragging { anchor: Complex, origin: Viewport },
    RectSelecting { anchor: Complex },
}

impl InteractionState {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Dragging { .. } => "dragging",
            Self::RectSelecting { .. } => "rect-selecting",
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
