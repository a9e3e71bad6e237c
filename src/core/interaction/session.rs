use crate::core::data::complex::Complex;
use crate::core::data::iteration_threshold::IterationThreshold;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::Viewport;
use crate::core::data::zoom_increment::ZoomIncrement;
use std::fmt;

/// Mutable view state owned by whoever processes input events.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SessionState {
    pub viewport: Viewport,
    pub threshold: IterationThreshold,
    pub zoom_increment: ZoomIncrement,
    pub resolution: Resolution,
    pub cursor: Point,
}

impl SessionState {
    #[must_use]
    pub fn new(
        viewport: Viewport,
        threshold: IterationThreshold,
        zoom_increment: ZoomIncrement,
        resolution: Resolution,
    ) -> Self {
        Self {
            viewport,
            threshold,
            zoom_increment,
            resolution,
            cursor: resolution.centre(),
        }
    }

    #[must_use]
    pub fn cursor_position(&self) -> Complex {
        self.viewport.screen_to_complex(self.cursor, self.resolution)
    }

    #[must_use]
    pub fn info(&self) -> SessionInfo {
        SessionInfo {
            threshold: self.threshold,
            resolution: self.resolution,
            cursor: self.cursor_position(),
            zoom_factor: self.viewport.zoom_factor(),
            zoom_increment: self.zoom_increment,
            viewport: self.viewport,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(
            Viewport::default(),
            IterationThreshold::default(),
            ZoomIncrement::default(),
            Resolution::default(),
        )
    }
}

/// Snapshot reported by the info command.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SessionInfo {
    pub threshold: IterationThreshold,
    pub resolution: Resolution,
    pub cursor: Complex,
    pub zoom_factor: f64,
    pub zoom_increment: ZoomIncrement,
    pub viewport: Viewport,
}

impl fmt::Display for SessionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "threshold: {}", self.threshold)?;
        writeln!(f, "resolution: {}", self.resolution)?;
        writeln!(f, "position: {} + {}i", self.cursor.real, self.cursor.imag)?;
        writeln!(f, "zoom factor: {}", self.zoom_factor)?;
        writeln!(f, "zoom step: {}", self.zoom_increment)?;
        write!(f, "view: {}", self.viewport)
    }
}
