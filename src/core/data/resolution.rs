use crate::core::data::point::{GridPoint, Point};
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    ZeroSize { width: u32, height: u32 },
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSize { width, height } => {
                write!(f, "resolution must be non-zero: {}x{}", width, height)
            }
        }
    }
}

impl Error for ResolutionError {}

/// Grid and screen size in pixels. `cols == width`, `rows == height`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Resolution {
    width: u32,
    height: u32,
}

impl Resolution {
    pub const DEFAULT_WIDTH: u32 = 800;
    pub const DEFAULT_HEIGHT: u32 = 800;

    pub fn new(width: u32, height: u32) -> Result<Self, ResolutionError> {
        if width == 0 || height == 0 {
            return Err(ResolutionError::ZeroSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Grid cell for a row-major flat index.
    #[must_use]
    pub fn grid_point(&self, index: usize) -> GridPoint {
        let cols = self.width as usize;

        GridPoint {
            col: (index % cols) as u32,
            row: (index / cols) as u32,
        }
    }

    #[must_use]
    pub fn contains(&self, point: GridPoint) -> bool {
        point.col < self.width && point.row < self.height
    }

    /// Position as a fraction of the screen size on each axis.
    #[must_use]
    pub fn ratio(&self, position: Point) -> (f64, f64) {
        (
            position.x / f64::from(self.width),
            position.y / f64::from(self.height),
        )
    }

    #[must_use]
    pub fn centre(&self) -> Point {
        Point {
            x: f64::from(self.width) / 2.0,
            y: f64::from(self.height) / 2.0,
        }
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
