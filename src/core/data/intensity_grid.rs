use crate::core::data::point::GridPoint;
use crate::core::data::resolution::Resolution;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntensityGridError {
    SizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for IntensityGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(
                    f,
                    "intensity grid expects {} values, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl Error for IntensityGridError {}

/// Escape intensities in `[0, 255]`, one per grid cell, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct IntensityGrid {
    resolution: Resolution,
    values: Vec<f64>,
}

impl IntensityGrid {
    pub fn from_values(
        resolution: Resolution,
        values: Vec<f64>,
    ) -> Result<Self, IntensityGridError> {
        if values.len() != resolution.pixel_count() {
            return Err(IntensityGridError::SizeMismatch {
                expected: resolution.pixel_count(),
                actual: values.len(),
            });
        }

        Ok(Self { resolution, values })
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn get(&self, col: u32, row: u32) -> Option<f64> {
        let point = GridPoint { col, row };

        if !self.resolution.contains(point) {
            return None;
        }

        let index = row as usize * self.resolution.width() as usize + col as usize;
        self.values.get(index).copied()
    }
}
