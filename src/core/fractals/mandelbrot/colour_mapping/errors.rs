use std::{error::Error, fmt};

#[derive(Debug, PartialEq)]
pub enum MandelbrotColourMapErrors {
    IntensityOutOfRange { intensity: f64 },
}

impl fmt::Display for MandelbrotColourMapErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IntensityOutOfRange { intensity } => {
                write!(f, "intensity {} is outside the range [0, 255]", intensity)
            }
        }
    }
}

impl Error for MandelbrotColourMapErrors {}
