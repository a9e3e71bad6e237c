use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ComplexRectError {
    InvalidSize { width: f64, height: f64 },
    NonFinite { top_left: Complex, bottom_right: Complex },
}

impl fmt::Display for ComplexRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "complex rect size must be positive: {}x{}",
                    width, height
                )
            }
            Self::NonFinite {
                top_left,
                bottom_right,
            } => {
                write!(
                    f,
                    "complex rect bounds must be finite: ({}, {}) to ({}, {})",
                    top_left.real, top_left.imag, bottom_right.real, bottom_right.imag
                )
            }
        }
    }
}

impl Error for ComplexRectError {}

/// Axis-aligned region of the complex plane.
///
/// `top_left` holds the minimum real and imaginary parts, `bottom_right` the
/// maximum ones. Both extents are finite and strictly positive.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    top_left: Complex,
    bottom_right: Complex,
}

impl ComplexRect {
    pub fn new(top_left: Complex, bottom_right: Complex) -> Result<Self, ComplexRectError> {
        let width = bottom_right.real - top_left.real;
        let height = bottom_right.imag - top_left.imag;

        if !top_left.is_finite()
            || !bottom_right.is_finite()
            || !width.is_finite()
            || !height.is_finite()
        {
            return Err(ComplexRectError::NonFinite {
                top_left,
                bottom_right,
            });
        }

        if width <= 0.0 || height <= 0.0 {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// Builds the rect spanned by two opposite corners given in any order.
    pub fn from_corners(a: Complex, b: Complex) -> Result<Self, ComplexRectError> {
        Self::new(
            Complex {
                real: a.real.min(b.real),
                imag: a.imag.min(b.imag),
            },
            Complex {
                real: a.real.max(b.real),
                imag: a.imag.max(b.imag),
            },
        )
    }

    #[must_use]
    pub fn top_left(&self) -> Complex {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Complex {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.bottom_right.real - self.top_left.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom_right.imag - self.top_left.imag
    }
}

impl Default for ComplexRect {
    fn default() -> Self {
        Self {
            top_left: Complex {
                real: -2.0,
                imag: -2.0,
            },
            bottom_right: Complex {
                real: 2.0,
                imag: 2.0,
            },
        }
    }
}
