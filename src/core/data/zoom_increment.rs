use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ZoomIncrementError {
    NotGreaterThanOne { value: f64 },
}

impl fmt::Display for ZoomIncrementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotGreaterThanOne { value } => {
                write!(
                    f,
                    "zoom increment must be a finite value greater than 1, got {}",
                    value
                )
            }
        }
    }
}

impl Error for ZoomIncrementError {}

/// Scale applied by one scroll step. Always finite and greater than 1.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct ZoomIncrement(f64);

impl ZoomIncrement {
    pub const DEFAULT: f64 = 1.5;
    pub const STEP_UP: f64 = 1.2;
    pub const STEP_DOWN: f64 = 0.8;

    pub fn new(value: f64) -> Result<Self, ZoomIncrementError> {
        if !value.is_finite() || value <= 1.0 {
            return Err(ZoomIncrementError::NotGreaterThanOne { value });
        }

        Ok(Self(value))
    }

    #[must_use]
    pub fn get(&self) -> f64 {
        self.0
    }

    pub fn increased(self) -> Result<Self, ZoomIncrementError> {
        Self::new(self.0 * Self::STEP_UP)
    }

    /// Fails instead of producing a step that would no longer zoom.
    pub fn decreased(self) -> Result<Self, ZoomIncrementError> {
        Self::new(self.0 * Self::STEP_DOWN)
    }

    pub fn adjusted(self, up: bool) -> Result<Self, ZoomIncrementError> {
        if up {
            self.increased()
        } else {
            self.decreased()
        }
    }
}

impl Default for ZoomIncrement {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for ZoomIncrement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_one_and_below() {
        assert!(ZoomIncrement::new(1.0).is_err());
        assert!(ZoomIncrement::new(0.5).is_err());
        assert!(ZoomIncrement::new(-2.0).is_err());
        assert!(ZoomIncrement::new(f64::NAN).is_err());
        assert!(ZoomIncrement::new(f64::INFINITY).is_err());
        assert!(ZoomIncrement::new(1.0001).is_ok());
    }

    #[test]
    fn test_increase_multiplies_by_step_up() {
        let increment = ZoomIncrement::new(1.5).unwrap();

        assert!((increment.increased().unwrap().get() - 1.8).abs() < 1e-12);
    }

    #[test]
    fn test_decrease_multiplies_by_step_down() {
        let increment = ZoomIncrement::new(1.5).unwrap();

        assert!((increment.decreased().unwrap().get() - 1.2).abs() < 1e-12);
    }

    #[test]
    fn test_decrease_to_one_or_below_is_rejected() {
        let increment = ZoomIncrement::new(1.2).unwrap();

        assert!(matches!(
            increment.decreased(),
            Err(ZoomIncrementError::NotGreaterThanOne { .. })
        ));
    }

    #[test]
    fn test_repeated_decrease_stops_above_one() {
        let mut increment = ZoomIncrement::default();

        while let Ok(next) = increment.decreased() {
            increment = next;
        }

        assert!(increment.get() > 1.0);
    }
}
