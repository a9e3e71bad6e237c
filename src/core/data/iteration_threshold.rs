use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IterationThresholdError {
    BelowMinimum { value: u32, minimum: u32 },
}

impl fmt::Display for IterationThresholdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BelowMinimum { value, minimum } => {
                write!(
                    f,
                    "iteration threshold {} is below the minimum of {}",
                    value, minimum
                )
            }
        }
    }
}

impl Error for IterationThresholdError {}

/// Escape-time iteration cutoff. Never below [`IterationThreshold::MIN`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct IterationThreshold(u32);

impl IterationThreshold {
    pub const MIN: u32 = 20;
    pub const DEFAULT: u32 = 150;

    pub fn new(value: u32) -> Result<Self, IterationThresholdError> {
        if value < Self::MIN {
            return Err(IterationThresholdError::BelowMinimum {
                value,
                minimum: Self::MIN,
            });
        }

        Ok(Self(value))
    }

    #[must_use]
    pub fn get(&self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn increased(self) -> Self {
        Self(self.0.saturating_mul(2))
    }

    #[must_use]
    pub fn decreased(self) -> Self {
        Self((self.0 / 2).max(Self::MIN))
    }

    #[must_use]
    pub fn adjusted(self, increase: bool) -> Self {
        if increase {
            self.increased()
        } else {
            self.decreased()
        }
    }
}

impl Default for IterationThreshold {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for IterationThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_rejects_values_below_minimum() {
        assert_eq!(
            IterationThreshold::new(19),
            Err(IterationThresholdError::BelowMinimum {
                value: 19,
                minimum: 20
            })
        );
        assert_eq!(IterationThreshold::new(20).map(|t| t.get()), Ok(20));
    }

    #[test]
    fn test_increase_doubles() {
        let threshold = IterationThreshold::new(150).unwrap();

        assert_eq!(threshold.increased().get(), 300);
    }

    #[test]
    fn test_increase_saturates() {
        let threshold = IterationThreshold::new(u32::MAX - 1).unwrap();

        assert_eq!(threshold.increased().get(), u32::MAX);
    }

    #[test]
    fn test_decrease_halves_with_floor() {
        assert_eq!(IterationThreshold::new(150).unwrap().decreased().get(), 75);
        assert_eq!(IterationThreshold::new(41).unwrap().decreased().get(), 20);
        assert_eq!(IterationThreshold::new(30).unwrap().decreased().get(), 20);
        assert_eq!(IterationThreshold::new(20).unwrap().decreased().get(), 20);
    }

    #[test]
    fn test_increase_then_decrease_returns_to_start() {
        let start = IterationThreshold::default();

        let raised = start.adjusted(true);
        let lowered = raised.adjusted(false);

        assert_eq!(raised.get(), 300);
        assert_eq!(lowered, start);
        assert_eq!(lowered.get(), 150);
    }

    proptest! {
        #[test]
        fn adjustments_never_drop_below_minimum(
            start in 20u32..100_000,
            steps in proptest::collection::vec(any::<bool>(), 0..64),
        ) {
            let mut threshold = IterationThreshold::new(start).unwrap();

            for increase in steps {
                threshold = threshold.adjusted(increase);
                prop_assert!(threshold.get() >= IterationThreshold::MIN);
            }
        }
    }
}
