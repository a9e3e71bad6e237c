use crate::core::data::complex::Complex;
use crate::core::data::iteration_threshold::IterationThreshold;

pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;
pub const MAX_INTENSITY: f64 = 255.0;

/// Escape speed of `c` under `z <- z² + c`, scaled to `[0, 255)`.
///
/// The magnitude test runs before each update, so the first escaping
/// iteration `n` yields `255 * n / threshold`. Points that survive every
/// iteration are treated as members of the set and yield `0`.
#[must_use]
pub fn escape_intensity(c: Complex, threshold: IterationThreshold) -> f64 {
    let max_iterations = threshold.get();
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return MAX_INTENSITY * f64::from(iteration) / f64::from(max_iterations);
        }
        z = z * z + c;
    }

    0.0
}
