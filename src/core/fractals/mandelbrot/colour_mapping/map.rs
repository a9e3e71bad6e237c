use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::errors::MandelbrotColourMapErrors;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::escape_time::MAX_INTENSITY;
use std::error::Error;

pub trait MandelbrotColourMap: ColourMap<f64> + Send + Sync {
    fn kind(&self) -> MandelbrotColourMapKinds;
}

impl ColourMap<f64> for Box<dyn MandelbrotColourMap> {
    fn map(&self, value: f64) -> Result<Colour, Box<dyn Error>> {
        (**self).map(value)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}

/// Intensity as a fraction of [`MAX_INTENSITY`].
pub(super) fn normalised(intensity: f64) -> Result<f64, MandelbrotColourMapErrors> {
    if !(0.0..=MAX_INTENSITY).contains(&intensity) {
        return Err(MandelbrotColourMapErrors::IntensityOutOfRange { intensity });
    }

    Ok(intensity / MAX_INTENSITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalised_accepts_full_range() {
        assert_eq!(normalised(0.0), Ok(0.0));
        assert_eq!(normalised(255.0), Ok(1.0));
    }

    #[test]
    fn test_normalised_rejects_out_of_range() {
        assert!(normalised(-0.5).is_err());
        assert!(normalised(255.5).is_err());
        assert!(normalised(f64::NAN).is_err());
    }
}
