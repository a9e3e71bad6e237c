use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::{normalised, MandelbrotColourMap};
use std::error::Error;

/// Intensity used directly as the grey level.
#[derive(Debug, Default)]
pub struct MandelbrotGrayscale {}

impl ColourMap<f64> for MandelbrotGrayscale {
    fn map(&self, intensity: f64) -> Result<Colour, Box<dyn Error>> {
        let t = normalised(intensity)?;

        Ok(Colour::grey((t * 255.0) as u8))
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotGrayscale {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::Grayscale
    }
}

impl MandelbrotGrayscale {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_members_of_the_set_are_black() {
        let mapper = MandelbrotGrayscale::new();

        assert_eq!(mapper.map(0.0).unwrap(), Colour::BLACK);
    }

    #[test]
    fn test_intensity_truncates_to_grey_level() {
        let mapper = MandelbrotGrayscale::new();

        assert_eq!(mapper.map(63.75).unwrap(), Colour::grey(63));
        assert_eq!(mapper.map(255.0).unwrap(), Colour::grey(255));
    }

    #[test]
    fn test_out_of_range_intensity_is_an_error() {
        let mapper = MandelbrotGrayscale::new();

        assert!(mapper.map(300.0).is_err());
    }
}
