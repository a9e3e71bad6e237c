use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::{normalised, MandelbrotColourMap};
use std::error::Error;

#[derive(Debug, Default)]
pub struct MandelbrotFireGradient {}

impl ColourMap<f64> for MandelbrotFireGradient {
    fn map(&self, intensity: f64) -> Result<Colour, Box<dyn Error>> {
        let t = normalised(intensity)?;

        // black -> red -> orange -> yellow -> white
        let (r, g, b) = if t < 0.25 {
            ((t / 0.25 * 255.0) as u8, 0, 0)
        } else if t < 0.5 {
            (255, ((t - 0.25) / 0.25 * 165.0) as u8, 0)
        } else if t < 0.75 {
            (255, (165.0 + (t - 0.5) / 0.25 * 90.0) as u8, 0)
        } else {
            (255, 255, ((t - 0.75) / 0.25 * 255.0) as u8)
        };

        Ok(Colour { r, g, b })
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotFireGradient {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::FireGradient
    }
}

impl MandelbrotFireGradient {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_intensity_is_black() {
        let mapper = MandelbrotFireGradient::new();

        assert_eq!(mapper.map(0.0).unwrap(), Colour::BLACK);
    }

    #[test]
    fn test_quarter_is_red() {
        let mapper = MandelbrotFireGradient::new();

        assert_eq!(mapper.map(63.75).unwrap(), Colour { r: 255, g: 0, b: 0 });
    }

    #[test]
    fn test_half_is_orange() {
        let mapper = MandelbrotFireGradient::new();

        assert_eq!(mapper.map(127.5).unwrap(), Colour { r: 255, g: 165, b: 0 });
    }

    #[test]
    fn test_full_intensity_is_white() {
        let mapper = MandelbrotFireGradient::new();

        assert_eq!(
            mapper.map(255.0).unwrap(),
            Colour {
                r: 255,
                g: 255,
                b: 255
            }
        );
    }

    #[test]
    fn test_negative_intensity_is_an_error() {
        let mapper = MandelbrotFireGradient::new();

        assert!(mapper.map(-1.0).is_err());
    }
}
