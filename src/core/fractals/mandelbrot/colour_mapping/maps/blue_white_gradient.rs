use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::{normalised, MandelbrotColourMap};
use std::error::Error;

/// Bernstein polynomial palette running from deep blue through white.
#[derive(Debug, Default)]
pub struct MandelbrotBlueWhiteGradient {}

impl ColourMap<f64> for MandelbrotBlueWhiteGradient {
    fn map(&self, intensity: f64) -> Result<Colour, Box<dyn Error>> {
        let t = normalised(intensity)?;
        let u = 1.0 - t;

        Ok(Colour {
            r: (9.0 * u * t * t * t * 255.0) as u8,
            g: (15.0 * u * u * t * t * 255.0) as u8,
            b: (8.5 * u * u * u * t * 255.0) as u8,
        })
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotBlueWhiteGradient {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::BlueWhiteGradient
    }
}

impl MandelbrotBlueWhiteGradient {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}
