use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::colour_mapping::maps::{
    blue_white_gradient::MandelbrotBlueWhiteGradient, fire_gradient::MandelbrotFireGradient,
    grayscale::MandelbrotGrayscale,
};

#[must_use]
pub fn mandelbrot_colour_map_factory(kind: MandelbrotColourMapKinds) -> Box<dyn MandelbrotColourMap> {
    match kind {
        MandelbrotColourMapKinds::Grayscale => Box::new(MandelbrotGrayscale::new()),
        MandelbrotColourMapKinds::FireGradient => Box::new(MandelbrotFireGradient::new()),
        MandelbrotColourMapKinds::BlueWhiteGradient => {
            Box::new(MandelbrotBlueWhiteGradient::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(
            MandelbrotColourMapKinds::ALL.first(),
            Some(&MandelbrotColourMapKinds::default())
        );
    }

    #[test]
    fn factory_builds_requested_kind() {
        for &kind in MandelbrotColourMapKinds::ALL {
            let map = mandelbrot_colour_map_factory(kind);
            assert_eq!(map.kind(), kind);
            assert_eq!(map.display_name(), kind.display_name());
        }
    }

    #[test]
    fn boxed_map_delegates_mapping() {
        let map = mandelbrot_colour_map_factory(MandelbrotColourMapKinds::Grayscale);

        assert_eq!(map.map(0.0).unwrap().r, 0);
        assert!(map.map(-1.0).is_err());
    }
}
