use crate::core::actions::rasterize::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::iteration_threshold::IterationThreshold;
use crate::core::data::point::GridPoint;
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::escape_time::escape_intensity;

/// Snapshot of everything one render needs. Copied by value into the
/// rasterizer so workers never observe a viewport that changes mid-frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    viewport: Viewport,
    resolution: Resolution,
    threshold: IterationThreshold,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = f64;

    fn compute(&self, point: GridPoint) -> Self::Success {
        let c = self.viewport.grid_to_complex(point, self.resolution);
        escape_intensity(c, self.threshold)
    }
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(viewport: Viewport, resolution: Resolution, threshold: IterationThreshold) -> Self {
        Self {
            viewport,
            resolution,
            threshold,
        }
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }
}
