use crate::core::actions::rasterize::rasterize_rayon::rasterize_rayon;
use crate::core::data::intensity_grid::{IntensityGrid, IntensityGridError};
use crate::core::data::iteration_threshold::IterationThreshold;
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;

/// Samples the Mandelbrot escape intensity for every cell of the grid.
pub fn render(
    viewport: Viewport,
    threshold: IterationThreshold,
    resolution: Resolution,
) -> Result<IntensityGrid, IntensityGridError> {
    let algorithm = MandelbrotAlgorithm::new(viewport, resolution, threshold);
    let values = rasterize_rayon(resolution, &algorithm);

    IntensityGrid::from_values(resolution, values)
}
