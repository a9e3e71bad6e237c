use rayon::prelude::*;

use crate::core::actions::rasterize::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::resolution::Resolution;

/// Parallel rasterizer on rayon's work-stealing pool.
///
/// Cells are independent, so the flattened index range is split across
/// workers. `collect` keeps index order and only returns once every worker
/// has finished, so callers never see a partially filled grid.
pub fn rasterize_rayon<Alg>(resolution: Resolution, algorithm: &Alg) -> Vec<Alg::Success>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
{
    (0..resolution.pixel_count())
        .into_par_iter()
        .map(|index| algorithm.compute(resolution.grid_point(index)))
        .collect()
}
