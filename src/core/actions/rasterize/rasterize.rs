use crate::core::actions::rasterize::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::resolution::Resolution;

/// Single-threaded reference rasterizer. Results are row-major.
pub fn rasterize<Alg: FractalAlgorithm>(resolution: Resolution, algorithm: &Alg) -> Vec<Alg::Success> {
    (0..resolution.pixel_count())
        .map(|index| algorithm.compute(resolution.grid_point(index)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::point::GridPoint;

    struct StubAlgorithm {}

    impl FractalAlgorithm for StubAlgorithm {
        type Success = (u32, u32);

        fn compute(&self, point: GridPoint) -> Self::Success {
            (point.col, point.row)
        }
    }

    #[test]
    fn test_visits_every_cell_row_major() {
        let resolution = Resolution::new(3, 2).unwrap();

        let result = rasterize(resolution, &StubAlgorithm {});

        assert_eq!(
            result,
            vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]
        );
    }
}
