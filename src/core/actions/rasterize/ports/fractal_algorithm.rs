use crate::core::data::point::GridPoint;

pub trait FractalAlgorithm {
    type Success;

    fn compute(&self, point: GridPoint) -> Self::Success;
}
