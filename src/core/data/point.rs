/// Screen position in pixels, origin at the top-left corner.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Cell of the sampling grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GridPoint {
    pub col: u32,
    pub row: u32,
}
