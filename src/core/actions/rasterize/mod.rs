pub mod ports;
pub mod rasterize;
pub mod rasterize_rayon;
pub mod render;
