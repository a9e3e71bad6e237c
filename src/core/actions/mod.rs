pub mod generate_pixel_buffer;
pub mod rasterize;
