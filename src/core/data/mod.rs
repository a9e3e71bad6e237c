pub mod colour;
pub mod complex;
pub mod complex_rect;
pub mod intensity_grid;
pub mod iteration_threshold;
pub mod pixel_buffer;
pub mod point;
pub mod resolution;
pub mod viewport;
pub mod zoom_increment;
