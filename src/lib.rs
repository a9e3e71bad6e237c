mod config;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;
mod storage;

pub use config::{ConfigError, RenderArgs, ViewerArgs, ViewerConfig};
pub use controllers::ports::file_presenter::{FilePresenterError, FilePresenterPort};
pub use controllers::viewer::{Frame, Viewer, ViewerError};
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
pub use crate::core::actions::rasterize::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::rasterize::rasterize::rasterize;
pub use crate::core::actions::rasterize::rasterize_rayon::rasterize_rayon;
pub use crate::core::actions::rasterize::render::render;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::intensity_grid::IntensityGrid;
pub use crate::core::data::iteration_threshold::IterationThreshold;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::point::{GridPoint, Point};
pub use crate::core::data::resolution::Resolution;
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::data::zoom_increment::ZoomIncrement;
pub use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
pub use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
pub use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
pub use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
pub use crate::core::fractals::mandelbrot::escape_time::escape_intensity;
pub use crate::core::interaction::controller::{ControllerOutcome, ZoomPanController};
pub use crate::core::interaction::events::{Command, InputEvent, PointerButton, ScrollDirection};
pub use crate::core::interaction::session::{SessionInfo, SessionState};
pub use crate::core::interaction::state::InteractionState;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
