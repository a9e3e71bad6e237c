use egui::Context as EguiContext;

use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::point::Point;

pub trait GuiPresenterPort {
    /// Replaces the displayed image with a freshly rendered frame.
    fn show_frame(&mut self, pixels: &PixelBuffer) -> Result<(), PixelBufferError>;

    /// Maps a physical window position onto the framebuffer, clamping
    /// positions outside it to the nearest edge.
    fn buffer_position(&self, window_position: (f64, f64)) -> Point;

    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error>;

    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError>;
}
