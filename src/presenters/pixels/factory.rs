use winit::window::Window;

use crate::core::data::resolution::Resolution;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::presenters::pixels::presenter::PixelsPresenter;

#[derive(Debug, Default)]
pub struct PixelsPresenterFactory;

impl PixelsPresenterFactory {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl GuiPresenterFactoryPort<PixelsPresenter> for PixelsPresenterFactory {
    fn build(
        &self,
        window: &'static Window,
        resolution: Resolution,
    ) -> Result<PixelsPresenter, pixels::Error> {
        PixelsPresenter::new(window, resolution)
    }
}
