use std::error::Error;
use std::marker::PhantomData;

use log::{error, info};
use winit::dpi::PhysicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

use crate::config::ViewerConfig;
use crate::controllers::viewer::Viewer;
use crate::input::gui::app::gui_app::{gui_help_text, GuiApp, GuiFlow};
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;

/// Opens the viewer window and runs its event loop until it is closed.
pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: ViewerConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort + 'static,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, config: ViewerConfig) -> Self {
        Self {
            presenter_factory,
            config,
            _phantom: PhantomData,
        }
    }

    pub fn execute(&self) -> Result<(), Box<dyn Error>> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let resolution = self.config.resolution;
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Mandelbrot Viewer")
                .with_inner_size(PhysicalSize::new(resolution.width(), resolution.height()))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        let presenter = self.presenter_factory.build(window, resolution)?;
        let viewer = Viewer::from_config(&self.config);
        let mut app = GuiApp::new(window, &event_loop, presenter, viewer);

        info!("{}", gui_help_text());
        window.request_redraw();

        event_loop.run(move |event, elwt| {
            let Event::WindowEvent { event, window_id } = event else {
                return;
            };
            if window_id != window.id() {
                return;
            }

            let (consumed, repaint) = app.handle_window_event(window, &event);

            match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::RedrawRequested => {
                    if let Err(err) = app.redraw(window) {
                        error!("render failed: {}", err);
                        elwt.exit();
                    }
                }
                WindowEvent::Resized(size) => {
                    if let Err(err) = app.resize(size.width, size.height) {
                        error!("resize failed: {}", err);
                        elwt.exit();
                    }
                    window.request_redraw();
                }
                _ if consumed => {
                    if repaint {
                        window.request_redraw();
                    }
                }
                _ => match app.handle_input(&event) {
                    GuiFlow::Quit => elwt.exit(),
                    GuiFlow::Continue => window.request_redraw(),
                },
            }
        })?;

        Ok(())
    }
}
