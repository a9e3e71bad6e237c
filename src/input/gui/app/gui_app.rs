use std::error::Error;
use std::time::Duration;

use egui::Context;
use egui_winit::State as EguiWinitState;
use log::{error, info};
use winit::event::WindowEvent;
use winit::event_loop::EventLoop;
use winit::window::Window;

use crate::controllers::viewer::Viewer;
use crate::core::data::point::Point;
use crate::core::interaction::controller::ControllerOutcome;
use crate::core::interaction::events::{Command, InputEvent};
use crate::core::interaction::help::help_text;
use crate::core::interaction::session::SessionState;
use crate::core::interaction::state::InteractionState;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::bindings::{key_label, translate, GuiAction, QUIT_KEY_LABEL};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GuiFlow {
    Continue,
    Quit,
}

pub struct GuiApp<T: GuiPresenterPort> {
    presenter: T,
    viewer: Viewer,
    cursor: Point,
    status: Option<String>,
    last_render_duration: Option<Duration>,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

/// Full help including the window-only quit key.
#[must_use]
pub fn gui_help_text() -> String {
    format!("{}\n  {:<12} quit", help_text(key_label), QUIT_KEY_LABEL)
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: T,
        viewer: Viewer,
    ) -> Self {
        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None,
        );
        let cursor = viewer.session().cursor;

        Self {
            presenter,
            viewer,
            cursor,
            status: None,
            last_render_duration: None,
            egui_ctx,
            egui_state,
        }
    }

    /// Feeds an event to egui first. Returns `(consumed, repaint)`.
    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }

    /// Runs one window event through the viewer. Failures to save are
    /// reported in the overlay rather than ending the session.
    pub fn handle_input(&mut self, event: &WindowEvent) -> GuiFlow {
        if let WindowEvent::CursorMoved { position, .. } = event {
            self.cursor = self.presenter.buffer_position((position.x, position.y));
        }

        match translate(event, self.cursor) {
            None => GuiFlow::Continue,
            Some(GuiAction::Quit) => GuiFlow::Quit,
            Some(GuiAction::Input(input)) => {
                self.apply(input);
                GuiFlow::Continue
            }
        }
    }

    fn apply(&mut self, input: InputEvent) {
        match self.viewer.handle_event(input) {
            Ok(ControllerOutcome::Position(position)) => {
                self.status = Some(format!("position: {} + {}i", position.real, position.imag));
            }
            Ok(ControllerOutcome::Info(summary)) => self.status = Some(summary.to_string()),
            Ok(ControllerOutcome::Help) => {
                let text = gui_help_text();
                info!("{}", text);
                self.status = Some(text);
            }
            Ok(ControllerOutcome::SaveRequested) => {
                if let Some(path) = self.viewer.last_saved() {
                    self.status = Some(format!("saved {}", path.display()));
                }
            }
            Ok(ControllerOutcome::Redraw | ControllerOutcome::Unchanged) => {}
            Err(err) => {
                error!("{}", err);
                self.status = Some(err.to_string());
            }
        }
    }

    /// Renders a new fractal frame when the view changed, then draws the
    /// overlay on top.
    pub fn redraw(&mut self, window: &Window) -> Result<(), Box<dyn Error>> {
        if let Some(frame) = self.viewer.render_if_dirty()? {
            self.presenter.show_frame(&frame.pixels)?;
            self.last_render_duration = Some(frame.render_duration);
        }

        let mut egui_output = self.update_ui(window);
        let platform_output = std::mem::take(&mut egui_output.platform_output);
        self.egui_state.handle_platform_output(window, platform_output);

        self.presenter.render(egui_output, &self.egui_ctx)?;
        Ok(())
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        self.presenter.resize(width, height)
    }

    fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);

        let session = *self.viewer.session();
        let gesture = self.viewer.controller().state();
        let colour_map = self.viewer.colour_map_name();
        let position = session.viewport.screen_to_complex(self.cursor, session.resolution);
        let selection = selection_rect(gesture, &session, self.cursor);

        let window_size = window.inner_size();
        let to_window_x = f64::from(window_size.width) / f64::from(session.resolution.width());
        let to_window_y = f64::from(window_size.height) / f64::from(session.resolution.height());

        let mut clicked = None;

        let output = self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Mandelbrot")
                .default_pos([10.0, 10.0])
                .default_size([280.0, 200.0])
                .show(ctx, |ui| {
                    ui.label(format!("Threshold: {}", session.threshold));
                    ui.label(format!("Zoom factor: {:.6e}", session.viewport.zoom_factor()));
                    ui.label(format!("Zoom step: {}", session.zoom_increment));
                    ui.label(format!("Colour map: {}", colour_map));
                    ui.separator();
                    ui.label(format!(
                        "Real: [{:.6}, {:.6}]",
                        session.viewport.x0(),
                        session.viewport.x1()
                    ));
                    ui.label(format!(
                        "Imag: [{:.6}, {:.6}]",
                        session.viewport.y0(),
                        session.viewport.y1()
                    ));
                    ui.label(format!("Cursor: {:.6} + {:.6}i", position.real, position.imag));
                    ui.label(format!("Gesture: {}", gesture.name()));
                    if let Some(duration) = self.last_render_duration {
                        ui.label(format!("Last render: {} ms", duration.as_millis()));
                    }

                    ui.separator();
                    ui.horizontal(|ui| {
                        if ui.button("Save frame").clicked() {
                            clicked = Some(Command::SaveFrame);
                        }
                        if ui.button("Help").clicked() {
                            clicked = Some(Command::ShowHelp);
                        }
                    });

                    if let Some(status) = &self.status {
                        ui.separator();
                        ui.monospace(status);
                    }
                });

            if let Some((min, max)) = selection {
                let scale = f64::from(ctx.pixels_per_point());
                let to_points = |point: Point| {
                    egui::pos2(
                        (point.x * to_window_x / scale) as f32,
                        (point.y * to_window_y / scale) as f32,
                    )
                };
                let painter = ctx.layer_painter(egui::LayerId::new(
                    egui::Order::Foreground,
                    egui::Id::new("selection"),
                ));
                painter.rect_stroke(
                    egui::Rect::from_min_max(to_points(min), to_points(max)),
                    0.0,
                    egui::Stroke::new(1.0, egui::Color32::WHITE),
                );
            }
        });

        if let Some(command) = clicked {
            self.apply(InputEvent::Command(command));
        }

        output
    }
}

/// Framebuffer corners of the rectangle being selected, ordered min then max.
fn selection_rect(
    state: InteractionState,
    session: &SessionState,
    cursor: Point,
) -> Option<(Point, Point)> {
    match state {
        InteractionState::RectSelecting { anchor } => {
            let anchor = session.viewport.complex_to_screen(anchor, session.resolution);
            let min = Point {
                x: anchor.x.min(cursor.x),
                y: anchor.y.min(cursor.y),
            };
            let max = Point {
                x: anchor.x.max(cursor.x),
                y: anchor.y.max(cursor.y),
            };
            Some((min, max))
        }
        _ => None,
    }
}
