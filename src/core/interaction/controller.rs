use log::{debug, info, warn};

use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::interaction::events::{Command, InputEvent, PointerButton, ScrollDirection};
use crate::core::interaction::session::{SessionInfo, SessionState};
use crate::core::interaction::state::InteractionState;

/// What the caller should do after an event was handled.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ControllerOutcome {
    Unchanged,
    Redraw,
    Position(Complex),
    Info(SessionInfo),
    Help,
    SaveRequested,
}

/// Maps input events onto viewport and accuracy changes.
///
/// The controller owns only the gesture state; the view itself lives in the
/// [`SessionState`] passed to [`ZoomPanController::handle`]. Transforms that
/// would produce a degenerate view are dropped and the session is left as it
/// was.
#[derive(Debug, Default)]
pub struct ZoomPanController {
    state: InteractionState,
}

impl ZoomPanController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn handle(&mut self, session: &mut SessionState, event: InputEvent) -> ControllerOutcome {
        if let Some(position) = event.position() {
            session.cursor = position;
        }

        match event {
            InputEvent::Scroll {
                direction,
                position,
            } => self.scroll(session, direction, position),
            InputEvent::ButtonPressed { button, position } => self.press(session, button, position),
            InputEvent::ButtonReleased { button, position } => {
                self.release(session, button, position)
            }
            InputEvent::PointerMoved { position } => self.pointer_moved(session, position),
            InputEvent::Command(command) => Self::command(session, command),
        }
    }

    fn transition(&mut self, next: InteractionState) {
        debug!("interaction {} -> {}", self.state.name(), next.name());
        self.state = next;
    }

    fn scroll(
        &mut self,
        session: &mut SessionState,
        direction: ScrollDirection,
        position: Point,
    ) -> ControllerOutcome {
        if !self.state.is_idle() {
            debug!("scroll ignored while {}", self.state.name());
            return ControllerOutcome::Unchanged;
        }

        let zoom_in = direction == ScrollDirection::Up;

        match session.viewport.zoom_at(
            zoom_in,
            session.zoom_increment,
            position,
            session.resolution,
        ) {
            Ok(viewport) => {
                session.viewport = viewport;
                ControllerOutcome::Redraw
            }
            Err(err) => {
                warn!("zoom rejected: {}", err);
                ControllerOutcome::Unchanged
            }
        }
    }

    fn press(
        &mut self,
        session: &SessionState,
        button: PointerButton,
        position: Point,
    ) -> ControllerOutcome {
        if !self.state.is_idle() {
            debug!("{:?} press ignored while {}", button, self.state.name());
            return ControllerOutcome::Unchanged;
        }

        let anchor = session
            .viewport
            .screen_to_complex(position, session.resolution);

        let next = match button {
            PointerButton::Primary => InteractionState::Dragging {
                anchor,
                origin: session.viewport,
            },
            PointerButton::Secondary => InteractionState::RectSelecting { anchor },
        };
        self.transition(next);

        ControllerOutcome::Unchanged
    }

    fn pointer_moved(&mut self, session: &mut SessionState, position: Point) -> ControllerOutcome {
        let InteractionState::Dragging { anchor, origin } = self.state else {
            return ControllerOutcome::Unchanged;
        };

        let under_cursor = origin.screen_to_complex(position, session.resolution);

        match session.viewport.pan_by(anchor - under_cursor) {
            Ok(viewport) => {
                session.viewport = viewport;
                self.state = InteractionState::Dragging {
                    anchor: under_cursor,
                    origin,
                };
                ControllerOutcome::Redraw
            }
            Err(err) => {
                warn!("pan rejected: {}", err);
                ControllerOutcome::Unchanged
            }
        }
    }

    fn release(
        &mut self,
        session: &mut SessionState,
        button: PointerButton,
        position: Point,
    ) -> ControllerOutcome {
        match (self.state, button) {
            (InteractionState::Dragging { .. }, PointerButton::Primary) => {
                self.transition(InteractionState::Idle);
                ControllerOutcome::Unchanged
            }
            (InteractionState::RectSelecting { anchor }, PointerButton::Secondary) => {
                self.transition(InteractionState::Idle);

                let corner = session
                    .viewport
                    .screen_to_complex(position, session.resolution);

                match session.viewport.rectangle_zoom(anchor, corner) {
                    Ok(viewport) => {
                        session.viewport = viewport;
                        ControllerOutcome::Redraw
                    }
                    Err(err) => {
                        warn!("rectangle zoom rejected: {}", err);
                        ControllerOutcome::Unchanged
                    }
                }
            }
            _ => {
                debug!("{:?} release ignored while {}", button, self.state.name());
                ControllerOutcome::Unchanged
            }
        }
    }

    fn command(session: &mut SessionState, command: Command) -> ControllerOutcome {
        match command {
            Command::IncreaseAccuracy | Command::DecreaseAccuracy => {
                let increase = command == Command::IncreaseAccuracy;
                let threshold = session.threshold.adjusted(increase);

                if threshold == session.threshold {
                    info!("threshold stays at {}", threshold);
                    return ControllerOutcome::Unchanged;
                }

                info!("threshold {} -> {}", session.threshold, threshold);
                session.threshold = threshold;
                ControllerOutcome::Redraw
            }
            Command::IncreaseZoomStep | Command::DecreaseZoomStep => {
                let up = command == Command::IncreaseZoomStep;

                match session.zoom_increment.adjusted(up) {
                    Ok(increment) => {
                        info!("zoom step {} -> {}", session.zoom_increment, increment);
                        session.zoom_increment = increment;
                    }
                    Err(err) => warn!("zoom step unchanged: {}", err),
                }
                ControllerOutcome::Unchanged
            }
            Command::QueryPosition => ControllerOutcome::Position(session.cursor_position()),
            Command::ShowInfo => ControllerOutcome::Info(session.info()),
            Command::ShowHelp => ControllerOutcome::Help,
            Command::SaveFrame => ControllerOutcome::SaveRequested,
        }
    }
}
