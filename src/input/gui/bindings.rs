//! Translation of winit input into viewer events.

use winit::event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::core::data::point::Point;
use crate::core::interaction::events::{Command, InputEvent, PointerButton, ScrollDirection};

/// What the window should do in response to one winit event.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GuiAction {
    Input(InputEvent),
    Quit,
}

pub const QUIT_KEY_LABEL: &str = "escape";

const KEY_BINDINGS: &[(KeyCode, &str, Command)] = &[
    (KeyCode::ArrowUp, "up", Command::IncreaseAccuracy),
    (KeyCode::ArrowDown, "down", Command::DecreaseAccuracy),
    (KeyCode::KeyQ, "q", Command::IncreaseZoomStep),
    (KeyCode::KeyW, "w", Command::DecreaseZoomStep),
    (KeyCode::KeyP, "p", Command::QueryPosition),
    (KeyCode::KeyI, "i", Command::ShowInfo),
    (KeyCode::KeyC, "c", Command::ShowHelp),
    (KeyCode::KeyS, "s", Command::SaveFrame),
];

#[must_use]
pub fn key_action(code: KeyCode) -> Option<GuiAction> {
    if code == KeyCode::Escape {
        return Some(GuiAction::Quit);
    }

    KEY_BINDINGS
        .iter()
        .find(|(bound, _, _)| *bound == code)
        .map(|&(_, _, command)| GuiAction::Input(InputEvent::Command(command)))
}

/// Key name shown in the help text.
#[must_use]
pub fn key_label(command: Command) -> &'static str {
    KEY_BINDINGS
        .iter()
        .find(|(_, _, bound)| *bound == command)
        .map_or("unbound", |&(_, label, _)| label)
}

#[must_use]
pub fn pointer_button(button: MouseButton) -> Option<PointerButton> {
    match button {
        MouseButton::Left => Some(PointerButton::Primary),
        MouseButton::Right => Some(PointerButton::Secondary),
        _ => None,
    }
}

/// Direction of a wheel or touchpad scroll; sideways-only scrolls are ignored.
#[must_use]
pub fn scroll_direction(delta: MouseScrollDelta) -> Option<ScrollDirection> {
    let vertical = match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
        MouseScrollDelta::PixelDelta(position) => position.y,
    };

    if vertical > 0.0 {
        Some(ScrollDirection::Up)
    } else if vertical < 0.0 {
        Some(ScrollDirection::Down)
    } else {
        None
    }
}

/// Translates a window event given the cursor's current framebuffer
/// position. Cursor moves must already be reflected in `cursor`.
#[must_use]
pub fn translate(event: &WindowEvent, cursor: Point) -> Option<GuiAction> {
    let input = match event {
        WindowEvent::CursorMoved { .. } => InputEvent::PointerMoved { position: cursor },
        WindowEvent::MouseWheel { delta, .. } => InputEvent::Scroll {
            direction: scroll_direction(*delta)?,
            position: cursor,
        },
        WindowEvent::MouseInput { state, button, .. } => {
            let button = pointer_button(*button)?;
            match state {
                ElementState::Pressed => InputEvent::ButtonPressed {
                    button,
                    position: cursor,
                },
                ElementState::Released => InputEvent::ButtonReleased {
                    button,
                    position: cursor,
                },
            }
        }
        WindowEvent::KeyboardInput {
            event:
                KeyEvent {
                    physical_key: PhysicalKey::Code(code),
                    state: ElementState::Pressed,
                    repeat: false,
                    ..
                },
            ..
        } => return key_action(*code),
        _ => return None,
    };

    Some(GuiAction::Input(input))
}
