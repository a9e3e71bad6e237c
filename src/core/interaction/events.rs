use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PointerButton {
    /// Drag to pan.
    Primary,
    /// Drag to select a rectangle to zoom into.
    Secondary,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    IncreaseAccuracy,
    DecreaseAccuracy,
    IncreaseZoomStep,
    DecreaseZoomStep,
    QueryPosition,
    ShowInfo,
    ShowHelp,
    SaveFrame,
}

impl Command {
    pub const ALL: &'static [Self] = &[
        Self::IncreaseAccuracy,
        Self::DecreaseAccuracy,
        Self::IncreaseZoomStep,
        Self::DecreaseZoomStep,
        Self::QueryPosition,
        Self::ShowInfo,
        Self::ShowHelp,
        Self::SaveFrame,
    ];

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::IncreaseAccuracy => "double the iteration threshold",
            Self::DecreaseAccuracy => "halve the iteration threshold (minimum 20)",
            Self::IncreaseZoomStep => "increase the scroll zoom step by 20%",
            Self::DecreaseZoomStep => "decrease the scroll zoom step by 20%",
            Self::QueryPosition => "print the complex coordinate under the cursor",
            Self::ShowInfo => "print threshold, resolution, cursor position and zoom",
            Self::ShowHelp => "print this help",
            Self::SaveFrame => "save the current frame as an image",
        }
    }
}

/// Platform-neutral input, produced by the windowing layer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    Scroll {
        direction: ScrollDirection,
        position: Point,
    },
    ButtonPressed {
        button: PointerButton,
        position: Point,
    },
    ButtonReleased {
        button: PointerButton,
        position: Point,
    },
    PointerMoved {
        position: Point,
    },
    Command(Command),
}

impl InputEvent {
    #[must_use]
    pub fn position(&self) -> Option<Point> {
        match *self {
            Self::Scroll { position, .. }
            | Self::ButtonPressed { position, .. }
            | Self::ButtonReleased { position, .. }
            | Self::PointerMoved { position } => Some(position),
            Self::Command(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_have_distinct_descriptions() {
        for (i, a) in Command::ALL.iter().enumerate() {
            for b in &Command::ALL[i + 1..] {
                assert_ne!(a.description(), b.description());
            }
        }
    }

    #[test]
    fn test_position_is_reported_for_pointer_events_only() {
        let position = Point { x: 3.0, y: 4.0 };

        assert_eq!(InputEvent::PointerMoved { position }.position(), Some(position));
        assert_eq!(InputEvent::Command(Command::ShowInfo).position(), None);
    }
}
