//! Input adapters for the viewer.
//!
//! Adapters receive raw input from a windowing system and translate it into
//! [`InputEvent`](crate::core::interaction::events::InputEvent)s.

pub mod gui;
