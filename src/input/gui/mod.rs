//! Window adapter for interactive exploration.
//!
//! Uses winit for window management, pixels for the framebuffer and egui for
//! the status overlay.

pub mod app;
pub mod bindings;
pub mod commands;
