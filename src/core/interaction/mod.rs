pub mod controller;
pub mod events;
pub mod help;
pub mod session;
pub mod state;
