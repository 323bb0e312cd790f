//! # chip8-display
//! The presentation side of the machine: an SDL2 window that renders the
//! core's framebuffer, and the event pump that mirrors host keyboard
//! events into the core's key state.

pub use events::EventSource;
pub use window::Window;

mod events;
mod keymap;
mod window;
