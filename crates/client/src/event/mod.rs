//! Event handling for the terminal client.
//!
//! The event loop coordinates runtime events, keyboard input, and rendering.
mod r#loop;

pub use r#loop::EventLoop;
