//! oslayer winit Backend
//!
//! Windowing and input for macOS, Windows, and Linux (X11 and Wayland)
//! using winit.
//!
//! This crate implements the `oslayer_platform` [`Backend`] trait over a
//! winit event loop. The loop is pumped with a zero timeout from
//! [`Platform::pump`](oslayer_platform::Platform::pump), so the application
//! keeps control of its own main loop.
//!
//! winit has no joystick or gamepad support; device queries on this backend
//! always return invalid handles.
//!
//! # Example
//!
//! ```ignore
//! use oslayer_platform::prelude::*;
//! use oslayer_backend_winit::WinitBackend;
//!
//! fn main() -> Result<()> {
//!     let mut platform = Platform::new(WinitBackend::new()?, PlatformConfig::default());
//!     platform.create_default_window()?;
//!
//!     loop {
//!         platform.pump();
//!         for event in platform.drain_events() {
//!             if event == Event::Quit {
//!                 return Ok(());
//!             }
//!         }
//!     }
//! }
//! ```
//!
//! [`Backend`]: oslayer_platform::Backend

pub mod backend;
pub mod input;
mod window;

pub use backend::{WinitBackend, WinitNotification};
pub use window::window_attributes;
