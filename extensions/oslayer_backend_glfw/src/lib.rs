//! oslayer GLFW Backend
//!
//! Windowing, input, and gamepad support for desktop platforms using GLFW.
//!
//! This crate implements the `oslayer_platform` `Backend` trait over GLFW.
//! Unlike the winit backend it reports joysticks: the 16 GLFW joystick slots
//! map to device ids `0..16`, and slots with an SDL-style gamepad mapping
//! are announced as gamepads.
//!
//! # Example
//!
//! ```ignore
//! use oslayer_platform::prelude::*;
//! use oslayer_backend_glfw::GlfwBackend;
//!
//! fn main() -> Result<()> {
//!     let mut platform = Platform::new(GlfwBackend::new()?, PlatformConfig::default());
//!     platform.create_default_window()?;
//!
//!     loop {
//!         platform.pump();
//!         while let Some(event) = platform.poll_event() {
//!             match event {
//!                 Event::GamepadAdded(id) => {
//!                     let pad = platform.open_gamepad(id);
//!                     println!("{} connected", platform.device_name(&pad));
//!                 }
//!                 Event::Quit => return Ok(()),
//!                 _ => {}
//!             }
//!         }
//!     }
//! }
//! ```

pub mod backend;
pub mod input;

pub use backend::{GlfwBackend, GlfwDevice, GlfwNotification};
