//! oslayer Platform Core
//!
//! This crate turns the notifications of one native windowing/input library
//! into a single ordered stream of typed events, and keeps the small amount
//! of state that translation depends on.
//!
//! # Architecture
//!
//! - [`Backend`] - Adapter over a native library (winit, GLFW, headless)
//! - [`Platform`] - Owns a backend and normalizes its notifications
//! - [`WindowRegistry`] - Live window ids and the focused-window slot
//! - [`EventQueue`] - FIFO of pending [`Event`]s
//! - [`DeviceHandle`] - Gamepad and joystick access with safe defaults
//!
//! # Backend Implementations
//!
//! - `oslayer_backend_winit` - Desktop platforms using winit
//! - `oslayer_backend_glfw` - Desktop platforms using GLFW, with gamepads
//! - [`headless`] - No native library; notifications are injected
//!
//! # Example
//!
//! ```
//! use oslayer_platform::prelude::*;
//! use oslayer_platform::headless::HeadlessBackend;
//!
//! let backend = HeadlessBackend::new();
//! let input = backend.injector();
//! let mut platform = Platform::new(backend, PlatformConfig::default());
//!
//! let window = platform.create_default_window()?;
//! input.close(window);
//! platform.pump();
//!
//! let events: Vec<Event> = platform.drain_events().collect();
//! assert_eq!(events.last(), Some(&Event::Quit));
//! # Ok::<(), PlatformError>(())
//! ```

mod backend;
mod config;
mod device;
mod error;
mod event;
pub mod headless;
pub mod keyboard;
mod platform;
mod queue;
mod registry;
mod translate;
mod window;

// Re-export all public types
pub use backend::{Backend, Notification, NotificationOf, TextPayload};
pub use config::{PlatformConfig, DEFAULT_LOG_FILTER};
pub use device::{normalize_f32, AxisRange, DeviceHandle, DeviceKind};
pub use error::{PlatformError, Result};
pub use event::{
    ButtonState, ContentScaleEvent, DeviceId, DropFileEvent, Event, EventKind, KeyEvent,
    MouseButton, MouseButtonEvent, MouseMotionEvent, MouseWheelEvent, TextInputEvent, WindowEvent,
    WindowEventKind, WindowId,
};
pub use keyboard::{KeyCode, Modifiers, UnknownKeyName};
pub use platform::Platform;
pub use queue::EventQueue;
pub use registry::{WindowRecord, WindowRegistry};
pub use translate::{to_pixel, Translator};
pub use window::{Cursor, WindowCommand, WindowConfig, WindowInfo};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::backend::Backend;
    pub use crate::config::PlatformConfig;
    pub use crate::device::{DeviceHandle, DeviceKind};
    pub use crate::error::{PlatformError, Result};
    pub use crate::event::{
        ButtonState, DeviceId, Event, EventKind, KeyEvent, MouseButton, WindowEvent,
        WindowEventKind, WindowId,
    };
    pub use crate::keyboard::{KeyCode, Modifiers};
    pub use crate::platform::Platform;
    pub use crate::window::{Cursor, WindowCommand, WindowConfig};
}
