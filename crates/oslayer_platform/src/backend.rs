//! Backend abstraction
//!
//! A backend wraps one native windowing/input library. Exactly one backend
//! is linked into an application; it is injected into a
//! [`Platform`](crate::Platform) at startup and never mixed with another.
//!
//! Backends hand native notifications to the core as [`Notification`]
//! values, still carrying native key and mouse-button codes. The core
//! translator turns them into [`Event`](crate::Event)s using the backend's
//! code tables. Push-style libraries must run their callbacks synchronously
//! inside [`Backend::pump`]; a library that delivers from another thread must
//! buffer behind a thread-safe handoff and drain it during `pump`.

use crate::device::DeviceKind;
use crate::error::Result;
use crate::event::{ButtonState, DeviceId, MouseButton, WindowId};
use crate::keyboard::{KeyCode, Modifiers};
use crate::window::{WindowCommand, WindowConfig, WindowInfo};
use std::path::PathBuf;

/// Text as delivered by the native library
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextPayload {
    /// A single code point (per-character callbacks)
    CodePoint(char),
    /// An already composed string (IME commit, key-event text)
    Composed(String),
}

impl TextPayload {
    /// Decoded text
    pub fn into_string(self) -> String {
        match self {
            TextPayload::CodePoint(c) => c.to_string(),
            TextPayload::Composed(s) => s,
        }
    }
}

/// One native notification in a backend-neutral envelope
///
/// `K` and `B` are the backend's native key and mouse-button codes.
#[derive(Clone, Debug, PartialEq)]
pub enum Notification<K, B> {
    /// The user (or the application) asked the window to close
    Close { window: WindowId },
    /// Focus gained (`true`) or lost (`false`)
    Focus { window: WindowId, focused: bool },
    Resized {
        window: WindowId,
        width: i32,
        height: i32,
    },
    Moved { window: WindowId, x: i32, y: i32 },
    /// Maximized (`true`) or restored (`false`)
    Maximized { window: WindowId, maximized: bool },
    /// Pointer entered (`true`) or left (`false`)
    CursorEnter { window: WindowId, entered: bool },
    /// Pointer position in window coordinates
    CursorMoved { window: WindowId, x: f64, y: f64 },
    MouseButton {
        window: WindowId,
        button: B,
        pressed: bool,
        x: f64,
        y: f64,
    },
    Wheel { window: WindowId, dx: f64, dy: f64 },
    Key {
        window: WindowId,
        key: K,
        pressed: bool,
        repeat: bool,
        modifiers: Modifiers,
    },
    Text { window: WindowId, text: TextPayload },
    FileDropped { window: WindowId, path: PathBuf },
    DeviceConnected { device: DeviceId },
    DeviceDisconnected { device: DeviceId },
    ContentScale {
        window: Option<WindowId>,
        scale: f32,
    },
}

impl<K, B> Notification<K, B> {
    /// The window named by this notification, if any
    pub fn window(&self) -> Option<WindowId> {
        match self {
            Notification::Close { window }
            | Notification::Focus { window, .. }
            | Notification::Resized { window, .. }
            | Notification::Moved { window, .. }
            | Notification::Maximized { window, .. }
            | Notification::CursorEnter { window, .. }
            | Notification::CursorMoved { window, .. }
            | Notification::MouseButton { window, .. }
            | Notification::Wheel { window, .. }
            | Notification::Key { window, .. }
            | Notification::Text { window, .. }
            | Notification::FileDropped { window, .. } => Some(*window),
            Notification::ContentScale { window, .. } => *window,
            Notification::DeviceConnected { .. } | Notification::DeviceDisconnected { .. } => None,
        }
    }
}

/// Notification type produced by backend `B`
pub type NotificationOf<B> = Notification<<B as Backend>::Key, <B as Backend>::Button>;

/// Native windowing/input library adapter
pub trait Backend {
    /// Native key code
    type Key;
    /// Native mouse-button code
    type Button;
    /// Per-device side allocation kept in a [`DeviceHandle`](crate::DeviceHandle)
    type Device;

    /// Backend name, e.g. `"winit"`
    fn name(&self) -> &'static str;

    /// Deliver every pending native notification, in production order
    ///
    /// Must not block waiting for new notifications.
    fn pump(&mut self, out: &mut Vec<NotificationOf<Self>>);

    // ------------------------------------------------------------------
    // Code tables
    // ------------------------------------------------------------------

    /// Translate a native key into the neutral key-code space
    fn key_code(&self, key: &Self::Key) -> KeyCode;

    /// Translate a native mouse button
    fn mouse_button(&self, button: &Self::Button) -> MouseButton;

    // ------------------------------------------------------------------
    // Live input state
    // ------------------------------------------------------------------

    /// Whether the key is currently held
    fn is_key_down(&self, code: KeyCode) -> bool;

    /// Whether the mouse button is currently held
    fn is_mouse_button_down(&self, button: MouseButton) -> bool;

    // ------------------------------------------------------------------
    // Windows
    // ------------------------------------------------------------------

    /// Create a native window and return its process-unique id
    fn create_window(&mut self, config: &WindowConfig) -> Result<WindowId>;

    /// Destroy a native window; unknown ids are ignored
    fn destroy_window(&mut self, window: WindowId);

    /// Apply a command to a window
    fn command(&mut self, window: WindowId, command: WindowCommand) -> Result<()>;

    /// Query a window's state
    fn window_info(&self, window: WindowId) -> Option<WindowInfo>;

    /// Enable or disable text input (IME) for a window
    fn set_text_input(&mut self, window: WindowId, enabled: bool);

    // ------------------------------------------------------------------
    // Devices
    // ------------------------------------------------------------------

    /// Classify a connected device; `None` when nothing is connected at `id`
    fn device_kind(&self, id: DeviceId) -> Option<DeviceKind>;

    /// Open a device of the given kind; `None` unless `id` currently names a
    /// connected device of that kind
    fn open_device(&mut self, id: DeviceId, kind: DeviceKind) -> Option<Self::Device>;

    /// Release a side allocation returned by `open_device`
    fn close_device(&mut self, device: Self::Device);

    /// Device name; empty when disconnected
    fn device_name(&self, device: &Self::Device) -> String;

    /// Whether the device is still physically connected
    fn device_connected(&self, device: &Self::Device) -> bool;

    fn button_count(&self, device: &Self::Device) -> u32;

    fn axis_count(&self, device: &Self::Device) -> u32;

    /// Button state; `Released` for disconnected devices or bad indices
    fn button_state(&self, device: &Self::Device, button: u32) -> ButtonState;

    /// Axis value in `[-1.0, 1.0]`; `0.0` for disconnected devices or bad indices
    fn axis_value(&self, device: &Self::Device, axis: u32) -> f32;
}
