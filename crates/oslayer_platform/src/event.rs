//! Normalized event model
//!
//! Every backend notification that survives translation becomes one [`Event`].
//! Events are plain values: they carry only the fields relevant to their kind
//! and have no identity beyond their position in the [`EventQueue`].
//!
//! [`EventQueue`]: crate::queue::EventQueue

use crate::keyboard::KeyCode;
use std::fmt;
use std::path::PathBuf;

/// Identifier of a live window, assigned by the backend
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(pub u32);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window#{}", self.0)
    }
}

/// Identifier of a gamepad/joystick slot, as numbered by the backend
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeviceId(pub u32);

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "device#{}", self.0)
    }
}

/// Platform events
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Window lifecycle, focus, geometry or pointer-crossing change
    Window(WindowEvent),
    /// Pointer moved inside a window
    MouseMotion(MouseMotionEvent),
    /// Mouse button pressed or released
    MouseButton(MouseButtonEvent),
    /// Wheel or trackpad scroll
    MouseWheel(MouseWheelEvent),
    /// Key pressed (or auto-repeated)
    KeyDown(KeyEvent),
    /// Key released
    KeyUp(KeyEvent),
    /// Decoded text, one code point or a composed string
    TextInput(TextInputEvent),
    /// A file was dropped on a window
    DropFile(DropFileEvent),
    /// A device with a gamepad mapping was connected
    GamepadAdded(DeviceId),
    /// A device with a gamepad mapping was disconnected
    GamepadRemoved(DeviceId),
    /// A plain joystick was connected
    JoystickAdded(DeviceId),
    /// A plain joystick was disconnected
    JoystickRemoved(DeviceId),
    /// Display content scale changed
    DisplayContentScaleChanged(ContentScaleEvent),
    /// Every open window asked to close; emitted once per platform lifetime
    Quit,
}

/// Field-less discriminant of [`Event`], handy for filtering
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Window,
    MouseMotion,
    MouseButton,
    MouseWheel,
    KeyDown,
    KeyUp,
    TextInput,
    DropFile,
    GamepadAdded,
    GamepadRemoved,
    JoystickAdded,
    JoystickRemoved,
    DisplayContentScaleChanged,
    Quit,
}

impl Event {
    /// The kind of this event
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Window(_) => EventKind::Window,
            Event::MouseMotion(_) => EventKind::MouseMotion,
            Event::MouseButton(_) => EventKind::MouseButton,
            Event::MouseWheel(_) => EventKind::MouseWheel,
            Event::KeyDown(_) => EventKind::KeyDown,
            Event::KeyUp(_) => EventKind::KeyUp,
            Event::TextInput(_) => EventKind::TextInput,
            Event::DropFile(_) => EventKind::DropFile,
            Event::GamepadAdded(_) => EventKind::GamepadAdded,
            Event::GamepadRemoved(_) => EventKind::GamepadRemoved,
            Event::JoystickAdded(_) => EventKind::JoystickAdded,
            Event::JoystickRemoved(_) => EventKind::JoystickRemoved,
            Event::DisplayContentScaleChanged(_) => EventKind::DisplayContentScaleChanged,
            Event::Quit => EventKind::Quit,
        }
    }

    /// The window this event targets, if any
    pub fn window(&self) -> Option<WindowId> {
        match self {
            Event::Window(e) => Some(e.window),
            Event::MouseMotion(e) => Some(e.window),
            Event::MouseButton(e) => Some(e.window),
            Event::MouseWheel(e) => Some(e.window),
            Event::KeyDown(e) | Event::KeyUp(e) => Some(e.window),
            Event::TextInput(e) => Some(e.window),
            Event::DropFile(e) => Some(e.window),
            Event::DisplayContentScaleChanged(e) => e.window,
            Event::GamepadAdded(_)
            | Event::GamepadRemoved(_)
            | Event::JoystickAdded(_)
            | Event::JoystickRemoved(_)
            | Event::Quit => None,
        }
    }

    /// The device this event refers to, for hotplug events
    pub fn device(&self) -> Option<DeviceId> {
        match self {
            Event::GamepadAdded(id)
            | Event::GamepadRemoved(id)
            | Event::JoystickAdded(id)
            | Event::JoystickRemoved(id) => Some(*id),
            _ => None,
        }
    }
}

// ============================================================================
// Window Events
// ============================================================================

/// Window event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowEvent {
    /// Originating window
    pub window: WindowId,
    /// What happened
    pub kind: WindowEventKind,
}

/// Window event sub-types
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WindowEventKind {
    /// Close was requested (close button, Alt+F4, programmatic request)
    Close,
    /// Window gained input focus
    FocusGained,
    /// Window lost input focus
    FocusLost,
    /// Window was resized
    Resized {
        /// New width in pixels
        width: i32,
        /// New height in pixels
        height: i32,
    },
    /// Window was moved
    Moved {
        /// New X position
        x: i32,
        /// New Y position
        y: i32,
    },
    /// Window was maximized
    Maximized,
    /// Window was restored from the maximized state
    Restored,
    /// Pointer entered the window
    Enter,
    /// Pointer left the window
    Leave,
}

impl WindowEventKind {
    /// The two integer payload fields: size for `Resized`, position for
    /// `Moved`, zero otherwise
    pub fn data(&self) -> (i32, i32) {
        match *self {
            WindowEventKind::Resized { width, height } => (width, height),
            WindowEventKind::Moved { x, y } => (x, y),
            _ => (0, 0),
        }
    }
}

// ============================================================================
// Mouse Events
// ============================================================================

/// Pointer motion in window coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MouseMotionEvent {
    pub window: WindowId,
    /// X position in pixels
    pub x: i32,
    /// Y position in pixels
    pub y: i32,
}

/// Mouse button transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MouseButtonEvent {
    pub window: WindowId,
    pub button: MouseButton,
    pub state: ButtonState,
    /// Pointer X position at the time of the transition
    pub x: i32,
    /// Pointer Y position at the time of the transition
    pub y: i32,
}

/// Scroll offsets, passed through from the backend
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MouseWheelEvent {
    pub window: WindowId,
    /// Horizontal offset
    pub x: f32,
    /// Vertical offset
    pub y: f32,
}

/// Mouse buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (scroll wheel click)
    Middle,
    /// Back button (side button)
    Back,
    /// Forward button (side button)
    Forward,
    /// Other button with index
    Other(u16),
}

/// Pressed/released state, shared by mouse and device buttons
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ButtonState {
    /// Button is down
    Pressed,
    /// Button is up
    #[default]
    Released,
}

impl ButtonState {
    /// `Pressed` when `down` is true
    pub fn from_pressed(down: bool) -> Self {
        if down {
            ButtonState::Pressed
        } else {
            ButtonState::Released
        }
    }

    /// Whether the button is down
    pub fn is_pressed(self) -> bool {
        self == ButtonState::Pressed
    }
}

// ============================================================================
// Keyboard and Text Events
// ============================================================================

/// Key transition with modifier state
///
/// Modifiers are independent booleans so every backend produces the same shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub window: WindowId,
    /// Layout-independent key code
    pub code: KeyCode,
    pub alt: bool,
    pub ctrl: bool,
    pub shift: bool,
    /// Super/Command/Windows key
    pub system: bool,
    /// Auto-repeat of a held key (always false for key-up)
    pub repeat: bool,
}

/// Decoded text input
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextInputEvent {
    pub window: WindowId,
    pub text: String,
}

/// File dropped on a window
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropFileEvent {
    pub window: WindowId,
    pub path: PathBuf,
}

/// Display content scale change
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentScaleEvent {
    /// Window whose display scale changed, when the backend reports one
    pub window: Option<WindowId>,
    /// New scale factor
    pub scale: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_event_data() {
        let resized = WindowEventKind::Resized {
            width: 640,
            height: 480,
        };
        assert_eq!(resized.data(), (640, 480));
        assert_eq!(WindowEventKind::Moved { x: -10, y: 20 }.data(), (-10, 20));
        assert_eq!(WindowEventKind::FocusGained.data(), (0, 0));
    }

    #[test]
    fn test_event_accessors() {
        let ev = Event::Window(WindowEvent {
            window: WindowId(3),
            kind: WindowEventKind::Close,
        });
        assert_eq!(ev.kind(), EventKind::Window);
        assert_eq!(ev.window(), Some(WindowId(3)));
        assert_eq!(ev.device(), None);

        let added = Event::GamepadAdded(DeviceId(1));
        assert_eq!(added.window(), None);
        assert_eq!(added.device(), Some(DeviceId(1)));
        assert_eq!(Event::Quit.kind(), EventKind::Quit);
    }

    #[test]
    fn test_button_state() {
        assert_eq!(ButtonState::default(), ButtonState::Released);
        assert!(ButtonState::from_pressed(true).is_pressed());
        assert!(!ButtonState::from_pressed(false).is_pressed());
    }
}
