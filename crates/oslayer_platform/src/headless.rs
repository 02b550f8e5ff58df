//! Headless backend
//!
//! A backend with no native windowing library behind it. Windows are plain
//! records, and notifications come from a [`HeadlessInjector`] that can be
//! cloned and moved to other threads. Injected notifications are buffered
//! behind a mutex and handed to the core on the next pump, so the headless
//! backend also shows how a backend with off-thread delivery plugs in.
//!
//! Used for tests, CI machines without a display, and replaying input.
//!
//! Native codes:
//! - keys are USB HID keyboard usages (see [`crate::keyboard::from_hid_usage`])
//! - mouse buttons are `1` left, `2` middle, `3` right, `4` back, `5` forward
//! - device axes are `i16` samples, buttons are booleans

use crate::backend::{Backend, Notification, TextPayload};
use crate::device::{AxisRange, DeviceKind};
use crate::error::{PlatformError, Result};
use crate::event::{ButtonState, DeviceId, MouseButton, WindowId};
use crate::keyboard::{from_hid_usage, to_hid_usage, KeyCode, Modifiers};
use crate::window::{Cursor, WindowCommand, WindowConfig, WindowInfo};
use indexmap::IndexMap;
use parking_lot::{Mutex, MutexGuard};
use rustc_hash::{FxHashMap, FxHashSet};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, trace};

/// Notification type carried by the headless backend
pub type HeadlessNotification = Notification<u16, u8>;

/// Open device side allocation
///
/// The generation ties the handle to one connection of the device, so a
/// handle opened before a disconnect stays dead after a reconnect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeadlessDevice {
    id: DeviceId,
    generation: u64,
}

#[derive(Debug)]
struct VirtualWindow {
    title: String,
    size: (u32, u32),
    position: Option<(i32, i32)>,
    visible: bool,
    focused: bool,
    maximized: bool,
    scale: f32,
    text_input: bool,
    cursor: Cursor,
    cursor_visible: bool,
}

#[derive(Debug)]
struct VirtualDevice {
    name: String,
    gamepad: bool,
    generation: u64,
    buttons: Vec<bool>,
    axes: Vec<i16>,
}

#[derive(Debug, Default)]
struct HeadlessState {
    pending: Vec<HeadlessNotification>,
    windows: IndexMap<WindowId, VirtualWindow>,
    devices: FxHashMap<DeviceId, VirtualDevice>,
    keys_down: FxHashSet<u16>,
    buttons_down: FxHashSet<u8>,
    next_generation: u64,
}

impl HeadlessState {
    fn push(&mut self, notification: HeadlessNotification) {
        self.pending.push(notification);
    }

    fn live_device(&self, device: &HeadlessDevice) -> Option<&VirtualDevice> {
        self.devices
            .get(&device.id)
            .filter(|d| d.generation == device.generation)
    }
}

type Shared = Arc<Mutex<HeadlessState>>;

/// Backend without a native windowing library
#[derive(Debug)]
pub struct HeadlessBackend {
    shared: Shared,
    next_window: u32,
}

impl Default for HeadlessBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Mutex::new(HeadlessState::default())),
            next_window: 1,
        }
    }

    /// Handle used to feed notifications and device state into this backend
    pub fn injector(&self) -> HeadlessInjector {
        HeadlessInjector {
            shared: Arc::clone(&self.shared),
        }
    }

    /// Cursor icon and visibility last set on a window
    pub fn cursor(&self, window: WindowId) -> Option<(Cursor, bool)> {
        self.state()
            .windows
            .get(&window)
            .map(|w| (w.cursor, w.cursor_visible))
    }

    /// Whether text input is switched on for a window
    pub fn text_input_enabled(&self, window: WindowId) -> bool {
        self.state()
            .windows
            .get(&window)
            .is_some_and(|w| w.text_input)
    }

    fn state(&self) -> MutexGuard<'_, HeadlessState> {
        self.shared.lock()
    }
}

/// Native button code for a neutral mouse button
pub fn native_mouse_button(button: MouseButton) -> Option<u8> {
    match button {
        MouseButton::Left => Some(1),
        MouseButton::Middle => Some(2),
        MouseButton::Right => Some(3),
        MouseButton::Back => Some(4),
        MouseButton::Forward => Some(5),
        MouseButton::Other(n) => u8::try_from(n).ok(),
    }
}

impl Backend for HeadlessBackend {
    type Key = u16;
    type Button = u8;
    type Device = HeadlessDevice;

    fn name(&self) -> &'static str {
        "headless"
    }

    fn pump(&mut self, out: &mut Vec<HeadlessNotification>) {
        let mut state = self.state();
        if !state.pending.is_empty() {
            trace!("Pumping {} headless notifications", state.pending.len());
        }
        out.append(&mut state.pending);
    }

    fn key_code(&self, key: &u16) -> KeyCode {
        from_hid_usage(*key)
    }

    fn mouse_button(&self, button: &u8) -> MouseButton {
        match *button {
            1 => MouseButton::Left,
            2 => MouseButton::Middle,
            3 => MouseButton::Right,
            4 => MouseButton::Back,
            5 => MouseButton::Forward,
            n => MouseButton::Other(n as u16),
        }
    }

    fn is_key_down(&self, code: KeyCode) -> bool {
        to_hid_usage(code).is_some_and(|usage| self.state().keys_down.contains(&usage))
    }

    fn is_mouse_button_down(&self, button: MouseButton) -> bool {
        native_mouse_button(button).is_some_and(|b| self.state().buttons_down.contains(&b))
    }

    fn create_window(&mut self, config: &WindowConfig) -> Result<WindowId> {
        if config.width == 0 || config.height == 0 {
            return Err(PlatformError::WindowCreation(format!(
                "invalid size {}x{}",
                config.width, config.height
            )));
        }
        let id = WindowId(self.next_window);
        self.next_window += 1;

        self.state().windows.insert(
            id,
            VirtualWindow {
                title: config.title.clone(),
                size: (config.width, config.height),
                position: config.position,
                visible: config.visible,
                focused: false,
                maximized: config.maximized,
                scale: 1.0,
                text_input: true,
                cursor: Cursor::default(),
                cursor_visible: true,
            },
        );
        debug!("Created headless {} '{}'", id, config.title);
        Ok(id)
    }

    fn destroy_window(&mut self, window: WindowId) {
        if self.state().windows.shift_remove(&window).is_some() {
            debug!("Destroyed headless {}", window);
        }
    }

    fn command(&mut self, window: WindowId, command: WindowCommand) -> Result<()> {
        let mut state = self.state();
        let mut notifications = Vec::new();
        {
            let Some(w) = state.windows.get_mut(&window) else {
                return Err(PlatformError::UnknownWindow(window));
            };
            match command {
                WindowCommand::SetTitle(title) => w.title = title,
                WindowCommand::SetSize { width, height } => {
                    w.size = (width, height);
                    notifications.push(Notification::Resized {
                        window,
                        width: width as i32,
                        height: height as i32,
                    });
                }
                WindowCommand::SetPosition { x, y } => {
                    w.position = Some((x, y));
                    notifications.push(Notification::Moved { window, x, y });
                }
                WindowCommand::Show => w.visible = true,
                WindowCommand::Hide => w.visible = false,
                WindowCommand::Maximize => {
                    if !w.maximized {
                        w.maximized = true;
                        notifications.push(Notification::Maximized {
                            window,
                            maximized: true,
                        });
                    }
                }
                WindowCommand::Restore => {
                    if w.maximized {
                        w.maximized = false;
                        notifications.push(Notification::Maximized {
                            window,
                            maximized: false,
                        });
                    }
                }
                WindowCommand::Minimize => {}
                WindowCommand::Focus => {
                    if !w.focused {
                        notifications.push(Notification::Focus {
                            window,
                            focused: true,
                        });
                    }
                }
                WindowCommand::RequestClose => {
                    notifications.push(Notification::Close { window });
                }
                WindowCommand::CancelClose => {}
                WindowCommand::SetCursor(cursor) => w.cursor = cursor,
                WindowCommand::ShowCursor(visible) => w.cursor_visible = visible,
            }
        }

        // Focusing one window takes focus from the others
        if notifications
            .iter()
            .any(|n| matches!(n, Notification::Focus { focused: true, .. }))
        {
            let mut lost = Vec::new();
            for (id, w) in state.windows.iter_mut() {
                if *id != window && w.focused {
                    w.focused = false;
                    lost.push(Notification::Focus {
                        window: *id,
                        focused: false,
                    });
                }
            }
            if let Some(w) = state.windows.get_mut(&window) {
                w.focused = true;
            }
            lost.append(&mut notifications);
            notifications = lost;
        }

        for n in notifications {
            state.push(n);
        }
        Ok(())
    }

    fn window_info(&self, window: WindowId) -> Option<WindowInfo> {
        let state = self.state();
        let w = state.windows.get(&window)?;
        Some(WindowInfo {
            id: window,
            title: w.title.clone(),
            size: w.size,
            position: w.position,
            visible: w.visible,
            focused: w.focused,
            maximized: w.maximized,
            scale: w.scale,
        })
    }

    fn set_text_input(&mut self, window: WindowId, enabled: bool) {
        if let Some(w) = self.state().windows.get_mut(&window) {
            w.text_input = enabled;
        }
    }

    fn device_kind(&self, id: DeviceId) -> Option<DeviceKind> {
        self.state().devices.get(&id).map(|d| {
            if d.gamepad {
                DeviceKind::Gamepad
            } else {
                DeviceKind::Joystick
            }
        })
    }

    fn open_device(&mut self, id: DeviceId, kind: DeviceKind) -> Option<HeadlessDevice> {
        let state = self.state();
        let device = state.devices.get(&id)?;
        if kind == DeviceKind::Gamepad && !device.gamepad {
            return None;
        }
        Some(HeadlessDevice {
            id,
            generation: device.generation,
        })
    }

    fn close_device(&mut self, device: HeadlessDevice) {
        trace!("Closed headless {}", device.id);
    }

    fn device_name(&self, device: &HeadlessDevice) -> String {
        self.state()
            .live_device(device)
            .map(|d| d.name.clone())
            .unwrap_or_default()
    }

    fn device_connected(&self, device: &HeadlessDevice) -> bool {
        self.state().live_device(device).is_some()
    }

    fn button_count(&self, device: &HeadlessDevice) -> u32 {
        self.state()
            .live_device(device)
            .map_or(0, |d| d.buttons.len() as u32)
    }

    fn axis_count(&self, device: &HeadlessDevice) -> u32 {
        self.state()
            .live_device(device)
            .map_or(0, |d| d.axes.len() as u32)
    }

    fn button_state(&self, device: &HeadlessDevice, button: u32) -> ButtonState {
        let state = self.state();
        let pressed = state
            .live_device(device)
            .and_then(|d| d.buttons.get(button as usize).copied())
            .unwrap_or(false);
        ButtonState::from_pressed(pressed)
    }

    fn axis_value(&self, device: &HeadlessDevice, axis: u32) -> f32 {
        let state = self.state();
        state
            .live_device(device)
            .and_then(|d| d.axes.get(axis as usize).copied())
            .map_or(0.0, |raw| AxisRange::I16.normalize(raw as f32))
    }
}

/// Thread-safe handle that feeds the headless backend
///
/// Every method queues the notification a native library would have
/// produced. Injected notifications are delivered on the next pump, in
/// injection order, regardless of which thread injected them.
#[derive(Clone, Debug)]
pub struct HeadlessInjector {
    shared: Shared,
}

impl HeadlessInjector {
    fn with<R>(&self, f: impl FnOnce(&mut HeadlessState) -> R) -> R {
        f(&mut self.shared.lock())
    }

    /// Queue an arbitrary notification
    pub fn raw(&self, notification: HeadlessNotification) {
        self.with(|s| s.push(notification));
    }

    /// Number of notifications waiting for the next pump
    pub fn pending(&self) -> usize {
        self.with(|s| s.pending.len())
    }

    /// The user clicked the close button
    pub fn close(&self, window: WindowId) {
        self.raw(Notification::Close { window });
    }

    /// Focus change as reported by the window system
    ///
    /// Gaining focus takes it from every other window. Losing focus releases
    /// held keys and buttons only when `window` actually had focus, so a
    /// late focus-lost for another window leaves input state alone.
    pub fn focus(&self, window: WindowId, focused: bool) {
        self.with(|s| {
            let had_focus = s.windows.get(&window).is_some_and(|w| w.focused);
            for (id, w) in s.windows.iter_mut() {
                if *id == window {
                    w.focused = focused;
                } else if focused {
                    w.focused = false;
                }
            }
            if !focused && had_focus {
                s.keys_down.clear();
                s.buttons_down.clear();
            }
            s.push(Notification::Focus { window, focused });
        });
    }

    pub fn resize(&self, window: WindowId, width: i32, height: i32) {
        self.with(|s| {
            if let Some(w) = s.windows.get_mut(&window) {
                w.size = (width.max(0) as u32, height.max(0) as u32);
            }
            s.push(Notification::Resized {
                window,
                width,
                height,
            });
        });
    }

    pub fn move_to(&self, window: WindowId, x: i32, y: i32) {
        self.with(|s| {
            if let Some(w) = s.windows.get_mut(&window) {
                w.position = Some((x, y));
            }
            s.push(Notification::Moved { window, x, y });
        });
    }

    pub fn maximize(&self, window: WindowId, maximized: bool) {
        self.with(|s| {
            if let Some(w) = s.windows.get_mut(&window) {
                w.maximized = maximized;
            }
            s.push(Notification::Maximized { window, maximized });
        });
    }

    pub fn cursor_enter(&self, window: WindowId, entered: bool) {
        self.raw(Notification::CursorEnter { window, entered });
    }

    pub fn cursor_move(&self, window: WindowId, x: f64, y: f64) {
        self.raw(Notification::CursorMoved { window, x, y });
    }

    /// Mouse button transition; `button` uses the headless native codes
    pub fn mouse_button(&self, window: WindowId, button: u8, pressed: bool, x: f64, y: f64) {
        self.with(|s| {
            if pressed {
                s.buttons_down.insert(button);
            } else {
                s.buttons_down.remove(&button);
            }
            s.push(Notification::MouseButton {
                window,
                button,
                pressed,
                x,
                y,
            });
        });
    }

    pub fn wheel(&self, window: WindowId, dx: f64, dy: f64) {
        self.raw(Notification::Wheel { window, dx, dy });
    }

    /// Key transition by HID usage
    ///
    /// Pressing a key that is already down is reported as an auto-repeat.
    pub fn key(&self, window: WindowId, usage: u16, pressed: bool, modifiers: Modifiers) {
        self.with(|s| {
            let repeat = if pressed {
                !s.keys_down.insert(usage)
            } else {
                s.keys_down.remove(&usage);
                false
            };
            s.push(Notification::Key {
                window,
                key: usage,
                pressed,
                repeat,
                modifiers,
            });
        });
    }

    /// Key transition by neutral key code
    ///
    /// Keys without a HID usage are ignored.
    pub fn key_code(&self, window: WindowId, code: KeyCode, pressed: bool, modifiers: Modifiers) {
        match to_hid_usage(code) {
            Some(usage) => self.key(window, usage, pressed, modifiers),
            None => debug!("{} has no HID usage, not injected", code),
        }
    }

    /// A single code point, as from a per-character callback
    pub fn text(&self, window: WindowId, ch: char) {
        self.raw(Notification::Text {
            window,
            text: TextPayload::CodePoint(ch),
        });
    }

    /// A composed string, as from an IME commit
    pub fn composed_text(&self, window: WindowId, text: impl Into<String>) {
        self.raw(Notification::Text {
            window,
            text: TextPayload::Composed(text.into()),
        });
    }

    pub fn drop_file(&self, window: WindowId, path: impl Into<PathBuf>) {
        self.raw(Notification::FileDropped {
            window,
            path: path.into(),
        });
    }

    pub fn content_scale(&self, window: Option<WindowId>, scale: f32) {
        self.with(|s| {
            if let Some(w) = window.and_then(|id| s.windows.get_mut(&id)) {
                w.scale = scale;
            }
            s.push(Notification::ContentScale { window, scale });
        });
    }

    /// Plug in a device with `buttons` buttons and `axes` axes, all at rest
    pub fn connect_device(
        &self,
        id: DeviceId,
        name: impl Into<String>,
        gamepad: bool,
        buttons: usize,
        axes: usize,
    ) {
        let name = name.into();
        self.with(|s| {
            s.next_generation += 1;
            let generation = s.next_generation;
            debug!("Headless {} '{}' plugged in", id, name);
            s.devices.insert(
                id,
                VirtualDevice {
                    name,
                    gamepad,
                    generation,
                    buttons: vec![false; buttons],
                    axes: vec![0; axes],
                },
            );
            s.push(Notification::DeviceConnected { device: id });
        });
    }

    /// Unplug a device; open handles to it start returning defaults
    pub fn disconnect_device(&self, id: DeviceId) {
        self.with(|s| {
            if s.devices.remove(&id).is_some() {
                debug!("Headless {} unplugged", id);
            }
            s.push(Notification::DeviceDisconnected { device: id });
        });
    }

    pub fn set_device_button(&self, id: DeviceId, button: usize, pressed: bool) {
        self.with(|s| {
            if let Some(slot) = s.devices.get_mut(&id).and_then(|d| d.buttons.get_mut(button)) {
                *slot = pressed;
            }
        });
    }

    /// Set a raw `i16` axis sample
    pub fn set_device_axis(&self, id: DeviceId, axis: usize, raw: i16) {
        self.with(|s| {
            if let Some(slot) = s.devices.get_mut(&id).and_then(|d| d.axes.get_mut(axis)) {
                *slot = raw;
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pump(backend: &mut HeadlessBackend) -> Vec<HeadlessNotification> {
        let mut out = Vec::new();
        backend.pump(&mut out);
        out
    }

    #[test]
    fn test_injected_notifications_arrive_in_order() {
        let mut backend = HeadlessBackend::new();
        let injector = backend.injector();
        injector.cursor_move(WindowId(1), 1.0, 2.0);
        injector.close(WindowId(1));
        assert_eq!(injector.pending(), 2);

        let out = pump(&mut backend);
        assert_eq!(
            out,
            vec![
                Notification::CursorMoved {
                    window: WindowId(1),
                    x: 1.0,
                    y: 2.0
                },
                Notification::Close { window: WindowId(1) },
            ]
        );
        assert!(pump(&mut backend).is_empty());
    }

    #[test]
    fn test_create_window_assigns_unique_ids() {
        let mut backend = HeadlessBackend::new();
        let a = backend.create_window(&WindowConfig::default()).unwrap();
        let b = backend.create_window(&WindowConfig::default()).unwrap();
        assert_ne!(a, b);
        assert!(backend
            .create_window(&WindowConfig::default().size(0, 10))
            .is_err());

        backend.destroy_window(a);
        assert!(backend.window_info(a).is_none());
        assert!(backend.window_info(b).is_some());
    }

    #[test]
    fn test_commands() {
        let mut backend = HeadlessBackend::new();
        let a = backend.create_window(&WindowConfig::new("a")).unwrap();
        let b = backend.create_window(&WindowConfig::new("b")).unwrap();

        backend.command(a, WindowCommand::Focus).unwrap();
        backend
            .command(a, WindowCommand::SetTitle("renamed".into()))
            .unwrap();
        backend.command(b, WindowCommand::Focus).unwrap();
        let out = pump(&mut backend);
        assert_eq!(
            out,
            vec![
                Notification::Focus {
                    window: a,
                    focused: true
                },
                Notification::Focus {
                    window: a,
                    focused: false
                },
                Notification::Focus {
                    window: b,
                    focused: true
                },
            ]
        );
        let info = backend.window_info(a).unwrap();
        assert_eq!(info.title, "renamed");
        assert!(!info.focused);
        assert!(backend.window_info(b).unwrap().focused);

        let err = backend
            .command(WindowId(99), WindowCommand::Show)
            .unwrap_err();
        assert!(matches!(err, PlatformError::UnknownWindow(WindowId(99))));
    }

    #[test]
    fn test_live_input_state() {
        let mut backend = HeadlessBackend::new();
        let injector = backend.injector();
        let id = backend.create_window(&WindowConfig::default()).unwrap();
        injector.focus(id, true);
        injector.key_code(id, KeyCode::Space, true, Modifiers::default());
        injector.mouse_button(id, 1, true, 0.0, 0.0);
        assert!(backend.is_key_down(KeyCode::Space));
        assert!(!backend.is_key_down(KeyCode::A));
        assert!(backend.is_mouse_button_down(MouseButton::Left));

        injector.focus(id, false);
        assert!(!backend.is_key_down(KeyCode::Space));
        assert!(!backend.is_mouse_button_down(MouseButton::Left));
    }

    #[test]
    fn test_injected_focus_is_exclusive() {
        let mut backend = HeadlessBackend::new();
        let injector = backend.injector();
        let a = backend.create_window(&WindowConfig::new("a")).unwrap();
        let b = backend.create_window(&WindowConfig::new("b")).unwrap();

        injector.focus(a, true);
        injector.focus(b, true);
        assert!(!backend.window_info(a).unwrap().focused);
        assert!(backend.window_info(b).unwrap().focused);
    }

    #[test]
    fn test_late_focus_lost_keeps_input_state() {
        let mut backend = HeadlessBackend::new();
        let injector = backend.injector();
        let a = backend.create_window(&WindowConfig::new("a")).unwrap();
        let b = backend.create_window(&WindowConfig::new("b")).unwrap();

        injector.focus(b, true);
        injector.key_code(b, KeyCode::W, true, Modifiers::default());
        injector.focus(a, false);
        assert!(backend.is_key_down(KeyCode::W));
        assert!(backend.window_info(b).unwrap().focused);
    }

    #[test]
    fn test_cursor_and_text_input_state() {
        let mut backend = HeadlessBackend::new();
        let id = backend.create_window(&WindowConfig::default()).unwrap();
        assert_eq!(backend.cursor(id), Some((Cursor::Arrow, true)));
        assert!(backend.text_input_enabled(id));

        backend
            .command(id, WindowCommand::SetCursor(Cursor::Crosshair))
            .unwrap();
        backend.command(id, WindowCommand::ShowCursor(false)).unwrap();
        backend.set_text_input(id, false);
        assert_eq!(backend.cursor(id), Some((Cursor::Crosshair, false)));
        assert!(!backend.text_input_enabled(id));
        assert_eq!(backend.cursor(WindowId(42)), None);
    }

    #[test]
    fn test_held_key_repeats() {
        let mut backend = HeadlessBackend::new();
        let injector = backend.injector();
        injector.key(WindowId(1), 0x04, true, Modifiers::default());
        injector.key(WindowId(1), 0x04, true, Modifiers::default());
        injector.key(WindowId(1), 0x04, false, Modifiers::default());
        let repeats: Vec<bool> = pump(&mut backend)
            .into_iter()
            .filter_map(|n| match n {
                Notification::Key { repeat, .. } => Some(repeat),
                _ => None,
            })
            .collect();
        assert_eq!(repeats, vec![false, true, false]);
    }

    #[test]
    fn test_device_queries() {
        let mut backend = HeadlessBackend::new();
        let injector = backend.injector();
        injector.connect_device(DeviceId(1), "Stick", false, 4, 2);
        injector.set_device_axis(DeviceId(1), 0, i16::MIN);
        injector.set_device_axis(DeviceId(1), 1, i16::MAX);
        injector.set_device_button(DeviceId(1), 2, true);

        assert_eq!(backend.device_kind(DeviceId(1)), Some(DeviceKind::Joystick));
        assert!(backend.open_device(DeviceId(1), DeviceKind::Gamepad).is_none());
        let device = backend
            .open_device(DeviceId(1), DeviceKind::Joystick)
            .unwrap();

        assert_eq!(backend.device_name(&device), "Stick");
        assert_eq!(backend.button_count(&device), 4);
        assert_eq!(backend.axis_count(&device), 2);
        assert_eq!(backend.axis_value(&device, 0), -1.0);
        assert_eq!(backend.axis_value(&device, 1), 1.0);
        assert_eq!(backend.axis_value(&device, 9), 0.0);
        assert_eq!(backend.button_state(&device, 2), ButtonState::Pressed);
        assert_eq!(backend.button_state(&device, 40), ButtonState::Released);

        // Reconnecting does not revive the old handle
        injector.disconnect_device(DeviceId(1));
        injector.connect_device(DeviceId(1), "Stick", false, 4, 2);
        assert!(!backend.device_connected(&device));
        assert_eq!(backend.device_name(&device), "");
        assert_eq!(backend.button_count(&device), 0);
        backend.close_device(device);
    }

    #[test]
    fn test_injector_is_send() {
        fn assert_send<T: Send + Sync>() {}
        assert_send::<HeadlessInjector>();
    }
}
