//! GLFW backend
//!
//! GLFW is pull-style here: every window gets all event polling enabled and
//! its events land in a per-window receiver. [`Backend::pump`] polls GLFW,
//! flushes every receiver, merges the per-window streams back into one by
//! timestamp, then appends the joystick hotplug changes GLFW reported
//! through its joystick callback during the poll.

use crate::input::{self, GAMEPAD_AXES, GAMEPAD_BUTTONS, JOYSTICKS};
use glfw::{
    Action, ClientApiHint, CursorMode, GlfwReceiver, JoystickEvent, JoystickId, Key, PWindow,
    WindowEvent, WindowHint, WindowMode,
};
use indexmap::IndexMap;
use std::cell::RefCell;
use std::rc::Rc;
use oslayer_platform::{
    normalize_f32, Backend, ButtonState, DeviceId, DeviceKind, KeyCode, MouseButton,
    Notification, PlatformError, Result, TextPayload, WindowCommand, WindowConfig, WindowId,
    WindowInfo,
};
use tracing::{debug, error, info, trace};

/// Notification type produced by the GLFW backend
pub type GlfwNotification = Notification<Key, glfw::MouseButton>;

/// Open joystick side allocation
///
/// The generation ties the handle to one connection of the slot, so a
/// device plugged into the same slot later does not revive it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlfwDevice {
    pub joystick: JoystickId,
    /// Opened through the gamepad mapping rather than raw joystick state
    pub gamepad: bool,
    generation: u64,
}

/// Connection bookkeeping for the 16 joystick slots
#[derive(Debug, Default)]
struct JoystickSlots {
    /// Generation of the current connection, `None` while the slot is empty
    live: [Option<u64>; 16],
    next_generation: u64,
}

impl JoystickSlots {
    fn slot(joystick: JoystickId) -> Option<usize> {
        JOYSTICKS.iter().position(|j| *j == joystick)
    }

    /// Apply a hotplug change and return the notification it produces
    ///
    /// Connecting an occupied slot or disconnecting an empty one produces
    /// nothing.
    fn apply(&mut self, joystick: JoystickId, event: JoystickEvent) -> Option<GlfwNotification> {
        let slot = Self::slot(joystick)?;
        let device = DeviceId(slot as u32);
        match event {
            JoystickEvent::Connected => {
                if self.live[slot].is_some() {
                    return None;
                }
                self.next_generation += 1;
                self.live[slot] = Some(self.next_generation);
                Some(Notification::DeviceConnected { device })
            }
            JoystickEvent::Disconnected => {
                self.live[slot].take()?;
                Some(Notification::DeviceDisconnected { device })
            }
        }
    }

    fn generation(&self, joystick: JoystickId) -> Option<u64> {
        Self::slot(joystick).and_then(|slot| self.live[slot])
    }

    fn is_live(&self, device: &GlfwDevice) -> bool {
        self.generation(device.joystick) == Some(device.generation)
    }
}

type HotplugQueue = Rc<RefCell<Vec<(JoystickId, JoystickEvent)>>>;

struct GlfwWindow {
    window: PWindow,
    events: GlfwReceiver<(f64, WindowEvent)>,
    title: String,
    /// Last cursor position seen, attached to button notifications
    cursor: (f64, f64),
}

fn log_glfw_error(error: glfw::Error, description: String) {
    error!("GLFW error {:?}: {}", error, description);
}

/// Backend over GLFW
///
/// GLFW must be driven from the main thread.
pub struct GlfwBackend {
    glfw: glfw::Glfw,
    windows: IndexMap<WindowId, GlfwWindow>,
    next_id: u32,
    focused: Option<WindowId>,
    joysticks: JoystickSlots,
    /// Filled by the joystick callback while GLFW polls
    hotplug: HotplugQueue,
    /// Synthetic notifications waiting for the next pump
    pending: Vec<GlfwNotification>,
}

impl GlfwBackend {
    /// Initialize GLFW
    pub fn new() -> Result<Self> {
        let mut glfw = glfw::init(log_glfw_error)
            .map_err(|e| PlatformError::InitFailed(format!("{:?}", e)))?;
        info!("GLFW {} initialized", glfw::get_version_string());

        let hotplug = HotplugQueue::default();
        let queue = Rc::clone(&hotplug);
        glfw.set_joystick_callback(move |joystick, event| {
            queue.borrow_mut().push((joystick, event));
        });

        let mut backend = Self {
            glfw,
            windows: IndexMap::new(),
            next_id: 0,
            focused: None,
            joysticks: JoystickSlots::default(),
            hotplug,
            pending: Vec::new(),
        };

        // GLFW only calls back for changes, so announce what is already plugged in
        for id in JOYSTICKS {
            if backend.joystick(id).is_present() {
                if let Some(n) = backend.joysticks.apply(id, JoystickEvent::Connected) {
                    backend.pending.push(n);
                }
            }
        }
        Ok(backend)
    }

    /// The GLFW window behind an id
    pub fn glfw_window(&self, id: WindowId) -> Option<&PWindow> {
        self.windows.get(&id).map(|w| &w.window)
    }

    fn joystick(&self, id: JoystickId) -> glfw::Joystick {
        self.glfw.get_joystick(id)
    }

    /// Windows whose live input state answers key/button queries
    fn input_windows(&self) -> impl Iterator<Item = &GlfwWindow> {
        let focused = self.focused.and_then(|id| self.windows.get(&id));
        let all = if focused.is_some() {
            None
        } else {
            Some(self.windows.values())
        };
        focused.into_iter().chain(all.into_iter().flatten())
    }

    fn flush_window(id: WindowId, w: &mut GlfwWindow, out: &mut Vec<(f64, GlfwNotification)>) {
        for (time, event) in glfw::flush_messages(&w.events) {
            let window = id;
            let notification = match event {
                WindowEvent::Close => Notification::Close { window },
                WindowEvent::Focus(focused) => Notification::Focus { window, focused },
                WindowEvent::Size(width, height) => Notification::Resized {
                    window,
                    width,
                    height,
                },
                WindowEvent::Pos(x, y) => Notification::Moved { window, x, y },
                WindowEvent::Maximize(maximized) => Notification::Maximized { window, maximized },
                WindowEvent::CursorEnter(entered) => Notification::CursorEnter { window, entered },
                WindowEvent::CursorPos(x, y) => {
                    w.cursor = (x, y);
                    Notification::CursorMoved { window, x, y }
                }
                WindowEvent::MouseButton(button, action, _mods) => Notification::MouseButton {
                    window,
                    button,
                    pressed: action != Action::Release,
                    x: w.cursor.0,
                    y: w.cursor.1,
                },
                WindowEvent::Scroll(dx, dy) => Notification::Wheel { window, dx, dy },
                WindowEvent::Key(key, _scancode, action, mods) => Notification::Key {
                    window,
                    key,
                    pressed: action != Action::Release,
                    repeat: action == Action::Repeat,
                    modifiers: input::convert_modifiers(mods),
                },
                WindowEvent::Char(ch) => Notification::Text {
                    window,
                    text: TextPayload::CodePoint(ch),
                },
                WindowEvent::FileDrop(paths) => {
                    out.extend(
                        paths
                            .into_iter()
                            .map(|path| (time, Notification::FileDropped { window, path })),
                    );
                    continue;
                }
                WindowEvent::ContentScale(x, _y) => Notification::ContentScale {
                    window: Some(window),
                    scale: x,
                },
                // CharModifiers repeats the text already delivered by Char
                _ => continue,
            };
            out.push((time, notification));
        }
    }

    fn drain_hotplug(&mut self, out: &mut Vec<GlfwNotification>) {
        let changes = std::mem::take(&mut *self.hotplug.borrow_mut());
        for (joystick, event) in changes {
            trace!("Joystick {:?} {:?}", joystick, event);
            out.extend(self.joysticks.apply(joystick, event));
        }
    }

    /// The joystick behind a handle, if that connection is still live
    fn live_joystick(&self, device: &GlfwDevice) -> Option<glfw::Joystick> {
        self.joysticks
            .is_live(device)
            .then(|| self.joystick(device.joystick))
    }
}

impl Backend for GlfwBackend {
    type Key = Key;
    type Button = glfw::MouseButton;
    type Device = GlfwDevice;

    fn name(&self) -> &'static str {
        "glfw"
    }

    fn pump(&mut self, out: &mut Vec<GlfwNotification>) {
        out.append(&mut self.pending);
        self.glfw.poll_events();

        let mut stamped = Vec::new();
        for (id, w) in self.windows.iter_mut() {
            Self::flush_window(*id, w, &mut stamped);
        }
        // Receivers are per window; timestamps restore the global order
        stamped.sort_by(|a, b| a.0.total_cmp(&b.0));

        for (_, notification) in stamped {
            if let Notification::Focus { window, focused } = &notification {
                if *focused {
                    self.focused = Some(*window);
                } else if self.focused == Some(*window) {
                    self.focused = None;
                }
            }
            out.push(notification);
        }

        self.drain_hotplug(out);
    }

    fn key_code(&self, key: &Key) -> KeyCode {
        input::convert_key(*key)
    }

    fn mouse_button(&self, button: &glfw::MouseButton) -> MouseButton {
        input::convert_mouse_button(*button)
    }

    fn is_key_down(&self, code: KeyCode) -> bool {
        let Some(key) = input::glfw_key(code) else {
            return false;
        };
        self.input_windows()
            .any(|w| w.window.get_key(key) != Action::Release)
    }

    fn is_mouse_button_down(&self, button: MouseButton) -> bool {
        let Some(button) = input::glfw_mouse_button(button) else {
            return false;
        };
        self.input_windows()
            .any(|w| w.window.get_mouse_button(button) != Action::Release)
    }

    fn create_window(&mut self, config: &WindowConfig) -> Result<WindowId> {
        self.glfw.default_window_hints();
        self.glfw.window_hint(WindowHint::ClientApi(ClientApiHint::NoApi));
        self.glfw.window_hint(WindowHint::Resizable(config.resizable));
        self.glfw.window_hint(WindowHint::Decorated(config.decorations));
        self.glfw.window_hint(WindowHint::Visible(config.visible));
        self.glfw.window_hint(WindowHint::Maximized(config.maximized));
        self.glfw.window_hint(WindowHint::Floating(config.always_on_top));

        let created = if config.fullscreen {
            self.glfw.with_primary_monitor(|glfw, monitor| {
                let mode = match monitor.as_deref() {
                    Some(monitor) => WindowMode::FullScreen(monitor),
                    None => WindowMode::Windowed,
                };
                glfw.create_window(config.width, config.height, &config.title, mode)
            })
        } else {
            self.glfw.create_window(
                config.width,
                config.height,
                &config.title,
                WindowMode::Windowed,
            )
        };
        let (mut window, events) = created
            .ok_or_else(|| PlatformError::WindowCreation(config.title.clone()))?;

        window.set_all_polling(true);
        if let Some((x, y)) = config.position {
            window.set_pos(x, y);
        }
        let cursor = window.get_cursor_pos();

        self.next_id += 1;
        let id = WindowId(self.next_id);
        self.windows.insert(
            id,
            GlfwWindow {
                window,
                events,
                title: config.title.clone(),
                cursor,
            },
        );
        debug!("Created GLFW {}", id);
        Ok(id)
    }

    fn destroy_window(&mut self, window: WindowId) {
        if self.windows.shift_remove(&window).is_some() {
            if self.focused == Some(window) {
                self.focused = None;
            }
            debug!("Destroyed GLFW {}", window);
        }
    }

    fn command(&mut self, window: WindowId, command: WindowCommand) -> Result<()> {
        let Some(w) = self.windows.get_mut(&window) else {
            return Err(PlatformError::UnknownWindow(window));
        };
        match command {
            WindowCommand::SetTitle(title) => {
                w.window.set_title(&title);
                w.title = title;
            }
            WindowCommand::SetSize { width, height } => {
                w.window.set_size(width as i32, height as i32);
            }
            WindowCommand::SetPosition { x, y } => w.window.set_pos(x, y),
            WindowCommand::Show => w.window.show(),
            WindowCommand::Hide => w.window.hide(),
            WindowCommand::Maximize => w.window.maximize(),
            WindowCommand::Minimize => w.window.iconify(),
            WindowCommand::Restore => w.window.restore(),
            WindowCommand::Focus => w.window.focus(),
            WindowCommand::RequestClose => {
                w.window.set_should_close(true);
                self.pending.push(Notification::Close { window });
            }
            WindowCommand::CancelClose => w.window.set_should_close(false),
            WindowCommand::SetCursor(cursor) => {
                let cursor = glfw::Cursor::standard(input::convert_cursor(cursor));
                w.window.set_cursor(Some(cursor));
            }
            WindowCommand::ShowCursor(visible) => w.window.set_cursor_mode(if visible {
                CursorMode::Normal
            } else {
                CursorMode::Hidden
            }),
        }
        Ok(())
    }

    fn window_info(&self, window: WindowId) -> Option<WindowInfo> {
        let w = self.windows.get(&window)?;
        let (width, height) = w.window.get_size();
        let (scale, _) = w.window.get_content_scale();
        Some(WindowInfo {
            id: window,
            title: w.title.clone(),
            size: (width.max(0) as u32, height.max(0) as u32),
            position: Some(w.window.get_pos()),
            visible: w.window.is_visible(),
            focused: w.window.is_focused(),
            maximized: w.window.is_maximized(),
            scale,
        })
    }

    fn set_text_input(&mut self, window: WindowId, enabled: bool) {
        // GLFW has no IME switch; the core filters text for disabled windows
        trace!("Text input for {} set to {}", window, enabled);
    }

    fn device_kind(&self, id: DeviceId) -> Option<DeviceKind> {
        let joystick = self.joystick(*JOYSTICKS.get(id.0 as usize)?);
        if !joystick.is_present() {
            return None;
        }
        Some(if joystick.is_gamepad() {
            DeviceKind::Gamepad
        } else {
            DeviceKind::Joystick
        })
    }

    fn open_device(&mut self, id: DeviceId, kind: DeviceKind) -> Option<GlfwDevice> {
        let actual = self.device_kind(id)?;
        if kind == DeviceKind::Gamepad && actual != DeviceKind::Gamepad {
            return None;
        }
        let joystick = JOYSTICKS[id.0 as usize];
        Some(GlfwDevice {
            joystick,
            gamepad: kind == DeviceKind::Gamepad,
            generation: self.joysticks.generation(joystick)?,
        })
    }

    fn close_device(&mut self, device: GlfwDevice) {
        trace!("Closed joystick {:?}", device.joystick);
    }

    fn device_name(&self, device: &GlfwDevice) -> String {
        let Some(joystick) = self.live_joystick(device) else {
            return String::new();
        };
        let name = if device.gamepad {
            joystick.get_gamepad_name().or_else(|| joystick.get_name())
        } else {
            joystick.get_name()
        };
        name.unwrap_or_default()
    }

    fn device_connected(&self, device: &GlfwDevice) -> bool {
        self.live_joystick(device)
            .is_some_and(|joystick| joystick.is_present())
    }

    fn button_count(&self, device: &GlfwDevice) -> u32 {
        match self.live_joystick(device) {
            None => 0,
            Some(_) if device.gamepad => GAMEPAD_BUTTONS.len() as u32,
            Some(joystick) => joystick.get_buttons().len() as u32,
        }
    }

    fn axis_count(&self, device: &GlfwDevice) -> u32 {
        match self.live_joystick(device) {
            None => 0,
            Some(_) if device.gamepad => GAMEPAD_AXES.len() as u32,
            Some(joystick) => joystick.get_axes().len() as u32,
        }
    }

    fn button_state(&self, device: &GlfwDevice, button: u32) -> ButtonState {
        let Some(joystick) = self.live_joystick(device) else {
            return ButtonState::Released;
        };
        let pressed = if device.gamepad {
            GAMEPAD_BUTTONS
                .get(button as usize)
                .zip(joystick.get_gamepad_state())
                .is_some_and(|(b, state)| state.get_button_state(*b) == Action::Press)
        } else {
            joystick
                .get_buttons()
                .get(button as usize)
                .is_some_and(|state| *state == Action::Press as i32)
        };
        ButtonState::from_pressed(pressed)
    }

    fn axis_value(&self, device: &GlfwDevice, axis: u32) -> f32 {
        let Some(joystick) = self.live_joystick(device) else {
            return 0.0;
        };
        let value = if device.gamepad {
            GAMEPAD_AXES
                .get(axis as usize)
                .zip(joystick.get_gamepad_state())
                .map(|(a, state)| state.get_axis(*a))
        } else {
            joystick.get_axes().get(axis as usize).copied()
        };
        value.map_or(0.0, normalize_f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_connect_and_disconnect() {
        let mut slots = JoystickSlots::default();
        assert_eq!(
            slots.apply(JoystickId::Joystick3, JoystickEvent::Connected),
            Some(Notification::DeviceConnected {
                device: DeviceId(2)
            })
        );
        assert_eq!(
            slots.apply(JoystickId::Joystick3, JoystickEvent::Disconnected),
            Some(Notification::DeviceDisconnected {
                device: DeviceId(2)
            })
        );
    }

    #[test]
    fn test_slot_ignores_duplicate_changes() {
        let mut slots = JoystickSlots::default();
        assert!(slots
            .apply(JoystickId::Joystick1, JoystickEvent::Disconnected)
            .is_none());
        assert!(slots
            .apply(JoystickId::Joystick1, JoystickEvent::Connected)
            .is_some());
        assert!(slots
            .apply(JoystickId::Joystick1, JoystickEvent::Connected)
            .is_none());
    }

    #[test]
    fn test_handle_stays_dead_after_slot_reused() {
        let mut slots = JoystickSlots::default();
        slots.apply(JoystickId::Joystick1, JoystickEvent::Connected);
        let pad = GlfwDevice {
            joystick: JoystickId::Joystick1,
            gamepad: true,
            generation: slots.generation(JoystickId::Joystick1).unwrap(),
        };
        assert!(slots.is_live(&pad));

        // Gamepad swapped for a plain joystick between two pumps
        let swapped = [
            slots.apply(JoystickId::Joystick1, JoystickEvent::Disconnected),
            slots.apply(JoystickId::Joystick1, JoystickEvent::Connected),
        ];
        assert_eq!(
            swapped,
            [
                Some(Notification::DeviceDisconnected {
                    device: DeviceId(0)
                }),
                Some(Notification::DeviceConnected {
                    device: DeviceId(0)
                }),
            ]
        );
        assert!(!slots.is_live(&pad));

        let stick = GlfwDevice {
            joystick: JoystickId::Joystick1,
            gamepad: false,
            generation: slots.generation(JoystickId::Joystick1).unwrap(),
        };
        assert!(slots.is_live(&stick));
    }
}
