//! Notification translator
//!
//! Turns backend [`Notification`]s into normalized [`Event`]s, applying the
//! window registry side effects each notification implies:
//!
//! 1. resolve the window id (unknown ids are dropped),
//! 2. build the event, translating native codes through the backend tables,
//! 3. update focus / close-request state in the registry,
//! 4. hand the event back for queueing.
//!
//! The translator also owns the one-shot quit latch and the table of
//! announced devices used to classify hotplug notifications.

use crate::backend::{Backend, Notification, NotificationOf};
use crate::device::DeviceKind;
use crate::event::{
    ButtonState, ContentScaleEvent, DeviceId, DropFileEvent, Event, KeyEvent, MouseButtonEvent,
    MouseMotionEvent, MouseWheelEvent, TextInputEvent, WindowEvent, WindowEventKind, WindowId,
};
use crate::registry::WindowRegistry;
use rustc_hash::FxHashMap;
use tracing::{debug, info, trace};

/// Convert a backend coordinate to an integer pixel position
///
/// Rounds toward negative infinity so sub-pixel positions left of or above
/// the window origin stay negative. Non-finite values saturate.
pub fn to_pixel(value: f64) -> i32 {
    value.floor() as i32
}

/// Translation state that outlives a single pump
#[derive(Debug, Default)]
pub struct Translator {
    quit_sent: bool,
    devices: FxHashMap<DeviceId, DeviceKind>,
}

impl Translator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the quit event has already been produced
    pub fn quit_sent(&self) -> bool {
        self.quit_sent
    }

    /// Kind recorded when `id` was announced, if it is currently connected
    pub fn known_device(&self, id: DeviceId) -> Option<DeviceKind> {
        self.devices.get(&id).copied()
    }

    /// Translate one notification
    ///
    /// Returns `None` when the notification is dropped: it names an unknown
    /// window, targets a window with text input disabled, or is a duplicate
    /// or unannounced hotplug notification.
    pub fn translate<B: Backend>(
        &mut self,
        backend: &B,
        registry: &mut WindowRegistry,
        notification: NotificationOf<B>,
    ) -> Option<Event> {
        if let Some(window) = notification.window() {
            if !registry.contains(window) {
                debug!("Dropping notification for unknown {}", window);
                return None;
            }
        }

        let event = match notification {
            Notification::Close { window } => {
                if let Some(record) = registry.resolve_mut(window) {
                    record.close_requested = true;
                }
                window_event(window, WindowEventKind::Close)
            }

            Notification::Focus { window, focused } => {
                if focused {
                    registry.set_focused(Some(window));
                    window_event(window, WindowEventKind::FocusGained)
                } else {
                    if !registry.clear_focus_if(window) {
                        trace!("Stale focus-lost for {} ignored", window);
                    }
                    window_event(window, WindowEventKind::FocusLost)
                }
            }

            Notification::Resized {
                window,
                width,
                height,
            } => window_event(window, WindowEventKind::Resized { width, height }),

            Notification::Moved { window, x, y } => {
                window_event(window, WindowEventKind::Moved { x, y })
            }

            Notification::Maximized { window, maximized } => {
                let kind = if maximized {
                    WindowEventKind::Maximized
                } else {
                    WindowEventKind::Restored
                };
                window_event(window, kind)
            }

            Notification::CursorEnter { window, entered } => {
                let kind = if entered {
                    WindowEventKind::Enter
                } else {
                    WindowEventKind::Leave
                };
                window_event(window, kind)
            }

            Notification::CursorMoved { window, x, y } => Event::MouseMotion(MouseMotionEvent {
                window,
                x: to_pixel(x),
                y: to_pixel(y),
            }),

            Notification::MouseButton {
                window,
                button,
                pressed,
                x,
                y,
            } => Event::MouseButton(MouseButtonEvent {
                window,
                button: backend.mouse_button(&button),
                state: ButtonState::from_pressed(pressed),
                x: to_pixel(x),
                y: to_pixel(y),
            }),

            Notification::Wheel { window, dx, dy } => Event::MouseWheel(MouseWheelEvent {
                window,
                x: dx as f32,
                y: dy as f32,
            }),

            Notification::Key {
                window,
                key,
                pressed,
                repeat,
                modifiers,
            } => {
                let key = KeyEvent {
                    window,
                    code: backend.key_code(&key),
                    alt: modifiers.alt,
                    ctrl: modifiers.ctrl,
                    shift: modifiers.shift,
                    system: modifiers.system,
                    repeat: pressed && repeat,
                };
                if pressed {
                    Event::KeyDown(key)
                } else {
                    Event::KeyUp(key)
                }
            }

            Notification::Text { window, text } => {
                let enabled = registry.resolve(window).is_some_and(|w| w.text_input);
                if !enabled {
                    trace!("Text input disabled for {}, dropping text", window);
                    return None;
                }
                let text = text.into_string();
                if text.is_empty() {
                    return None;
                }
                Event::TextInput(TextInputEvent { window, text })
            }

            Notification::FileDropped { window, path } => {
                Event::DropFile(DropFileEvent { window, path })
            }

            Notification::DeviceConnected { device } => self.device_connected(backend, device)?,

            Notification::DeviceDisconnected { device } => self.device_disconnected(device)?,

            Notification::ContentScale { window, scale } => {
                Event::DisplayContentScaleChanged(ContentScaleEvent { window, scale })
            }
        };

        trace!("Translated {:?}", event);
        Some(event)
    }

    /// Produce the quit event once every open window has asked to close
    ///
    /// Fires at most once per translator lifetime. It also fires when every
    /// window that was ever registered has since been destroyed.
    pub fn check_quit(&mut self, registry: &WindowRegistry, enabled: bool) -> Option<Event> {
        if self.quit_sent || !enabled || !registry.ever_registered() {
            return None;
        }
        if registry.is_empty() || registry.all_close_requested() {
            info!("All windows requested close, emitting quit");
            self.quit_sent = true;
            return Some(Event::Quit);
        }
        None
    }

    fn device_connected<B: Backend>(&mut self, backend: &B, device: DeviceId) -> Option<Event> {
        if self.devices.contains_key(&device) {
            debug!("Duplicate connect for {} ignored", device);
            return None;
        }
        // The device may already be gone again; report it as a plain
        // joystick so the matching removal stays balanced.
        let kind = backend.device_kind(device).unwrap_or(DeviceKind::Joystick);
        self.devices.insert(device, kind);
        info!("{} connected as {:?}", device, kind);
        Some(match kind {
            DeviceKind::Gamepad => Event::GamepadAdded(device),
            DeviceKind::Joystick => Event::JoystickAdded(device),
        })
    }

    fn device_disconnected(&mut self, device: DeviceId) -> Option<Event> {
        let Some(kind) = self.devices.remove(&device) else {
            debug!("Disconnect for unannounced {} dropped", device);
            return None;
        };
        info!("{} disconnected", device);
        Some(match kind {
            DeviceKind::Gamepad => Event::GamepadRemoved(device),
            DeviceKind::Joystick => Event::JoystickRemoved(device),
        })
    }
}

fn window_event(window: WindowId, kind: WindowEventKind) -> Event {
    Event::Window(WindowEvent { window, kind })
}
