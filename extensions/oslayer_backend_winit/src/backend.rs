//! winit backend
//!
//! winit is push-style: it calls an [`ApplicationHandler`]. The backend
//! drives it with `pump_app_events` and a zero timeout, so every callback
//! runs synchronously inside [`Backend::pump`] on the thread that owns the
//! event loop. The handler only appends notifications; translation happens
//! afterwards in the platform core.

use crate::input;
use crate::window::{window_attributes, WindowTable};
use oslayer_platform::{
    Backend, ButtonState, DeviceId, DeviceKind, KeyCode, MouseButton, Notification, PlatformError,
    Result, TextPayload, WindowCommand, WindowConfig, WindowId, WindowInfo,
};
use rustc_hash::FxHashSet;
use std::convert::Infallible;
use std::time::Duration;
use tracing::{debug, error, trace, warn};
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalPosition, LogicalSize};
use winit::error::OsError;
use winit::event::{
    ElementState, Ime, MouseButton as WinitMouseButton, MouseScrollDelta, StartCause,
    WindowEvent as WinitWindowEvent,
};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{ModifiersState, PhysicalKey};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowAttributes, WindowId as WinitWindowId};

/// Notification type produced by the winit backend
pub type WinitNotification = Notification<PhysicalKey, WinitMouseButton>;

/// Live keyboard and mouse state, rebuilt from delivered notifications
#[derive(Default)]
struct InputState {
    modifiers: ModifiersState,
    keys_down: FxHashSet<KeyCode>,
    buttons_down: FxHashSet<MouseButton>,
}

impl InputState {
    fn clear(&mut self) {
        self.keys_down.clear();
        self.buttons_down.clear();
    }
}

/// Backend over a winit event loop
///
/// Must be created and used on the main thread on macOS. winit exposes no
/// gamepad API, so no devices are ever reported.
pub struct WinitBackend {
    event_loop: EventLoop<()>,
    windows: WindowTable,
    input: InputState,
    /// Notifications received while pumping outside `Backend::pump`
    pending: Vec<WinitNotification>,
    exited: bool,
}

impl WinitBackend {
    /// Create the winit event loop
    pub fn new() -> Result<Self> {
        let event_loop = EventLoop::new().map_err(|e| PlatformError::InitFailed(e.to_string()))?;
        debug!("winit event loop created");
        Ok(Self {
            event_loop,
            windows: WindowTable::default(),
            input: InputState::default(),
            pending: Vec::new(),
            exited: false,
        })
    }

    /// The winit window behind an id
    pub fn winit_window(&self, id: WindowId) -> Option<&Window> {
        self.windows.get(id).map(|w| &w.window)
    }

    /// Run one zero-timeout pump, optionally creating a window on the way
    fn pump_once(
        &mut self,
        out: &mut Vec<WinitNotification>,
        create: Option<WindowAttributes>,
    ) -> Option<std::result::Result<WindowId, OsError>> {
        if self.exited {
            return None;
        }

        let mut collector = Collector {
            windows: &mut self.windows,
            input: &mut self.input,
            out,
            create,
            created: None,
        };
        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut collector);
        let created = collector.created.take();

        if let PumpStatus::Exit(code) = status {
            warn!("winit event loop exited with code {}", code);
            self.exited = true;
        }
        created
    }
}

impl Backend for WinitBackend {
    type Key = PhysicalKey;
    type Button = WinitMouseButton;
    type Device = Infallible;

    fn name(&self) -> &'static str {
        "winit"
    }

    fn pump(&mut self, out: &mut Vec<WinitNotification>) {
        out.append(&mut self.pending);
        self.pump_once(out, None);
    }

    fn key_code(&self, key: &PhysicalKey) -> KeyCode {
        input::convert_physical_key(key)
    }

    fn mouse_button(&self, button: &WinitMouseButton) -> MouseButton {
        input::convert_mouse_button(*button)
    }

    fn is_key_down(&self, code: KeyCode) -> bool {
        self.input.keys_down.contains(&code)
    }

    fn is_mouse_button_down(&self, button: MouseButton) -> bool {
        self.input.buttons_down.contains(&button)
    }

    fn create_window(&mut self, config: &WindowConfig) -> Result<WindowId> {
        if self.exited {
            return Err(PlatformError::WindowCreation(
                "event loop has exited".to_string(),
            ));
        }

        // Windows can only be created on an active event loop, i.e. from
        // inside a handler callback. Notifications seen meanwhile are held
        // for the next pump.
        let mut pending = std::mem::take(&mut self.pending);
        let created = self.pump_once(&mut pending, Some(window_attributes(config)));
        self.pending = pending;

        match created {
            Some(Ok(id)) => {
                if let Some(tracked) = self.windows.get_mut(id) {
                    tracked.title = config.title.clone();
                }
                Ok(id)
            }
            Some(Err(e)) => Err(PlatformError::WindowCreation(e.to_string())),
            None => Err(PlatformError::WindowCreation(
                "event loop did not become active".to_string(),
            )),
        }
    }

    fn destroy_window(&mut self, window: WindowId) {
        if self.windows.remove(window) {
            debug!("Destroyed winit {}", window);
        }
    }

    fn command(&mut self, window: WindowId, command: WindowCommand) -> Result<()> {
        let Some(tracked) = self.windows.get_mut(window) else {
            return Err(PlatformError::UnknownWindow(window));
        };
        let w = &tracked.window;
        match command {
            WindowCommand::SetTitle(title) => {
                w.set_title(&title);
                tracked.title = title;
            }
            WindowCommand::SetSize { width, height } => {
                let _ = w.request_inner_size(LogicalSize::new(width, height));
            }
            WindowCommand::SetPosition { x, y } => {
                w.set_outer_position(LogicalPosition::new(x, y));
            }
            WindowCommand::Show => w.set_visible(true),
            WindowCommand::Hide => w.set_visible(false),
            WindowCommand::Maximize => w.set_maximized(true),
            WindowCommand::Minimize => w.set_minimized(true),
            WindowCommand::Restore => {
                w.set_minimized(false);
                w.set_maximized(false);
            }
            WindowCommand::Focus => w.focus_window(),
            WindowCommand::RequestClose => self.pending.push(Notification::Close { window }),
            // winit keeps no close flag of its own
            WindowCommand::CancelClose => {}
            WindowCommand::SetCursor(cursor) => w.set_cursor(input::convert_cursor(cursor)),
            WindowCommand::ShowCursor(visible) => w.set_cursor_visible(visible),
        }
        Ok(())
    }

    fn window_info(&self, window: WindowId) -> Option<WindowInfo> {
        self.windows.get(window).map(|w| w.info(window))
    }

    fn set_text_input(&mut self, window: WindowId, enabled: bool) {
        if let Some(tracked) = self.windows.get_mut(window) {
            tracked.window.set_ime_allowed(enabled);
            if !enabled {
                tracked.composing = false;
            }
        }
    }

    fn device_kind(&self, _id: DeviceId) -> Option<DeviceKind> {
        None
    }

    fn open_device(&mut self, _id: DeviceId, _kind: DeviceKind) -> Option<Infallible> {
        None
    }

    fn close_device(&mut self, device: Infallible) {
        match device {}
    }

    fn device_name(&self, device: &Infallible) -> String {
        match *device {}
    }

    fn device_connected(&self, device: &Infallible) -> bool {
        match *device {}
    }

    fn button_count(&self, device: &Infallible) -> u32 {
        match *device {}
    }

    fn axis_count(&self, device: &Infallible) -> u32 {
        match *device {}
    }

    fn button_state(&self, device: &Infallible, _button: u32) -> ButtonState {
        match *device {}
    }

    fn axis_value(&self, device: &Infallible, _axis: u32) -> f32 {
        match *device {}
    }
}

/// Short-lived handler that records notifications during one pump
struct Collector<'a> {
    windows: &'a mut WindowTable,
    input: &'a mut InputState,
    out: &'a mut Vec<WinitNotification>,
    create: Option<WindowAttributes>,
    created: Option<std::result::Result<WindowId, OsError>>,
}

impl Collector<'_> {
    fn create_pending(&mut self, event_loop: &ActiveEventLoop) {
        let Some(attrs) = self.create.take() else {
            return;
        };
        let title = attrs.title.clone();
        self.created = Some(match event_loop.create_window(attrs) {
            Ok(window) => {
                let id = self.windows.insert(window, title);
                debug!("Created winit {}", id);
                Ok(id)
            }
            Err(e) => {
                error!("Failed to create window: {}", e);
                Err(e)
            }
        });
    }
}

impl ApplicationHandler for Collector<'_> {
    fn new_events(&mut self, event_loop: &ActiveEventLoop, cause: StartCause) {
        // The very first iteration creates windows in `resumed`
        if !matches!(cause, StartCause::Init) {
            self.create_pending(event_loop);
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        self.create_pending(event_loop);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.create_pending(event_loop);
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        window_id: WinitWindowId,
        event: WinitWindowEvent,
    ) {
        let Some(window) = self.windows.resolve(window_id) else {
            trace!("Event for untracked winit window {:?}", window_id);
            return;
        };

        match event {
            WinitWindowEvent::CloseRequested => {
                self.out.push(Notification::Close { window });
            }

            WinitWindowEvent::Focused(focused) => {
                if !focused {
                    self.input.clear();
                }
                self.out.push(Notification::Focus { window, focused });
            }

            WinitWindowEvent::Resized(size) => {
                self.out.push(Notification::Resized {
                    window,
                    width: size.width as i32,
                    height: size.height as i32,
                });
                // winit has no maximize notification; infer it from resizes
                if let Some(tracked) = self.windows.get_mut(window) {
                    let maximized = tracked.window.is_maximized();
                    if maximized != tracked.maximized {
                        tracked.maximized = maximized;
                        self.out.push(Notification::Maximized { window, maximized });
                    }
                }
            }

            WinitWindowEvent::Moved(pos) => {
                self.out.push(Notification::Moved {
                    window,
                    x: pos.x,
                    y: pos.y,
                });
            }

            WinitWindowEvent::CursorEntered { .. } => {
                self.out.push(Notification::CursorEnter {
                    window,
                    entered: true,
                });
            }

            WinitWindowEvent::CursorLeft { .. } => {
                self.out.push(Notification::CursorEnter {
                    window,
                    entered: false,
                });
            }

            WinitWindowEvent::CursorMoved { position, .. } => {
                if let Some(tracked) = self.windows.get_mut(window) {
                    tracked.cursor = (position.x, position.y);
                }
                self.out.push(Notification::CursorMoved {
                    window,
                    x: position.x,
                    y: position.y,
                });
            }

            WinitWindowEvent::MouseInput { state, button, .. } => {
                let pressed = state == ElementState::Pressed;
                let neutral = input::convert_mouse_button(button);
                if pressed {
                    self.input.buttons_down.insert(neutral);
                } else {
                    self.input.buttons_down.remove(&neutral);
                }
                let (x, y) = self
                    .windows
                    .get(window)
                    .map_or((0.0, 0.0), |tracked| tracked.cursor);
                self.out.push(Notification::MouseButton {
                    window,
                    button,
                    pressed,
                    x,
                    y,
                });
            }

            WinitWindowEvent::MouseWheel { delta, .. } => {
                let (dx, dy) = match delta {
                    MouseScrollDelta::LineDelta(x, y) => (x as f64, y as f64),
                    MouseScrollDelta::PixelDelta(pos) => (pos.x / 10.0, pos.y / 10.0),
                };
                self.out.push(Notification::Wheel { window, dx, dy });
            }

            WinitWindowEvent::ModifiersChanged(mods) => {
                self.input.modifiers = mods.state();
            }

            WinitWindowEvent::KeyboardInput { event, .. } => {
                let pressed = event.state == ElementState::Pressed;
                let code = input::convert_physical_key(&event.physical_key);
                if pressed {
                    self.input.keys_down.insert(code);
                } else {
                    self.input.keys_down.remove(&code);
                }
                self.out.push(Notification::Key {
                    window,
                    key: event.physical_key,
                    pressed,
                    repeat: event.repeat,
                    modifiers: input::convert_modifiers(self.input.modifiers),
                });

                let composing = self.windows.get(window).is_some_and(|w| w.composing);
                if pressed && !composing {
                    if let Some(text) = event.text.as_deref().and_then(input::printable_text) {
                        self.out.push(Notification::Text {
                            window,
                            text: TextPayload::Composed(text),
                        });
                    }
                }
            }

            WinitWindowEvent::Ime(ime) => {
                let composing = match ime {
                    Ime::Preedit(text, _) => !text.is_empty(),
                    Ime::Commit(text) => {
                        self.out.push(Notification::Text {
                            window,
                            text: TextPayload::Composed(text),
                        });
                        false
                    }
                    Ime::Enabled | Ime::Disabled => false,
                };
                if let Some(tracked) = self.windows.get_mut(window) {
                    tracked.composing = composing;
                }
            }

            WinitWindowEvent::DroppedFile(path) => {
                self.out.push(Notification::FileDropped { window, path });
            }

            WinitWindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.out.push(Notification::ContentScale {
                    window: Some(window),
                    scale: scale_factor as f32,
                });
            }

            _ => {}
        }
    }
}
