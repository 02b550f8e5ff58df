//! The platform: one backend plus the state needed to normalize its events
//!
//! [`Platform`] is the application-facing entry point. Each iteration the
//! application calls [`Platform::pump`], which asks the backend for every
//! pending native notification, translates them in order, and appends the
//! resulting events to the queue. The application then drains the queue with
//! [`Platform::poll_event`] or [`Platform::drain_events`].
//!
//! Everything here runs on the thread that owns the windows. Live state
//! queries (keys, mouse buttons, devices) read the backend directly and do
//! not go through the queue.

use crate::backend::{Backend, NotificationOf};
use crate::config::PlatformConfig;
use crate::device::{normalize_f32, DeviceHandle, DeviceKind};
use crate::error::{PlatformError, Result};
use crate::event::{ButtonState, DeviceId, Event, MouseButton, WindowId};
use crate::keyboard::KeyCode;
use crate::queue::EventQueue;
use crate::registry::WindowRegistry;
use crate::translate::Translator;
use crate::window::{WindowCommand, WindowConfig, WindowInfo};
use std::collections::vec_deque;
use tracing::{debug, info};

/// Event normalization layer over a single backend
pub struct Platform<B: Backend> {
    backend: B,
    registry: WindowRegistry,
    queue: EventQueue,
    translator: Translator,
    config: PlatformConfig,
    /// Reused between pumps
    notifications: Vec<NotificationOf<B>>,
}

impl<B: Backend> Platform<B> {
    /// Wrap an initialized backend
    pub fn new(backend: B, config: PlatformConfig) -> Self {
        info!("Platform initialized with {} backend", backend.name());
        Self {
            backend,
            registry: WindowRegistry::new(),
            queue: EventQueue::new(),
            translator: Translator::new(),
            config,
            notifications: Vec::new(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn config(&self) -> &PlatformConfig {
        &self.config
    }

    /// Name of the active backend
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Destroy every window and hand the backend back
    ///
    /// Creating a new `Platform` afterwards is a full re-initialization: the
    /// quit latch and device table start fresh.
    pub fn shutdown(mut self) -> B {
        let ids: Vec<WindowId> = self.registry.ids().collect();
        for id in ids {
            self.registry.unregister(id);
            self.backend.destroy_window(id);
        }
        info!("Platform shut down");
        self.backend
    }

    // ========================================================================
    // Events
    // ========================================================================

    /// Drain and translate every pending native notification
    ///
    /// Never blocks. Returns the number of events appended to the queue.
    pub fn pump(&mut self) -> usize {
        let before = self.queue.len();

        let mut batch = std::mem::take(&mut self.notifications);
        self.backend.pump(&mut batch);
        for notification in batch.drain(..) {
            if let Some(event) =
                self.translator
                    .translate(&self.backend, &mut self.registry, notification)
            {
                self.queue.push(event);
            }
        }
        self.notifications = batch;

        if let Some(quit) = self
            .translator
            .check_quit(&self.registry, self.config.quit_on_all_closed)
        {
            self.queue.push(quit);
        }

        self.queue.len() - before
    }

    /// Take the oldest queued event
    pub fn poll_event(&mut self) -> Option<Event> {
        self.queue.poll()
    }

    /// Take every queued event, oldest first
    pub fn drain_events(&mut self) -> vec_deque::Drain<'_, Event> {
        self.queue.drain()
    }

    /// Number of queued events
    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }

    /// Whether the quit event has been produced
    pub fn quit_sent(&self) -> bool {
        self.translator.quit_sent()
    }

    // ========================================================================
    // Windows
    // ========================================================================

    /// Create a window and register it
    pub fn create_window(&mut self, config: &WindowConfig) -> Result<WindowId> {
        let id = self.backend.create_window(config)?;
        self.registry.register(id, self.config.text_input);
        self.backend.set_text_input(id, self.config.text_input);
        info!("Created {} '{}' ({}x{})", id, config.title, config.width, config.height);
        Ok(id)
    }

    /// Create a window from the platform's default window configuration
    pub fn create_default_window(&mut self) -> Result<WindowId> {
        let config = self.config.window.clone();
        self.create_window(&config)
    }

    /// Unregister and destroy a window
    ///
    /// Notifications still pending for it are dropped by the translator.
    pub fn destroy_window(&mut self, id: WindowId) -> Result<()> {
        if self.registry.unregister(id).is_none() {
            return Err(PlatformError::UnknownWindow(id));
        }
        self.backend.destroy_window(id);
        info!("Destroyed {}", id);
        Ok(())
    }

    /// Apply a command to a registered window
    pub fn command(&mut self, id: WindowId, command: WindowCommand) -> Result<()> {
        let Some(record) = self.registry.resolve_mut(id) else {
            return Err(PlatformError::UnknownWindow(id));
        };
        if command == WindowCommand::CancelClose {
            record.close_requested = false;
        }
        debug!("{} <- {:?}", id, command);
        self.backend.command(id, command)
    }

    /// Ask a window to close as if the user clicked its close button
    ///
    /// The close event arrives through the next pump.
    pub fn request_close(&mut self, id: WindowId) -> Result<()> {
        self.command(id, WindowCommand::RequestClose)
    }

    /// Withdraw a window's close request
    pub fn cancel_close(&mut self, id: WindowId) -> Result<()> {
        self.command(id, WindowCommand::CancelClose)
    }

    /// Whether the window has an outstanding close request
    pub fn close_requested(&self, id: WindowId) -> bool {
        self.registry.resolve(id).is_some_and(|w| w.close_requested)
    }

    pub fn window_info(&self, id: WindowId) -> Option<WindowInfo> {
        if !self.registry.contains(id) {
            return None;
        }
        self.backend.window_info(id)
    }

    /// Registered windows in creation order
    pub fn windows(&self) -> impl Iterator<Item = WindowId> + '_ {
        self.registry.ids()
    }

    /// The window holding input focus, as last reported by the backend
    pub fn focused_window(&self) -> Option<WindowId> {
        self.registry.focused()
    }

    pub fn is_any_focused(&self) -> bool {
        self.registry.any_focused()
    }

    pub fn has_focus(&self, id: WindowId) -> bool {
        self.registry.focused() == Some(id)
    }

    /// Start delivering text input events for a window
    pub fn start_text_input(&mut self, id: WindowId) -> Result<()> {
        self.set_text_input(id, true)
    }

    /// Stop delivering text input events for a window
    pub fn stop_text_input(&mut self, id: WindowId) -> Result<()> {
        self.set_text_input(id, false)
    }

    pub fn is_text_input_active(&self, id: WindowId) -> bool {
        self.registry.resolve(id).is_some_and(|w| w.text_input)
    }

    fn set_text_input(&mut self, id: WindowId, enabled: bool) -> Result<()> {
        let record = self
            .registry
            .resolve_mut(id)
            .ok_or(PlatformError::UnknownWindow(id))?;
        record.text_input = enabled;
        self.backend.set_text_input(id, enabled);
        Ok(())
    }

    // ========================================================================
    // Live input state
    // ========================================================================

    /// Whether the key is currently held
    pub fn is_key_pressed(&self, code: KeyCode) -> bool {
        code != KeyCode::Unknown && self.backend.is_key_down(code)
    }

    /// Whether the mouse button is currently held
    pub fn is_mouse_button_pressed(&self, button: MouseButton) -> bool {
        self.backend.is_mouse_button_down(button)
    }

    // ========================================================================
    // Devices
    // ========================================================================

    /// Open a device
    ///
    /// Returns an invalid handle when `id` does not name a connected device
    /// of the requested kind. Any connected device can be opened as a
    /// joystick.
    pub fn open_device(&mut self, id: DeviceId, kind: DeviceKind) -> DeviceHandle<B::Device> {
        match self.backend.open_device(id, kind) {
            Some(native) => {
                debug!("Opened {} as {:?}", id, kind);
                DeviceHandle::open(id, kind, native)
            }
            None => {
                debug!("{} is not available as {:?}", id, kind);
                DeviceHandle::empty(id, kind)
            }
        }
    }

    pub fn open_gamepad(&mut self, id: DeviceId) -> DeviceHandle<B::Device> {
        self.open_device(id, DeviceKind::Gamepad)
    }

    pub fn open_joystick(&mut self, id: DeviceId) -> DeviceHandle<B::Device> {
        self.open_device(id, DeviceKind::Joystick)
    }

    /// Release a device handle; closing twice is a no-op
    pub fn close_device(&mut self, handle: &mut DeviceHandle<B::Device>) {
        if let Some(native) = handle.take_native() {
            self.backend.close_device(native);
            debug!("Closed {}", handle.id());
        }
    }

    /// Device name; empty for invalid or disconnected handles
    pub fn device_name(&self, handle: &DeviceHandle<B::Device>) -> String {
        handle
            .native()
            .map(|d| self.backend.device_name(d))
            .unwrap_or_default()
    }

    /// Whether the device behind the handle is still connected
    pub fn device_connected(&self, handle: &DeviceHandle<B::Device>) -> bool {
        handle
            .native()
            .is_some_and(|d| self.backend.device_connected(d))
    }

    pub fn button_count(&self, handle: &DeviceHandle<B::Device>) -> u32 {
        handle
            .native()
            .map_or(0, |d| self.backend.button_count(d))
    }

    pub fn axis_count(&self, handle: &DeviceHandle<B::Device>) -> u32 {
        handle.native().map_or(0, |d| self.backend.axis_count(d))
    }

    /// Button state; `Released` for invalid handles and out-of-range buttons
    pub fn button_state(&self, handle: &DeviceHandle<B::Device>, button: u32) -> ButtonState {
        match handle.native() {
            Some(d) if button < self.backend.button_count(d) => self.backend.button_state(d, button),
            _ => ButtonState::Released,
        }
    }

    /// Axis value in `[-1.0, 1.0]`; `0.0` for invalid handles and
    /// out-of-range axes
    pub fn axis_value(&self, handle: &DeviceHandle<B::Device>, axis: u32) -> f32 {
        match handle.native() {
            Some(d) if axis < self.backend.axis_count(d) => {
                normalize_f32(self.backend.axis_value(d, axis))
            }
            _ => 0.0,
        }
    }
}
