//! Window bookkeeping for the winit backend

use indexmap::IndexMap;
use oslayer_platform::{WindowConfig, WindowId, WindowInfo};
use rustc_hash::FxHashMap;
use winit::dpi::{LogicalPosition, LogicalSize};
use winit::window::{Fullscreen, Window, WindowAttributes, WindowId as WinitWindowId, WindowLevel};

/// Build winit window attributes from a window configuration
pub fn window_attributes(config: &WindowConfig) -> WindowAttributes {
    let mut attrs = WindowAttributes::default()
        .with_title(&config.title)
        .with_inner_size(LogicalSize::new(config.width, config.height))
        .with_resizable(config.resizable)
        .with_decorations(config.decorations)
        .with_visible(config.visible)
        .with_maximized(config.maximized);

    if let Some((x, y)) = config.position {
        attrs = attrs.with_position(LogicalPosition::new(x, y));
    }
    if config.always_on_top {
        attrs = attrs.with_window_level(WindowLevel::AlwaysOnTop);
    }
    if config.fullscreen {
        attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
    }

    attrs
}

/// A live winit window plus the state winit does not report directly
pub(crate) struct TrackedWindow {
    pub window: Window,
    pub title: String,
    /// Last maximized state seen, used to synthesize maximize/restore
    pub maximized: bool,
    /// Last pointer position, attached to button notifications
    pub cursor: (f64, f64),
    /// An IME composition is in progress
    pub composing: bool,
}

impl TrackedWindow {
    fn new(window: Window, title: String) -> Self {
        let maximized = window.is_maximized();
        Self {
            window,
            title,
            maximized,
            cursor: (0.0, 0.0),
            composing: false,
        }
    }

    pub fn info(&self, id: WindowId) -> WindowInfo {
        let size = self.window.inner_size();
        WindowInfo {
            id,
            title: self.title.clone(),
            size: (size.width, size.height),
            position: self.window.outer_position().ok().map(|p| (p.x, p.y)),
            visible: self.window.is_visible().unwrap_or(true),
            focused: self.window.has_focus(),
            maximized: self.window.is_maximized(),
            scale: self.window.scale_factor() as f32,
        }
    }
}

/// Live windows keyed both ways
#[derive(Default)]
pub(crate) struct WindowTable {
    windows: IndexMap<WindowId, TrackedWindow>,
    native: FxHashMap<WinitWindowId, WindowId>,
    next_id: u32,
}

impl WindowTable {
    /// Adopt a newly created window and assign it the next id
    pub fn insert(&mut self, window: Window, title: String) -> WindowId {
        self.next_id += 1;
        let id = WindowId(self.next_id);
        self.native.insert(window.id(), id);
        self.windows.insert(id, TrackedWindow::new(window, title));
        id
    }

    /// Drop a window, closing it
    pub fn remove(&mut self, id: WindowId) -> bool {
        match self.windows.shift_remove(&id) {
            Some(tracked) => {
                self.native.remove(&tracked.window.id());
                true
            }
            None => false,
        }
    }

    pub fn resolve(&self, native: WinitWindowId) -> Option<WindowId> {
        self.native.get(&native).copied()
    }

    pub fn get(&self, id: WindowId) -> Option<&TrackedWindow> {
        self.windows.get(&id)
    }

    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut TrackedWindow> {
        self.windows.get_mut(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes_from_config() {
        let config = WindowConfig::new("winit")
            .size(640, 480)
            .resizable(false)
            .visible(false)
            .always_on_top(true);
        let attrs = window_attributes(&config);
        assert_eq!(attrs.title, "winit");
        assert!(!attrs.resizable);
        assert!(!attrs.visible);
        assert!(attrs.decorations);
        assert_eq!(attrs.window_level, WindowLevel::AlwaysOnTop);
        assert!(attrs.fullscreen.is_none());
        assert!(attrs.position.is_none());
    }

    #[test]
    fn test_fullscreen_and_position() {
        let config = WindowConfig::default().fullscreen(true).position(5, 7);
        let attrs = window_attributes(&config);
        assert!(attrs.fullscreen.is_some());
        assert!(attrs.position.is_some());
    }
}
