//! Window configuration, commands and queries

use crate::event::WindowId;
use serde::{Deserialize, Serialize};

/// Window configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Initial width in logical pixels
    pub width: u32,
    /// Initial height in logical pixels
    pub height: u32,
    /// Initial position; `None` lets the backend place the window
    pub position: Option<(i32, i32)>,
    /// Whether the window can be resized
    pub resizable: bool,
    /// Whether to show window decorations (title bar, borders)
    pub decorations: bool,
    /// Whether the window is shown on creation
    pub visible: bool,
    /// Whether to start maximized
    pub maximized: bool,
    /// Whether the window should always be on top
    pub always_on_top: bool,
    /// Whether to start in fullscreen mode
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "oslayer".to_string(),
            width: 800,
            height: 600,
            position: None,
            resizable: true,
            decorations: true,
            visible: true,
            maximized: false,
            always_on_top: false,
            fullscreen: false,
        }
    }
}

impl WindowConfig {
    /// Create a new window configuration with a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the window title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the window size
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the initial position
    pub fn position(mut self, x: i32, y: i32) -> Self {
        self.position = Some((x, y));
        self
    }

    /// Set whether the window is resizable
    pub fn resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    /// Set whether to show window decorations
    pub fn decorations(mut self, decorations: bool) -> Self {
        self.decorations = decorations;
        self
    }

    /// Set whether the window starts visible
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Set whether the window starts maximized
    pub fn maximized(mut self, maximized: bool) -> Self {
        self.maximized = maximized;
        self
    }

    /// Set whether the window is always on top
    pub fn always_on_top(mut self, always_on_top: bool) -> Self {
        self.always_on_top = always_on_top;
        self
    }

    /// Set whether to start in fullscreen
    pub fn fullscreen(mut self, fullscreen: bool) -> Self {
        self.fullscreen = fullscreen;
        self
    }
}

/// Commands applied to a live window through its backend
#[derive(Clone, Debug, PartialEq)]
pub enum WindowCommand {
    SetTitle(String),
    SetSize { width: u32, height: u32 },
    SetPosition { x: i32, y: i32 },
    Show,
    Hide,
    Maximize,
    Minimize,
    Restore,
    /// Ask the window manager to focus the window
    Focus,
    /// Behave as if the user clicked the close button
    RequestClose,
    /// Withdraw an outstanding close request
    CancelClose,
    SetCursor(Cursor),
    ShowCursor(bool),
}

/// Snapshot of a window's state as reported by the backend
#[derive(Clone, Debug, PartialEq)]
pub struct WindowInfo {
    pub id: WindowId,
    pub title: String,
    /// Inner size in pixels
    pub size: (u32, u32),
    /// Outer position, when the backend can report it
    pub position: Option<(i32, i32)>,
    pub visible: bool,
    pub focused: bool,
    pub maximized: bool,
    /// Display scale converting window coordinates to pixels
    pub scale: f32,
}

/// System cursor icons
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cursor {
    /// Default arrow cursor
    #[default]
    Arrow,
    /// Arrow with busy indicator
    ArrowWait,
    /// Wait/loading cursor
    Wait,
    /// Crosshair cursor
    Crosshair,
    /// Pointer/hand cursor (for clickable elements)
    Hand,
    /// Text/I-beam cursor
    IBeam,
    /// Not allowed cursor
    NotAllowed,
    /// Move cursor (all directions)
    SizeAll,
    /// Northeast-Southwest resize cursor
    SizeNESW,
    /// North-South resize cursor
    SizeNS,
    /// Northwest-Southeast resize cursor
    SizeNWSE,
    /// East-West resize cursor
    SizeWE,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_config_builder() {
        let config = WindowConfig::new("demo")
            .size(1024, 768)
            .position(10, 20)
            .resizable(false)
            .visible(false);
        assert_eq!(config.title, "demo");
        assert_eq!((config.width, config.height), (1024, 768));
        assert_eq!(config.position, Some((10, 20)));
        assert!(!config.resizable);
        assert!(!config.visible);
        assert!(config.decorations);
    }

    #[test]
    fn test_default_cursor() {
        assert_eq!(Cursor::default(), Cursor::Arrow);
    }
}
