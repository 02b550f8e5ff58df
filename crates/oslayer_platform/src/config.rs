//! Platform configuration
//!
//! [`PlatformConfig`] can be built in code or parsed from TOML:
//!
//! ```
//! use oslayer_platform::PlatformConfig;
//!
//! let config = PlatformConfig::from_toml_str(r#"
//!     quit_on_all_closed = false
//!
//!     [window]
//!     title = "Editor"
//!     width = 1280
//!     height = 720
//! "#).unwrap();
//!
//! assert!(!config.quit_on_all_closed);
//! assert_eq!(config.window.title, "Editor");
//! ```

use crate::error::{PlatformError, Result};
use crate::window::WindowConfig;
use serde::{Deserialize, Serialize};

/// Default tracing directive used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Settings for a [`Platform`](crate::Platform)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    /// Emit a single `Quit` event once every open window asked to close
    pub quit_on_all_closed: bool,
    /// Whether new windows start with text input enabled
    pub text_input: bool,
    /// Tracing filter directive used by the facade's logging bootstrap
    pub log_filter: String,
    /// Configuration used by `create_default_window`
    pub window: WindowConfig,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            quit_on_all_closed: true,
            text_input: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            window: WindowConfig::default(),
        }
    }
}

impl PlatformConfig {
    /// Parse a configuration from TOML; missing keys take their defaults
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| PlatformError::Config(e.to_string()))
    }

    /// Serialize the configuration to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| PlatformError::Config(e.to_string()))
    }

    /// Set the quit policy
    pub fn quit_on_all_closed(mut self, enabled: bool) -> Self {
        self.quit_on_all_closed = enabled;
        self
    }

    /// Set the initial text input state for new windows
    pub fn text_input(mut self, enabled: bool) -> Self {
        self.text_input = enabled;
        self
    }

    /// Set the default window configuration
    pub fn window(mut self, window: WindowConfig) -> Self {
        self.window = window;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlatformConfig::default();
        assert!(config.quit_on_all_closed);
        assert!(config.text_input);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = PlatformConfig::from_toml_str("").unwrap();
        assert_eq!(config, PlatformConfig::default());
    }

    #[test]
    fn test_partial_window_table() {
        let config = PlatformConfig::from_toml_str(
            r#"
            text_input = false

            [window]
            width = 320
            position = [5, 6]
            "#,
        )
        .unwrap();
        assert!(!config.text_input);
        assert_eq!(config.window.width, 320);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.window.position, Some((5, 6)));
    }

    #[test]
    fn test_invalid_toml() {
        let err = PlatformConfig::from_toml_str("quit_on_all_closed = 3").unwrap_err();
        assert!(matches!(err, PlatformError::Config(_)));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = PlatformConfig::default()
            .quit_on_all_closed(false)
            .window(WindowConfig::new("x").size(10, 20));
        let text = config.to_toml_string().unwrap();
        assert_eq!(PlatformConfig::from_toml_str(&text).unwrap(), config);
    }
}
