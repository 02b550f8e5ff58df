//! oslayer
//!
//! One event stream for windows, keyboard, mouse, and gamepads, whatever
//! native library sits underneath.
//!
//! The backend is chosen at compile time through cargo features. When
//! several are enabled the first of `glfw`, `winit` wins; with neither the
//! in-process headless backend is used. Only that backend is ever linked
//! into [`DefaultBackend`].
//!
//! # Example
//!
//! ```ignore
//! use oslayer::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let config = PlatformConfig::default();
//!     oslayer::init_logging(&config);
//!
//!     let mut platform = oslayer::init(config)?;
//!     platform.create_default_window()?;
//!
//!     'main: loop {
//!         platform.pump();
//!         while let Some(event) = platform.poll_event() {
//!             if event == Event::Quit {
//!                 break 'main;
//!             }
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub use oslayer_platform::*;

#[cfg(feature = "glfw")]
pub use oslayer_backend_glfw as glfw;
#[cfg(feature = "winit")]
pub use oslayer_backend_winit as winit;

use tracing_subscriber::EnvFilter;

/// Backend selected by the enabled features
#[cfg(feature = "glfw")]
pub type DefaultBackend = oslayer_backend_glfw::GlfwBackend;

/// Backend selected by the enabled features
#[cfg(all(feature = "winit", not(feature = "glfw")))]
pub type DefaultBackend = oslayer_backend_winit::WinitBackend;

/// Backend selected by the enabled features
#[cfg(not(any(feature = "glfw", feature = "winit")))]
pub type DefaultBackend = oslayer_platform::headless::HeadlessBackend;

#[cfg(feature = "glfw")]
fn create_backend() -> Result<DefaultBackend> {
    oslayer_backend_glfw::GlfwBackend::new()
}

#[cfg(all(feature = "winit", not(feature = "glfw")))]
fn create_backend() -> Result<DefaultBackend> {
    oslayer_backend_winit::WinitBackend::new()
}

#[cfg(not(any(feature = "glfw", feature = "winit")))]
fn create_backend() -> Result<DefaultBackend> {
    Ok(oslayer_platform::headless::HeadlessBackend::new())
}

/// Initialize the default backend and wrap it in a [`Platform`]
///
/// Calling `init` again after dropping (or shutting down) the previous
/// platform is a full re-initialization.
pub fn init(config: PlatformConfig) -> Result<Platform<DefaultBackend>> {
    let backend = create_backend()?;
    Ok(Platform::new(backend, config))
}

/// Name of the backend compiled in as [`DefaultBackend`]
pub const fn current_backend() -> &'static str {
    if cfg!(feature = "glfw") {
        "glfw"
    } else if cfg!(feature = "winit") {
        "winit"
    } else {
        "headless"
    }
}

/// Install a `tracing` subscriber that prints to stderr
///
/// `RUST_LOG` takes precedence over `config.log_filter`. Does nothing if a
/// global subscriber is already set.
pub fn init_logging(config: &PlatformConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::DefaultBackend;
    pub use oslayer_platform::prelude::*;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice() {
        let config = PlatformConfig::default();
        init_logging(&config);
        init_logging(&config);
    }

    #[test]
    fn test_current_backend_matches_features() {
        let expected = if cfg!(feature = "glfw") {
            "glfw"
        } else if cfg!(feature = "winit") {
            "winit"
        } else {
            "headless"
        };
        assert_eq!(current_backend(), expected);
    }

    #[cfg(not(any(feature = "glfw", feature = "winit")))]
    #[test]
    fn test_headless_init() {
        let mut platform = init(PlatformConfig::default()).unwrap();
        assert_eq!(platform.backend_name(), current_backend());
        let id = platform.create_default_window().unwrap();
        platform.request_close(id).unwrap();
        platform.pump();
        assert_eq!(platform.drain_events().last(), Some(Event::Quit));
    }
}
