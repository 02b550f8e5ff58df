//! Platform error types

use crate::event::WindowId;
use thiserror::Error;

/// Platform-related errors
///
/// Only operations that call into the native layer report errors. Event
/// translation and device queries never fail; they drop the notification
/// or return a default value instead.
#[derive(Error, Debug)]
pub enum PlatformError {
    /// Failed to initialize the backend
    #[error("Platform initialization failed: {0}")]
    InitFailed(String),

    /// Failed to create window
    #[error("Failed to create window: {0}")]
    WindowCreation(String),

    /// The window id is not (or no longer) registered
    #[error("Unknown window: {0}")]
    UnknownWindow(WindowId),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
