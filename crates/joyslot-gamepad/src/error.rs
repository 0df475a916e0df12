use thiserror::Error;

use crate::types::DeviceId;

/// Error type for device layer and session operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to initialize the device layer (SDL2 or subsystems).
    #[error("Backend init failed: {0}")]
    BackendInit(String),
    /// Enumerating or opening a device failed.
    #[error("Device unavailable: {0}")]
    DeviceUnavailable(String),
    /// Requested device is no longer attached.
    #[error("Device not found: {0}")]
    NotFound(DeviceId),
    /// Haptic actuator could not be opened or driven.
    #[error("Haptic unavailable: {0}")]
    HapticUnavailable(String),
    /// Raw preference value does not fit a device id.
    #[error("Invalid device id: {0}")]
    InvalidDeviceId(i64),
    /// Operation is not supported while the layer is not initialized.
    #[error("Operation unsupported")]
    Unsupported,
}

/// Convenient result alias for device layer operations.
pub type Result<T> = std::result::Result<T, Error>;
