mod parse;
mod v1;
mod watcher;

use thiserror::Error;

pub use parse::parse_settings;
pub use v1::SettingsV1;
pub use watcher::{Error as WatcherError, SettingsEvent, SettingsWatcher};

/// Default settings file name, looked up in the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = "joyslot.yaml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("yaml deserialize error: {0}")]
    YamlDeserializeError(#[from] serde_yaml::Error),
    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),
    #[error("{0} must be within [0, 1], got {1}")]
    OutOfRange(&'static str, f32),
    #[error("active_device {0} is not a valid device id")]
    InvalidDevice(i64),
    #[error("path error: {0}")]
    PathError(#[from] std::io::Error),
}
