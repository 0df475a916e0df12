use std::{fs, path::Path};

use joyslot_gamepad::JoyConfig;
use serde::Deserialize;

use crate::{v1::SettingsV1, SettingsError};

/// Parse yaml settings.
pub fn parse_settings(input: &str) -> Result<JoyConfig, SettingsError> {
    let version = parse_version(input)?;
    match version {
        1 => {
            let settings: SettingsV1 = serde_yaml::from_str(input)?;
            settings.to_config()
        }
        _ => Err(SettingsError::UnsupportedVersion(version)),
    }
}

/// Read and parse a settings file.
pub(crate) fn load_settings(path: &Path) -> Result<JoyConfig, SettingsError> {
    let content = fs::read_to_string(path)?;
    parse_settings(&content)
}

/// Settings with a version.
#[derive(Debug, Clone, Deserialize)]
struct VersionedSettings {
    version: u8,
}

/// Parse the version of yaml settings.
fn parse_version(input: &str) -> Result<u8, SettingsError> {
    let raw: VersionedSettings = serde_yaml::from_str(input)?;
    Ok(raw.version)
}
