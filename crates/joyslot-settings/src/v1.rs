use joyslot_gamepad::{JoyConfig, SelectionPreference};
use serde::Deserialize;

use crate::SettingsError;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsV1 {
    pub version: u8,
    /// -1 for the first available device, otherwise a device id.
    #[serde(default = "first_available")]
    pub active_device: i64,
    #[serde(default = "default_threshold")]
    pub axis_button_threshold: f32,
    #[serde(default = "default_deadzone")]
    pub axis_deadzone: f32,
    #[serde(default = "enabled")]
    pub haptics: bool,
    #[serde(default)]
    pub mapping: String,
    #[serde(default)]
    pub disabled: bool,
}

fn first_available() -> i64 {
    -1
}

fn default_threshold() -> f32 {
    JoyConfig::DEFAULT_AXIS_BUTTON_THRESHOLD
}

fn default_deadzone() -> f32 {
    JoyConfig::DEFAULT_AXIS_DEADZONE
}

fn enabled() -> bool {
    true
}

fn unit_ratio(name: &'static str, value: f32) -> Result<f32, SettingsError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(SettingsError::OutOfRange(name, value))
    }
}

impl SettingsV1 {
    pub fn to_config(self) -> Result<JoyConfig, SettingsError> {
        Ok(JoyConfig {
            active_device: SelectionPreference::from_raw(self.active_device)
                .map_err(|_| SettingsError::InvalidDevice(self.active_device))?,
            axis_button_threshold: unit_ratio(
                "axis_button_threshold",
                self.axis_button_threshold,
            )?,
            axis_deadzone: unit_ratio("axis_deadzone", self.axis_deadzone)?,
            haptics_enabled: self.haptics,
            mapping_hint: self.mapping,
            disabled: self.disabled,
        })
    }
}
