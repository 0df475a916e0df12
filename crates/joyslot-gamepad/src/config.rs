use crate::types::SelectionPreference;

/// Settings the subsystem reads but never writes.
#[derive(Debug, Clone, PartialEq)]
pub struct JoyConfig {
    /// Which device to activate.
    pub active_device: SelectionPreference,
    /// Fraction of the trigger range that counts as a button press.
    pub axis_button_threshold: f32,
    /// Fraction of the axis range treated as zero.
    pub axis_deadzone: f32,
    /// Global haptics switch. When off, rumble is always stopped.
    pub haptics_enabled: bool,
    /// Controller mapping string handed to the device layer at init.
    pub mapping_hint: String,
    /// Skip subsystem initialization entirely.
    pub disabled: bool,
}

impl JoyConfig {
    pub const DEFAULT_AXIS_BUTTON_THRESHOLD: f32 = 0.3;
    pub const DEFAULT_AXIS_DEADZONE: f32 = 0.2;
}

impl Default for JoyConfig {
    fn default() -> Self {
        Self {
            active_device: SelectionPreference::FirstAvailable,
            axis_button_threshold: Self::DEFAULT_AXIS_BUTTON_THRESHOLD,
            axis_deadzone: Self::DEFAULT_AXIS_DEADZONE,
            haptics_enabled: true,
            mapping_hint: String::new(),
            disabled: false,
        }
    }
}
