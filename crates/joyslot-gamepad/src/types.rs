use std::fmt;

use crate::error::{Error, Result};

/// Identity the device layer assigns to a physical connection.
///
/// Stable while the device stays attached and never reused while the process
/// runs. Reconnecting the same unit yields a new id.
pub type DeviceId = u32;

/// Which device the subsystem is allowed to activate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionPreference {
    /// Use the first recognized device that shows up.
    #[default]
    FirstAvailable,
    /// Only ever activate this device.
    Device(DeviceId),
}

impl SelectionPreference {
    /// Convert the `-1 or id` integer form used by settings files.
    ///
    /// Any negative value means first available. Values above the id range
    /// are an error.
    pub fn from_raw(value: i64) -> Result<Self> {
        if value < 0 {
            return Ok(SelectionPreference::FirstAvailable);
        }
        DeviceId::try_from(value)
            .map(SelectionPreference::Device)
            .map_err(|_| Error::InvalidDeviceId(value))
    }

    pub fn to_raw(self) -> i64 {
        match self {
            SelectionPreference::FirstAvailable => -1,
            SelectionPreference::Device(id) => i64::from(id),
        }
    }
}

impl fmt::Display for SelectionPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionPreference::FirstAvailable => f.write_str("first available"),
            SelectionPreference::Device(id) => write!(f, "#{id}"),
        }
    }
}

/// Host button codes posted to the input system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonCode {
    /// Generic joystick button; the four face buttons land on 0..=3.
    Joystick(u8),
    Back,
    Start,
    LeftStick,
    RightStick,
    LeftShoulder,
    RightShoulder,
    DPadUp,
    DPadDown,
    DPadLeft,
    DPadRight,
    /// Synthesized from the left trigger axis.
    LeftTrigger,
    /// Synthesized from the right trigger axis.
    RightTrigger,
}

/// Host analog channels. Both triggers share [`AnalogCode::Z`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalogCode {
    X,
    Y,
    U,
    R,
    Z,
}

impl AnalogCode {
    pub const COUNT: usize = 5;

    pub const ALL: [AnalogCode; AnalogCode::COUNT] =
        [AnalogCode::X, AnalogCode::Y, AnalogCode::U, AnalogCode::R, AnalogCode::Z];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            AnalogCode::X => 0,
            AnalogCode::Y => 1,
            AnalogCode::U => 2,
            AnalogCode::R => 3,
            AnalogCode::Z => 4,
        }
    }
}

/// Device description used for diagnostics and listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub id: DeviceId,
    pub name: String,
    pub guid: String,
    pub recognized: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_raw_preference_means_first_available() {
        for raw in [-1, -42, i64::MIN] {
            assert_eq!(
                SelectionPreference::from_raw(raw).expect("negative is valid"),
                SelectionPreference::FirstAvailable
            );
        }
    }

    #[test]
    fn non_negative_raw_preference_names_a_device() {
        assert_eq!(
            SelectionPreference::from_raw(0).expect("valid id"),
            SelectionPreference::Device(0)
        );
        assert_eq!(SelectionPreference::from_raw(7).expect("valid id").to_raw(), 7);
        assert_eq!(
            SelectionPreference::from_raw(i64::from(u32::MAX)).expect("valid id"),
            SelectionPreference::Device(u32::MAX)
        );
    }

    #[test]
    fn out_of_range_raw_preference_is_rejected() {
        let raw = i64::from(u32::MAX) + 1;
        assert!(matches!(
            SelectionPreference::from_raw(raw),
            Err(Error::InvalidDeviceId(v)) if v == raw
        ));
    }

    #[test]
    fn analog_indices_are_dense() {
        for (i, code) in AnalogCode::ALL.iter().enumerate() {
            assert_eq!(code.index(), i);
        }
    }
}
