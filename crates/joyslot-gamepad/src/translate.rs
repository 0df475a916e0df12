use log::debug;

use crate::layer::InputSink;
use crate::raw;
use crate::types::{AnalogCode, ButtonCode};

/// Map a raw controller button to a host button code.
///
/// Returns `None` for buttons the host has no code for.
pub fn button_code(button: u8) -> Option<ButtonCode> {
    Some(match button {
        raw::BUTTON_A | raw::BUTTON_B | raw::BUTTON_X | raw::BUTTON_Y => {
            ButtonCode::Joystick(button)
        }
        raw::BUTTON_BACK => ButtonCode::Back,
        raw::BUTTON_START => ButtonCode::Start,
        // No dedicated host code for the guide button.
        raw::BUTTON_GUIDE => ButtonCode::Back,
        raw::BUTTON_LEFT_STICK => ButtonCode::LeftStick,
        raw::BUTTON_RIGHT_STICK => ButtonCode::RightStick,
        raw::BUTTON_LEFT_SHOULDER => ButtonCode::LeftShoulder,
        raw::BUTTON_RIGHT_SHOULDER => ButtonCode::RightShoulder,
        raw::BUTTON_DPAD_UP => ButtonCode::DPadUp,
        raw::BUTTON_DPAD_DOWN => ButtonCode::DPadDown,
        raw::BUTTON_DPAD_LEFT => ButtonCode::DPadLeft,
        raw::BUTTON_DPAD_RIGHT => ButtonCode::DPadRight,
        _ => return None,
    })
}

/// Map a raw controller axis to a host analog channel.
pub fn analog_code(axis: u8) -> Option<AnalogCode> {
    Some(match axis {
        raw::AXIS_LEFT_X => AnalogCode::X,
        raw::AXIS_LEFT_Y => AnalogCode::Y,
        raw::AXIS_RIGHT_X => AnalogCode::U,
        raw::AXIS_RIGHT_Y => AnalogCode::R,
        raw::AXIS_TRIGGER_LEFT | raw::AXIS_TRIGGER_RIGHT => AnalogCode::Z,
        _ => return None,
    })
}

fn trigger_button(axis: u8) -> Option<ButtonCode> {
    match axis {
        raw::AXIS_TRIGGER_LEFT => Some(ButtonCode::LeftTrigger),
        raw::AXIS_TRIGGER_RIGHT => Some(ButtonCode::RightTrigger),
        _ => None,
    }
}

/// Ratios that shape axis translation, both in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisTuning {
    pub button_threshold: f32,
    pub deadzone: f32,
}

impl AxisTuning {
    /// Raw value a trigger must exceed to count as pressed.
    #[inline]
    pub fn press_threshold(&self) -> i32 {
        (self.button_threshold * raw::AXIS_MAX as f32) as i32
    }

    /// Raw magnitude below which a sample is treated as zero.
    #[inline]
    pub fn deadzone_min(&self) -> i32 {
        (self.deadzone * raw::AXIS_MAX as f32) as i32
    }
}

/// Last posted value of one analog channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AxisState {
    pub value: i32,
    pub delta: i32,
}

/// Press tracking for a button synthesized from a trigger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TriggerButtonState {
    pub repeats: u32,
}

/// Turns raw button and axis samples of the active device into host events.
#[derive(Debug, Default)]
pub struct EventTranslator {
    axes: [AxisState; AnalogCode::COUNT],
    triggers: [TriggerButtonState; 2],
}

impl EventTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget all analog and trigger state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn axis_state(&self, code: AnalogCode) -> AxisState {
        self.axes[code.index()]
    }

    pub fn button<S: InputSink>(&self, sink: &mut S, button: u8, pressed: bool) {
        let Some(code) = button_code(button) else {
            return;
        };
        if pressed {
            sink.post_button_pressed(code);
        } else {
            sink.post_button_released(code);
        }
    }

    pub fn axis<S: InputSink>(
        &mut self,
        sink: &mut S,
        axis: u8,
        value: i16,
        tuning: AxisTuning,
    ) {
        let Some(code) = analog_code(axis) else {
            debug!("invalid code for axis {axis}");
            return;
        };
        let mut value = i32::from(value);

        if let Some(button) = trigger_button(axis) {
            let key = &mut self.triggers[usize::from(axis - raw::AXIS_TRIGGER_LEFT)];
            if value > tuning.press_threshold() {
                if key.repeats < 1 {
                    sink.post_button_pressed(button);
                }
                key.repeats = key.repeats.saturating_add(1);
            } else {
                // Re-posted for every sample below the threshold; consumers
                // treat repeated releases as idempotent.
                sink.post_button_released(button);
                key.repeats = 0;
            }
        }

        if value.abs() < tuning.deadzone_min() {
            value = 0;
        }

        let state = &mut self.axes[code.index()];
        state.delta = value - state.value;
        state.value = value;
        if state.delta != 0 {
            sink.post_analog_changed(code, value, state.delta);
        }
    }
}
