use ahash::AHashSet;
use joyslot_gamepad::{AnalogCode, ButtonCode, InputSink};

use crate::{print_debug, print_info};

/// Host side of the input stream: keeps button and analog state and logs
/// every change.
#[derive(Debug, Default)]
pub(crate) struct HostInput {
    pressed: AHashSet<ButtonCode>,
    analog: [i32; AnalogCode::COUNT],
    active: bool,
}

impl HostInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn analog(&self, code: AnalogCode) -> i32 {
        self.analog[code.index()]
    }

    pub fn is_pressed(&self, code: ButtonCode) -> bool {
        self.pressed.contains(&code)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl InputSink for HostInput {
    fn post_button_pressed(&mut self, code: ButtonCode) {
        if self.pressed.insert(code) {
            print_info!("button pressed - {code:?}");
        }
    }

    fn post_button_released(&mut self, code: ButtonCode) {
        // Releases may repeat; only the first one after a press matters.
        if self.pressed.remove(&code) {
            print_info!("button released - {code:?}");
        }
    }

    fn post_analog_changed(&mut self, code: AnalogCode, value: i32, delta: i32) {
        self.analog[code.index()] = value;
        print_debug!("analog {code:?} = {value} ({delta:+})");
    }

    fn set_joystick_active(&mut self, active: bool) {
        self.active = active;
        if !active {
            self.pressed.clear();
            self.analog = [0; AnalogCode::COUNT];
        }
        print_info!("joystick input {}", if active { "enabled" } else { "disabled" });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_release_is_idempotent() {
        let mut host = HostInput::new();
        host.post_button_pressed(ButtonCode::LeftTrigger);
        host.post_button_released(ButtonCode::LeftTrigger);
        host.post_button_released(ButtonCode::LeftTrigger);
        assert!(!host.is_pressed(ButtonCode::LeftTrigger));
    }

    #[test]
    fn deactivation_clears_state() {
        let mut host = HostInput::new();
        host.set_joystick_active(true);
        host.post_button_pressed(ButtonCode::Start);
        host.post_analog_changed(AnalogCode::Z, 20000, 20000);
        host.set_joystick_active(false);
        assert!(!host.is_active());
        assert!(!host.is_pressed(ButtonCode::Start));
        assert_eq!(host.analog(AnalogCode::Z), 0);
    }
}
