//! Scripted device layer and recording sink for unit tests.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::layer::{DeviceLayer, InputSink};
use crate::session::DeviceSession;
use crate::types::{AnalogCode, ButtonCode, DeviceId, DeviceInfo};

pub(crate) type MockSession = DeviceSession<MockDevice, MockHaptic>;

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct MockDevice(pub DeviceId);

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct MockHaptic(pub DeviceId);

#[derive(Debug, Default)]
pub(crate) struct MockLayer {
    /// Attached devices with their recognized flag, in enumeration order.
    pub attached: Vec<(DeviceId, bool)>,
    pub initialized: bool,
    pub init_hints: Vec<String>,
    pub inits: usize,
    pub quits: usize,
    pub open_devices: Vec<DeviceId>,
    pub open_haptics: Vec<DeviceId>,
    pub opened: Vec<DeviceId>,
    pub closed: Vec<DeviceId>,
    pub rumble_plays: Vec<f32>,
    pub rumble_stops: usize,
    pub fail_init: bool,
    pub fail_enumeration: bool,
    pub fail_rumble: bool,
    pub fail_open: HashSet<DeviceId>,
    pub fail_haptic: HashSet<DeviceId>,
}

impl MockLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, id: DeviceId) {
        self.attached.push((id, true));
    }

    pub fn attach_unrecognized(&mut self, id: DeviceId) {
        self.attached.push((id, false));
    }

    pub fn detach(&mut self, id: DeviceId) {
        self.attached.retain(|(d, _)| *d != id);
    }
}

impl DeviceLayer for MockLayer {
    type Device = MockDevice;
    type Haptic = MockHaptic;

    fn init(&mut self, mapping_hint: &str) -> Result<()> {
        if self.fail_init {
            return Err(Error::BackendInit("scripted".into()));
        }
        self.initialized = true;
        self.inits += 1;
        self.init_hints.push(mapping_hint.to_string());
        Ok(())
    }

    fn quit(&mut self) {
        self.initialized = false;
        self.quits += 1;
    }

    fn devices(&self) -> Result<Vec<DeviceId>> {
        if self.fail_enumeration {
            return Err(Error::DeviceUnavailable("scripted".into()));
        }
        Ok(self.attached.iter().map(|(id, _)| *id).collect())
    }

    fn is_gamepad(&self, id: DeviceId) -> bool {
        self.attached.iter().any(|(d, recognized)| *d == id && *recognized)
    }

    fn describe(&self, id: DeviceId) -> DeviceInfo {
        DeviceInfo {
            id,
            name: format!("mock pad {id}"),
            guid: format!("{id:032x}"),
            recognized: self.is_gamepad(id),
        }
    }

    fn open_device(&mut self, id: DeviceId) -> Result<MockDevice> {
        if self.fail_open.contains(&id) {
            return Err(Error::DeviceUnavailable("scripted".into()));
        }
        if !self.attached.iter().any(|(d, _)| *d == id) {
            return Err(Error::NotFound(id));
        }
        self.open_devices.push(id);
        self.opened.push(id);
        Ok(MockDevice(id))
    }

    fn device_id(&self, device: &MockDevice) -> DeviceId {
        device.0
    }

    fn close_device(&mut self, device: MockDevice) {
        self.open_devices.retain(|d| *d != device.0);
        self.closed.push(device.0);
    }

    fn open_haptic(&mut self, device: &MockDevice) -> Result<MockHaptic> {
        if self.fail_haptic.contains(&device.0) {
            return Err(Error::HapticUnavailable("scripted".into()));
        }
        self.open_haptics.push(device.0);
        Ok(MockHaptic(device.0))
    }

    fn close_haptic(&mut self, haptic: MockHaptic) {
        self.open_haptics.retain(|d| *d != haptic.0);
    }

    fn play_rumble(&mut self, _haptic: &mut MockHaptic, strength: f32) -> Result<()> {
        if self.fail_rumble {
            return Err(Error::HapticUnavailable("scripted".into()));
        }
        self.rumble_plays.push(strength);
        Ok(())
    }

    fn stop_rumble(&mut self, _haptic: &mut MockHaptic) -> Result<()> {
        self.rumble_stops += 1;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HostEvent {
    Pressed(ButtonCode),
    Released(ButtonCode),
    Analog(AnalogCode, i32, i32),
    Active(bool),
}

#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
    pub events: Vec<HostEvent>,
}

impl RecordingSink {
    pub fn take(&mut self) -> Vec<HostEvent> {
        std::mem::take(&mut self.events)
    }
}

impl InputSink for RecordingSink {
    fn post_button_pressed(&mut self, code: ButtonCode) {
        self.events.push(HostEvent::Pressed(code));
    }

    fn post_button_released(&mut self, code: ButtonCode) {
        self.events.push(HostEvent::Released(code));
    }

    fn post_analog_changed(&mut self, code: AnalogCode, value: i32, delta: i32) {
        self.events.push(HostEvent::Analog(code, value, delta));
    }

    fn set_joystick_active(&mut self, active: bool) {
        self.events.push(HostEvent::Active(active));
    }
}
