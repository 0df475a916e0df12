use crate::error::Result;
use crate::types::{AnalogCode, ButtonCode, DeviceId, DeviceInfo};

/// Capabilities the subsystem needs from the platform device library.
///
/// Implementations are driven from a single thread; none of the calls are
/// expected to block for long.
pub trait DeviceLayer {
    /// Open device handle.
    type Device;
    /// Open haptic actuator bound to a device.
    type Haptic;

    /// Bring up the controller and haptic subsystems. A non-empty
    /// `mapping_hint` must be applied before the controller subsystem starts.
    fn init(&mut self, mapping_hint: &str) -> Result<()>;

    /// Tear the subsystems down. Stops notification delivery.
    fn quit(&mut self);

    /// Ids of all currently attached devices, recognized or not.
    fn devices(&self) -> Result<Vec<DeviceId>>;

    /// Whether the device has a known game controller mapping.
    fn is_gamepad(&self, id: DeviceId) -> bool;

    /// Name and GUID for diagnostics.
    fn describe(&self, id: DeviceId) -> DeviceInfo;

    fn open_device(&mut self, id: DeviceId) -> Result<Self::Device>;

    /// Id reported by an open handle.
    fn device_id(&self, device: &Self::Device) -> DeviceId;

    fn close_device(&mut self, device: Self::Device);

    /// Open the haptic actuator of `device` and prepare it for rumble.
    fn open_haptic(&mut self, device: &Self::Device) -> Result<Self::Haptic>;

    fn close_haptic(&mut self, haptic: Self::Haptic);

    /// Start a rumble at `strength` that lasts until the next play or stop.
    fn play_rumble(&mut self, haptic: &mut Self::Haptic, strength: f32) -> Result<()>;

    fn stop_rumble(&mut self, haptic: &mut Self::Haptic) -> Result<()>;
}

/// Host input system the translated events are posted to.
pub trait InputSink {
    fn post_button_pressed(&mut self, code: ButtonCode);

    fn post_button_released(&mut self, code: ButtonCode);

    fn post_analog_changed(&mut self, code: AnalogCode, value: i32, delta: i32);

    /// Joystick input became available (`true`) or went away (`false`).
    fn set_joystick_active(&mut self, active: bool);
}
