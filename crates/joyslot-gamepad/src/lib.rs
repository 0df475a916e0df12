mod catalog;
mod config;
mod error;
mod layer;
mod notification;
pub mod raw;
mod rumble;
mod select;
mod session;
mod subsystem;
mod translate;
mod types;

#[cfg(feature = "sdl2-backend")]
mod sdl2_layer;

#[cfg(test)]
mod testing;

pub use crate::catalog::{describe_devices, find_recognized_devices, RecognizedDevices};
pub use crate::config::JoyConfig;
pub use crate::error::{Error, Result};
pub use crate::layer::{DeviceLayer, InputSink};
pub use crate::notification::{
    notification_queue, Notification, NotificationReceiver, NotificationSender,
    MAX_EVENTS_PER_PUMP, QUEUE_CAPACITY,
};
pub use crate::rumble::RumbleAction;
pub use crate::select::{select, should_activate, Selection};
pub use crate::session::{DeviceSession, SessionState};
pub use crate::subsystem::JoystickSubsystem;
pub use crate::translate::{
    analog_code, button_code, AxisState, AxisTuning, EventTranslator,
    TriggerButtonState,
};
pub use crate::types::{AnalogCode, ButtonCode, DeviceId, DeviceInfo, SelectionPreference};

#[cfg(feature = "sdl2-backend")]
pub use crate::sdl2_layer::Sdl2Layer;
