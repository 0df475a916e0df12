use log::warn;

use crate::error::Result;
use crate::layer::DeviceLayer;
use crate::raw::BUTTON_COUNT;
use crate::types::DeviceId;

/// Lifecycle phase of the single device slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

/// The open handle to the active device and its haptic actuator.
#[derive(Debug)]
pub struct DeviceSession<D, H> {
    pub(crate) device_id: DeviceId,
    pub(crate) device: D,
    pub(crate) haptic: Option<H>,
    pub(crate) button_count: u32,
    pub(crate) rumble_enabled: bool,
    pub(crate) current_rumble: f32,
}

impl<D, H> DeviceSession<D, H> {
    /// Open `id` and try to attach its haptic actuator.
    ///
    /// A haptic failure leaves the session usable without rumble.
    pub(crate) fn open<L>(layer: &mut L, id: DeviceId) -> Result<Self>
    where
        L: DeviceLayer<Device = D, Haptic = H>,
    {
        let device = layer.open_device(id)?;
        let haptic = match layer.open_haptic(&device) {
            Ok(haptic) => Some(haptic),
            Err(e) => {
                warn!("unable to initialize rumble for joystick #{id}: {e}");
                None
            }
        };
        Ok(Self {
            device_id: layer.device_id(&device),
            device,
            haptic,
            button_count: BUTTON_COUNT,
            rumble_enabled: false,
            current_rumble: 0.0,
        })
    }

    /// Stop any rumble and release both handles.
    pub(crate) fn close<L>(mut self, layer: &mut L)
    where
        L: DeviceLayer<Device = D, Haptic = H>,
    {
        if let Some(mut haptic) = self.haptic.take() {
            if self.rumble_enabled {
                if let Err(e) = layer.stop_rumble(&mut haptic) {
                    warn!("couldn't stop rumble on joystick #{}: {e}", self.device_id);
                }
            }
            layer.close_haptic(haptic);
        }
        layer.close_device(self.device);
    }

    pub fn device_id(&self) -> DeviceId {
        self.device_id
    }

    pub fn has_haptic(&self) -> bool {
        self.haptic.is_some()
    }

    pub fn button_count(&self) -> u32 {
        self.button_count
    }

    pub fn rumble_enabled(&self) -> bool {
        self.rumble_enabled
    }

    pub fn current_rumble(&self) -> f32 {
        self.current_rumble
    }
}
