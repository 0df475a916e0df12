use log::warn;

use crate::layer::DeviceLayer;
use crate::session::DeviceSession;

/// Strength changes below this are not forwarded to the device.
pub(crate) const RUMBLE_EPSILON: f32 = 0.01;

/// What a rumble update did to the haptic actuator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RumbleAction {
    /// No command was issued.
    Unchanged,
    /// A stop command was issued.
    Stopped,
    /// A continuous rumble was started at this strength.
    Played(f32),
}

impl<D, H> DeviceSession<D, H> {
    /// Blend two motor strengths into a single haptic intensity.
    ///
    /// Redundant updates are suppressed; a failed play still records the
    /// attempted strength and is not retried.
    pub(crate) fn set_rumble<L>(
        &mut self,
        layer: &mut L,
        left: f32,
        right: f32,
        haptics_enabled: bool,
    ) -> RumbleAction
    where
        L: DeviceLayer<Device = D, Haptic = H>,
    {
        let Some(haptic) = self.haptic.as_mut() else {
            return RumbleAction::Unchanged;
        };

        let strength = (left + right) / 2.0;
        if strength < RUMBLE_EPSILON || !haptics_enabled {
            if !self.rumble_enabled {
                return RumbleAction::Unchanged;
            }
            if let Err(e) = layer.stop_rumble(haptic) {
                warn!("couldn't stop rumble: {e}");
            }
            self.rumble_enabled = false;
            self.current_rumble = 0.0;
            return RumbleAction::Stopped;
        }

        if self.rumble_enabled && (self.current_rumble - strength).abs() < RUMBLE_EPSILON {
            return RumbleAction::Unchanged;
        }

        self.rumble_enabled = true;
        self.current_rumble = strength;
        if let Err(e) = layer.play_rumble(haptic, strength) {
            warn!("couldn't play rumble (strength {strength:.1}): {e}");
        }
        RumbleAction::Played(strength)
    }
}
