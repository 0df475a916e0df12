use log::warn;
use sdl2::controller::GameController;
use sdl2::event::Event;
use sdl2::haptic::Haptic;
use sdl2::{GameControllerSubsystem, HapticSubsystem, JoystickSubsystem, Sdl};

use crate::error::{Error, Result};
use crate::layer::DeviceLayer;
use crate::notification::Notification;
use crate::types::{DeviceId, DeviceInfo};

const MAPPING_HINT: &str = "SDL_GAMECONTROLLERCONFIG";

/// Rumble duration SDL treats as "until stopped".
const HAPTIC_INFINITY: u32 = u32::MAX;

/// SDL2-backed device layer. SDL must live entirely on the calling thread.
pub struct Sdl2Layer {
    sdl: Sdl,
    joystick: Option<JoystickSubsystem>,
    controller: Option<GameControllerSubsystem>,
    haptic: Option<HapticSubsystem>,
}

impl Sdl2Layer {
    pub fn new(sdl: Sdl) -> Self {
        Self {
            sdl,
            joystick: None,
            controller: None,
            haptic: None,
        }
    }

    fn joystick(&self) -> Result<&JoystickSubsystem> {
        self.joystick.as_ref().ok_or(Error::Unsupported)
    }

    /// Enumeration index of the device with instance id `id`.
    ///
    /// Indices shift on every hotplug, so they are resolved on demand.
    fn index_of(&self, id: DeviceId) -> Option<u32> {
        let joystick = self.joystick.as_ref()?;
        let count = joystick.num_joysticks().ok()?;
        (0..count).find(|&index| {
            joystick
                .open(index)
                .map(|js| js.instance_id() == id)
                .unwrap_or(false)
        })
    }

    fn instance_id_at(&self, index: u32) -> Option<DeviceId> {
        let joystick = self.joystick.as_ref()?;
        joystick.open(index).ok().map(|js| js.instance_id())
    }

    /// Convert an SDL event into a notification, if it concerns controllers.
    pub fn notification(&self, event: &Event) -> Option<Notification> {
        Some(match *event {
            // `which` is the enumeration index for added devices.
            Event::ControllerDeviceAdded { which, .. } => {
                Notification::Attached(self.instance_id_at(which)?)
            }
            Event::ControllerDeviceRemoved { which, .. } => Notification::Removed(which),
            Event::ControllerAxisMotion {
                which, axis, value, ..
            } => Notification::AxisMotion {
                id: which,
                axis: u8::try_from(axis as i32).ok()?,
                value,
            },
            Event::ControllerButtonDown { which, button, .. } => Notification::ButtonDown {
                id: which,
                button: u8::try_from(button as i32).ok()?,
            },
            Event::ControllerButtonUp { which, button, .. } => Notification::ButtonUp {
                id: which,
                button: u8::try_from(button as i32).ok()?,
            },
            _ => return None,
        })
    }
}

impl DeviceLayer for Sdl2Layer {
    type Device = GameController;
    type Haptic = Haptic;

    fn init(&mut self, mapping_hint: &str) -> Result<()> {
        if !mapping_hint.is_empty() && !sdl2::hint::set(MAPPING_HINT, mapping_hint) {
            warn!("device layer rejected the controller mapping hint");
        }
        let controller = self.sdl.game_controller().map_err(Error::BackendInit)?;
        let joystick = self.sdl.joystick().map_err(Error::BackendInit)?;
        let haptic = match self.sdl.haptic() {
            Ok(h) => Some(h),
            Err(e) => {
                warn!("haptic subsystem unavailable: {e}");
                None
            }
        };
        self.controller = Some(controller);
        self.joystick = Some(joystick);
        self.haptic = haptic;
        Ok(())
    }

    fn quit(&mut self) {
        // Dropping the last subsystem handle quits it.
        self.haptic = None;
        self.controller = None;
        self.joystick = None;
    }

    fn devices(&self) -> Result<Vec<DeviceId>> {
        let joystick = self.joystick()?;
        let count = joystick.num_joysticks().map_err(Error::DeviceUnavailable)?;
        Ok((0..count).filter_map(|index| self.instance_id_at(index)).collect())
    }

    fn is_gamepad(&self, id: DeviceId) -> bool {
        let Some(controller) = self.controller.as_ref() else {
            return false;
        };
        self.index_of(id)
            .is_some_and(|index| controller.is_game_controller(index))
    }

    fn describe(&self, id: DeviceId) -> DeviceInfo {
        let index = self.index_of(id);
        let joystick = self.joystick.as_ref();
        let name = index
            .zip(joystick)
            .and_then(|(i, js)| js.name_for_index(i).ok())
            .unwrap_or_else(|| "unknown".to_string());
        let guid = index
            .zip(joystick)
            .and_then(|(i, js)| js.device_guid(i).ok())
            .map(|g| g.string())
            .unwrap_or_default();
        DeviceInfo {
            id,
            name,
            guid,
            recognized: self.is_gamepad(id),
        }
    }

    fn open_device(&mut self, id: DeviceId) -> Result<GameController> {
        let controller = self.controller.as_ref().ok_or(Error::Unsupported)?;
        let index = self.index_of(id).ok_or(Error::NotFound(id))?;
        controller
            .open(index)
            .map_err(|e| Error::DeviceUnavailable(e.to_string()))
    }

    fn device_id(&self, device: &GameController) -> DeviceId {
        device.instance_id()
    }

    fn close_device(&mut self, device: GameController) {
        drop(device);
    }

    fn open_haptic(&mut self, device: &GameController) -> Result<Haptic> {
        let haptic = self
            .haptic
            .as_ref()
            .ok_or_else(|| Error::HapticUnavailable("haptic subsystem not initialized".into()))?;
        let id = device.instance_id();
        let index = self.index_of(id).ok_or(Error::NotFound(id))?;
        haptic
            .open_from_joystick_id(index)
            .map_err(|e| Error::HapticUnavailable(e.to_string()))
    }

    fn close_haptic(&mut self, haptic: Haptic) {
        drop(haptic);
    }

    fn play_rumble(&mut self, haptic: &mut Haptic, strength: f32) -> Result<()> {
        haptic.rumble_play(strength, HAPTIC_INFINITY);
        Ok(())
    }

    fn stop_rumble(&mut self, haptic: &mut Haptic) -> Result<()> {
        haptic.rumble_stop();
        Ok(())
    }
}
