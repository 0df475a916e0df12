use std::path::Path;
use std::sync::mpsc;

use crossbeam_channel::{Receiver, TrySendError};
use joyslot_gamepad::{
    describe_devices, notification_queue, AnalogCode, DeviceLayer, JoyConfig,
    JoystickSubsystem, NotificationReceiver, NotificationSender, SelectionPreference,
    Sdl2Layer,
};
use joyslot_settings::{
    parse_settings, SettingsError, SettingsEvent, SettingsWatcher, WatcherError,
};
use sdl2::event::Event;
use thiserror::Error;

use crate::host::HostInput;
use crate::{print_debug, print_error, print_info, print_warning};

/// How long to block waiting for an SDL event.
const EVENT_WAIT_MS: u32 = 10;

#[derive(Debug, Error)]
pub(crate) enum DaemonError {
    #[error("SDL error: {0}")]
    Sdl(String),
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
    #[error("gamepad error: {0}")]
    Gamepad(#[from] joyslot_gamepad::Error),
}

/// Command line overrides layered on top of the settings file.
#[derive(Debug, Clone, Default)]
pub(crate) struct Overrides {
    pub nojoy: bool,
    pub device: Option<i64>,
}

impl Overrides {
    fn apply(&self, mut config: JoyConfig) -> Result<JoyConfig, DaemonError> {
        if self.nojoy {
            config.disabled = true;
        }
        if let Some(device) = self.device {
            config.active_device = SelectionPreference::from_raw(device)?;
        }
        Ok(config)
    }
}

/// Load settings, falling back to defaults when the file does not exist.
fn load_config(path: &Path) -> Result<JoyConfig, DaemonError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(parse_settings(&content)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            print_debug!("no settings at {}, using defaults", path.display());
            Ok(JoyConfig::default())
        }
        Err(e) => Err(SettingsError::PathError(e).into()),
    }
}

type Subsystem = JoystickSubsystem<Sdl2Layer, HostInput>;

/// Hand an SDL event to the subsystem through the notification queue.
fn funnel(
    subsystem: &mut Subsystem,
    tx: &NotificationSender,
    rx: &NotificationReceiver,
    event: &Event,
) {
    let Some(notification) = subsystem.layer().notification(event) else {
        return;
    };
    if let Err(TrySendError::Full(notification)) = tx.try_send(notification) {
        drain(subsystem, rx);
        if let Err(e) = tx.try_send(notification) {
            print_warning!("dropped joystick notification: {e}");
        }
    }
}

fn drain(subsystem: &mut Subsystem, rx: &NotificationReceiver) {
    while subsystem.pump(rx) > 0 {}
}

fn apply_settings(
    subsystem: &mut Subsystem,
    overrides: &Overrides,
    settings_rx: &mpsc::Receiver<SettingsEvent>,
) {
    while let Ok(event) = settings_rx.try_recv() {
        match event {
            SettingsEvent::Changed(config) => {
                print_info!("settings changed, applying");
                let result = overrides
                    .apply(config)
                    .and_then(|config| subsystem.apply_config(config).map_err(DaemonError::from));
                if let Err(e) = result {
                    print_error!("failed to apply settings: {e}");
                }
            }
            SettingsEvent::Removed => {
                print_warning!("settings file removed, keeping current settings");
            }
            SettingsEvent::Error(WatcherError::Parse(e)) => {
                print_warning!("invalid settings, keeping current settings: {e}");
            }
            SettingsEvent::Error(e) => {
                print_error!("settings error: {e}");
            }
        }
    }
}

fn trigger_feedback(subsystem: &mut Subsystem) {
    let z = subsystem.sink().analog(AnalogCode::Z).max(0);
    let strength = (z as f32 / f32::from(i16::MAX)).clamp(0.0, 1.0);
    subsystem.set_rumble(strength, strength);
}

/// Run the joystick subsystem on the calling thread until `stop_rx` fires.
pub(crate) fn run(
    config_path: &Path,
    overrides: &Overrides,
    rumble_feedback: bool,
    stop_rx: &Receiver<()>,
) -> Result<(), DaemonError> {
    let config = overrides.apply(load_config(config_path)?)?;

    // SDL must live entirely within this thread
    let sdl = sdl2::init().map_err(DaemonError::Sdl)?;
    let mut event_pump = sdl.event_pump().map_err(DaemonError::Sdl)?;

    let mut subsystem = JoystickSubsystem::new(Sdl2Layer::new(sdl), HostInput::new(), config);
    if let Err(e) = subsystem.initialize() {
        print_error!("joystick subsystem unavailable: {e}");
    }

    let watcher = match SettingsWatcher::new(config_path) {
        Ok(pair) => Some(pair),
        Err(e) => {
            print_warning!("not watching {}: {e}", config_path.display());
            None
        }
    };

    let (tx, rx) = notification_queue();
    print_info!("joyslotd started. Listening for joystick events.");
    loop {
        if stop_rx.try_recv().is_ok() {
            break;
        }

        if let Some(event) = event_pump.wait_event_timeout(EVENT_WAIT_MS) {
            funnel(&mut subsystem, &tx, &rx, &event);
            for event in event_pump.poll_iter() {
                funnel(&mut subsystem, &tx, &rx, &event);
            }
        }
        drain(&mut subsystem, &rx);

        if let Some((_, settings_rx)) = watcher.as_ref() {
            apply_settings(&mut subsystem, overrides, settings_rx);
        }

        if rumble_feedback && subsystem.sink().is_active() {
            trigger_feedback(&mut subsystem);
        }
    }

    subsystem.shutdown();
    print_info!("joyslotd stopped.");
    Ok(())
}

/// Print every attached joystick.
pub(crate) fn list_devices(config_path: &Path) -> Result<(), DaemonError> {
    let config = load_config(config_path)?;
    let sdl = sdl2::init().map_err(DaemonError::Sdl)?;
    let mut layer = Sdl2Layer::new(sdl);
    layer.init(&config.mapping_hint)?;

    let devices = describe_devices(&layer);
    layer.quit();
    let devices = devices?;

    if devices.is_empty() {
        print_info!("did not detect any joysticks");
    }
    for device in devices {
        let status = if device.recognized {
            "recognized"
        } else {
            "no controller mapping"
        };
        print_info!("#{} '{}' ({}) - {status}", device.id, device.name, device.guid);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_take_precedence() {
        let overrides = Overrides {
            nojoy: true,
            device: Some(3),
        };
        let config = overrides.apply(JoyConfig::default()).expect("valid overrides");
        assert!(config.disabled);
        assert_eq!(config.active_device, SelectionPreference::Device(3));
    }

    #[test]
    fn empty_overrides_keep_settings() {
        let config = JoyConfig {
            axis_deadzone: 0.4,
            ..JoyConfig::default()
        };
        let applied = Overrides::default().apply(config.clone()).expect("valid overrides");
        assert_eq!(applied, config);
    }

    #[test]
    fn out_of_range_device_override_is_an_error() {
        let overrides = Overrides {
            nojoy: false,
            device: Some(i64::from(u32::MAX) + 1),
        };
        assert!(matches!(
            overrides.apply(JoyConfig::default()),
            Err(DaemonError::Gamepad(joyslot_gamepad::Error::InvalidDeviceId(_)))
        ));
    }

    #[test]
    fn missing_settings_file_means_defaults() {
        let path = Path::new("definitely/not/here/joyslot.yaml");
        let config = load_config(path).expect("defaults");
        assert_eq!(config, JoyConfig::default());
    }
}
