use std::thread::{self, ThreadId};

use log::{debug, info, warn};

use crate::catalog::find_recognized_devices;
use crate::config::JoyConfig;
use crate::error::Result;
use crate::layer::{DeviceLayer, InputSink};
use crate::notification::{Notification, NotificationReceiver, MAX_EVENTS_PER_PUMP};
use crate::rumble::RumbleAction;
use crate::select::{select, Selection};
use crate::session::{DeviceSession, SessionState};
use crate::translate::{AxisTuning, EventTranslator};
use crate::types::{DeviceId, SelectionPreference};

type Session<L> = DeviceSession<<L as DeviceLayer>::Device, <L as DeviceLayer>::Haptic>;

/// Joystick subsystem: owns the single device slot and reacts to hotplug.
///
/// All entry points must be called from the thread that created it.
pub struct JoystickSubsystem<L: DeviceLayer, S: InputSink> {
    layer: L,
    sink: S,
    config: JoyConfig,
    session: Option<Session<L>>,
    state: SessionState,
    translator: EventTranslator,
    initialized: bool,
    owner: ThreadId,
}

impl<L: DeviceLayer, S: InputSink> JoystickSubsystem<L, S> {
    pub fn new(layer: L, sink: S, config: JoyConfig) -> Self {
        Self {
            layer,
            sink,
            config,
            session: None,
            state: SessionState::Closed,
            translator: EventTranslator::new(),
            initialized: false,
            owner: thread::current().id(),
        }
    }

    pub fn layer(&self) -> &L {
        &self.layer
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn config(&self) -> &JoyConfig {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Id of the open device, if any.
    pub fn active_device(&self) -> Option<DeviceId> {
        self.session.as_ref().map(DeviceSession::device_id)
    }

    pub fn translator(&self) -> &EventTranslator {
        &self.translator
    }

    /// Bring up the device layer and activate a device if one qualifies.
    ///
    /// Does nothing when the subsystem is disabled. Re-initializing shuts the
    /// previous instance down first.
    pub fn initialize(&mut self) -> Result<()> {
        self.assert_owner();
        if self.initialized {
            self.shutdown();
        }
        if self.config.disabled {
            info!("joystick subsystem disabled, skipping initialization");
            return Ok(());
        }

        let hint = self.config.mapping_hint.clone();
        if !hint.is_empty() {
            debug!("passing controller mapping to device layer ('{hint}')");
        }
        if let Err(e) = self.layer.init(&hint) {
            warn!("joystick init failed: {e}");
            return Err(e);
        }
        self.initialized = true;

        let recognized = match find_recognized_devices(&self.layer) {
            Ok(ids) => ids,
            Err(e) => {
                warn!("failed to enumerate joysticks: {e}");
                return Ok(());
            }
        };
        if recognized.is_empty() {
            info!("did not detect any valid joysticks");
        }
        for id in recognized {
            self.on_attached(id);
        }
        Ok(())
    }

    /// Close the open session and stop the device layer.
    pub fn shutdown(&mut self) {
        self.assert_owner();
        if !self.initialized {
            return;
        }
        // Stop accepting notifications before tearing anything down.
        self.initialized = false;
        if let Some(id) = self.active_device() {
            self.close_if_active(id);
        }
        self.layer.quit();
    }

    /// Process a single notification from the device layer.
    pub fn handle(&mut self, notification: Notification) {
        self.assert_owner();
        if !self.initialized {
            return;
        }
        match notification {
            Notification::Attached(id) => self.on_attached(id),
            Notification::Removed(id) => self.on_removed(id),
            Notification::ButtonDown { id, button } => {
                if self.active_device() != Some(id) {
                    warn!(
                        "not the active device ({} x {id})",
                        self.active_label()
                    );
                    return;
                }
                self.translator.button(&mut self.sink, button, true);
            }
            Notification::ButtonUp { id, button } => {
                if self.active_device() != Some(id) {
                    return;
                }
                self.translator.button(&mut self.sink, button, false);
            }
            Notification::AxisMotion { id, axis, value } => {
                if self.active_device() != Some(id) {
                    return;
                }
                let tuning = self.tuning();
                self.translator.axis(&mut self.sink, axis, value, tuning);
            }
        }
    }

    /// Drain queued notifications, at most [`MAX_EVENTS_PER_PUMP`] per call.
    ///
    /// Returns the number of notifications handled.
    pub fn pump(&mut self, rx: &NotificationReceiver) -> usize {
        let mut handled = 0;
        while handled < MAX_EVENTS_PER_PUMP {
            let Ok(notification) = rx.try_recv() else {
                break;
            };
            self.handle(notification);
            handled += 1;
        }
        handled
    }

    /// A recognized device showed up; open it if the policy allows.
    pub fn on_attached(&mut self, id: DeviceId) {
        self.assert_owner();
        if !self.initialized {
            return;
        }
        if !self.layer.is_gamepad(id) {
            warn!("joystick #{id} is not recognized by the game controller layer");
            return;
        }

        let current = self.active_device();
        match select(id, self.config.active_device, current) {
            Selection::AlreadyActive => return,
            Selection::Busy { active } => {
                let name = self.layer.describe(id).name;
                info!(
                    "detected supported joystick #{id} '{name}'. currently active joystick is #{active}"
                );
                return;
            }
            Selection::NotPreferred { preferred } => {
                let name = self.layer.describe(id).name;
                info!(
                    "detected supported joystick #{id} '{name}'. currently active joystick is #{preferred}"
                );
                return;
            }
            Selection::Activate => {}
        }

        if let Some(active) = current {
            debug!("joystick #{active} already initialized, removing it first");
            self.close_if_active(active);
        }
        self.open_session(id);
    }

    /// A device went away; close it if active and look for a replacement.
    pub fn on_removed(&mut self, id: DeviceId) {
        self.assert_owner();
        if !self.initialized {
            return;
        }
        if self.close_if_active(id) {
            self.search_for_device();
        }
    }

    /// Re-run selection over all attached devices.
    pub fn search_for_device(&mut self) {
        if !self.initialized {
            return;
        }
        let candidates = match find_recognized_devices(&self.layer) {
            Ok(ids) => ids,
            Err(e) => {
                warn!("failed to enumerate joysticks: {e}");
                return;
            }
        };
        for id in candidates {
            self.on_attached(id);
            if self.config.active_device == SelectionPreference::FirstAvailable
                && self.session.is_some()
            {
                break;
            }
        }
    }

    /// Switch the active device preference and re-run selection.
    pub fn set_preference(&mut self, preference: SelectionPreference) {
        self.assert_owner();
        if self.config.active_device == preference {
            return;
        }
        self.config.active_device = preference;
        self.search_for_device();
    }

    /// Update the controller mapping hint.
    ///
    /// The device layer only reads the hint at init, so a change restarts the
    /// whole subsystem. Returns whether a restart happened.
    pub fn set_mapping_hint(&mut self, hint: &str) -> Result<bool> {
        self.assert_owner();
        let old = std::mem::replace(&mut self.config.mapping_hint, hint.to_string());
        if !self.initialized || old == hint {
            return Ok(false);
        }
        self.shutdown();
        self.initialize()?;
        Ok(true)
    }

    /// Apply a new configuration, restarting or re-selecting as needed.
    pub fn apply_config(&mut self, config: JoyConfig) -> Result<()> {
        self.assert_owner();
        let old = std::mem::replace(&mut self.config, config);

        if old.disabled != self.config.disabled {
            if self.config.disabled {
                info!("joystick subsystem disabled");
                self.shutdown();
                return Ok(());
            }
            return self.initialize();
        }

        if old.mapping_hint != self.config.mapping_hint {
            let hint = std::mem::replace(&mut self.config.mapping_hint, old.mapping_hint);
            if self.set_mapping_hint(&hint)? {
                return Ok(());
            }
        }

        if old.active_device != self.config.active_device {
            self.search_for_device();
        }
        Ok(())
    }

    /// Drive the haptic actuator of the active device.
    pub fn set_rumble(&mut self, left: f32, right: f32) -> RumbleAction {
        self.assert_owner();
        let haptics_enabled = self.config.haptics_enabled;
        match self.session.as_mut() {
            Some(session) => session.set_rumble(&mut self.layer, left, right, haptics_enabled),
            None => RumbleAction::Unchanged,
        }
    }

    fn tuning(&self) -> AxisTuning {
        AxisTuning {
            button_threshold: self.config.axis_button_threshold,
            deadzone: self.config.axis_deadzone,
        }
    }

    fn active_label(&self) -> String {
        match self.active_device() {
            Some(id) => id.to_string(),
            None => "none".to_string(),
        }
    }

    fn open_session(&mut self, id: DeviceId) {
        debug_assert!(self.session.is_none(), "previous session must be closed first");
        self.state = SessionState::Opening;
        info!("initializing joystick #{id} and making it active");
        match DeviceSession::open(&mut self.layer, id) {
            Ok(session) => {
                self.translator.reset();
                self.session = Some(session);
                self.sink.set_joystick_active(true);
                self.state = SessionState::Open;
            }
            Err(e) => {
                warn!("failed to open joystick #{id}: {e}");
                self.state = SessionState::Closed;
            }
        }
    }

    /// Close the session if it belongs to `id`. Returns whether it did.
    fn close_if_active(&mut self, id: DeviceId) -> bool {
        let Some(active) = self.active_device() else {
            return false;
        };
        if active != id {
            debug!("ignoring hotplug remove for #{id}, active joystick is #{active}");
            return false;
        }
        let Some(session) = self.session.take() else {
            return false;
        };

        self.state = SessionState::Closing;
        self.sink.set_joystick_active(false);
        session.close(&mut self.layer);
        self.translator.reset();
        self.state = SessionState::Closed;
        info!("joystick #{id} removed");
        true
    }

    #[inline]
    fn assert_owner(&self) {
        debug_assert_eq!(
            thread::current().id(),
            self.owner,
            "joystick subsystem used off its owning thread"
        );
    }
}

impl<L: DeviceLayer, S: InputSink> Drop for JoystickSubsystem<L, S> {
    fn drop(&mut self) {
        if self.initialized {
            self.shutdown();
        }
    }
}
