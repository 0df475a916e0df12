use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use joyslot_gamepad::JoyConfig;
use notify::{Config, Error as NotifyError, RecommendedWatcher, RecursiveMode};
use notify_debouncer_mini::{
    new_debouncer_opt, DebounceEventResult, DebouncedEventKind, Debouncer,
};
use thiserror::Error;

use crate::parse::load_settings;
use crate::SettingsError;

const DEBOUNCE_TIMEOUT: Duration = Duration::from_millis(500);

#[derive(Error, Debug)]
pub enum Error {
    #[error("notify error: {0}")]
    Notify(#[from] NotifyError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] SettingsError),
}

pub enum SettingsEvent {
    Changed(JoyConfig),
    Removed,
    Error(Error),
}

/// Watches a settings file and reports parsed changes.
pub struct SettingsWatcher {
    #[allow(dead_code)]
    watcher: Debouncer<RecommendedWatcher>,
}

type SettingsEventSender = mpsc::Sender<SettingsEvent>;
type SettingsEventReceiver = mpsc::Receiver<SettingsEvent>;

fn send_settings_event(path: &Path, tx: &SettingsEventSender) {
    let event = match load_settings(path) {
        Ok(config) => SettingsEvent::Changed(config),
        Err(SettingsError::PathError(e)) => SettingsEvent::Error(Error::Io(e)),
        Err(e) => SettingsEvent::Error(Error::Parse(e)),
    };
    let _ = tx.send(event);
}

impl SettingsWatcher {
    fn new_with_sender(path: &Path, tx: SettingsEventSender) -> Result<Self, Error> {
        let path_c: PathBuf = path.to_owned();
        let file_name = path.file_name().map(ToOwned::to_owned);
        let tx_c = tx;

        let debouncer_config = notify_debouncer_mini::Config::default()
            .with_timeout(DEBOUNCE_TIMEOUT)
            .with_notify_config(Config::default());
        let mut debouncer = new_debouncer_opt::<_, RecommendedWatcher>(
            debouncer_config,
            move |events: DebounceEventResult| match events {
                Ok(events) => {
                    // Editors often replace the file, so the parent directory is
                    // watched and unrelated entries are skipped.
                    let touched = events.iter().any(|event| {
                        event.path.file_name() == file_name.as_deref()
                            && matches!(
                                event.kind,
                                DebouncedEventKind::Any | DebouncedEventKind::AnyContinuous
                            )
                    });
                    if !touched {
                        return;
                    }
                    if path_c.exists() {
                        send_settings_event(&path_c, &tx_c);
                    } else {
                        let _ = tx_c.send(SettingsEvent::Removed);
                    }
                }
                Err(error) => {
                    let _ = tx_c.send(SettingsEvent::Error(Error::Notify(error)));
                }
            },
        )?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        debouncer.watcher().watch(dir, RecursiveMode::NonRecursive)?;

        Ok(Self { watcher: debouncer })
    }

    pub fn new(path: &Path) -> Result<(Self, SettingsEventReceiver), Error> {
        let (tx, rx) = mpsc::channel();

        Ok((Self::new_with_sender(path, tx)?, rx))
    }
}
