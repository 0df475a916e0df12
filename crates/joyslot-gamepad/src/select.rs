use crate::types::{DeviceId, SelectionPreference};

/// Outcome of running the selection policy for one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Open the candidate, closing any other session first.
    Activate,
    /// A session is already open for the candidate.
    AlreadyActive,
    /// First-available mode and another device is already active.
    Busy { active: DeviceId },
    /// A specific device is preferred and it is not the candidate.
    NotPreferred { preferred: DeviceId },
}

/// Decide what to do with a newly seen, recognized `candidate`.
pub fn select(
    candidate: DeviceId,
    preference: SelectionPreference,
    current: Option<DeviceId>,
) -> Selection {
    if current == Some(candidate) {
        return Selection::AlreadyActive;
    }
    match preference {
        SelectionPreference::FirstAvailable => match current {
            Some(active) => Selection::Busy { active },
            None => Selection::Activate,
        },
        SelectionPreference::Device(preferred) if preferred != candidate => {
            Selection::NotPreferred { preferred }
        }
        SelectionPreference::Device(_) => Selection::Activate,
    }
}

/// Whether `candidate` should become the active device.
pub fn should_activate(
    candidate: DeviceId,
    preference: SelectionPreference,
    current: Option<DeviceId>,
) -> bool {
    select(candidate, preference, current) == Selection::Activate
}
