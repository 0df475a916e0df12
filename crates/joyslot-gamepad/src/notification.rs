use crossbeam_channel::{bounded, Receiver, Sender};

use crate::types::DeviceId;

/// Capacity of the inbound notification queue.
pub const QUEUE_CAPACITY: usize = 256;

/// Upper bound of notifications handled by a single pump call.
pub const MAX_EVENTS_PER_PUMP: usize = 100;

/// Typed notifications delivered by the device layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    /// A device was attached (or found during enumeration).
    Attached(DeviceId),
    /// A device was detached.
    Removed(DeviceId),
    /// An axis moved; `axis` is a raw index, see [`crate::raw`].
    AxisMotion { id: DeviceId, axis: u8, value: i16 },
    /// A button went down; `button` is a raw index.
    ButtonDown { id: DeviceId, button: u8 },
    /// A button went up.
    ButtonUp { id: DeviceId, button: u8 },
}

/// Sending half of the notification queue.
pub type NotificationSender = Sender<Notification>;
/// Receiving half of the notification queue.
pub type NotificationReceiver = Receiver<Notification>;

/// Create the bounded queue notifications are funneled through.
pub fn notification_queue() -> (NotificationSender, NotificationReceiver) {
    bounded(QUEUE_CAPACITY)
}
