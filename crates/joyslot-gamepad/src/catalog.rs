use log::info;
use smallvec::SmallVec;

use crate::error::Result;
use crate::layer::DeviceLayer;
use crate::types::{DeviceId, DeviceInfo};

/// Recognized device ids, in enumeration order.
pub type RecognizedDevices = SmallVec<[DeviceId; 4]>;

/// Enumerate attached devices and keep the ones with a controller mapping.
///
/// Unrecognized devices are reported but never returned.
pub fn find_recognized_devices<L: DeviceLayer>(layer: &L) -> Result<RecognizedDevices> {
    let mut recognized = RecognizedDevices::new();
    for id in layer.devices()? {
        if layer.is_gamepad(id) {
            recognized.push(id);
        } else {
            let info = layer.describe(id);
            info!(
                "found joystick '{}' ({}), but no recognized controller configuration for it",
                info.name, info.guid
            );
        }
    }
    Ok(recognized)
}

/// Describe every attached device, recognized or not.
pub fn describe_devices<L: DeviceLayer>(layer: &L) -> Result<Vec<DeviceInfo>> {
    Ok(layer.devices()?.into_iter().map(|id| layer.describe(id)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockLayer;

    #[test]
    fn keeps_only_recognized_devices_in_order() {
        let mut layer = MockLayer::new();
        layer.attach(3);
        layer.attach_unrecognized(4);
        layer.attach(9);
        let ids = find_recognized_devices(&layer).expect("enumeration works");
        assert_eq!(ids.as_slice(), &[3, 9]);
    }

    #[test]
    fn enumeration_failure_is_reported() {
        let mut layer = MockLayer::new();
        layer.attach(1);
        layer.fail_enumeration = true;
        assert!(find_recognized_devices(&layer).is_err());
    }

    #[test]
    fn describe_lists_unrecognized_devices_too() {
        let mut layer = MockLayer::new();
        layer.attach(1);
        layer.attach_unrecognized(2);
        let infos = describe_devices(&layer).expect("enumeration works");
        assert_eq!(infos.len(), 2);
        assert!(infos[0].recognized);
        assert!(!infos[1].recognized);
    }
}
