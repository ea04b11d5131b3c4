//! Physical device enumeration and selection.

use log::{debug, info};
use vulkanalia::vk;

use super::{Backend, BootstrapError};

/// Descriptive data of one physical device, read during the scan and then discarded.
#[derive(Debug, Clone)]
pub struct DeviceDetails {
    pub name: String,
    pub properties: vk::PhysicalDeviceProperties,
    pub features: vk::PhysicalDeviceFeatures,
}

impl DeviceDetails {
    pub fn new(
        properties: vk::PhysicalDeviceProperties,
        features: vk::PhysicalDeviceFeatures,
    ) -> Self {
        Self {
            name: properties.device_name.to_string_lossy().into_owned(),
            properties,
            features,
        }
    }
}

/// Decides whether a device may be selected. Must be a pure function of its inputs.
pub type SuitabilityPredicate =
    fn(&vk::PhysicalDeviceProperties, &vk::PhysicalDeviceFeatures) -> bool;

/// Accepts every device that can be queried.
pub fn is_device_suitable(
    _properties: &vk::PhysicalDeviceProperties,
    _features: &vk::PhysicalDeviceFeatures,
) -> bool {
    true
}

/// Selects a physical device from `instance`.
///
/// Every device is queried and tested, with no early exit: the *last* device accepted by
/// `predicate` in enumeration order wins. Enumeration order comes from the driver and is not
/// stable across runs.
///
/// # Errors
///
/// - [`BootstrapError::NoGpuFound`] if the instance sees no devices. The predicate is never
///   consulted in that case.
/// - [`BootstrapError::NoSuitableGpu`] if `predicate` rejects every device.
/// - [`BootstrapError::Query`]
pub fn pick_physical_device<B, F>(
    backend: &B,
    instance: &B::Instance,
    predicate: F,
) -> Result<B::PhysicalDevice, BootstrapError>
where
    B: Backend,
    F: Fn(&vk::PhysicalDeviceProperties, &vk::PhysicalDeviceFeatures) -> bool,
{
    let devices = backend
        .physical_devices(instance)
        .map_err(BootstrapError::Query)?;

    if devices.is_empty() {
        return Err(BootstrapError::NoGpuFound);
    }

    info!("devices({}):", devices.len());

    let mut selected = None;
    for device in devices {
        let details = backend.device_details(instance, device);
        info!("\t{}", details.name);

        if predicate(&details.properties, &details.features) {
            debug!("{} is suitable", details.name);
            selected = Some(device);
        }
    }

    selected.ok_or(BootstrapError::NoSuitableGpu)
}
