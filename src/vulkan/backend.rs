//! [`Backend`] implementation on top of the system Vulkan loader.

use log::debug;
use vulkanalia::{
    VkResult,
    loader::{LIBRARY, LibloadingLoader},
    prelude::v1_0::*,
};

use super::{Backend, BootstrapError, device::DeviceDetails, instance::InstanceDescriptor};

/// The loaded Vulkan entry points.
pub struct VulkanBackend {
    entry: Entry,
}

impl VulkanBackend {
    /// Opens the platform's Vulkan library and loads the global entry points.
    ///
    /// # Errors
    ///
    /// - [`BootstrapError::Loader`]
    pub fn load() -> Result<Self, BootstrapError> {
        let loader = unsafe { LibloadingLoader::new(LIBRARY) }
            .map_err(|e| BootstrapError::Loader(e.to_string()))?;
        let entry =
            unsafe { Entry::new(loader) }.map_err(|e| BootstrapError::Loader(e.to_string()))?;
        debug!("Loaded Vulkan library {LIBRARY}");

        Ok(Self { entry })
    }
}

impl Backend for VulkanBackend {
    type Instance = Instance;
    type PhysicalDevice = vk::PhysicalDevice;

    fn instance_layers(&self) -> VkResult<Vec<String>> {
        let layers = unsafe { self.entry.enumerate_instance_layer_properties() }?;
        Ok(layers
            .iter()
            .map(|l| l.layer_name.to_string_lossy().into_owned())
            .collect())
    }

    fn instance_extensions(&self) -> VkResult<Vec<String>> {
        let extensions = unsafe { self.entry.enumerate_instance_extension_properties(None) }?;
        Ok(extensions
            .iter()
            .map(|e| e.extension_name.to_string_lossy().into_owned())
            .collect())
    }

    fn create_instance(&self, descriptor: &InstanceDescriptor) -> VkResult<Instance> {
        let application_info = vk::ApplicationInfo::builder()
            .application_name(descriptor.application_name.as_bytes_with_nul())
            .application_version(descriptor.application_version)
            .engine_name(descriptor.engine_name.as_bytes_with_nul())
            .engine_version(descriptor.engine_version)
            .api_version(descriptor.api_version);

        // The pointers borrow from `descriptor`, which outlives the create call.
        let layers = descriptor
            .layers
            .iter()
            .map(|l| l.as_ptr())
            .collect::<Vec<_>>();
        let extensions = descriptor
            .extensions
            .iter()
            .map(|e| e.as_ptr())
            .collect::<Vec<_>>();

        let info = vk::InstanceCreateInfo::builder()
            .application_info(&application_info)
            .enabled_layer_names(&layers)
            .enabled_extension_names(&extensions);

        unsafe { self.entry.create_instance(&info, None) }
    }

    fn physical_devices(&self, instance: &Instance) -> VkResult<Vec<vk::PhysicalDevice>> {
        unsafe { instance.enumerate_physical_devices() }
    }

    fn device_details(&self, instance: &Instance, device: vk::PhysicalDevice) -> DeviceDetails {
        let properties = unsafe { instance.get_physical_device_properties(device) };
        let features = unsafe { instance.get_physical_device_features(device) };
        DeviceDetails::new(properties, features)
    }

    fn destroy_instance(&self, instance: Instance) {
        unsafe { instance.destroy_instance(None) };
    }
}
