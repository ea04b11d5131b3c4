//! # Vulkan Module
//!
//! Instance creation and physical device selection. The native API sits behind the [`Backend`]
//! trait: [`backend::VulkanBackend`] talks to the driver through [`vulkanalia`], while tests run
//! the same bootstrap against an in-memory backend.

pub mod backend;
pub mod context;
pub mod device;
pub mod instance;
pub mod layers;

#[cfg(test)]
pub mod testing;

use std::{ffi::NulError, fmt::Debug};

use thiserror::Error;
use vulkanalia::{VkResult, vk};

use device::DeviceDetails;
use instance::InstanceDescriptor;

/// Fatal failures of the bootstrap sequence. None of them is retried.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// Validation was requested but the host lacks at least one required layer.
    #[error("validation layers requested, but not available: {}", missing.join(", "))]
    LayersUnavailable { missing: Vec<String> },

    /// The driver rejected instance creation.
    #[error("failed to create instance: {0}")]
    InstanceCreationFailed(vk::ErrorCode),

    /// The instance sees no physical device at all.
    #[error("failed to find GPUs with Vulkan support!")]
    NoGpuFound,

    /// No enumerated device passed the suitability predicate.
    #[error("failed to find a suitable GPU!")]
    NoSuitableGpu,

    /// The Vulkan loader library could not be opened.
    #[error("failed to load Vulkan: {0}")]
    Loader(String),

    /// A layer, extension or device query failed.
    #[error("Vulkan query failed: {0}")]
    Query(vk::ErrorCode),

    /// A name handed to the driver contained an interior NUL byte.
    #[error(transparent)]
    InvalidName(#[from] NulError),
}

/// The native calls the bootstrap depends on.
///
/// Handles are opaque to the bootstrap; it only moves them between calls.
pub trait Backend {
    /// Top-level handle produced by [`Backend::create_instance`].
    type Instance;

    /// Handle of one enumerated GPU. Owned by the driver, never destroyed by us.
    type PhysicalDevice: Copy + Debug;

    /// Names of every instance layer installed on the host.
    fn instance_layers(&self) -> VkResult<Vec<String>>;

    /// Names of every instance extension the driver offers.
    fn instance_extensions(&self) -> VkResult<Vec<String>>;

    /// Creates the instance described by `descriptor`.
    fn create_instance(&self, descriptor: &InstanceDescriptor) -> VkResult<Self::Instance>;

    /// Every physical device visible to `instance`, in driver order.
    fn physical_devices(&self, instance: &Self::Instance) -> VkResult<Vec<Self::PhysicalDevice>>;

    /// Properties and features of one physical device.
    fn device_details(
        &self,
        instance: &Self::Instance,
        device: Self::PhysicalDevice,
    ) -> DeviceDetails;

    /// Destroys `instance`. Called exactly once per created instance.
    fn destroy_instance(&self, instance: Self::Instance);
}
