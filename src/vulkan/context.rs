//! The bootstrap result: one instance and the physical device selected from it.

use log::debug;

use super::{
    Backend, BootstrapError,
    device::{self, SuitabilityPredicate},
    instance::{self, InstanceSettings},
};

/// Owns the instance for its whole life and records the selected device.
///
/// A context only exists once a device has been selected. Dropping it destroys the instance; if
/// selection fails the instance is destroyed before the error is returned.
pub struct GraphicsContext<B: Backend> {
    backend: B,
    instance: Option<B::Instance>,
    physical_device: Option<B::PhysicalDevice>,
}

impl<B: Backend> GraphicsContext<B> {
    /// Creates the instance and selects a physical device with [`device::is_device_suitable`].
    pub fn new(
        backend: B,
        settings: &InstanceSettings,
        extensions: &[String],
    ) -> Result<Self, BootstrapError> {
        Self::with_predicate(backend, settings, extensions, device::is_device_suitable)
    }

    /// Like [`GraphicsContext::new`] with a caller supplied suitability predicate.
    pub fn with_predicate(
        backend: B,
        settings: &InstanceSettings,
        extensions: &[String],
        predicate: SuitabilityPredicate,
    ) -> Result<Self, BootstrapError> {
        let instance = instance::create_instance(&backend, settings, extensions)?;

        match device::pick_physical_device(&backend, &instance, predicate) {
            Ok(device) => {
                debug!("Selected physical device {device:?}");
                Ok(Self {
                    backend,
                    instance: Some(instance),
                    physical_device: Some(device),
                })
            }
            Err(e) => {
                backend.destroy_instance(instance);
                debug!("Destroyed instance after failed device selection");
                Err(e)
            }
        }
    }

    /// The selected device, if selection has completed.
    pub fn physical_device(&self) -> Option<B::PhysicalDevice> {
        self.physical_device
    }

    /// Destroys the instance now rather than when the context goes out of scope.
    pub fn destroy(mut self) {
        self.release();
    }

    fn release(&mut self) {
        self.physical_device = None;
        if let Some(instance) = self.instance.take() {
            self.backend.destroy_instance(instance);
            debug!("Destroyed instance");
        }
    }
}

impl<B: Backend> Drop for GraphicsContext<B> {
    fn drop(&mut self) {
        self.release();
    }
}
