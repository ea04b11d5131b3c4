//! In-memory [`Backend`] that records every call, for driving the bootstrap headlessly.

use std::{cell::RefCell, rc::Rc};

use vulkanalia::{VkResult, vk};

use super::{Backend, device::DeviceDetails, instance::InstanceDescriptor};

/// One recorded backend or window event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    EnumerateLayers,
    EnumerateExtensions,
    CreateInstance { layers: Vec<String>, extensions: Vec<String> },
    EnumerateDevices,
    QueryDevice(usize),
    DestroyInstance(u32),
    DropWindow,
}

/// Shared call log, so a fake window can append to the same timeline.
pub type CallLog = Rc<RefCell<Vec<Call>>>;

#[derive(Debug, Clone)]
pub struct RecordingBackend {
    pub layers: Vec<String>,
    pub extensions: Vec<String>,
    pub devices: Vec<DeviceDetails>,
    pub create_result: Result<(), vk::ErrorCode>,
    pub log: CallLog,
    next_instance: Rc<RefCell<u32>>,
}

impl RecordingBackend {
    pub fn new(layers: &[&str], devices: &[&str]) -> Self {
        Self {
            layers: layers.iter().map(|l| l.to_string()).collect(),
            extensions: vec!["VK_KHR_surface".into(), "VK_KHR_xlib_surface".into()],
            devices: devices.iter().map(|d| DeviceDetails::named(d)).collect(),
            create_result: Ok(()),
            log: CallLog::default(),
            next_instance: Rc::default(),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.log.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.log.borrow_mut().push(call);
    }
}

impl Backend for RecordingBackend {
    type Instance = u32;
    type PhysicalDevice = usize;

    fn instance_layers(&self) -> VkResult<Vec<String>> {
        self.record(Call::EnumerateLayers);
        Ok(self.layers.clone())
    }

    fn instance_extensions(&self) -> VkResult<Vec<String>> {
        self.record(Call::EnumerateExtensions);
        Ok(self.extensions.clone())
    }

    fn create_instance(&self, descriptor: &InstanceDescriptor) -> VkResult<u32> {
        self.record(Call::CreateInstance {
            layers: descriptor.layer_names(),
            extensions: descriptor.extension_names(),
        });
        self.create_result?;

        let mut next = self.next_instance.borrow_mut();
        *next += 1;
        Ok(*next)
    }

    fn physical_devices(&self, _instance: &u32) -> VkResult<Vec<usize>> {
        self.record(Call::EnumerateDevices);
        Ok((0..self.devices.len()).collect())
    }

    fn device_details(&self, _instance: &u32, device: usize) -> DeviceDetails {
        self.record(Call::QueryDevice(device));
        self.devices[device].clone()
    }

    fn destroy_instance(&self, instance: u32) {
        self.record(Call::DestroyInstance(instance));
    }
}

impl DeviceDetails {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            properties: vk::PhysicalDeviceProperties::default(),
            features: vk::PhysicalDeviceFeatures::default(),
        }
    }
}
