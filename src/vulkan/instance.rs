//! Instance creation.

use std::ffi::CString;

use log::{debug, info};
use vulkanalia::vk;

use super::{Backend, BootstrapError, layers};

/// Inputs to instance creation that do not come from the window.
#[derive(Debug, Clone)]
pub struct InstanceSettings {
    pub app_name: String,
    pub app_version: (u32, u32, u32),
    pub engine_name: String,
    pub engine_version: (u32, u32, u32),
    /// Request `required_layers` and fail early if any of them is missing.
    pub validation: bool,
    pub required_layers: Vec<String>,
}

/// Everything the driver receives at instance creation, already in FFI-ready form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceDescriptor {
    pub application_name: CString,
    pub application_version: u32,
    pub engine_name: CString,
    pub engine_version: u32,
    pub api_version: u32,
    pub extensions: Vec<CString>,
    /// Empty unless validation is enabled.
    pub layers: Vec<CString>,
}

impl InstanceDescriptor {
    /// Assembles the descriptor. Layers are only included when validation is enabled.
    pub fn new(settings: &InstanceSettings, extensions: &[String]) -> Result<Self, BootstrapError> {
        let layers = if settings.validation {
            to_cstrings(&settings.required_layers)?
        } else {
            Vec::new()
        };

        Ok(Self {
            application_name: CString::new(settings.app_name.as_str())?,
            application_version: make_version(settings.app_version),
            engine_name: CString::new(settings.engine_name.as_str())?,
            engine_version: make_version(settings.engine_version),
            api_version: vk::make_version(1, 0, 0),
            extensions: to_cstrings(extensions)?,
            layers,
        })
    }

    pub fn layer_names(&self) -> Vec<String> {
        lossy(&self.layers)
    }

    pub fn extension_names(&self) -> Vec<String> {
        lossy(&self.extensions)
    }
}

fn make_version((major, minor, patch): (u32, u32, u32)) -> u32 {
    vk::make_version(major, minor, patch)
}

fn to_cstrings(names: &[String]) -> Result<Vec<CString>, BootstrapError> {
    names
        .iter()
        .map(|n| CString::new(n.as_str()).map_err(BootstrapError::from))
        .collect()
}

fn lossy(names: &[CString]) -> Vec<String> {
    names
        .iter()
        .map(|n| n.to_string_lossy().into_owned())
        .collect()
}

/// Creates the instance, checking layer support first when validation is enabled.
///
/// `extensions` are the instance extensions the window needs to present. No instance is created
/// when a required layer is missing.
///
/// # Errors
///
/// - [`BootstrapError::LayersUnavailable`]
/// - [`BootstrapError::InstanceCreationFailed`]
/// - [`BootstrapError::Query`] if the layer list cannot be read
/// - [`BootstrapError::InvalidName`]
pub fn create_instance<B: Backend>(
    backend: &B,
    settings: &InstanceSettings,
    extensions: &[String],
) -> Result<B::Instance, BootstrapError> {
    if settings.validation {
        layers::check_layer_support(backend, &settings.required_layers)?;
    }

    let descriptor = InstanceDescriptor::new(settings, extensions)?;
    let instance = backend
        .create_instance(&descriptor)
        .map_err(BootstrapError::InstanceCreationFailed)?;
    info!(
        "Created instance for {:?}, layers: {:?}",
        descriptor.application_name,
        descriptor.layer_names()
    );

    log_extensions(backend, &descriptor);

    Ok(instance)
}

/// Diagnostic listing only; a failed query here does not fail the bootstrap.
fn log_extensions<B: Backend>(backend: &B, descriptor: &InstanceDescriptor) {
    match backend.instance_extensions() {
        Ok(available) => {
            info!("available extensions:");
            for extension in &available {
                info!("\t{extension}");
            }
        }
        Err(e) => debug!("Could not list instance extensions: {e}"),
    }

    info!("needed extensions:");
    for extension in descriptor.extension_names() {
        info!("\t{extension}");
    }
}
