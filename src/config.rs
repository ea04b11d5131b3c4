//! # Config Module
//!
//! Compile-time application settings. Nothing here is read from the command line or the
//! environment; diagnostics follow the build profile.

use crate::vulkan::instance::InstanceSettings;

/// The optional instance layers requested when validation is enabled.
pub const VALIDATION_LAYERS: &[&str] = &["VK_LAYER_KHRONOS_validation"];

/// Validation is a build-time switch: on in debug builds, off in release builds.
pub const ENABLE_VALIDATION: bool = cfg!(debug_assertions);

/// Window and instance settings for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Window title.
    pub title: String,
    /// Window width in logical units.
    pub width: u32,
    /// Window height in logical units.
    pub height: u32,
    /// Whether the user may resize the window.
    pub resizable: bool,
    /// Application name reported to the driver.
    pub app_name: String,
    /// Application version as `(major, minor, patch)`.
    pub app_version: (u32, u32, u32),
    /// Engine name reported to the driver.
    pub engine_name: String,
    /// Engine version as `(major, minor, patch)`.
    pub engine_version: (u32, u32, u32),
    /// Request validation layers and check that they exist.
    pub validation: bool,
    /// Layers required when `validation` is set.
    pub validation_layers: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: String::from("Vulkan"),
            width: 800,
            height: 800,
            resizable: false,
            app_name: String::from("Hello Triangle"),
            app_version: (1, 0, 0),
            engine_name: String::from("No Engine"),
            engine_version: (1, 0, 0),
            validation: ENABLE_VALIDATION,
            validation_layers: VALIDATION_LAYERS.iter().map(|l| l.to_string()).collect(),
        }
    }
}

impl AppConfig {
    /// The subset of the configuration consumed by the instance bootstrapper.
    pub fn instance_settings(&self) -> InstanceSettings {
        InstanceSettings {
            app_name: self.app_name.clone(),
            app_version: self.app_version,
            engine_name: self.engine_name.clone(),
            engine_version: self.engine_version,
            validation: self.validation,
            required_layers: self.validation_layers.clone(),
        }
    }
}
