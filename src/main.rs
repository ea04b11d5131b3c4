//! # Triangle Bootstrap
//!
//! This binary uses [`winit`] for cross-platform window management, and [`vulkanalia`] for FFI
//! to the Vulkan API. It opens a window, creates a Vulkan instance (with validation layers in
//! debug builds) and selects a physical device. Nothing is rendered yet.

mod app;
mod config;
mod vulkan;
mod window;

use app::VulkanApp;
use config::AppConfig;
use winit::event_loop::{ControlFlow, EventLoop};

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let mut app = VulkanApp::new(AppConfig::default());
    let event_loop = EventLoop::new()?;

    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop.run_app(&mut app)?;

    app.finish()
}
