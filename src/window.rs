//! # Window Module
//!
//! The `window` module uses [`winit`] to create the platform window and recognise its close
//! request, and [`vulkanalia::window`] to report the instance extensions needed to present into
//! it. No client rendering API is bound to the window.

use log::debug;
use thiserror::Error;
use winit::{
    dpi::LogicalSize,
    error::OsError,
    event::WindowEvent,
    event_loop::ActiveEventLoop,
    window::Window as WinitWindow,
};

use crate::config::AppConfig;

/// Custom error types for winit.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum WindowError {
    /// The platform refused to create the window.
    #[error("failed to create window: {0}")]
    Os(#[from] OsError),
}

pub struct Window {
    /// The winit window object
    inner: WinitWindow,
}

impl Window {
    /// Creates a fixed-size window as described by `config`.
    ///
    /// # Errors
    ///
    /// - [`WindowError::Os`]
    pub fn create(event_loop: &ActiveEventLoop, config: &AppConfig) -> Result<Self, WindowError> {
        let attributes = WinitWindow::default_attributes()
            .with_title(config.title.as_str())
            .with_inner_size(LogicalSize::new(config.width, config.height))
            .with_resizable(config.resizable);

        let inner = event_loop.create_window(attributes)?;
        debug!("Created {}x{} window", config.width, config.height);

        Ok(Self { inner })
    }

    /// Gets a reference to the winit window object.
    pub fn window(&self) -> &WinitWindow {
        &self.inner
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        debug!("Destroyed window");
    }
}

/// A window the graphics stack can present into.
pub trait SurfaceProvider {
    /// Instance extension names required to create a surface for this window.
    fn required_extensions(&self) -> Vec<String>;
}

impl SurfaceProvider for Window {
    fn required_extensions(&self) -> Vec<String> {
        vulkanalia::window::get_required_instance_extensions(self.window())
            .iter()
            .map(|e| e.to_string_lossy().into_owned())
            .collect()
    }
}

/// Whether `event` asks for the window, and so the application, to close.
pub fn is_close_request(event: &WindowEvent) -> bool {
    matches!(event, WindowEvent::CloseRequested | WindowEvent::Destroyed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_button_is_a_close_request() {
        assert!(is_close_request(&WindowEvent::CloseRequested));
        assert!(is_close_request(&WindowEvent::Destroyed));
    }

    #[test]
    fn other_events_keep_running() {
        assert!(!is_close_request(&WindowEvent::Focused(true)));
        assert!(!is_close_request(&WindowEvent::RedrawRequested));
    }
}
