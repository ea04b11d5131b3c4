//! # App Module
//!
//! Drives the application lifecycle: window first, then the graphics bootstrap, then event
//! polling until the window is closed, then teardown in reverse order of acquisition.

use log::{debug, info};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::ActiveEventLoop,
    window::WindowId,
};

use crate::{
    config::AppConfig,
    vulkan::{Backend, BootstrapError, backend::VulkanBackend, context::GraphicsContext},
    window::{self, SurfaceProvider, Window},
};

/// Everything acquired during startup, released strictly in reverse order.
pub struct Resources<B: Backend, W> {
    window: Option<W>,
    context: Option<GraphicsContext<B>>,
}

impl<B: Backend, W> Default for Resources<B, W> {
    fn default() -> Self {
        Self {
            window: None,
            context: None,
        }
    }
}

impl<B: Backend, W> Resources<B, W> {
    pub fn window(&self) -> Option<&W> {
        self.window.as_ref()
    }

    pub fn context(&self) -> Option<&GraphicsContext<B>> {
        self.context.as_ref()
    }

    pub fn set_window(&mut self, window: W) {
        self.window = Some(window);
    }

    /// Stores the graphics context. The window must already exist.
    pub fn set_context(&mut self, context: GraphicsContext<B>) {
        debug_assert!(self.window.is_some(), "context created before its window");
        self.context = Some(context);
    }

    /// Destroys the instance, then the window. Safe to call more than once.
    pub fn teardown(&mut self) {
        if let Some(context) = self.context.take() {
            context.destroy();
        }
        drop(self.window.take());
    }
}

impl<B: Backend, W> Drop for Resources<B, W> {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// The application as run by `main`.
pub type VulkanApp = App<VulkanBackend, Window>;

/// The application lifecycle, independent of how the window and backend are obtained.
pub struct App<B: Backend, W> {
    config: AppConfig,
    resources: Resources<B, W>,
    failure: Option<anyhow::Error>,
}

impl<B: Backend, W: SurfaceProvider> App<B, W> {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            resources: Resources::default(),
            failure: None,
        }
    }

    /// Opens the window, then bootstraps the graphics stack on top of it.
    ///
    /// Returns `true` when the event loop should stop, i.e. when startup failed. The failure is
    /// kept for [`App::finish`] and everything acquired so far is released. Calling this again
    /// after a window exists, or after a failure, does nothing.
    pub fn start<O, L>(&mut self, open_window: O, load_backend: L) -> bool
    where
        O: FnOnce(&AppConfig) -> anyhow::Result<W>,
        L: FnOnce() -> Result<B, BootstrapError>,
    {
        if self.resources.window().is_some() || self.failure.is_some() {
            return false;
        }

        match self.init(open_window, load_backend) {
            Ok(()) => false,
            Err(e) => {
                debug!("Startup failed; stopping");
                self.failure = Some(e);
                self.resources.teardown();
                true
            }
        }
    }

    fn init<O, L>(&mut self, open_window: O, load_backend: L) -> anyhow::Result<()>
    where
        O: FnOnce(&AppConfig) -> anyhow::Result<W>,
        L: FnOnce() -> Result<B, BootstrapError>,
    {
        let window = open_window(&self.config)?;
        let extensions = window.required_extensions();
        self.resources.set_window(window);

        let context =
            GraphicsContext::new(load_backend()?, &self.config.instance_settings(), &extensions)?;
        self.resources.set_context(context);

        if let Some(device) = self
            .resources
            .context()
            .and_then(GraphicsContext::physical_device)
        {
            info!("Using physical device {device:?}");
        }

        Ok(())
    }

    /// Returns `true` when `event` should stop the event loop.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        let close = window::is_close_request(event);
        if close {
            info!("The close button was pressed; stopping");
        }
        close
    }

    /// Releases the instance, then the window.
    pub fn shutdown(&mut self) {
        self.resources.teardown();
    }

    /// Releases everything and reports whether startup failed.
    ///
    /// # Errors
    ///
    /// Returns the error that aborted startup, if any.
    pub fn finish(mut self) -> anyhow::Result<()> {
        self.shutdown();
        match self.failure.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl ApplicationHandler for VulkanApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let open_window =
            |config: &AppConfig| Window::create(event_loop, config).map_err(anyhow::Error::from);
        if self.start(open_window, VulkanBackend::load) {
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if self.handle_window_event(&event) {
            event_loop.exit();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.shutdown();
    }
}
