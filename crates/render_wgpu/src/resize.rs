use tracing::debug;

use crate::gfx::Gfx;
use crate::winit::{dpi::PhysicalSize, event::WindowEvent};

impl Gfx {
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.size = new_size;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
        debug!(width = new_size.width, height = new_size.height, "surface reconfigured");
    }

    pub fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    /// Forwards window events to egui so it tracks scale factor and focus.
    pub fn on_window_event(&mut self, event: &WindowEvent) {
        let _ = self.egui_state.on_window_event(&self.window, event);
    }

    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}
