use std::sync::Arc;

use egui::{Context as EguiCtx, ViewportId};
use egui_wgpu::Renderer as EguiRenderer;
use egui_winit::State as EguiWinit;
use thiserror::Error;
use tracing::info;

use crate::wgpu;
use crate::winit::{dpi::PhysicalSize, window::Window};

pub use egui_wgpu::ScreenDescriptor;

/// Startup failures of the render surface. All of them are fatal.
#[derive(Debug, Error)]
pub enum GfxError {
    #[error("failed to create render surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no graphics adapter can present to this window")]
    NoAdapter,

    #[error("failed to open graphics device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("render surface reports no supported texture format")]
    NoSurfaceFormat,
}

/// Owns the window's render surface and the egui layer drawn onto it.
/// Everything is released when the value is dropped.
pub struct Gfx {
    pub(crate) window: Arc<Window>,
    pub(crate) surface: wgpu::Surface<'static>,
    pub(crate) device: wgpu::Device,
    pub(crate) queue: wgpu::Queue,
    pub(crate) config: wgpu::SurfaceConfiguration,
    pub(crate) size: PhysicalSize<u32>,

    pub(crate) adapter_name: String,

    pub(crate) egui_ctx: EguiCtx,
    pub(crate) egui_state: EguiWinit,
    pub(crate) egui_painter: EguiRenderer,
}

impl Gfx {
    pub fn new(window: Arc<Window>, vsync: bool) -> Result<Self, GfxError> {
        use crate::wgpu::{Instance, PresentMode};

        let size = window.inner_size();

        let instance = Instance::default();
        let surface = instance.create_surface(Arc::clone(&window))?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .ok_or(GfxError::NoAdapter)?;

        let adapter_name = adapter.get_info().name;

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: wgpu::MemoryHints::default(),
            },
            None,
        ))?;

        let caps = surface.get_capabilities(&adapter);
        let surface_format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or(GfxError::NoSurfaceFormat)?;
        let present = if !vsync && caps.present_modes.contains(&PresentMode::Mailbox) {
            PresentMode::Mailbox
        } else {
            PresentMode::Fifo
        };

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: present,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        info!(
            adapter = %adapter_name,
            format = ?surface_format,
            present_mode = ?present,
            width = config.width,
            height = config.height,
            "render surface ready"
        );

        let egui_ctx = EguiCtx::default();
        let egui_state = EguiWinit::new(egui_ctx.clone(), ViewportId::ROOT, &*window, None, None, None);
        let egui_painter = EguiRenderer::new(&device, surface_format, None, 1, false);

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            size,
            adapter_name,
            egui_ctx,
            egui_state,
            egui_painter,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn adapter_name(&self) -> &str {
        &self.adapter_name
    }
}
