//! Public surface of the renderer crate.

pub use egui_wgpu::wgpu;
pub use egui_winit::winit;

mod framegraph;
pub use framegraph::FrameGraph;

pub mod gfx;   // Gfx struct: surface, device, egui state
pub mod paint; // draw list -> egui shapes
pub mod scene; // pure scene composition

mod render; // frame rendering path
mod resize; // size/event helpers

pub use gfx::{Gfx, GfxError};
pub use scene::{compose, Scene, SceneStyle, Shape, TextAlign};
