use orrery_core::Rgb;

use crate::wgpu;

/// Ordered list of passes for one frame.
#[derive(Default)]
pub struct FrameGraph {
    pub(crate) nodes: Vec<Node>,
}

pub(crate) enum Node {
    Clear(wgpu::Color),
    Scene,
}

impl FrameGraph {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn clear(mut self, color: wgpu::Color) -> Self {
        self.nodes.push(Node::Clear(color));
        self
    }
    pub fn clear_rgb(self, rgb: Rgb) -> Self {
        self.clear(wgpu::Color {
            r: rgb.0 as f64 / 255.0,
            g: rgb.1 as f64 / 255.0,
            b: rgb.2 as f64 / 255.0,
            a: 1.0,
        })
    }
    pub fn scene(mut self) -> Self {
        self.nodes.push(Node::Scene);
        self
    }
}
