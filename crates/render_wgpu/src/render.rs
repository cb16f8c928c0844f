use egui::LayerId;

use crate::framegraph::Node;
use crate::gfx::{Gfx, ScreenDescriptor};
use crate::paint::paint_scene;
use crate::scene::Scene;
use crate::wgpu;
use crate::FrameGraph;

impl Gfx {
    /// Paints `scene` through the frame graph and presents the frame.
    pub fn render_scene(&mut self, fg: &FrameGraph, scene: &Scene) -> Result<(), wgpu::SurfaceError> {
        let input = self.egui_state.take_egui_input(&self.window);
        let full_output = self.egui_ctx.run(input, |ctx| {
            paint_scene(&ctx.layer_painter(LayerId::background()), scene);
        });
        self.egui_state
            .handle_platform_output(&self.window, full_output.platform_output);

        let frame = self.surface.get_current_texture()?;
        let view = frame.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: Some("encoder") });

        let screen = ScreenDescriptor {
            size_in_pixels: [self.config.width, self.config.height],
            pixels_per_point: self.egui_ctx.pixels_per_point(),
        };
        let clipped = self.egui_ctx.tessellate(full_output.shapes, screen.pixels_per_point);
        for (id, delta) in &full_output.textures_delta.set {
            self.egui_painter
                .update_texture(&self.device, &self.queue, *id, delta);
        }
        let callback_cmds = self.egui_painter.update_buffers(
            &self.device,
            &self.queue,
            &mut encoder,
            &clipped,
            &screen,
        );

        for node in &fg.nodes {
            match *node {
                Node::Clear(color) => {
                    let _rp = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                        label: Some("fg_clear"),
                        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                            view: &view,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(color),
                                store: wgpu::StoreOp::Store,
                            },
                        })],
                        depth_stencil_attachment: None,
                        timestamp_writes: None,
                        occlusion_query_set: None,
                    });
                }
                Node::Scene => {
                    let mut rp = encoder
                        .begin_render_pass(&wgpu::RenderPassDescriptor {
                            label: Some("fg_scene"),
                            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                                view: &view,
                                resolve_target: None,
                                ops: wgpu::Operations {
                                    load: wgpu::LoadOp::Load,
                                    store: wgpu::StoreOp::Store,
                                },
                            })],
                            depth_stencil_attachment: None,
                            timestamp_writes: None,
                            occlusion_query_set: None,
                        })
                        .forget_lifetime();
                    self.egui_painter.render(&mut rp, &clipped, &screen);
                }
            }
        }
        for id in &full_output.textures_delta.free {
            self.egui_painter.free_texture(id);
        }

        self.queue
            .submit(callback_cmds.into_iter().chain(Some(encoder.finish())));
        frame.present();
        Ok(())
    }
}
