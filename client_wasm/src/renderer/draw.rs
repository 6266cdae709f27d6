use super::resources::MAX_INSTANCES;
use super::Renderer;
use crate::batch::{FrameBatch, InstanceData};
use crate::error::ClientError;
use wgpu::*;

pub fn draw_frame(renderer: &mut Renderer, batch: &FrameBatch) -> Result<(), ClientError> {
    let output = renderer
        .surface
        .get_current_texture()
        .map_err(|e| ClientError::Frame(format!("{:?}", e)))?;
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    update_buffers(renderer, batch);

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(Color::BLACK),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        draw_objects(renderer, &mut pass);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

fn update_buffers(renderer: &mut Renderer, batch: &FrameBatch) {
    let rects = upload(&renderer.queue, &renderer.buffers.rects, &batch.rects);
    let circles = upload(&renderer.queue, &renderer.buffers.circles, &batch.circles);
    renderer.rect_count = rects;
    renderer.circle_count = circles;
}

fn upload(queue: &Queue, buffer: &Buffer, instances: &[InstanceData]) -> u32 {
    if instances.len() > MAX_INSTANCES {
        log::warn!(
            "dropping {} instances over the {} limit",
            instances.len() - MAX_INSTANCES,
            MAX_INSTANCES
        );
    }
    let instances = &instances[..instances.len().min(MAX_INSTANCES)];
    if !instances.is_empty() {
        queue.write_buffer(buffer, 0, bytemuck::cast_slice(instances));
    }
    instances.len() as u32
}

fn draw_objects<'a>(renderer: &'a Renderer, pass: &mut RenderPass<'a>) {
    pass.set_pipeline(&renderer.main_pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);

    // Rects (background first, then paddles)
    if renderer.rect_count > 0 {
        pass.set_vertex_buffer(0, renderer.rect_mesh.vertex_buffer.slice(..));
        pass.set_index_buffer(renderer.rect_mesh.index_buffer.slice(..), IndexFormat::Uint16);
        pass.set_vertex_buffer(1, renderer.buffers.rects.slice(..));
        pass.draw_indexed(0..renderer.rect_mesh.index_count, 0, 0..renderer.rect_count);
    }

    // Circles (ball)
    if renderer.circle_count > 0 {
        pass.set_vertex_buffer(0, renderer.circle_mesh.vertex_buffer.slice(..));
        pass.set_index_buffer(
            renderer.circle_mesh.index_buffer.slice(..),
            IndexFormat::Uint16,
        );
        pass.set_vertex_buffer(1, renderer.buffers.circles.slice(..));
        pass.draw_indexed(
            0..renderer.circle_mesh.index_count,
            0,
            0..renderer.circle_count,
        );
    }
}
