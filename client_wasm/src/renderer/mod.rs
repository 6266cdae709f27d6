pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use crate::batch::FrameBatch;
use crate::camera::Camera;
use crate::error::ClientError;
use crate::mesh::{create_circle, create_rectangle, Mesh};
use resources::GameBuffers;
use wgpu::*;

const CIRCLE_SEGMENTS: u16 = 32;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,

    pub main_pipeline: RenderPipeline,
    pub camera_bind_group: BindGroup,

    pub buffers: GameBuffers,
    pub rect_mesh: Mesh,
    pub circle_mesh: Mesh,

    // Instances uploaded for the current frame
    pub rect_count: u32,
    pub circle_count: u32,
}

impl Renderer {
    /// Set up WebGPU on the canvas with a camera covering `width` x `height` logical pixels
    pub async fn new(
        canvas: web_sys::HtmlCanvasElement,
        width: f32,
        height: f32,
    ) -> Result<Self, ClientError> {
        let ctx = init::init_wgpu(canvas).await?;
        let camera = Camera::orthographic(width, height);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let pipes = pipeline::create_pipelines(&ctx.device, ctx.config.format);

        let rect_mesh = create_rectangle(&ctx.device, &ctx.queue);
        let circle_mesh = create_circle(&ctx.device, &ctx.queue, CIRCLE_SEGMENTS);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            main_pipeline: pipes.main_pipeline,
            camera_bind_group,
            buffers,
            rect_mesh,
            circle_mesh,
            rect_count: 0,
            circle_count: 0,
        })
    }

    pub fn draw(&mut self, batch: &FrameBatch) -> Result<(), ClientError> {
        draw::draw_frame(self, batch)
    }
}
