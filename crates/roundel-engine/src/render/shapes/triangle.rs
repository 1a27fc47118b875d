use bytemuck::{Pod, Zeroable};

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList, TriangleCmd};

use super::common::{
    begin_load_pass, bounded_capacity, create_shape_pipeline, create_viewport_ubo,
    viewport_layout_entry, write_viewport_ubo,
};

/// Solid triangle renderer.
///
/// Every `DrawCmd::Triangle` becomes three vertices in one non-indexed
/// triangle list, uploaded once per frame and drawn with a single call.
/// This is the batching path the corner fans of rounded rectangles go
/// through, and the whole shape under `FillStrategy::Triangles`.
#[derive(Default)]
pub struct TriangleRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    viewport_ubo: Option<wgpu::Buffer>,

    vertex_vbo: Option<wgpu::Buffer>,
    vertex_capacity: usize,
    vertices: Vec<ColorVertex>,
    warned_oversize: bool,
}

impl TriangleRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders every `DrawCmd::Triangle` in `draw_list`, in paint order, into `target`.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
    ) {
        self.vertices.clear();
        for item in draw_list.iter_in_paint_order() {
            if let DrawCmd::Triangle(cmd) = &item.cmd {
                self.vertices.extend(ColorVertex::from_cmd(cmd));
            }
        }

        if self.vertices.is_empty() {
            return;
        }

        self.ensure_pipeline(ctx);
        self.ensure_bindings(ctx);
        if !self.ensure_vertex_capacity(ctx, self.vertices.len()) {
            return;
        }

        let Some(ubo) = self.viewport_ubo.as_ref() else { return };
        write_viewport_ubo(ctx, ubo);

        let Some(vbo) = self.vertex_vbo.as_ref() else { return };
        ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(&self.vertices));

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };

        let mut rpass = begin_load_pass(target, "roundel triangle pass");
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.draw(0..self.vertices.len() as u32, 0..1);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("roundel triangle shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/triangle.wgsl").into()),
        });

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("roundel triangle bgl"),
                    entries: &[viewport_layout_entry()],
                });

        let pipeline = create_shape_pipeline(
            ctx,
            "roundel triangle pipeline",
            &shader,
            &bind_group_layout,
            &[ColorVertex::layout()],
        );

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);

        self.bind_group = None;
        self.viewport_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.viewport_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let viewport_ubo = create_viewport_ubo(ctx, "roundel triangle viewport ubo");
        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("roundel triangle bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: viewport_ubo.as_entire_binding(),
            }],
        });

        self.viewport_ubo = Some(viewport_ubo);
        self.bind_group = Some(bind_group);
    }

    /// Returns `false` when `required` vertices cannot fit in one buffer on this device.
    fn ensure_vertex_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) -> bool {
        if required <= self.vertex_capacity && self.vertex_vbo.is_some() {
            return true;
        }

        let max_bytes = ctx.device.limits().max_buffer_size;
        let Some(new_cap) =
            bounded_capacity(required, std::mem::size_of::<ColorVertex>(), max_bytes)
        else {
            if !self.warned_oversize {
                log::warn!(
                    "{required} triangle vertices exceed max_buffer_size ({max_bytes} bytes); \
                     dropping triangle batch"
                );
                self.warned_oversize = true;
            }
            return false;
        };

        self.vertex_vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("roundel triangle vbo"),
            size: (new_cap * std::mem::size_of::<ColorVertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.vertex_capacity = new_cap;
        self.warned_oversize = false;
        true
    }
}

/// Per-vertex position (logical px) and premultiplied color.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct ColorVertex {
    pos: [f32; 2],
    color: [f32; 4],
}

impl ColorVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    fn from_cmd(cmd: &TriangleCmd) -> [Self; 3] {
        let color = cmd.color.to_array();
        cmd.triangle.vertices().map(|p| Self { pos: [p.x, p.y], color })
    }

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ColorVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}
