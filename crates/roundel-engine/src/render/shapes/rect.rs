use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList, RectCmd};

use super::common::{
    begin_load_pass, bounded_capacity, create_shape_pipeline, create_viewport_ubo,
    viewport_layout_entry, write_viewport_ubo, QuadVertex, QUAD_INDICES, QUAD_VERTICES,
};

/// Solid rectangle renderer.
///
/// One unit quad, instanced per rectangle. Geometry is in logical pixels and
/// is converted to NDC in the vertex shader using the viewport uniform.
/// Color is expected to be linear premultiplied RGBA (`paint::Color`).
#[derive(Default)]
pub struct RectRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    viewport_ubo: Option<wgpu::Buffer>,

    quad_vbo: Option<wgpu::Buffer>,
    quad_ibo: Option<wgpu::Buffer>,

    instance_vbo: Option<wgpu::Buffer>,
    instance_capacity: usize,
    instances: Vec<RectInstance>,
    warned_oversize: bool,
}

impl RectRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders every `DrawCmd::Rect` in `draw_list`, in paint order, into `target`.
    ///
    /// Empty or inverted rectangles are normalized; zero-area ones are skipped.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
    ) {
        self.instances.clear();
        self.instances.extend(draw_list.iter_in_paint_order().filter_map(|item| match &item.cmd {
            DrawCmd::Rect(cmd) => RectInstance::from_cmd(cmd),
            _ => None,
        }));

        if self.instances.is_empty() {
            return;
        }

        self.ensure_pipeline(ctx);
        self.ensure_static_buffers(ctx);
        self.ensure_bindings(ctx);
        if !self.ensure_instance_capacity(ctx, self.instances.len()) {
            return;
        }

        let Some(ubo) = self.viewport_ubo.as_ref() else { return };
        write_viewport_ubo(ctx, ubo);

        let Some(instance_vbo) = self.instance_vbo.as_ref() else { return };
        ctx.queue
            .write_buffer(instance_vbo, 0, bytemuck::cast_slice(&self.instances));

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(quad_vbo) = self.quad_vbo.as_ref() else { return };
        let Some(quad_ibo) = self.quad_ibo.as_ref() else { return };

        let mut rpass = begin_load_pass(target, "roundel rect pass");
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, quad_vbo.slice(..));
        rpass.set_vertex_buffer(1, instance_vbo.slice(..));
        rpass.set_index_buffer(quad_ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..6, 0, 0..self.instances.len() as u32);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("roundel rect shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/rect.wgsl").into()),
        });

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("roundel rect bgl"),
                    entries: &[viewport_layout_entry()],
                });

        let pipeline = create_shape_pipeline(
            ctx,
            "roundel rect pipeline",
            &shader,
            &bind_group_layout,
            &[QuadVertex::layout(), RectInstance::layout()],
        );

        log::debug!("rect pipeline created for {:?}", ctx.surface_format);

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

        let viewport_ubo = create_viewport_ubo(ctx, "roundel rect viewport ubo");
        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("roundel rect bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: viewport_ubo.as_entire_binding(),
            }],
        });

        self.viewport_ubo = Some(viewport_ubo);
        self.bind_group = Some(bind_group);
    }

    fn ensure_static_buffers(&mut self, ctx: &RenderCtx<'_>) {
        if self.quad_vbo.is_some() && self.quad_ibo.is_some() {
            return;
        }

        self.quad_vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("roundel rect quad vbo"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        }));

        self.quad_ibo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("roundel rect quad ibo"),
            contents: bytemuck::cast_slice(&QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        }));
    }

    /// Returns `false` when the instances cannot fit in one buffer on this device.
    fn ensure_instance_capacity(
        &mut self,
        ctx: &RenderCtx<'_>,
        required_instances: usize,
    ) -> bool {
        if required_instances <= self.instance_capacity && self.instance_vbo.is_some() {
            return true;
        }

        let elem_size = std::mem::size_of::<RectInstance>();
        let max_bytes = ctx.device.limits().max_buffer_size;
        let Some(new_cap) = bounded_capacity(required_instances, elem_size, max_bytes) else {
            if !self.warned_oversize {
                log::warn!(
                    "{required_instances} rect instances exceed max_buffer_size \
                     ({max_bytes} bytes); dropping rect batch"
                );
                self.warned_oversize = true;
            }
            return false;
        };
        let new_size = (new_cap * elem_size) as u64;

        self.instance_vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("roundel rect instance vbo"),
            size: new_size,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.instance_capacity = new_cap;
        self.warned_oversize = false;
        true
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct RectInstance {
    origin: [f32; 2],
    size: [f32; 2],
    color: [f32; 4],
}

impl RectInstance {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        1 => Float32x2, // origin
        2 => Float32x2, // size
        3 => Float32x4  // color
    ];

    fn from_cmd(cmd: &RectCmd) -> Option<Self> {
        let r = cmd.rect.normalized();
        if r.is_empty() {
            return None;
        }
        Some(Self {
            origin: [r.origin.x, r.origin.y],
            size: [r.size.x, r.size.y],
            color: cmd.color.to_array(),
        })
    }

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<RectInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rect;
    use crate::paint::Color;

    #[test]
    fn instance_from_cmd_normalizes() {
        let cmd = RectCmd::new(Rect::new(10.0, 10.0, -4.0, 2.0), Color::white());
        let inst = RectInstance::from_cmd(&cmd).unwrap();
        assert_eq!(inst.origin, [6.0, 10.0]);
        assert_eq!(inst.size, [4.0, 2.0]);
        assert_eq!(inst.color, [1.0; 4]);
    }

    #[test]
    fn zero_area_rects_are_skipped() {
        // Edge bars of a zero-radius rounded rect have no extent.
        let cmd = RectCmd::new(Rect::new(0.0, 0.0, 40.0, 0.0), Color::white());
        assert!(RectInstance::from_cmd(&cmd).is_none());
    }

    #[test]
    fn instance_stride_matches_attributes() {
        assert_eq!(std::mem::size_of::<RectInstance>(), 32);
    }
}
