//! Shared GPU types and utilities used by all shape renderers.

use std::num::NonZeroU64;

use bytemuck::{Pod, Zeroable};

use crate::coords::Viewport;
use crate::render::{RenderCtx, RenderTarget};

// ── blend ─────────────────────────────────────────────────────────────────

pub(super) fn premul_alpha_blend() -> wgpu::BlendState {
    let component = wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
        operation: wgpu::BlendOperation::Add,
    };
    wgpu::BlendState { color: component, alpha: component }
}

// ── viewport uniform ──────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub(super) struct ViewportUniform {
    pub viewport: [f32; 2],
    pub _pad: [f32; 2], // 16-byte alignment
}

impl ViewportUniform {
    /// Degenerate viewports upload as 1×1 so the shader never divides by zero.
    pub(super) fn new(viewport: Viewport) -> Self {
        Self {
            viewport: [viewport.width.max(1.0), viewport.height.max(1.0)],
            _pad: [0.0; 2],
        }
    }
}

pub(super) const VIEWPORT_UBO_SIZE: NonZeroU64 =
    match NonZeroU64::new(std::mem::size_of::<ViewportUniform>() as u64) {
        Some(n) => n,
        None => panic!("ViewportUniform must not be zero-sized"),
    };

/// Binding 0 of every shape pipeline: the viewport uniform, vertex stage only.
pub(super) fn viewport_layout_entry() -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding: 0,
        visibility: wgpu::ShaderStages::VERTEX,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: Some(VIEWPORT_UBO_SIZE),
        },
        count: None,
    }
}

pub(super) fn create_viewport_ubo(ctx: &RenderCtx<'_>, label: &str) -> wgpu::Buffer {
    ctx.device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: VIEWPORT_UBO_SIZE.get(),
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

pub(super) fn write_viewport_ubo(ctx: &RenderCtx<'_>, ubo: &wgpu::Buffer) {
    ctx.queue
        .write_buffer(ubo, 0, bytemuck::bytes_of(&ViewportUniform::new(ctx.viewport)));
}

// ── quad vertex ───────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct QuadVertex {
    pub pos: [f32; 2], // 0..1
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

pub(super) const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { pos: [0.0, 0.0] },
    QuadVertex { pos: [1.0, 0.0] },
    QuadVertex { pos: [1.0, 1.0] },
    QuadVertex { pos: [0.0, 1.0] },
];

pub(super) const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

// ── pipeline ──────────────────────────────────────────────────────────────

/// Builds an alpha-blended triangle-list pipeline with `vs_main`/`fs_main` entry points.
pub(super) fn create_shape_pipeline(
    ctx: &RenderCtx<'_>,
    label: &str,
    shader: &wgpu::ShaderModule,
    bind_group_layout: &wgpu::BindGroupLayout,
    buffers: &[wgpu::VertexBufferLayout<'_>],
) -> wgpu::RenderPipeline {
    let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(label),
        bind_group_layouts: &[bind_group_layout],
        immediate_size: 0,
    });

    ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            compilation_options: Default::default(),
            buffers,
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: ctx.surface_format,
                blend: Some(premul_alpha_blend()),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    })
}

/// Opens a pass that draws on top of what the target already holds.
pub(super) fn begin_load_pass<'e>(
    target: &'e mut RenderTarget<'_>,
    label: &str,
) -> wgpu::RenderPass<'e> {
    target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some(label),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target.color_view,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Load,
                store: wgpu::StoreOp::Store,
            },
            depth_slice: None,
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
        multiview_mask: None,
    })
}

/// Capacity for a growable vertex/instance buffer: next power of two, at least 64.
#[inline]
pub(super) fn grown_capacity(required: usize) -> usize {
    required.next_power_of_two().max(64)
}

/// Like [`grown_capacity`], but never larger than `max_bytes / elem_size` elements.
///
/// Returns `None` when `required` elements alone exceed `max_bytes`
/// (the device's `max_buffer_size`); the caller drops the batch.
pub(super) fn bounded_capacity(
    required: usize,
    elem_size: usize,
    max_bytes: u64,
) -> Option<usize> {
    let max_elems = usize::try_from(max_bytes / elem_size.max(1) as u64).unwrap_or(usize::MAX);
    if required > max_elems {
        return None;
    }
    Some(grown_capacity(required).min(max_elems))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── viewport uniform ──

    #[test]
    fn viewport_uniform_is_sixteen_bytes() {
        assert_eq!(VIEWPORT_UBO_SIZE.get(), 16);
    }

    #[test]
    fn viewport_uniform_clamps_degenerate_size() {
        let u = ViewportUniform::new(Viewport::new(0.0, 600.0));
        assert_eq!(u.viewport, [1.0, 600.0]);
    }

    // ── buffers ──

    #[test]
    fn grown_capacity_rounds_up() {
        assert_eq!(grown_capacity(0), 64);
        assert_eq!(grown_capacity(65), 128);
        assert_eq!(grown_capacity(128), 128);
    }

    #[test]
    fn bounded_capacity_stays_within_limit() {
        let max = wgpu::Limits::default().max_buffer_size;

        // 1M segments, split into triangles: 12M vertices of 24 bytes.
        assert_eq!(bounded_capacity(12_000_000, 24, max), None);

        // Growth would overshoot the limit; capacity is capped instead.
        let elems = (max / 24) as usize;
        let cap = bounded_capacity(elems - 10, 24, max).unwrap();
        assert_eq!(cap, elems);
        assert!((cap * 24) as u64 <= max);

        assert_eq!(bounded_capacity(100, 24, max), Some(128));
    }

    #[test]
    fn blend_is_premultiplied_over() {
        let b = premul_alpha_blend();
        assert_eq!(b.color.src_factor, wgpu::BlendFactor::One);
        assert_eq!(b.color.dst_factor, wgpu::BlendFactor::OneMinusSrcAlpha);
        assert_eq!(b.alpha, b.color);
    }
}
