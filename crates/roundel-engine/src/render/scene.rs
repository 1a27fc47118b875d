use crate::scene::DrawList;
use crate::text::FontSystem;

use super::shapes::rect::RectRenderer;
use super::shapes::text::TextRenderer;
use super::shapes::triangle::TriangleRenderer;
use super::{RenderCtx, RenderTarget};

/// Draws a whole [`DrawList`] with one renderer per command kind.
///
/// Passes run rect → triangle → text. Within a pass commands keep paint
/// order; across passes the fixed order wins, so text always lands on top.
#[derive(Default)]
pub struct SceneRenderer {
    rects: RectRenderer,
    triangles: TriangleRenderer,
    text: TextRenderer,
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
        font_system: &FontSystem,
    ) {
        self.rects.render(ctx, target, draw_list);
        self.triangles.render(ctx, target, draw_list);
        self.text.render(ctx, target, draw_list, font_system);
    }
}
