use crate::geom::Triangle;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Solid triangle.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleCmd {
    pub triangle: Triangle,
    pub color: Color,
}

impl TriangleCmd {
    #[inline]
    pub fn new(triangle: Triangle, color: Color) -> Self {
        Self { triangle, color }
    }
}

impl DrawList {
    /// Records a solid triangle draw command.
    #[inline]
    pub fn push_triangle(&mut self, z: ZIndex, triangle: Triangle, color: Color) {
        self.push(z, DrawCmd::Triangle(TriangleCmd::new(triangle, color)));
    }
}
