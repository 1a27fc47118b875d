use super::Vec2;

/// Viewport size in logical pixels.
///
/// This is the orthographic projection basis: the vertex shaders map
/// `(0, 0)..(width, height)` to NDC with the origin at the top-left and +Y down.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// CPU mirror of the shader projection. Degenerate viewports are treated as 1×1.
    #[inline]
    pub fn to_ndc(self, p: Vec2) -> Vec2 {
        let w = self.width.max(1.0);
        let h = self.height.max(1.0);
        Vec2::new(p.x / w * 2.0 - 1.0, 1.0 - p.y / h * 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_ndc_maps_corners() {
        let vp = Viewport::new(800.0, 600.0);
        assert_eq!(vp.to_ndc(Vec2::new(0.0, 0.0)), Vec2::new(-1.0, 1.0));
        assert_eq!(vp.to_ndc(Vec2::new(800.0, 600.0)), Vec2::new(1.0, -1.0));
        assert_eq!(vp.to_ndc(Vec2::new(400.0, 300.0)), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn is_valid_requires_positive_finite_size() {
        assert!(Viewport::new(1.0, 1.0).is_valid());
        assert!(!Viewport::new(0.0, 1.0).is_valid());
        assert!(!Viewport::new(f32::NAN, 1.0).is_valid());
    }
}
