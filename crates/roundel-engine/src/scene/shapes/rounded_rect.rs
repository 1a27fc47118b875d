use crate::coords::Rect;
use crate::geom::{FilledPrimitive, RoundedRect, TessellateError, DEFAULT_SEGMENTS};
use crate::paint::Color;
use crate::scene::{DrawList, ZIndex};

/// How a tessellated rounded rectangle is lowered into draw commands.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum FillStrategy {
    /// Everything becomes triangles; each rectangle is split in two.
    /// Mirrors immediate-mode quad/triangle batching.
    Triangles,
    /// Rectangles go to the rectangle renderer; only the corner fans are triangles.
    #[default]
    RectsAndFans,
}

impl DrawList {
    /// Tessellates a rounded rectangle and records the resulting commands.
    ///
    /// Returns the number of commands recorded:
    /// - `RectsAndFans`: `5 + 4 * segments`
    /// - `Triangles`: `10 + 4 * segments`
    ///
    /// Radius and segment count are clamped as described on [`RoundedRect`].
    /// Nothing is recorded when the bounds or radius are invalid.
    pub fn push_rounded_rect(
        &mut self,
        z: ZIndex,
        rect: Rect,
        radius: f32,
        segments: u32,
        color: Color,
        strategy: FillStrategy,
    ) -> Result<usize, TessellateError> {
        let shape = RoundedRect::new(rect, radius, segments)?;
        if shape.radius() != radius {
            log::debug!("rounded rect radius {radius} clamped to {}", shape.radius());
        }

        let before = self.len();
        shape.tessellate_with(|prim| match (strategy, prim) {
            (FillStrategy::RectsAndFans, FilledPrimitive::Rect(r)) => {
                self.push_solid_rect(z, r, color);
            }
            _ => prim.for_each_triangle(|t| self.push_triangle(z, t, color)),
        });

        Ok(self.len() - before)
    }

    /// Records a solid rounded rectangle with the default arc subdivision.
    #[inline]
    pub fn push_solid_rounded_rect(
        &mut self,
        z: ZIndex,
        rect: Rect,
        radius: f32,
        color: Color,
    ) -> Result<usize, TessellateError> {
        self.push_rounded_rect(z, rect, radius, DEFAULT_SEGMENTS, color, FillStrategy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::DrawCmd;

    fn counts(list: &DrawList) -> (usize, usize) {
        let rects = list.items().iter().filter(|i| matches!(i.cmd, DrawCmd::Rect(_))).count();
        let tris = list.items().iter().filter(|i| matches!(i.cmd, DrawCmd::Triangle(_))).count();
        (rects, tris)
    }

    fn covered(list: &DrawList) -> f64 {
        list.items()
            .iter()
            .map(|i| match &i.cmd {
                DrawCmd::Rect(c) => c.rect.area() as f64,
                DrawCmd::Triangle(c) => c.triangle.area() as f64,
                DrawCmd::Text(_) => 0.0,
            })
            .sum()
    }

    #[test]
    fn rects_and_fans_keeps_rectangles() {
        let mut list = DrawList::new();
        let n = list
            .push_rounded_rect(
                ZIndex(0),
                Rect::new(0.0, 0.0, 40.0, 40.0),
                10.0,
                4,
                Color::white(),
                FillStrategy::RectsAndFans,
            )
            .unwrap();

        assert_eq!(n, 21);
        assert_eq!(counts(&list), (5, 16));
    }

    #[test]
    fn triangles_splits_every_rectangle() {
        let mut list = DrawList::new();
        let n = list
            .push_rounded_rect(
                ZIndex(0),
                Rect::new(0.0, 0.0, 40.0, 40.0),
                10.0,
                4,
                Color::white(),
                FillStrategy::Triangles,
            )
            .unwrap();

        assert_eq!(n, 26);
        assert_eq!(counts(&list), (0, 26));
    }

    #[test]
    fn both_strategies_cover_the_same_area() {
        let rect = Rect::new(100.0, 100.0, 100.0, 100.0);
        let mut a = DrawList::new();
        let mut b = DrawList::new();
        a.push_rounded_rect(ZIndex(0), rect, 20.0, 16, Color::white(), FillStrategy::Triangles)
            .unwrap();
        b.push_rounded_rect(ZIndex(0), rect, 20.0, 16, Color::white(), FillStrategy::RectsAndFans)
            .unwrap();

        assert!((covered(&a) - covered(&b)).abs() < 1e-2);
    }

    #[test]
    fn commands_carry_z_and_color() {
        let mut list = DrawList::new();
        let color = Color::from_straight(1.0, 0.0, 0.0, 0.5);
        list.push_solid_rounded_rect(ZIndex(7), Rect::new(0.0, 0.0, 20.0, 10.0), 3.0, color)
            .unwrap();

        assert_eq!(list.len(), 5 + 4 * DEFAULT_SEGMENTS as usize);
        for item in list.items() {
            assert_eq!(item.key.z, ZIndex(7));
            match &item.cmd {
                DrawCmd::Rect(c) => assert_eq!(c.color, color),
                DrawCmd::Triangle(c) => assert_eq!(c.color, color),
                DrawCmd::Text(_) => panic!("unexpected text command"),
            }
        }
    }

    #[test]
    fn invalid_bounds_record_nothing() {
        let mut list = DrawList::new();
        let res = list.push_solid_rounded_rect(
            ZIndex(0),
            Rect::new(0.0, 0.0, 0.0, 10.0),
            2.0,
            Color::white(),
        );

        assert!(matches!(res, Err(TessellateError::InvalidBounds(_))));
        assert!(list.is_empty());
    }
}
