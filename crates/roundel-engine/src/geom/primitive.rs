use crate::coords::{Rect, Vec2};

/// Filled triangle in screen space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle {
    pub a: Vec2,
    pub b: Vec2,
    pub c: Vec2,
}

impl Triangle {
    #[inline]
    pub const fn new(a: Vec2, b: Vec2, c: Vec2) -> Self {
        Self { a, b, c }
    }

    #[inline]
    pub fn vertices(self) -> [Vec2; 3] {
        [self.a, self.b, self.c]
    }

    /// Signed area. Positive when the winding is clockwise on screen (+Y down).
    #[inline]
    pub fn signed_area(self) -> f32 {
        0.5 * (self.b - self.a).cross(self.c - self.a)
    }

    #[inline]
    pub fn area(self) -> f32 {
        self.signed_area().abs()
    }
}

/// Output unit of the tessellator and input unit of the drawing backend.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FilledPrimitive {
    Rect(Rect),
    Triangle(Triangle),
}

impl FilledPrimitive {
    #[inline]
    pub fn area(&self) -> f32 {
        match self {
            FilledPrimitive::Rect(r) => r.area().max(0.0),
            FilledPrimitive::Triangle(t) => t.area(),
        }
    }

    /// Lowers the primitive to triangles: a rectangle becomes two, a triangle stays as is.
    ///
    /// Rectangles split along the top-left → bottom-right diagonal.
    pub fn for_each_triangle(&self, mut f: impl FnMut(Triangle)) {
        match *self {
            FilledPrimitive::Rect(r) => {
                let [tl, tr, br, bl] = r.corners();
                f(Triangle::new(tl, tr, br));
                f(Triangle::new(tl, br, bl));
            }
            FilledPrimitive::Triangle(t) => f(t),
        }
    }
}

/// Absolute area of a simple polygon (shoelace formula).
pub fn polygon_area(points: &[Vec2]) -> f32 {
    if points.len() < 3 {
        return 0.0;
    }
    let twice: f32 = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(p, q)| p.cross(*q))
        .sum();
    (twice * 0.5).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vec2 { Vec2::new(x, y) }

    // ── Triangle ──────────────────────────────────────────────────────────

    #[test]
    fn triangle_area_ignores_winding() {
        let cw = Triangle::new(v(0.0, 0.0), v(4.0, 0.0), v(0.0, 3.0));
        let ccw = Triangle::new(v(0.0, 0.0), v(0.0, 3.0), v(4.0, 0.0));
        assert_eq!(cw.area(), 6.0);
        assert_eq!(ccw.area(), 6.0);
        assert_eq!(cw.signed_area(), -ccw.signed_area());
    }

    #[test]
    fn collinear_triangle_has_zero_area() {
        let t = Triangle::new(v(1.0, 1.0), v(1.0, 1.0), v(1.0, 1.0));
        assert_eq!(t.area(), 0.0);
    }

    // ── FilledPrimitive ───────────────────────────────────────────────────

    #[test]
    fn rect_lowers_to_two_triangles_covering_its_area() {
        let p = FilledPrimitive::Rect(Rect::new(10.0, 20.0, 30.0, 40.0));
        let mut tris = Vec::new();
        p.for_each_triangle(|t| tris.push(t));

        assert_eq!(tris.len(), 2);
        let sum: f32 = tris.iter().map(|t| t.area()).sum();
        assert_eq!(sum, p.area());
    }

    #[test]
    fn triangle_lowers_to_itself() {
        let t = Triangle::new(v(0.0, 0.0), v(1.0, 0.0), v(0.0, 1.0));
        let mut tris = Vec::new();
        FilledPrimitive::Triangle(t).for_each_triangle(|x| tris.push(x));
        assert_eq!(tris, vec![t]);
    }

    // ── polygon_area ──────────────────────────────────────────────────────

    #[test]
    fn polygon_area_of_square() {
        let sq = [v(0.0, 0.0), v(10.0, 0.0), v(10.0, 10.0), v(0.0, 10.0)];
        assert_eq!(polygon_area(&sq), 100.0);
    }

    #[test]
    fn polygon_area_degenerate_inputs() {
        assert_eq!(polygon_area(&[]), 0.0);
        assert_eq!(polygon_area(&[v(0.0, 0.0), v(1.0, 1.0)]), 0.0);
    }
}
