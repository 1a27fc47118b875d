use std::f32::consts::{FRAC_PI_2, PI, TAU};

use crate::coords::{Rect, Vec2};

use super::{FilledPrimitive, TessellateError, Triangle};

/// Arc subdivision used when the caller has no preference.
pub const DEFAULT_SEGMENTS: u32 = 16;

/// One of the four rounded corners.
///
/// Order follows a clockwise walk in screen space starting at the top-left.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    /// Absolute angle span `(start, end)` of this corner's quarter arc, in radians.
    ///
    /// Each span is exactly π/2 and runs in increasing angle, which is clockwise
    /// on screen because +Y points down.
    #[inline]
    pub fn angle_span(self) -> (f32, f32) {
        match self {
            Corner::TopLeft => (PI, 1.5 * PI),
            Corner::TopRight => (1.5 * PI, TAU),
            Corner::BottomRight => (0.0, FRAC_PI_2),
            Corner::BottomLeft => (FRAC_PI_2, PI),
        }
    }

    /// Arc center: the inner corner of this corner's inset square.
    #[inline]
    pub fn center(self, rect: Rect, radius: f32) -> Vec2 {
        let min = rect.min();
        let max = rect.max();
        match self {
            Corner::TopLeft => Vec2::new(min.x + radius, min.y + radius),
            Corner::TopRight => Vec2::new(max.x - radius, min.y + radius),
            Corner::BottomRight => Vec2::new(max.x - radius, max.y - radius),
            Corner::BottomLeft => Vec2::new(min.x + radius, max.y - radius),
        }
    }
}

/// A validated rounded rectangle, ready to tessellate.
///
/// Construction applies the clamping policy:
/// - negative radius → `0`
/// - radius above `min(width, height) / 2` → that bound
/// - `segments == 0` → `1`
///
/// so every accessor below produces non-negative extents.
///
/// `segments` has no upper bound, but sample angles are computed in `f32`:
/// past roughly 2^24 segments neighbouring samples collapse onto the same
/// angle. The fans stay valid (zero-area slivers), they just stop refining.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RoundedRect {
    rect: Rect,
    radius: f32,
    segments: u32,
}

impl RoundedRect {
    pub fn new(rect: Rect, radius: f32, segments: u32) -> Result<Self, TessellateError> {
        if !rect.is_finite() || rect.is_empty() {
            return Err(TessellateError::InvalidBounds(rect));
        }
        if !radius.is_finite() {
            return Err(TessellateError::InvalidRadius(radius));
        }

        let max_radius = 0.5 * rect.width().min(rect.height());
        Ok(Self {
            rect,
            radius: radius.clamp(0.0, max_radius),
            segments: segments.max(1),
        })
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Effective (clamped) corner radius.
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Effective (clamped) arc subdivision.
    #[inline]
    pub fn segments(&self) -> u32 {
        self.segments
    }

    /// Number of primitives [`tessellate_with`](Self::tessellate_with) emits.
    #[inline]
    pub fn primitive_count(&self) -> usize {
        5 + 4 * self.segments as usize
    }

    /// Interior rectangle, excluding the four corner insets' rows and columns.
    pub fn center_rect(&self) -> Rect {
        let Rect { origin, size } = self.rect;
        let r = self.radius;
        Rect::new(origin.x + r, origin.y + r, size.x - 2.0 * r, size.y - 2.0 * r)
    }

    /// Edge bars in emission order: top, bottom, left, right.
    pub fn edge_bars(&self) -> [Rect; 4] {
        let Rect { origin: Vec2 { x, y }, size: Vec2 { x: w, y: h } } = self.rect;
        let r = self.radius;
        [
            Rect::new(x + r, y, w - 2.0 * r, r),
            Rect::new(x + r, y + h - r, w - 2.0 * r, r),
            Rect::new(x, y + r, r, h - 2.0 * r),
            Rect::new(x + w - r, y + r, r, h - 2.0 * r),
        ]
    }

    /// Appends the `segments + 1` arc samples of `corner` to `out`.
    pub fn arc_into(&self, corner: Corner, out: &mut Vec<Vec2>) {
        let center = corner.center(self.rect, self.radius);
        let (start, end) = corner.angle_span();
        let step = (end - start) / self.segments as f32;

        out.reserve(self.segments as usize + 1);
        for i in 0..=self.segments {
            // Pin the last sample to the span end so adjacent seams meet exactly.
            let angle = if i == self.segments { end } else { start + i as f32 * step };
            out.push(center + Vec2::from_polar(self.radius, angle));
        }
    }

    /// Arc samples of `corner`, from the span start to the span end.
    pub fn arc(&self, corner: Corner) -> Vec<Vec2> {
        let mut out = Vec::new();
        self.arc_into(corner, &mut out);
        out
    }

    /// Emits the decomposition in a fixed order:
    /// center rectangle, top/bottom bars, left/right bars, then one fan per
    /// corner in [`Corner::ALL`] order.
    ///
    /// Fan triangle `i` is `(center, sample[i], sample[i + 1])`.
    pub fn tessellate_with(&self, mut sink: impl FnMut(FilledPrimitive)) {
        sink(FilledPrimitive::Rect(self.center_rect()));
        for bar in self.edge_bars() {
            sink(FilledPrimitive::Rect(bar));
        }

        let mut samples = Vec::with_capacity(self.segments as usize + 1);
        for corner in Corner::ALL {
            samples.clear();
            self.arc_into(corner, &mut samples);

            let center = corner.center(self.rect, self.radius);
            for pair in samples.windows(2) {
                sink(FilledPrimitive::Triangle(Triangle::new(center, pair[0], pair[1])));
            }
        }
    }

    pub fn tessellate(&self) -> Vec<FilledPrimitive> {
        let mut out = Vec::with_capacity(self.primitive_count());
        self.tessellate_with(|p| out.push(p));
        out
    }

    /// Closed outline polygon of the tessellated shape, clockwise on screen.
    ///
    /// Holds `4 * (segments + 1)` vertices: every arc sample of every corner, with
    /// the straight edges implied between consecutive corners.
    pub fn outline(&self) -> Vec<Vec2> {
        let mut out = Vec::with_capacity(4 * (self.segments as usize + 1));
        for corner in Corner::ALL {
            self.arc_into(corner, &mut out);
        }
        out
    }

    /// Area covered by the tessellation.
    ///
    /// Smaller than [`exact_area`](Self::exact_area) by the slivers between each
    /// arc and its chords; the gap shrinks as `segments` grows.
    pub fn covered_area(&self) -> f32 {
        let r = self.radius;
        let n = self.segments as f32;
        let fan = 0.5 * r * r * n * (FRAC_PI_2 / n).sin();
        self.rect.area() - 4.0 * r * r + 4.0 * fan
    }

    /// Area of the ideal rounded rectangle with circular corners.
    pub fn exact_area(&self) -> f32 {
        let r = self.radius;
        self.rect.area() - (4.0 - PI) * r * r
    }
}

/// Tessellates a rounded rectangle into filled rectangles and triangles.
///
/// See [`RoundedRect`] for the clamping policy and [`RoundedRect::tessellate_with`]
/// for the emission order.
pub fn tessellate(
    rect: Rect,
    radius: f32,
    segments: u32,
) -> Result<Vec<FilledPrimitive>, TessellateError> {
    Ok(RoundedRect::new(rect, radius, segments)?.tessellate())
}

/// Like [`tessellate`] but streams primitives into `sink` without collecting them.
///
/// Nothing is emitted when validation fails.
pub fn tessellate_with(
    rect: Rect,
    radius: f32,
    segments: u32,
    sink: impl FnMut(FilledPrimitive),
) -> Result<(), TessellateError> {
    RoundedRect::new(rect, radius, segments)?.tessellate_with(sink);
    Ok(())
}

/// Outline polygon of a rounded rectangle. See [`RoundedRect::outline`].
pub fn outline(rect: Rect, radius: f32, segments: u32) -> Result<Vec<Vec2>, TessellateError> {
    Ok(RoundedRect::new(rect, radius, segments)?.outline())
}
