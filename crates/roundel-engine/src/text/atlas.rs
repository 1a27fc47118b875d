/// Location of a packed glyph inside the atlas, in texels.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AtlasSlot {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl AtlasSlot {
    /// Normalized `(uv_min, uv_max)` for an atlas of `atlas_size × atlas_size` texels.
    pub fn uv(self, atlas_size: u32) -> ([f32; 2], [f32; 2]) {
        let s = atlas_size as f32;
        (
            [self.x as f32 / s, self.y as f32 / s],
            [(self.x + self.width) as f32 / s, (self.y + self.height) as f32 / s],
        )
    }
}

/// Shelf (row) packer for a square glyph atlas.
///
/// Glyphs are placed left to right; when a glyph does not fit horizontally a new
/// shelf starts below the tallest glyph of the current one. Once a glyph does
/// not fit vertically the packer reports full and rejects every later request.
#[derive(Debug, Clone)]
pub struct ShelfPacker {
    size: u32,
    padding: u32,
    cursor_x: u32,
    cursor_y: u32,
    row_height: u32,
    full: bool,
}

impl ShelfPacker {
    pub fn new(size: u32, padding: u32) -> Self {
        Self {
            size,
            padding,
            cursor_x: padding,
            cursor_y: padding,
            row_height: 0,
            full: false,
        }
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.full
    }

    /// Reserves a `width × height` slot, or `None` when the atlas has no room left.
    pub fn allocate(&mut self, width: u32, height: u32) -> Option<AtlasSlot> {
        if self.full {
            return None;
        }

        if self.cursor_x + width + self.padding > self.size {
            self.cursor_y += self.row_height + self.padding;
            self.cursor_x = self.padding;
            self.row_height = 0;
        }

        if self.cursor_x + width + self.padding > self.size
            || self.cursor_y + height + self.padding > self.size
        {
            self.full = true;
            return None;
        }

        let slot = AtlasSlot { x: self.cursor_x, y: self.cursor_y, width, height };
        self.cursor_x += width + self.padding;
        self.row_height = self.row_height.max(height);
        Some(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_a_shelf_left_to_right() {
        let mut p = ShelfPacker::new(64, 1);
        let a = p.allocate(10, 8).unwrap();
        let b = p.allocate(12, 5).unwrap();

        assert_eq!(a, AtlasSlot { x: 1, y: 1, width: 10, height: 8 });
        assert_eq!(b, AtlasSlot { x: 12, y: 1, width: 12, height: 5 });
    }

    #[test]
    fn wraps_below_the_tallest_glyph() {
        let mut p = ShelfPacker::new(32, 1);
        p.allocate(20, 6).unwrap();
        p.allocate(5, 9).unwrap();
        // 1 + 20 + 1 + 5 + 1 = 28; a 10-wide glyph no longer fits on this shelf.
        let c = p.allocate(10, 3).unwrap();
        assert_eq!((c.x, c.y), (1, 1 + 9 + 1));
    }

    #[test]
    fn reports_full_and_stays_full() {
        let mut p = ShelfPacker::new(16, 1);
        assert!(p.allocate(14, 14).is_some());
        assert!(p.allocate(14, 14).is_none());
        assert!(p.is_full());
        assert!(p.allocate(1, 1).is_none());
    }

    #[test]
    fn oversized_glyph_is_rejected() {
        let mut p = ShelfPacker::new(16, 1);
        assert!(p.allocate(40, 2).is_none());
        assert!(p.is_full());
    }

    #[test]
    fn uv_is_normalized() {
        let slot = AtlasSlot { x: 512, y: 0, width: 512, height: 1024 };
        assert_eq!(slot.uv(2048), ([0.25, 0.0], [0.5, 0.5]));
    }
}
