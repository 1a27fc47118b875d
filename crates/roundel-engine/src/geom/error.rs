use std::fmt;

use crate::coords::Rect;

/// Error returned when a rounded rectangle cannot be tessellated.
///
/// Oversized radii and a zero segment count are clamped, not rejected; only
/// inputs with no meaningful geometry end up here.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TessellateError {
    /// Bounds are non-finite or have a non-positive width or height.
    InvalidBounds(Rect),
    /// Corner radius is NaN or infinite.
    InvalidRadius(f32),
}

impl fmt::Display for TessellateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TessellateError::InvalidBounds(r) => write!(
                f,
                "invalid rounded rect bounds ({}, {}, {}, {}): expected finite values with positive size",
                r.origin.x, r.origin.y, r.size.x, r.size.y
            ),
            TessellateError::InvalidRadius(radius) => {
                write!(f, "invalid corner radius {radius}: expected a finite value")
            }
        }
    }
}

impl std::error::Error for TessellateError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_value() {
        let e = TessellateError::InvalidBounds(Rect::new(1.0, 2.0, 0.0, 4.0));
        assert!(e.to_string().contains("(1, 2, 0, 4)"));

        let e = TessellateError::InvalidRadius(f32::INFINITY);
        assert!(e.to_string().contains("inf"));
    }
}
