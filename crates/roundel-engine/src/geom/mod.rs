//! Pure geometry: rounded-rectangle tessellation into filled primitives.
//!
//! Nothing in this module touches the GPU or the scene. Output primitives are in
//! screen space (see [`crate::coords`]) and can be fed to any backend that fills
//! axis-aligned rectangles and triangles.

mod error;
mod primitive;
mod rounded_rect;

pub use error::TessellateError;
pub use primitive::{polygon_area, FilledPrimitive, Triangle};
pub use rounded_rect::{outline, tessellate, tessellate_with, Corner, RoundedRect, DEFAULT_SEGMENTS};
