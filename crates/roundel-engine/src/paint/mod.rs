//! Fill colors shared between the scene and the renderers.
//!
//! Colors are linear premultiplied RGBA. Geometry types live in `coords`.

pub mod color;

pub use color::Color;
