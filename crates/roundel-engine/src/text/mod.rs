//! Font loading, text measurement and glyph atlas packing.
//!
//! Rasterization and layout come from `fontdue`; the GPU side lives in
//! `render::shapes::text`.

mod atlas;
mod font_system;

pub use atlas::{AtlasSlot, ShelfPacker};
pub use font_system::{FontId, FontLoadError, FontSystem};
