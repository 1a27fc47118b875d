//! roundel engine crate.
//!
//! Rounded-rectangle tessellation plus the small wgpu/winit runtime that draws
//! it: scene recording, shape and text renderers, window loop, logging.

pub mod coords;
pub mod core;
pub mod device;
pub mod geom;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod text;
pub mod time;
pub mod window;
