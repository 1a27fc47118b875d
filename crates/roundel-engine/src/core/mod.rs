//! Contract between the runtime loop and the application.
//!
//! Runtime internals stay behind `FrameCtx`; the application sees one
//! per-frame context and returns an `AppControl`.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
