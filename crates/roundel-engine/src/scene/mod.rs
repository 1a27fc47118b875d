//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands in screen space
//! - provide deterministic ordering (z-index + insertion order)
//! - keep shape-specific push helpers isolated per shape file under `scene::shapes`
//!
//! Rounded rectangles are not a command of their own: they are tessellated on
//! push into rectangle and triangle commands (see [`FillStrategy`]).

mod cmd;
mod list;
mod order;

mod shapes;

pub use cmd::DrawCmd;
pub use list::{DrawItem, DrawList};
pub use order::{SortKey, ZIndex};
pub use shapes::rect::RectCmd;
pub use shapes::rounded_rect::FillStrategy;
pub use shapes::text::{TextAnchor, TextCmd};
pub use shapes::triangle::TriangleCmd;
