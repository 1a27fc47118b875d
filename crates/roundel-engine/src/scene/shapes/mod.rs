pub(crate) mod rect;
pub(crate) mod rounded_rect;
pub(crate) mod text;
pub(crate) mod triangle;
