use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};
use crate::text::FontId;

/// Which line of the first text row `origin.y` refers to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum TextAnchor {
    /// `origin` is the top-left of the text block.
    #[default]
    Top,
    /// `origin.y` is the baseline of the first line.
    Baseline,
}

/// Text draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub font: FontId,
    /// Font size in logical pixels.
    pub size: f32,
    pub color: Color,
    /// Anchor point in logical pixels; see `anchor`.
    pub origin: Vec2,
    pub anchor: TextAnchor,
}

impl DrawList {
    /// Records a text draw command anchored at its top-left corner.
    pub fn push_text(
        &mut self,
        z: ZIndex,
        text: impl Into<String>,
        font: FontId,
        size: f32,
        color: Color,
        origin: Vec2,
    ) {
        self.push_anchored_text(z, text, font, size, color, origin, TextAnchor::Top);
    }

    /// Records a text draw command with an explicit vertical anchor.
    pub fn push_anchored_text(
        &mut self,
        z: ZIndex,
        text: impl Into<String>,
        font: FontId,
        size: f32,
        color: Color,
        origin: Vec2,
        anchor: TextAnchor,
    ) {
        self.push(z, DrawCmd::Text(TextCmd {
            text: text.into(),
            font,
            size,
            color,
            origin,
            anchor,
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_text_defaults_to_top_anchor() {
        let mut list = DrawList::new();
        list.push_text(ZIndex(1), "Hej", FontId(0), 24.0, Color::white(), Vec2::new(4.0, 8.0));

        let DrawCmd::Text(cmd) = &list.items()[0].cmd else { panic!("expected text") };
        assert_eq!(cmd.text, "Hej");
        assert_eq!(cmd.anchor, TextAnchor::Top);
        assert_eq!(cmd.origin, Vec2::new(4.0, 8.0));
    }
}
