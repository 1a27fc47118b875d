use std::path::PathBuf;

use roundel_engine::coords::{Rect, Vec2};
use roundel_engine::geom::DEFAULT_SEGMENTS;
use roundel_engine::paint::Color;
use roundel_engine::scene::FillStrategy;

pub const ENV_STRATEGY: &str = "ROUNDEL_STRATEGY";
pub const ENV_FONT: &str = "ROUNDEL_FONT";
pub const ENV_SEGMENTS: &str = "ROUNDEL_SEGMENTS";

/// Largest `ROUNDEL_SEGMENTS` accepted; larger values keep the default.
pub const MAX_SEGMENTS: u32 = 4096;

/// Fonts tried in order when `ROUNDEL_FONT` is not set.
const FONT_CANDIDATES: &[&str] = &[
    "DroidSerif-Regular.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
];

/// Everything the demo draws.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub clear: Color,

    pub rect: Rect,
    pub radius: f32,
    pub segments: u32,
    pub fill: Color,
    pub strategy: FillStrategy,

    pub text: String,
    /// Baseline origin of the text, logical px.
    pub text_origin: Vec2,
    pub text_size: f32,
    pub text_color: Color,
    /// Explicit font file; `None` walks the built-in candidate list.
    pub font_path: Option<PathBuf>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "Rounded Rect".to_string(),
            width: 800.0,
            height: 600.0,
            clear: Color::black(),

            rect: Rect::new(100.0, 100.0, 100.0, 100.0),
            radius: 20.0,
            segments: DEFAULT_SEGMENTS,
            fill: Color::white(),
            strategy: FillStrategy::default(),

            text: "Hej Zu!".to_string(),
            text_origin: Vec2::new(260.0, 208.0),
            text_size: 24.0 * 8.0,
            text_color: Color::from_rgba_u32(0xffff_ffff),
            font_path: None,
        }
    }
}

impl DemoConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Applies `ROUNDEL_*` overrides read through `lookup`.
    ///
    /// Values that fail to parse are logged and leave the default in place.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(raw) = lookup(ENV_STRATEGY) {
            match parse_strategy(&raw) {
                Some(s) => self.strategy = s,
                None => log::warn!(
                    "{ENV_STRATEGY}={raw:?} not recognized (expected \"triangles\" or \"rects\"); \
                     keeping {:?}",
                    self.strategy
                ),
            }
        }

        if let Some(raw) = lookup(ENV_SEGMENTS) {
            match raw.trim().parse::<u32>() {
                Ok(n) if n <= MAX_SEGMENTS => self.segments = n,
                Ok(n) => log::warn!(
                    "{ENV_SEGMENTS}={n} is above {MAX_SEGMENTS}; keeping {}",
                    self.segments
                ),
                Err(e) => log::warn!(
                    "{ENV_SEGMENTS}={raw:?} is not a segment count ({e}); keeping {}",
                    self.segments
                ),
            }
        }

        if let Some(raw) = lookup(ENV_FONT) {
            if raw.trim().is_empty() {
                log::warn!("{ENV_FONT} is empty; using built-in font candidates");
            } else {
                self.font_path = Some(PathBuf::from(raw));
            }
        }
    }

    /// Font files to try, in order.
    pub fn font_candidates(&self) -> Vec<PathBuf> {
        match &self.font_path {
            Some(p) => vec![p.clone()],
            None => FONT_CANDIDATES.iter().map(PathBuf::from).collect(),
        }
    }
}

fn parse_strategy(raw: &str) -> Option<FillStrategy> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "triangles" | "tris" => Some(FillStrategy::Triangles),
        "rects" | "rects-and-fans" => Some(FillStrategy::RectsAndFans),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn with_env(pairs: &[(&str, &str)]) -> DemoConfig {
        let env: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        let mut config = DemoConfig::default();
        config.apply_overrides(|k| env.get(k).cloned());
        config
    }

    // ── defaults ──

    #[test]
    fn defaults_describe_the_demo_scene() {
        let c = DemoConfig::default();
        assert_eq!(c.title, "Rounded Rect");
        assert_eq!((c.width, c.height), (800.0, 600.0));
        assert_eq!(c.rect, Rect::new(100.0, 100.0, 100.0, 100.0));
        assert_eq!(c.radius, 20.0);
        assert_eq!(c.segments, 16);
        assert_eq!(c.text, "Hej Zu!");
        assert_eq!(c.text_origin, Vec2::new(260.0, 208.0));
        assert_eq!(c.text_size, 192.0);
        assert_eq!(c.text_color, Color::white());
        assert_eq!(c.clear, Color::black());
    }

    // ── overrides ──

    #[test]
    fn strategy_override() {
        assert_eq!(with_env(&[(ENV_STRATEGY, "Triangles")]).strategy, FillStrategy::Triangles);
        assert_eq!(with_env(&[(ENV_STRATEGY, " rects ")]).strategy, FillStrategy::RectsAndFans);
    }

    #[test]
    fn bad_values_keep_defaults() {
        let c = with_env(&[(ENV_STRATEGY, "hexagons"), (ENV_SEGMENTS, "-3")]);
        assert_eq!(c.strategy, FillStrategy::default());
        assert_eq!(c.segments, DEFAULT_SEGMENTS);
    }

    #[test]
    fn segments_override_accepts_zero() {
        // Zero is clamped to one by the tessellator, not here.
        assert_eq!(with_env(&[(ENV_SEGMENTS, "0")]).segments, 0);
        assert_eq!(with_env(&[(ENV_SEGMENTS, "64")]).segments, 64);
    }

    #[test]
    fn segments_override_rejects_huge_counts() {
        assert_eq!(with_env(&[(ENV_SEGMENTS, "1000000")]).segments, DEFAULT_SEGMENTS);
        assert_eq!(with_env(&[(ENV_SEGMENTS, "4097")]).segments, DEFAULT_SEGMENTS);
        assert_eq!(with_env(&[(ENV_SEGMENTS, "4096")]).segments, MAX_SEGMENTS);
    }

    // ── fonts ──

    #[test]
    fn font_override_replaces_candidates() {
        let c = with_env(&[(ENV_FONT, "/tmp/custom.otf")]);
        assert_eq!(c.font_candidates(), vec![PathBuf::from("/tmp/custom.otf")]);
    }

    #[test]
    fn default_candidates_start_with_droid_serif() {
        let c = with_env(&[(ENV_FONT, "")]);
        let candidates = c.font_candidates();
        assert_eq!(candidates[0], PathBuf::from("DroidSerif-Regular.ttf"));
        assert_eq!(candidates.len(), FONT_CANDIDATES.len());
    }
}
