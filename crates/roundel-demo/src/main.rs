//! Opens a window and draws a white rounded rectangle with a text overlay.
//!
//! Environment: `RUST_LOG`, `ROUNDEL_STRATEGY` (`triangles` | `rects`),
//! `ROUNDEL_FONT` (font file), `ROUNDEL_SEGMENTS` (arc subdivision).

mod config;

use anyhow::Result;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use roundel_engine::core::{App, AppControl, FrameCtx};
use roundel_engine::device::GpuInit;
use roundel_engine::logging::{init_logging, LoggingConfig};
use roundel_engine::render::SceneRenderer;
use roundel_engine::scene::{DrawList, TextAnchor, ZIndex};
use roundel_engine::text::{FontId, FontSystem};
use roundel_engine::window::{Runtime, RuntimeConfig};

use config::DemoConfig;

const FRAME_LOG_INTERVAL: u64 = 600;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = DemoConfig::from_env();
    log::info!(
        "rounded rect {:?} r={} segments={} strategy={:?}",
        config.rect,
        config.radius,
        config.segments,
        config.strategy
    );

    let runtime_config = RuntimeConfig {
        title: config.title.clone(),
        initial_size: LogicalSize::new(config.width, config.height),
    };

    Runtime::run(runtime_config, GpuInit::default(), DemoApp::new(config))
}

struct DemoApp {
    config: DemoConfig,
    fonts: FontSystem,
    font: Option<FontId>,
    draw_list: DrawList,
    scene: SceneRenderer,
    reported_shape_error: bool,
}

impl DemoApp {
    fn new(config: DemoConfig) -> Self {
        let mut fonts = FontSystem::new();
        let font = load_first_font(&mut fonts, &config);
        if let Some(id) = font {
            let extent = fonts.measure_text(&config.text, id, config.text_size);
            log::debug!("{:?} measures {}x{} px", config.text, extent.x, extent.y);
        }

        Self {
            config,
            fonts,
            font,
            draw_list: DrawList::new(),
            scene: SceneRenderer::new(),
            reported_shape_error: false,
        }
    }

    fn record_scene(&mut self) {
        let c = &self.config;
        self.draw_list.clear();

        if let Err(e) = self.draw_list.push_rounded_rect(
            ZIndex(0),
            c.rect,
            c.radius,
            c.segments,
            c.fill,
            c.strategy,
        ) {
            if !self.reported_shape_error {
                log::error!("rounded rect not drawn: {e}");
                self.reported_shape_error = true;
            }
        }

        if let Some(font) = self.font {
            self.draw_list.push_anchored_text(
                ZIndex(1),
                c.text.as_str(),
                font,
                c.text_size,
                c.text_color,
                c.text_origin,
                TextAnchor::Baseline,
            );
        }
    }
}

impl App for DemoApp {
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        match event {
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed
                    && event.physical_key == PhysicalKey::Code(KeyCode::Escape) =>
            {
                AppControl::Exit
            }
            _ => AppControl::Continue,
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.time.frame_index % FRAME_LOG_INTERVAL == 0 {
            log::debug!(
                "frame {} dt={:.2}ms",
                ctx.time.frame_index,
                ctx.time.dt * 1000.0
            );
        }

        self.record_scene();

        let (scene, draw_list, fonts) = (&mut self.scene, &mut self.draw_list, &self.fonts);
        ctx.render(self.config.clear, |rctx, target| {
            scene.render(rctx, target, draw_list, fonts);
        })
    }
}

fn load_first_font(fonts: &mut FontSystem, config: &DemoConfig) -> Option<FontId> {
    for path in config.font_candidates() {
        match fonts.load_font_file(&path) {
            Ok(id) => {
                log::info!("font loaded from {}", path.display());
                return Some(id);
            }
            Err(e) => log::debug!("{e}"),
        }
    }
    log::warn!("no usable font found; text will not be drawn (set ROUNDEL_FONT)");
    None
}
