//! Opens a window and clears it to a fixed color every frame.
//!
//! Escape or the window close button ends the loop.

use anyhow::Result;

use glint_engine::core::{App, AppControl, FrameCtx, SetupCtx};
use glint_engine::logging::{LoggingConfig, init_logging};
use glint_engine::render::Color;
use glint_engine::window::{Runtime, RuntimeConfig};

const CLEAR_COLOR: Color = Color::rgba(0.2, 0.3, 0.3, 1.0);

struct HelloWindow;

impl App for HelloWindow {
    fn init(_ctx: &mut SetupCtx<'_>) -> Result<Self> {
        Ok(Self)
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        ctx.render(CLEAR_COLOR, |_pass| {})
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    Runtime::run::<HelloWindow>(RuntimeConfig {
        title: "hello window".to_string(),
        ..RuntimeConfig::default()
    })?;

    log::info!("goodbye");
    Ok(())
}
