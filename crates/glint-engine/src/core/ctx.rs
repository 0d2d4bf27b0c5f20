use std::sync::Arc;

use winit::window::Window;

use super::app::AppControl;
use crate::device::{GlContext, SwapAction, Viewport};
use crate::input::InputState;
use crate::render::{Color, RenderPass};

/// Context passed to [`App::init`](super::App::init) during resource setup.
pub struct SetupCtx<'a> {
    pub(crate) device: &'a mut GlContext,
}

impl<'a> SetupCtx<'a> {
    /// Shared handle to the loaded GL functions, for resource creation.
    pub fn gl(&self) -> &Arc<glow::Context> {
        self.device.gl()
    }

    pub fn viewport(&self) -> Viewport {
        self.device.viewport()
    }
}

/// Per-frame context passed to [`App::on_frame`](super::App::on_frame).
pub struct FrameCtx<'a> {
    pub(crate) window: &'a Window,
    pub(crate) device: &'a mut GlContext,
    /// Keyboard state as of this iteration's event poll.
    pub input: &'a InputState,
}

impl<'a> FrameCtx<'a> {
    pub fn viewport(&self) -> Viewport {
        self.device.viewport()
    }

    /// Clears the color buffer to `clear`, calls `draw` with a ready
    /// [`RenderPass`], then presents the frame.
    ///
    /// The strict per-iteration order (clear, then draw, then swap) lives
    /// here so applications cannot reorder it.
    pub fn render<F>(&mut self, clear: Color, draw: F) -> AppControl
    where
        F: FnOnce(&mut RenderPass<'_>),
    {
        {
            let mut pass = RenderPass::begin(self.device.gl(), clear);
            draw(&mut pass);
        }

        self.window.pre_present_notify();

        match self.device.swap_buffers() {
            Ok(()) => AppControl::Continue,
            Err(err) => match self.device.handle_swap_error(&err) {
                SwapAction::Fatal => {
                    log::error!("buffer swap failed, context lost: {err}");
                    AppControl::Exit
                }
                SwapAction::SkipFrame => {
                    log::warn!("buffer swap failed, skipping frame: {err}");
                    AppControl::Continue
                }
            },
        }
    }
}
