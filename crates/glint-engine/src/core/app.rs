use anyhow::Result;

use super::ctx::{FrameCtx, SetupCtx};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the demo binaries.
pub trait App: Sized {
    /// Called once, after the window and GL context exist.
    ///
    /// Resource setup (shader programs, meshes) happens here. Errors are
    /// fatal: the runtime tears down and `Runtime::run` returns them.
    fn init(ctx: &mut SetupCtx<'_>) -> Result<Self>;

    /// Called once per render-loop iteration.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;
}
