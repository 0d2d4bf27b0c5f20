/// High-level response after a buffer-swap error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SwapAction {
    /// Transient error; skip the current frame and keep running.
    SkipFrame,
    /// Unrecoverable (context lost); terminate gracefully.
    Fatal,
}

pub(crate) fn classify_swap_error(err: &glutin::error::Error) -> SwapAction {
    match err.error_kind() {
        glutin::error::ErrorKind::ContextLost => SwapAction::Fatal,
        _ => SwapAction::SkipFrame,
    }
}
