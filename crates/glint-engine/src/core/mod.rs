//! Core engine-facing contracts.
//!
//! This module defines the stable interface between the runtime (platform
//! loop) and application code: the [`App`] trait plus the setup and per-frame
//! contexts handed to it.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, SetupCtx};
