//! Keyboard input tracking.
//!
//! The runtime feeds winit key events into [`InputState`]; applications read
//! the state through the per-frame context. Only keyboard state is tracked;
//! the examples have no pointer interaction.

mod state;
mod types;

pub use state::InputState;
pub use types::{Key, KeyState};
