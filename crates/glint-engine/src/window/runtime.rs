use anyhow::{Context as _, Result};

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl, FrameCtx, SetupCtx};
use crate::device::GlContext;
use crate::input::{InputState, Key, KeyState};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,

    /// Requested drawable size in physical pixels.
    pub initial_size: PhysicalSize<u32>,

    /// Key that requests loop termination when observed held during the
    /// per-frame input check. `None` disables the check; the window close
    /// button still works.
    pub quit_key: Option<Key>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "glint".to_string(),
            initial_size: PhysicalSize::new(800, 600),
            quit_key: Some(Key::Escape),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Creates the window, context and app, then drives the render loop
    /// until a close request or the quit key terminates it.
    ///
    /// Setup failures (window, context, function loading, app init) are
    /// fatal: they are logged, the loop winds down, and the error is
    /// returned so the process can exit non-zero.
    pub fn run<A>(config: RuntimeConfig) -> Result<()>
    where
        A: App + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = RuntimeState::<A>::new(config);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        state.into_result()
    }
}

/// Per-window handles.
///
/// `device` is declared before `window`: the surface and context must be
/// released while the window they were created from is still alive.
struct WindowState {
    device: GlContext,
    window: Window,
    input: InputState,
}

struct RuntimeState<A>
where
    A: App + 'static,
{
    config: RuntimeConfig,

    // Declared before `window`: the app's meshes and programs hold GL
    // handles and must drop while the context is still alive.
    app: Option<A>,
    window: Option<WindowState>,

    exit_requested: bool,
    fatal: Option<anyhow::Error>,
}

impl<A> RuntimeState<A>
where
    A: App + 'static,
{
    fn new(config: RuntimeConfig) -> Self {
        Self {
            config,
            app: None,
            window: None,
            exit_requested: false,
            fatal: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        if self.fatal.is_none() {
            self.fatal = Some(err);
        }
        self.exit_requested = true;
        event_loop.exit();
    }

    fn into_result(self) -> Result<()> {
        match self.fatal {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl<A> ApplicationHandler for RuntimeState<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let (window, mut device) = match GlContext::create(event_loop, attrs) {
            Ok(created) => created,
            Err(err) => {
                self.fail(event_loop, err.context("window/context bootstrap failed"));
                return;
            }
        };

        let app = {
            let mut setup = SetupCtx { device: &mut device };
            match A::init(&mut setup) {
                Ok(app) => app,
                Err(err) => {
                    self.fail(event_loop, err.context("application setup failed"));
                    return;
                }
            }
        };

        window.request_redraw();

        self.app = Some(app);
        self.window = Some(WindowState {
            device,
            window,
            input: InputState::default(),
        });
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        // Continuous, unpaced redraw: the examples render as fast as the
        // swap allows.
        event_loop.set_control_flow(ControlFlow::Poll);

        if let Some(ws) = &self.window {
            ws.window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(ws) = self.window.as_mut() else {
            return;
        };
        if window_id != ws.window.id() {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                self.exit_requested = true;
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                ws.device.resize(new_size);
                ws.window.request_redraw();
            }

            WindowEvent::Focused(focused) => {
                if !focused {
                    // Releases while unfocused never arrive; drop held keys.
                    ws.input.clear();
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let state = match event.state {
                    ElementState::Pressed => KeyState::Pressed,
                    ElementState::Released => KeyState::Released,
                };
                ws.input.apply_key(map_key(event.physical_key), state);
            }

            WindowEvent::RedrawRequested => {
                // Termination requested earlier (quit key, app, close): the
                // flag is honored here, before any further rendering.
                if self.exit_requested {
                    event_loop.exit();
                    return;
                }

                // Per-frame input check. Observing the quit key marks the
                // loop for termination; the current frame still renders and
                // the flag takes effect on the next iteration.
                if let Some(quit) = self.config.quit_key {
                    if ws.input.is_down(quit) {
                        log::info!("quit key pressed, closing");
                        self.exit_requested = true;
                    }
                }

                let Some(app) = self.app.as_mut() else {
                    return;
                };

                let mut ctx = FrameCtx {
                    window: &ws.window,
                    device: &mut ws.device,
                    input: &ws.input,
                };

                if app.on_frame(&mut ctx) == AppControl::Exit {
                    self.exit_requested = true;
                    event_loop.exit();
                }
            }

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        log::info!("render loop terminated, releasing resources");

        // Explicit teardown order: app resources (meshes, programs) first,
        // then surface and context, then the window. The windowing subsystem
        // itself is released when the event loop drops in `Runtime::run`.
        self.app = None;
        self.window = None;
    }
}

fn map_key(pk: PhysicalKey) -> Key {
    match pk {
        PhysicalKey::Code(code) => match code {
            KeyCode::Escape => Key::Escape,
            KeyCode::Enter => Key::Enter,
            KeyCode::Tab => Key::Tab,
            KeyCode::Space => Key::Space,

            KeyCode::KeyA => Key::A,
            KeyCode::KeyB => Key::B,
            KeyCode::KeyC => Key::C,
            KeyCode::KeyD => Key::D,
            KeyCode::KeyE => Key::E,
            KeyCode::KeyF => Key::F,
            KeyCode::KeyG => Key::G,
            KeyCode::KeyH => Key::H,
            KeyCode::KeyI => Key::I,
            KeyCode::KeyJ => Key::J,
            KeyCode::KeyK => Key::K,
            KeyCode::KeyL => Key::L,
            KeyCode::KeyM => Key::M,
            KeyCode::KeyN => Key::N,
            KeyCode::KeyO => Key::O,
            KeyCode::KeyP => Key::P,
            KeyCode::KeyQ => Key::Q,
            KeyCode::KeyR => Key::R,
            KeyCode::KeyS => Key::S,
            KeyCode::KeyT => Key::T,
            KeyCode::KeyU => Key::U,
            KeyCode::KeyV => Key::V,
            KeyCode::KeyW => Key::W,
            KeyCode::KeyX => Key::X,
            KeyCode::KeyY => Key::Y,
            KeyCode::KeyZ => Key::Z,

            other => Key::Unknown(other as u32),
        },

        // No stable numeric for unidentified platform keys.
        PhysicalKey::Unidentified(_) => Key::Unknown(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── config ────────────────────────────────────────────────────────────

    #[test]
    fn default_config_matches_the_examples() {
        let config = RuntimeConfig::default();
        assert_eq!(config.initial_size, PhysicalSize::new(800, 600));
        assert_eq!(config.quit_key, Some(Key::Escape));
        assert!(!config.title.is_empty());
    }

    // ── key mapping ───────────────────────────────────────────────────────

    #[test]
    fn quit_and_toggle_keys_map() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Escape)), Key::Escape);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::KeyW)), Key::W);
    }

    #[test]
    fn unmapped_keys_keep_a_code() {
        match map_key(PhysicalKey::Code(KeyCode::F5)) {
            Key::Unknown(_) => {}
            other => panic!("expected Unknown, got {other:?}"),
        }
    }

    // ── quit-key observation ──────────────────────────────────────────────

    #[test]
    fn quit_key_is_observed_within_one_iteration() {
        // The per-frame check is `is_down(quit)`; a press applied during the
        // event poll must be visible to the very next check.
        let mut input = InputState::default();
        input.apply_key(Key::Escape, KeyState::Pressed);

        let quit = RuntimeConfig::default().quit_key;
        assert_eq!(quit.map(|k| input.is_down(k)), Some(true));
    }
}
