use std::num::NonZeroU32;
use std::sync::Arc;

use anyhow::{Context as _, Result, anyhow, bail};
use glow::HasContext;
use glutin::config::{Config, ConfigTemplateBuilder};
use glutin::context::{ContextApi, ContextAttributesBuilder, GlProfile, PossiblyCurrentContext, Version};
use glutin::display::GetGlDisplay;
use glutin::prelude::*;
use glutin::surface::{Surface, SurfaceAttributesBuilder, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasWindowHandle;
use winit::dpi::PhysicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use super::error::{SwapAction, classify_swap_error};
use super::viewport::Viewport;

/// OpenGL version requested for the context: 3.3, core profile.
pub const GL_VERSION: (u8, u8) = (3, 3);

/// Owns the GL context, the window surface and the loaded function pointers.
///
/// This type is the low-level rendering context:
/// - creates the window together with a matching GL config
/// - creates an OpenGL 3.3 core context and makes it current
/// - loads entry points through `glow` and tracks the viewport
///
/// Field order is load-bearing: the `glow` wrapper drops first, then the
/// surface, then the context itself. Resource wrappers (meshes, programs)
/// must be dropped before this type; the runtime enforces that ordering.
pub struct GlContext {
    gl: Arc<glow::Context>,
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    viewport: Viewport,
}

impl GlContext {
    /// Creates the window and a context bound to it.
    ///
    /// Window and config are created together because the platform decides
    /// which configs a given window can use. Every failure here is fatal for
    /// the caller; partially-initialized platform state is released as the
    /// partially-built values drop on the error path.
    pub fn create(
        event_loop: &ActiveEventLoop,
        window_attributes: WindowAttributes,
    ) -> Result<(Window, Self)> {
        let template = ConfigTemplateBuilder::new();
        let display_builder =
            DisplayBuilder::new().with_window_attributes(Some(window_attributes));

        let (window, gl_config) = display_builder
            .build(event_loop, template, pick_gl_config)
            .map_err(|e| anyhow!("failed to create window: {e}"))?;
        let window = window.context("display builder produced no window")?;

        let raw_handle = window
            .window_handle()
            .map_err(|e| anyhow!("failed to obtain a window handle: {e}"))?
            .as_raw();

        let gl_display = gl_config.display();

        let context_attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(
                GL_VERSION.0,
                GL_VERSION.1,
            ))))
            .with_profile(GlProfile::Core)
            .build(Some(raw_handle));

        let not_current = unsafe { gl_display.create_context(&gl_config, &context_attributes) }
            .map_err(|e| {
                anyhow!(
                    "failed to create an OpenGL {}.{} core context: {e}",
                    GL_VERSION.0,
                    GL_VERSION.1
                )
            })?;

        let surface_attributes = window
            .build_surface_attributes(SurfaceAttributesBuilder::<WindowSurface>::new())
            .map_err(|e| anyhow!("failed to build surface attributes: {e}"))?;

        let surface = unsafe { gl_display.create_window_surface(&gl_config, &surface_attributes) }
            .map_err(|e| anyhow!("failed to create the window surface: {e}"))?;

        let context = not_current
            .make_current(&surface)
            .map_err(|e| anyhow!("failed to make the GL context current: {e}"))?;

        // A context can exist while entry points still fail to resolve
        // (broken driver installs). Probe one required symbol up front so the
        // failure is reported as what it is rather than as a crash later.
        if gl_display.get_proc_address(c"glCreateShader").is_null() {
            bail!("failed to load OpenGL entry points (glCreateShader did not resolve)");
        }

        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|s| gl_display.get_proc_address(s))
        };

        let size = window.inner_size();
        let viewport = Viewport::covering(size.width, size.height);
        unsafe {
            gl.viewport(viewport.x, viewport.y, viewport.width, viewport.height);
            log::debug!(
                "OpenGL context ready: {} on {}",
                gl.get_parameter_string(glow::VERSION),
                gl.get_parameter_string(glow::RENDERER),
            );
        }

        Ok((
            window,
            Self {
                gl: Arc::new(gl),
                surface,
                context,
                viewport,
            },
        ))
    }

    /// Shared handle to the loaded GL functions.
    pub fn gl(&self) -> &Arc<glow::Context> {
        &self.gl
    }

    /// Current viewport rectangle (origin plus drawable extent).
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Resizes the surface and maps the viewport 1:1 onto the new pixel
    /// dimensions.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        // Zero extents occur while minimized; the surface cannot take them.
        self.surface.resize(
            &self.context,
            NonZeroU32::new(new_size.width).unwrap_or(NonZeroU32::MIN),
            NonZeroU32::new(new_size.height).unwrap_or(NonZeroU32::MIN),
        );

        self.viewport = Viewport::covering(new_size.width, new_size.height);
        unsafe {
            self.gl.viewport(
                self.viewport.x,
                self.viewport.y,
                self.viewport.width,
                self.viewport.height,
            );
        }
    }

    /// Presents the rendered frame.
    pub fn swap_buffers(&self) -> std::result::Result<(), glutin::error::Error> {
        self.surface.swap_buffers(&self.context)
    }

    /// Converts a swap error into a higher-level action.
    pub fn handle_swap_error(&self, err: &glutin::error::Error) -> SwapAction {
        classify_swap_error(err)
    }
}

fn pick_gl_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    // No multisampling in this pipeline; prefer the plainest config offered.
    configs
        .reduce(|best, candidate| {
            if candidate.num_samples() < best.num_samples() {
                candidate
            } else {
                best
            }
        })
        .expect("no matching GL configs")
}
