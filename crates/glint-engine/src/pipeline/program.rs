use std::sync::Arc;

use anyhow::{Result, anyhow};
use glow::HasContext;

use super::shader::{ShaderStage, StageKind, clean_info_log};

/// A linked shader program: exactly one vertex and one fragment stage.
///
/// Follows the same non-fatal policy as [`ShaderStage`]: a link failure is
/// reported and recorded, but the program object survives and can be bound.
/// The program handle is released on drop.
pub struct Program {
    gl: Arc<glow::Context>,
    raw: glow::Program,
    linked: bool,
    info_log: String,
}

impl Program {
    /// Attaches both stages, links, and releases the stage handles.
    ///
    /// The stages are consumed: whatever the link outcome, they are dropped
    /// (and their handles deleted) before this function returns.
    pub fn link(
        gl: &Arc<glow::Context>,
        vertex: ShaderStage,
        fragment: ShaderStage,
    ) -> Result<Self> {
        debug_assert_eq!(vertex.kind(), StageKind::Vertex);
        debug_assert_eq!(fragment.kind(), StageKind::Fragment);

        unsafe {
            let raw = gl
                .create_program()
                .map_err(|e| anyhow!("failed to create program object: {e}"))?;

            gl.attach_shader(raw, vertex.raw());
            gl.attach_shader(raw, fragment.raw());
            gl.link_program(raw);

            let linked = gl.get_program_link_status(raw);
            let info_log = clean_info_log(&gl.get_program_info_log(raw));

            if !linked {
                log::error!("shader program link failed:\n{info_log}");
            }

            // `vertex` and `fragment` drop here, releasing both stage
            // handles regardless of the link outcome.
            Ok(Self {
                gl: Arc::clone(gl),
                raw,
                linked,
                info_log,
            })
        }
    }

    /// Whether linking succeeded.
    pub fn is_ok(&self) -> bool {
        self.linked
    }

    /// Diagnostic log retrieved after linking.
    pub fn info_log(&self) -> &str {
        &self.info_log
    }

    pub(crate) fn raw(&self) -> glow::Program {
        self.raw
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_program(self.raw);
        }
    }
}
