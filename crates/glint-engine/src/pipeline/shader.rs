use std::sync::Arc;

use anyhow::{Result, anyhow};
use glow::HasContext;

/// Pipeline stage a shader is compiled for.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum StageKind {
    Vertex,
    Fragment,
}

impl StageKind {
    pub(crate) fn gl_enum(self) -> u32 {
        match self {
            StageKind::Vertex => glow::VERTEX_SHADER,
            StageKind::Fragment => glow::FRAGMENT_SHADER,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StageKind::Vertex => "vertex",
            StageKind::Fragment => "fragment",
        }
    }
}

/// Normalizes a driver info log for reporting.
///
/// Drivers pad logs with trailing NULs or newlines; the reported string keeps
/// the full diagnostic text without a length cap.
pub(crate) fn clean_info_log(log: &str) -> String {
    log.trim_end_matches(['\0', '\n', '\r', ' ']).to_string()
}

/// A compiled (or failed-to-compile) shader stage.
///
/// Compilation failure is not fatal: the stage records the boolean status and
/// the diagnostic log, the failure is reported, and the stage can still be
/// attached and linked. Drivers then render nothing for draws with the broken
/// program, which matches the observed behavior this crate preserves.
///
/// The stage handle is released on drop. Linking consumes both stages, so the
/// handles live exactly from compile to the end of the link step.
pub struct ShaderStage {
    gl: Arc<glow::Context>,
    raw: glow::Shader,
    kind: StageKind,
    compiled: bool,
    info_log: String,
}

impl ShaderStage {
    /// Compiles `source` for `kind`.
    ///
    /// Only handle allocation is a hard error; a compile failure produces a
    /// stage with `is_ok() == false` and a non-empty diagnostic log.
    pub fn compile(gl: &Arc<glow::Context>, kind: StageKind, source: &str) -> Result<Self> {
        unsafe {
            let raw = gl
                .create_shader(kind.gl_enum())
                .map_err(|e| anyhow!("failed to create {} shader object: {e}", kind.label()))?;

            gl.shader_source(raw, source);
            gl.compile_shader(raw);

            let compiled = gl.get_shader_compile_status(raw);
            let info_log = clean_info_log(&gl.get_shader_info_log(raw));

            if !compiled {
                log::error!("{} shader compilation failed:\n{info_log}", kind.label());
            }

            Ok(Self {
                gl: Arc::clone(gl),
                raw,
                kind,
                compiled,
                info_log,
            })
        }
    }

    pub fn kind(&self) -> StageKind {
        self.kind
    }

    /// Whether compilation succeeded.
    pub fn is_ok(&self) -> bool {
        self.compiled
    }

    /// Diagnostic log retrieved after compilation. Empty on success with
    /// most drivers.
    pub fn info_log(&self) -> &str {
        &self.info_log
    }

    pub(crate) fn raw(&self) -> glow::Shader {
        self.raw
    }
}

impl Drop for ShaderStage {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_shader(self.raw);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_kinds_map_to_distinct_gl_enums() {
        assert_eq!(StageKind::Vertex.gl_enum(), glow::VERTEX_SHADER);
        assert_eq!(StageKind::Fragment.gl_enum(), glow::FRAGMENT_SHADER);
        assert_ne!(StageKind::Vertex.gl_enum(), StageKind::Fragment.gl_enum());
    }

    #[test]
    fn labels_name_the_stage() {
        assert_eq!(StageKind::Vertex.label(), "vertex");
        assert_eq!(StageKind::Fragment.label(), "fragment");
    }

    #[test]
    fn info_log_trailing_padding_is_stripped() {
        assert_eq!(clean_info_log("0:1(5): error: syntax error\n\0\0"), "0:1(5): error: syntax error");
        assert_eq!(clean_info_log(""), "");
        assert_eq!(clean_info_log("\n"), "");
    }

    #[test]
    fn info_log_interior_newlines_are_kept() {
        assert_eq!(clean_info_log("line one\nline two\n"), "line one\nline two");
    }
}
