use std::fmt;
use std::path::Path;

use smallvec::SmallVec;

use crate::filter::{is_internal, is_noise, is_wrapper_closure};
use crate::StackFrame;

/// Immutable snapshot of the caller's stack, innermost frame first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StackTrace {
    frames: SmallVec<[StackFrame; 4]>,
}

impl StackTrace {
    /// Capture up to `limit` frames above the tracing machinery.
    ///
    /// Frames without a resolvable symbol are skipped, so a stripped binary
    /// yields fewer frames than requested (possibly none).
    #[inline(never)]
    pub fn capture(limit: usize) -> Self {
        let mut frames: SmallVec<[StackFrame; 4]> = SmallVec::new();
        if limit == 0 {
            return StackTrace { frames };
        }

        let mut in_prologue = true;
        backtrace::trace(|frame| {
            backtrace::resolve_frame(frame, |symbol| {
                if frames.len() >= limit {
                    return;
                }
                let Some(symbol_name) = symbol.name() else {
                    return;
                };
                // `{:#}` drops the trailing hash.
                let name = format!("{symbol_name:#}");
                if is_noise(&name) || (in_prologue && is_internal(&name)) {
                    return;
                }
                if frames
                    .last()
                    .is_some_and(|callee| is_wrapper_closure(&name, &callee.name))
                {
                    return;
                }
                in_prologue = false;
                frames.push(StackFrame {
                    name,
                    file: symbol.filename().map(Path::to_path_buf),
                    line: symbol.lineno(),
                });
            });
            frames.len() < limit
        });

        StackTrace { frames }
    }

    /// Create a trace from already-resolved frames.
    pub fn from_frames(frames: impl IntoIterator<Item = StackFrame>) -> Self {
        StackTrace {
            frames: frames.into_iter().collect(),
        }
    }

    /// Get the frames, innermost first.
    pub fn frames(&self) -> &[StackFrame] {
        &self.frames
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Check if no frames were captured.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Keep only the innermost `limit` frames.
    pub fn truncate(&mut self, limit: usize) {
        self.frames.truncate(limit);
    }
}

impl fmt::Display for StackTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for frame in &self.frames {
            writeln!(f, "  at {frame}")?;
        }
        Ok(())
    }
}
