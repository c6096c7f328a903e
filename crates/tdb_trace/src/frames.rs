//! Where stack context comes from.

use tdb_stack::{StackFrame, StackTrace};

/// Source of the stack context printed beneath a trace.
pub trait FrameSource {
    /// Up to `limit` frames describing the caller.
    fn capture(&self, limit: usize) -> StackTrace;
}

/// Walks the live native stack.
#[derive(Clone, Copy, Debug, Default)]
pub struct CapturedFrames;

impl FrameSource for CapturedFrames {
    #[inline(never)]
    fn capture(&self, limit: usize) -> StackTrace {
        StackTrace::capture(limit)
    }
}

/// Replays a fixed list of frames, for reproducible output.
#[derive(Clone, Debug, Default)]
pub struct FixedFrames {
    trace: StackTrace,
}

impl FixedFrames {
    pub fn new(frames: impl IntoIterator<Item = StackFrame>) -> Self {
        FixedFrames {
            trace: StackTrace::from_frames(frames),
        }
    }
}

impl FrameSource for FixedFrames {
    fn capture(&self, limit: usize) -> StackTrace {
        let mut trace = self.trace.clone();
        trace.truncate(limit);
        trace
    }
}
