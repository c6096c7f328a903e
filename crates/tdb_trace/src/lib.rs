//! Trace emitter.
//!
//! A [`Tracer`] owns the two console writers, the per-stream switches, and
//! the formatting configuration. Every emission goes through one path:
//!
//! ```text
//! trace_out / check_err / array_out / ...
//!     │
//!     ▼
//! stream enabled? ──no──► discard
//!     │ yes
//!     ▼
//! capture N frames ──► render (wrap, highlight) ──► write
//! ```
//!
//! # Fatal vs Non-Fatal
//!
//! - `check_*` reports a false condition and returns it; execution goes on.
//! - `assert_*` reports a false condition and returns
//!   [`TraceError::AssertionFailed`] for the caller to propagate. The error
//!   is returned even when the stream is disabled; only the message is gated.

mod channel;
mod color;
mod config;
mod emitter;
mod error;
mod frames;

pub use channel::{Channels, Stream};
pub use color::ColorMode;
pub use config::{ConfigError, TraceConfig, COLOR_VAR, FRAMES_VAR, LINE_WRAP_VAR, TRACE_VAR};
pub use emitter::{array_slice, Tracer};
pub use error::TraceError;
pub use frames::{CapturedFrames, FixedFrames, FrameSource};

pub use tdb_fmt::{WrapConfig, WrapError, DEFAULT_LINE_WRAP};
pub use tdb_stack::{StackFrame, StackTrace};
