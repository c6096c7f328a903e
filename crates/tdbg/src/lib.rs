//! tdbg - conditional console tracing.
//!
//! Prints messages to stdout or stderr, optionally followed by the caller's
//! stack truncated to a number of frames, and wraps long text at a
//! configurable width.
//!
//! # Architecture
//!
//! ```text
//! tdbg (process-wide facade, macros, `tdb` CLI)
//!     │
//!     ▼
//! tdb_trace::Tracer ──► tdb_stack (frame capture)
//!     │
//!     ▼
//! tdb_fmt (line wrapping)
//! ```
//!
//! The free functions here drive one global [`Tracer`] over the process
//! streams. Hosts that want explicit ownership (or redirected output) build
//! a `Tracer` of their own instead.
//!
//! # Example
//!
//! ```no_run
//! tdbg::trace_err("loading config");
//! tdbg::trace_out_frames("request done", 2);
//! tdbg::check_out(1 + 1 == 2, "arithmetic still works", 1);
//!
//! tdbg::disable_everything();
//! tdbg::trace_out("dropped");
//! ```

mod global;
mod logging;
mod macros;

pub use global::{
    array_err, array_out, assert_err, assert_out, check_err, check_out, config, configure,
    disable, disable_everything, enable, enable_everything, flush, format_text, format_text_with,
    init_from_env, is_enabled, line_wrap, set_line_wrap, trace_err, trace_err_frames, trace_out,
    trace_out_frames,
};
pub use logging::init_tracing;

pub use tdb_fmt::{WrapConfig, WrapError, DEFAULT_LINE_WRAP};
pub use tdb_trace::{
    CapturedFrames, Channels, ColorMode, ConfigError, FixedFrames, FrameSource, StackFrame,
    StackTrace, Stream, TraceConfig, TraceError, Tracer,
};
