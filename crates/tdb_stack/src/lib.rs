//! Call-stack capture for trace messages.
//!
//! Walks the native stack with the `backtrace` crate and resolves each
//! frame to a symbol name and source location, innermost caller first.
//!
//! # Frame Selection
//!
//! - **Prologue**: Frames belonging to the capture and trace machinery
//!   (`backtrace`, `tdb_stack`, `tdb_trace`, `tdbg`) are skipped until the
//!   first caller outside of them.
//! - **Noise**: Runtime frames (`std::rt`, panic machinery, test harness
//!   trampolines, `FnOnce::call_once` shims, libc entry points) are dropped
//!   wherever they appear.
//! - **Limit**: At most the requested number of frames is kept. A limit of
//!   zero never touches the stack.
//!
//! # Usage
//!
//! ```text
//! let trace = StackTrace::capture(2);
//! for frame in trace.frames() {
//!     println!("  at {frame}");
//! }
//! ```

mod filter;
mod frame;
mod trace;

pub use filter::{is_internal, is_noise, is_wrapper_closure};
pub use frame::StackFrame;
pub use trace::StackTrace;
