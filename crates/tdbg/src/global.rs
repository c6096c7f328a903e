//! The process-wide tracer.
//!
//! Calls are serialized through one mutex. User code never runs under it:
//! `array_*` renders its elements before locking, so a `Display` impl may
//! itself trace.

use std::fmt::Display;
use std::io;
use std::sync::OnceLock;

use parking_lot::Mutex;
use tdb_trace::{
    array_slice, CapturedFrames, Channels, ConfigError, Stream, TraceConfig, TraceError, Tracer, WrapError,
};

type ConsoleTracer = Tracer<io::Stdout, io::Stderr, CapturedFrames>;

// Global singleton, created on first use with the default configuration.
static GLOBAL_TRACER: OnceLock<Mutex<ConsoleTracer>> = OnceLock::new();

fn with_tracer<R>(f: impl FnOnce(&mut ConsoleTracer) -> R) -> R {
    let tracer = GLOBAL_TRACER.get_or_init(|| Mutex::new(Tracer::console(TraceConfig::default())));
    f(&mut tracer.lock())
}

/// Replace the global configuration.
pub fn configure(config: TraceConfig) {
    with_tracer(|t| t.configure(config));
}

/// Snapshot of the global configuration.
pub fn config() -> TraceConfig {
    with_tracer(|t| *t.config())
}

/// Configure the global tracer from the `TDB_*` environment variables.
pub fn init_from_env() -> Result<(), ConfigError> {
    let config = TraceConfig::from_env()?;
    tracing::debug!(?config, "configuration read from environment");
    configure(config);
    Ok(())
}

pub fn enable_everything() {
    with_tracer(Tracer::enable_everything);
}

pub fn disable_everything() {
    with_tracer(Tracer::disable_everything);
}

pub fn enable(channels: Channels) {
    with_tracer(|t| t.enable(channels));
}

pub fn disable(channels: Channels) {
    with_tracer(|t| t.disable(channels));
}

pub fn is_enabled(stream: Stream) -> bool {
    with_tracer(|t| t.is_enabled(stream))
}

pub fn set_line_wrap(length: usize) -> Result<(), WrapError> {
    with_tracer(|t| t.set_line_wrap(length))
}

pub fn line_wrap() -> usize {
    with_tracer(|t| t.line_wrap())
}

pub fn format_text(text: &str) -> String {
    with_tracer(|t| t.format_text(text))
}

pub fn format_text_with(text: &str, delimiter: &str) -> String {
    with_tracer(|t| t.format_text_with(text, delimiter))
}

pub fn trace_out(message: &str) {
    with_tracer(|t| t.trace_out(message));
}

pub fn trace_err(message: &str) {
    with_tracer(|t| t.trace_err(message));
}

pub fn trace_out_frames(message: &str, frames: usize) {
    with_tracer(|t| t.trace_out_frames(message, frames));
}

pub fn trace_err_frames(message: &str, frames: usize) {
    with_tracer(|t| t.trace_err_frames(message, frames));
}

pub fn check_out(condition: bool, message: &str, frames: usize) -> bool {
    with_tracer(|t| t.check_out(condition, message, frames))
}

pub fn check_err(condition: bool, message: &str, frames: usize) -> bool {
    with_tracer(|t| t.check_err(condition, message, frames))
}

pub fn assert_out(condition: bool, message: &str, frames: usize) -> Result<(), TraceError> {
    with_tracer(|t| t.assert_out(condition, message, frames))
}

pub fn assert_err(condition: bool, message: &str, frames: usize) -> Result<(), TraceError> {
    with_tracer(|t| t.assert_err(condition, message, frames))
}

pub fn array_out<T: Display>(
    array: &[T],
    start: usize,
    count: usize,
    frames: usize,
) -> Result<(), TraceError> {
    let lines = render_elements(array, start, count)?;
    with_tracer(|t| t.lines_out(&lines, frames));
    Ok(())
}

pub fn array_err<T: Display>(
    array: &[T],
    start: usize,
    count: usize,
    frames: usize,
) -> Result<(), TraceError> {
    let lines = render_elements(array, start, count)?;
    with_tracer(|t| t.lines_err(&lines, frames));
    Ok(())
}

fn render_elements<T: Display>(
    array: &[T],
    start: usize,
    count: usize,
) -> Result<Vec<String>, TraceError> {
    Ok(array_slice(array, start, count)?
        .iter()
        .map(ToString::to_string)
        .collect())
}

/// Flush both process streams.
pub fn flush() {
    with_tracer(Tracer::flush);
}
