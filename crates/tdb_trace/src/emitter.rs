//! The trace emitter.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};
use std::thread;

use tdb_fmt::{format_text, format_text_with, WrapError, DEFAULT_DELIMITER};
use tdb_stack::StackTrace;

use crate::color::colors;
use crate::{CapturedFrames, Channels, FrameSource, Stream, TraceConfig, TraceError};

/// How a trace's header line is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Style {
    Plain,
    /// Failed `check_*`/`assert_*` conditions.
    Failure,
}

/// Conditional console emitter.
///
/// Owns one writer per stream so output can be redirected in tests; see
/// [`Tracer::console`] for the process streams.
pub struct Tracer<O: Write, E: Write, S: FrameSource = CapturedFrames> {
    out: O,
    err: E,
    frames: S,
    config: TraceConfig,
    out_is_tty: bool,
    err_is_tty: bool,
}

impl Tracer<io::Stdout, io::Stderr, CapturedFrames> {
    /// Create a tracer for stdout/stderr, detecting whether each is a TTY.
    pub fn console(config: TraceConfig) -> Self {
        let out = io::stdout();
        let err = io::stderr();
        let out_is_tty = out.is_terminal();
        let err_is_tty = err.is_terminal();
        Tracer {
            out,
            err,
            frames: CapturedFrames,
            config,
            out_is_tty,
            err_is_tty,
        }
    }
}

impl<O: Write, E: Write, S: FrameSource> Tracer<O, E, S> {
    /// Create a tracer over arbitrary writers.
    ///
    /// # Arguments
    ///
    /// * `out` - Receives stdout traces
    /// * `err` - Receives stderr traces
    /// * `frames` - Supplies stack context
    /// * `is_tty` - Whether both writers are terminals (used for `ColorMode::Auto`)
    pub fn new(out: O, err: E, frames: S, config: TraceConfig, is_tty: bool) -> Self {
        Tracer {
            out,
            err,
            frames,
            config,
            out_is_tty: is_tty,
            err_is_tty: is_tty,
        }
    }

    pub fn config(&self) -> &TraceConfig {
        &self.config
    }

    /// Replace the whole configuration.
    pub fn configure(&mut self, config: TraceConfig) {
        tracing::debug!(?config, "tracer reconfigured");
        self.config = config;
    }

    // -- Switches --

    /// Enable both streams.
    pub fn enable_everything(&mut self) {
        self.enable(Channels::all());
    }

    /// Disable both streams. Takes effect for the very next call.
    pub fn disable_everything(&mut self) {
        self.disable(Channels::all());
    }

    pub fn enable(&mut self, channels: Channels) {
        self.config.channels.insert(channels);
        tracing::debug!(channels = ?self.config.channels, "trace channels enabled");
    }

    pub fn disable(&mut self, channels: Channels) {
        self.config.channels.remove(channels);
        tracing::debug!(channels = ?self.config.channels, "trace channels disabled");
    }

    #[inline]
    pub fn is_enabled(&self, stream: Stream) -> bool {
        self.config.channels.contains(stream.channel())
    }

    // -- Formatter --

    /// Set the line wrap width. Zero is rejected and the width is unchanged.
    pub fn set_line_wrap(&mut self, length: usize) -> Result<(), WrapError> {
        self.config.wrap.set_line_wrap(length)?;
        tracing::debug!(line_wrap = length, "line wrap updated");
        Ok(())
    }

    pub fn line_wrap(&self) -> usize {
        self.config.wrap.line_wrap()
    }

    /// Wrap `text` on whitespace at the configured width.
    pub fn format_text(&self, text: &str) -> String {
        format_text(text, &self.config.wrap)
    }

    /// Wrap `text` on `delimiter` at the configured width.
    pub fn format_text_with(&self, text: &str, delimiter: &str) -> String {
        format_text_with(text, delimiter, &self.config.wrap)
    }

    // -- Traces --

    /// Trace to stdout with the default number of frames.
    pub fn trace_out(&mut self, message: &str) {
        let frames = self.config.default_frames;
        self.emit(Stream::Stdout, message, frames, Style::Plain);
    }

    /// Trace to stderr with the default number of frames.
    pub fn trace_err(&mut self, message: &str) {
        let frames = self.config.default_frames;
        self.emit(Stream::Stderr, message, frames, Style::Plain);
    }

    /// Trace to stdout followed by up to `frames` lines of stack context.
    pub fn trace_out_frames(&mut self, message: &str, frames: usize) {
        self.emit(Stream::Stdout, message, frames, Style::Plain);
    }

    /// Trace to stderr followed by up to `frames` lines of stack context.
    pub fn trace_err_frames(&mut self, message: &str, frames: usize) {
        self.emit(Stream::Stderr, message, frames, Style::Plain);
    }

    // -- Checks and assertions --

    /// Report a false `condition` on stdout. Returns `condition`.
    pub fn check_out(&mut self, condition: bool, message: &str, frames: usize) -> bool {
        self.check(Stream::Stdout, condition, message, frames)
    }

    /// Report a false `condition` on stderr. Returns `condition`.
    pub fn check_err(&mut self, condition: bool, message: &str, frames: usize) -> bool {
        self.check(Stream::Stderr, condition, message, frames)
    }

    /// Report a false `condition` on stdout and fail.
    pub fn assert_out(
        &mut self,
        condition: bool,
        message: &str,
        frames: usize,
    ) -> Result<(), TraceError> {
        self.assert(Stream::Stdout, condition, message, frames)
    }

    /// Report a false `condition` on stderr and fail.
    pub fn assert_err(
        &mut self,
        condition: bool,
        message: &str,
        frames: usize,
    ) -> Result<(), TraceError> {
        self.assert(Stream::Stderr, condition, message, frames)
    }

    // -- Arrays --

    /// Trace `count` elements of `array` from `start` to stdout, one per trace.
    pub fn array_out<T: Display>(
        &mut self,
        array: &[T],
        start: usize,
        count: usize,
        frames: usize,
    ) -> Result<(), TraceError> {
        self.array(Stream::Stdout, array, start, count, frames)
    }

    /// Trace `count` elements of `array` from `start` to stderr, one per trace.
    pub fn array_err<T: Display>(
        &mut self,
        array: &[T],
        start: usize,
        count: usize,
        frames: usize,
    ) -> Result<(), TraceError> {
        self.array(Stream::Stderr, array, start, count, frames)
    }

    /// Trace each pre-rendered line to stdout, one per trace.
    ///
    /// Lets a caller holding a lock around the tracer format elements
    /// before taking it.
    pub fn lines_out<L: AsRef<str>>(&mut self, lines: &[L], frames: usize) {
        self.lines(Stream::Stdout, lines, frames);
    }

    /// Trace each pre-rendered line to stderr, one per trace.
    pub fn lines_err<L: AsRef<str>>(&mut self, lines: &[L], frames: usize) {
        self.lines(Stream::Stderr, lines, frames);
    }

    /// Flush both writers.
    pub fn flush(&mut self) {
        let _ = self.out.flush();
        let _ = self.err.flush();
    }

    fn check(&mut self, stream: Stream, condition: bool, message: &str, frames: usize) -> bool {
        if !condition {
            self.emit(stream, message, frames, Style::Failure);
        }
        condition
    }

    fn assert(
        &mut self,
        stream: Stream,
        condition: bool,
        message: &str,
        frames: usize,
    ) -> Result<(), TraceError> {
        if condition {
            return Ok(());
        }
        self.emit(stream, message, frames, Style::Failure);
        tracing::warn!(%stream, assertion = message, "trace assertion failed");
        Err(TraceError::AssertionFailed {
            message: message.to_string(),
        })
    }

    fn array<T: Display>(
        &mut self,
        stream: Stream,
        array: &[T],
        start: usize,
        count: usize,
        frames: usize,
    ) -> Result<(), TraceError> {
        for element in array_slice(array, start, count)? {
            self.emit(stream, &element.to_string(), frames, Style::Plain);
        }
        Ok(())
    }

    fn lines<L: AsRef<str>>(&mut self, stream: Stream, lines: &[L], frames: usize) {
        for line in lines {
            self.emit(stream, line.as_ref(), frames, Style::Plain);
        }
    }

    fn emit(&mut self, stream: Stream, message: &str, frames: usize, style: Style) {
        if !self.is_enabled(stream) {
            return;
        }

        let trace = if frames == 0 {
            StackTrace::default()
        } else {
            self.frames.capture(frames)
        };
        let text = self.render(stream, message, frames, &trace, style);

        let writer: &mut dyn Write = match stream {
            Stream::Stdout => &mut self.out,
            Stream::Stderr => &mut self.err,
        };
        // Trace output never fails the host.
        let _ = writer.write_all(text.as_bytes());
    }

    /// Message line, then one line per frame.
    ///
    /// With no frames requested the message is written as is. Otherwise the
    /// header quotes it and names the current thread.
    fn render(
        &self,
        stream: Stream,
        message: &str,
        frames: usize,
        trace: &StackTrace,
        style: Style,
    ) -> String {
        let wrapped;
        let message = if self.config.wrap_messages {
            wrapped = format_text(message, &self.config.wrap);
            // Drop the formatter's own terminator, not the caller's whitespace.
            let body = wrapped.strip_suffix('\n').unwrap_or(wrapped.as_str());
            body.strip_suffix(DEFAULT_DELIMITER).unwrap_or(body)
        } else {
            message
        };

        let header = if frames == 0 {
            message.to_string()
        } else {
            let current = thread::current();
            let thread_name = current.name().unwrap_or("<unnamed>");
            format!("\"{message}\" in thread {thread_name}:")
        };

        let is_tty = match stream {
            Stream::Stdout => self.out_is_tty,
            Stream::Stderr => self.err_is_tty,
        };
        let mut text = if style == Style::Failure && self.config.color.should_use_colors(is_tty) {
            format!("{}{header}{}\n", colors::FAILURE, colors::RESET)
        } else {
            format!("{header}\n")
        };
        text.push_str(&trace.to_string());
        text
    }
}

/// The `count` elements of `array` starting at `start`.
///
/// # Errors
///
/// [`TraceError::OutOfBounds`] if the range runs past the end of `array`.
pub fn array_slice<T>(array: &[T], start: usize, count: usize) -> Result<&[T], TraceError> {
    start
        .checked_add(count)
        .and_then(|end| array.get(start..end))
        .ok_or(TraceError::OutOfBounds {
            start,
            count,
            len: array.len(),
        })
}
