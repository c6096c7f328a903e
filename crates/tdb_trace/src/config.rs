//! Tracer configuration.
//!
//! Built in code through `Default` and the `with_*` methods, or read from
//! the environment:
//!
//! | variable        | values                                   |
//! |-----------------|------------------------------------------|
//! | `TDB_TRACE`     | `1`/`on`/`true`/`all`, `0`/`off`/`false`/`none`, `out`, `err` |
//! | `TDB_LINE_WRAP` | integer ≥ 1                              |
//! | `TDB_COLOR`     | `auto`, `always`, `never`                |
//! | `TDB_FRAMES`    | integer ≥ 0                              |
//!
//! Unset variables keep their defaults.

use tdb_fmt::{WrapConfig, WrapError};

use crate::{Channels, ColorMode};

/// Selects which streams are enabled.
pub const TRACE_VAR: &str = "TDB_TRACE";
/// Line wrap width.
pub const LINE_WRAP_VAR: &str = "TDB_LINE_WRAP";
/// Color mode for highlighted traces.
pub const COLOR_VAR: &str = "TDB_COLOR";
/// Frames printed by calls that take no frame count.
pub const FRAMES_VAR: &str = "TDB_FRAMES";

/// Error reading configuration from the environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var}")]
    InvalidValue { var: &'static str, value: String },
    #[error(transparent)]
    Wrap(#[from] WrapError),
}

/// Configuration for a [`Tracer`](crate::Tracer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceConfig {
    /// Streams that accept output. Defaults to both.
    pub channels: Channels,
    /// Width used by the formatter.
    pub wrap: WrapConfig,
    /// Whether highlighted traces are colored.
    pub color: ColorMode,
    /// Frames printed beneath `trace_out`/`trace_err`. Defaults to 1, the
    /// caller's own location.
    pub default_frames: usize,
    /// Pass messages through the formatter before writing them.
    pub wrap_messages: bool,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            channels: Channels::all(),
            wrap: WrapConfig::default(),
            color: ColorMode::Auto,
            default_frames: 1,
            wrap_messages: false,
        }
    }
}

impl TraceConfig {
    #[must_use]
    pub fn with_channels(self, channels: Channels) -> Self {
        Self { channels, ..self }
    }

    #[must_use]
    pub fn with_color(self, color: ColorMode) -> Self {
        Self { color, ..self }
    }

    #[must_use]
    pub fn with_default_frames(self, default_frames: usize) -> Self {
        Self {
            default_frames,
            ..self
        }
    }

    #[must_use]
    pub fn with_wrap_messages(self, wrap_messages: bool) -> Self {
        Self {
            wrap_messages,
            ..self
        }
    }

    pub fn with_line_wrap(self, line_wrap: usize) -> Result<Self, WrapError> {
        Ok(Self {
            wrap: WrapConfig::new(line_wrap)?,
            ..self
        })
    }

    /// Read the `TDB_*` variables from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Read the `TDB_*` variables through `lookup`, starting from defaults.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(TRACE_VAR) {
            config.channels = parse_channels(&value).ok_or_else(|| invalid(TRACE_VAR, &value))?;
        }
        if let Some(value) = lookup(LINE_WRAP_VAR) {
            let line_wrap = parse_count(LINE_WRAP_VAR, &value)?;
            config.wrap.set_line_wrap(line_wrap)?;
        }
        if let Some(value) = lookup(COLOR_VAR) {
            config.color = ColorMode::parse(&value).ok_or_else(|| invalid(COLOR_VAR, &value))?;
        }
        if let Some(value) = lookup(FRAMES_VAR) {
            config.default_frames = parse_count(FRAMES_VAR, &value)?;
        }

        Ok(config)
    }
}

fn invalid(var: &'static str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        var,
        value: value.to_string(),
    }
}

fn parse_count(var: &'static str, value: &str) -> Result<usize, ConfigError> {
    value.trim().parse().map_err(|_| invalid(var, value))
}

fn parse_channels(value: &str) -> Option<Channels> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "on" | "true" | "all" => Some(Channels::all()),
        "0" | "off" | "false" | "none" => Some(Channels::empty()),
        "out" | "stdout" => Some(Channels::STDOUT),
        "err" | "stderr" => Some(Channels::STDERR),
        _ => None,
    }
}

#[cfg(test)]
mod tests;
