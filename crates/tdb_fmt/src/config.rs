//! Line wrap configuration.

/// Default column after which a line break is inserted.
pub const DEFAULT_LINE_WRAP: usize = 100;

/// Error when configuring the line wrap width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WrapError {
    /// Width below one character.
    #[error("line wrap must occur after one or more characters (got {0})")]
    InvalidLineWrap(usize),
}

/// Configuration for the formatter.
///
/// The width is validated on every write, so a `WrapConfig` always holds a
/// width of at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapConfig {
    line_wrap: usize,
}

impl Default for WrapConfig {
    fn default() -> Self {
        Self {
            line_wrap: DEFAULT_LINE_WRAP,
        }
    }
}

impl WrapConfig {
    /// Create a config with the given width.
    pub fn new(line_wrap: usize) -> Result<Self, WrapError> {
        let mut config = Self::default();
        config.set_line_wrap(line_wrap)?;
        Ok(config)
    }

    /// Current width.
    #[inline]
    pub fn line_wrap(&self) -> usize {
        self.line_wrap
    }

    /// Set the width. Rejects zero and leaves the previous width in place.
    pub fn set_line_wrap(&mut self, length: usize) -> Result<(), WrapError> {
        if length < 1 {
            return Err(WrapError::InvalidLineWrap(length));
        }
        self.line_wrap = length;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
