use std::fmt;
use std::path::PathBuf;

/// A single resolved frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StackFrame {
    /// Demangled symbol name without the hash suffix.
    pub name: String,
    /// Source file, when debug info is available.
    pub file: Option<PathBuf>,
    /// Line within `file`.
    pub line: Option<u32>,
}

impl StackFrame {
    /// Create a frame with no source location.
    pub fn new(name: impl Into<String>) -> Self {
        StackFrame {
            name: name.into(),
            file: None,
            line: None,
        }
    }

    /// Attach a source location.
    #[must_use]
    pub fn with_location(mut self, file: impl Into<PathBuf>, line: u32) -> Self {
        self.file = Some(file.into());
        self.line = Some(line);
        self
    }
}

impl fmt::Display for StackFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        match (&self.file, self.line) {
            (Some(file), Some(line)) => write!(f, " ({}:{line})", file.display()),
            (Some(file), None) => write!(f, " ({})", file.display()),
            (None, _) => Ok(()),
        }
    }
}
