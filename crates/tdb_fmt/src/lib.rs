//! tdbg Formatter
//!
//! Wraps arbitrary text at a configurable column width.
//!
//! # Algorithm
//!
//! Text is split on a delimiter and rebuilt token by token. Each token is
//! followed by the delimiter; once the running visible length since the last
//! break exceeds the configured width, a line break is inserted and the count
//! starts over.
//!
//! ```
//! use tdb_fmt::{format_text, WrapConfig};
//!
//! let config = WrapConfig::new(1).unwrap();
//! assert_eq!(format_text("a b c", &config), "a \nb \nc \n");
//! ```
//!
//! Output is never trimmed: it always ends in the delimiter, followed by a
//! break when the last token overflowed the line.

mod config;
mod wrap;

pub use config::{WrapConfig, WrapError, DEFAULT_LINE_WRAP};
pub use wrap::{format_text, format_text_with, DEFAULT_DELIMITER};
