//! Delimiter-based line wrapping.

use crate::WrapConfig;

/// Delimiter used by [`format_text`].
pub const DEFAULT_DELIMITER: &str = " ";

/// Format `text` with the default whitespace delimiter.
#[inline]
pub fn format_text(text: &str, config: &WrapConfig) -> String {
    format_text_with(text, DEFAULT_DELIMITER, config)
}

/// Format `text`, splitting on every occurrence of `delimiter`.
///
/// Each token is written back followed by the delimiter. A `'\n'` is
/// inserted as soon as the visible length accumulated since the last break
/// exceeds [`WrapConfig::line_wrap`]. Lengths are counted in `char`s.
///
/// Delimiters at either end of `text` yield empty tokens, which still
/// contribute the delimiter's length. An empty delimiter does not split.
pub fn format_text_with(text: &str, delimiter: &str, config: &WrapConfig) -> String {
    let delimiter_len = delimiter.chars().count();
    let line_wrap = config.line_wrap();

    let mut formatted = String::with_capacity(text.len() + text.len() / line_wrap + 1);
    let mut line_length = 0usize;

    for word in split_tokens(text, delimiter) {
        formatted.push_str(word);
        formatted.push_str(delimiter);
        line_length += word.chars().count() + delimiter_len;
        if line_length > line_wrap {
            formatted.push('\n');
            line_length = 0;
        }
    }

    formatted
}

/// Split on `delimiter`, keeping empty tokens. `str::split` with an empty
/// pattern matches between every char, so that case is a single token.
fn split_tokens<'a>(text: &'a str, delimiter: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a> {
    if delimiter.is_empty() {
        Box::new(std::iter::once(text))
    } else {
        Box::new(text.split(delimiter))
    }
}
