/// Trace a `format!`-style message to stdout with the default frames.
///
/// ```no_run
/// let attempts = 3;
/// tdbg::trace_out!("retrying, {attempts} attempts left");
/// ```
#[macro_export]
macro_rules! trace_out {
    ($($arg:tt)*) => {
        $crate::trace_out(&::std::format!($($arg)*))
    };
}

/// Trace a `format!`-style message to stderr with the default frames.
#[macro_export]
macro_rules! trace_err {
    ($($arg:tt)*) => {
        $crate::trace_err(&::std::format!($($arg)*))
    };
}
