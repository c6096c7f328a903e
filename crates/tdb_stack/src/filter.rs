//! Frame classification by symbol name.

/// Crates whose frames sit between the caller and the stack walk.
const INTERNAL_PREFIXES: &[&str] = &["backtrace::", "tdb_stack::", "tdb_trace::", "tdbg::"];

/// Runtime frames that never carry caller context.
const NOISE_PREFIXES: &[&str] = &[
    // Runtime entry and panic machinery
    "std::rt::",
    "std::panicking::",
    "std::panic::",
    "core::panicking::",
    "__rust_try",
    "std::sys::",
    "std::sys_common::",
    // Thread spawning
    "std::thread::",
    // Test harness internals
    "test::",
    // Unwinder and libc entry points
    "_Unwind_",
    "__libc_start",
    "_start",
    "__pthread",
    "start_thread",
    "__clone",
    "clone3",
];

/// Substrings marking trampolines that may appear anywhere in a name.
const NOISE_MARKERS: &[&str] = &[
    "core::ops::function::Fn",
    "__rust_begin_short_backtrace",
    "core::panic::unwind_safe::AssertUnwindSafe",
];

/// Strip the `<` that opens trait-impl paths like `<T as Trait>::method`.
fn path_of(name: &str) -> &str {
    name.trim_start_matches('<')
}

/// Whether `name` belongs to the capture or trace machinery.
///
/// Unit tests inside those crates are callers, not machinery.
pub fn is_internal(name: &str) -> bool {
    let path = path_of(name);
    INTERNAL_PREFIXES.iter().any(|prefix| path.starts_with(prefix)) && !path.contains("::tests::")
}

/// Whether `name` is a runtime frame that should never be shown.
pub fn is_noise(name: &str) -> bool {
    let path = path_of(name);
    name == "main"
        || NOISE_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
        || NOISE_MARKERS.iter().any(|marker| path.contains(marker))
}

/// Whether `name` is a closure of `callee` that called `callee` itself.
///
/// This is the shape of the wrapper libtest generates around each `#[test]`
/// function. A closure a function calls sits below it, never above.
pub fn is_wrapper_closure(name: &str, callee: &str) -> bool {
    path_of(name)
        .strip_suffix("::{{closure}}")
        .is_some_and(|parent| parent == path_of(callee))
}

#[cfg(test)]
mod tests;
