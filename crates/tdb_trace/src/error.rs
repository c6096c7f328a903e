/// Failure reported by a trace call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TraceError {
    /// An `assert_*` condition was false.
    #[error("assertion failed: {message}")]
    AssertionFailed { message: String },
    /// An `array_*` range reached past the end of the array.
    #[error("cannot trace {count} elements from index {start} of an array of length {len}")]
    OutOfBounds {
        start: usize,
        count: usize,
        len: usize,
    },
}
