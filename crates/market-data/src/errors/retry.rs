/// Classification for retry policy.
///
/// Used by callers of a provider to decide whether a failed request is worth
/// a second attempt.
///
/// | Class | Retry? |
/// |-------|--------|
/// | `Never` | No |
/// | `WithBackoff` | Yes, after a short delay |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetryClass {
    /// Never retry - bad symbol, empty range, validation error.
    /// The request is fundamentally invalid and retrying won't help.
    Never,

    /// Transient failure such as rate limiting (429), a timeout or a
    /// dropped connection.
    WithBackoff,
}
