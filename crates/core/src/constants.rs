/// Decimal precision for monetary display values
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Trailing window of daily history used to value a portfolio
pub const PORTFOLIO_HISTORY_MONTHS: u32 = 6;

/// Trailing window of daily history returned by the stock lookup
pub const STOCK_LOOKUP_HISTORY_MONTHS: u32 = 1;

/// Maximum number of history points attached to a holding
pub const HOLDING_HISTORY_LIMIT: usize = 180;

/// Default number of holdings valued concurrently
pub const DEFAULT_PORTFOLIO_CONCURRENCY: usize = 8;

/// Default per-call timeout for market data requests
pub const DEFAULT_PROVIDER_TIMEOUT_MS: u64 = 10_000;

/// Delay before the single retry of a transient provider failure
pub const PROVIDER_RETRY_DELAY_MS: u64 = 250;

/// Length of the generated lesson description
pub const LESSON_DESCRIPTION_CHARS: usize = 140;
