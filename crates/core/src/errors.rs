//! Core error types for the StockLive backend.
//!
//! This module defines database-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, etc.) are converted to these types by the storage layer.

use chrono::ParseError as ChronoParseError;
use stocklive_market_data::MarketDataError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the backend.
///
/// Database-specific errors are wrapped in string form to keep this type
/// database-agnostic.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Price source failed: {0}")]
    PriceSource(#[from] PriceSourceError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Database-agnostic error type for storage operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert storage-specific errors (Diesel, SQLite, etc.) into this format.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A unique constraint was violated (e.g., duplicate key).
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// A foreign key constraint was violated.
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// Database migration failed.
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Internal/unexpected database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Per-ticker failures raised while building a holding.
///
/// These never fail a portfolio request: the aggregator logs them and omits
/// the ticker from the result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HoldingError {
    #[error("Invalid holding for {ticker}: {reason}")]
    InvalidHolding { ticker: String, reason: String },

    #[error("Price unavailable for {ticker}: {reason}")]
    PriceUnavailable { ticker: String, reason: String },
}

impl HoldingError {
    pub fn ticker(&self) -> &str {
        match self {
            HoldingError::InvalidHolding { ticker, .. }
            | HoldingError::PriceUnavailable { ticker, .. } => ticker,
        }
    }
}

/// Failures from the price source adapter.
#[derive(Error, Debug)]
pub enum PriceSourceError {
    #[error("Provider failed for {ticker}: {source}")]
    Provider {
        ticker: String,
        #[source]
        source: MarketDataError,
    },

    #[error("Provider call for {ticker} timed out after {timeout_ms}ms")]
    Timeout { ticker: String, timeout_ms: u64 },
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holding_error_exposes_ticker() {
        let err = HoldingError::PriceUnavailable {
            ticker: "AAPL".to_string(),
            reason: "empty history".to_string(),
        };
        assert_eq!(err.ticker(), "AAPL");
        assert_eq!(
            err.to_string(),
            "Price unavailable for AAPL: empty history"
        );
    }

    #[test]
    fn test_decimal_parse_converts_to_validation() {
        let parse_err = "abc".parse::<rust_decimal::Decimal>().unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::DecimalParse(_))
        ));
    }
}
