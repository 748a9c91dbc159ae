use thiserror::Error;

/// Error type that captures calculator failures.
#[derive(Debug, Error)]
pub enum CalculatorError {
    #[error("Invalid record date `{date}`: {source}")]
    InvalidDate {
        date: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
    #[error("Configuration error: {0}")]
    Config(String),
}
