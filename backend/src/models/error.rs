//! Errors raised while interpreting dashboard control values.

/// Result type for control-value parsing.
pub type ParseResult<T> = Result<T, ParseError>;

/// A dashboard control value that cannot be turned into a pipeline parameter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Metric selector outside {count, deaths, damages}.
    #[error("Unknown metric '{0}'. Use count, deaths, or damages.")]
    UnknownMetric(String),

    /// Year range whose lower bound lies after its upper bound.
    #[error("Invalid year range: {from} is after {to}")]
    InvertedYearRange { from: i32, to: i32 },
}
