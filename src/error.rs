/// Estimation failure reported to the caller.
///
/// Every estimator validates its own inputs at the call boundary. There are no
/// retries and no partial results: a failed call produces no estimate at all.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum EstimateError {
    /// Malformed domain input: negative usage, after exceeding before,
    /// recycled exceeding waste, or a broken tariff schedule.
    #[display("invalid input: {_0}")]
    InvalidInput(#[error(not(source))] String),

    /// The end date precedes the start date.
    #[display("invalid range: {_0}")]
    InvalidRange(#[error(not(source))] String),
}

macro_rules! ensure_input {
    ($condition:expr, $($arg:tt)+) => {
        if !$condition {
            return Err($crate::error::EstimateError::InvalidInput(format!($($arg)+)));
        }
    };
}
