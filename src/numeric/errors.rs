// ============================================================================
// Numeric Errors
// Error type surfaced when a boxed value is extracted with `?`
// ============================================================================

use std::fmt;

/// Errors that can be observed when extracting a value from a `NumericBox`.
///
/// The box itself never fails: invalidity is carried silently through every
/// operation and only becomes an error when a caller asks for one through
/// [`NumericBox::try_value`](super::NumericBox::try_value).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Payload is not a number, or is NaN or infinite
    InvalidNumericState,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidNumericState => {
                write!(f, "invalid numeric state: value is not a finite number")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for value extraction
pub type NumericResult<T> = Result<T, NumericError>;
