//! Schedule error types.

use rentroll_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

use super::frequency::Frequency;

/// Errors raised while building a payment schedule.
///
/// Every variant is a caller-input validation failure, detected before any
/// entry is produced. Partial schedules are never returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// Total amount is zero or negative.
    #[error("total amount must be greater than 0")]
    NonPositiveAmount,

    /// Total amount exceeds the largest supported contract total.
    #[error("total amount must not exceed {0}")]
    AmountTooLarge(Decimal),

    /// Total amount carries digits below the cent.
    #[error("total amount must have at most 2 decimal places")]
    ExcessPrecision,

    /// Lease duration in fractional months is zero or negative.
    #[error("duration must be greater than 0")]
    NonPositiveDuration,

    /// Frequency token is not recognized.
    #[error("unrecognized payment frequency: {0}")]
    UnknownFrequency(String),

    /// Periodic lease fits inside a single frequency block.
    #[error("lease is shorter than one {0} period; use a one-time payment")]
    SinglePeriod(Frequency),

    /// Due day cannot be honored in every month.
    #[error("due day must be between 1 and 28, got {0}")]
    InvalidDueDay(u32),

    /// Month arithmetic left chrono's supported calendar range.
    #[error("date out of supported range")]
    DateOutOfRange,
}

impl ScheduleError {
    /// Returns true for caller-input errors. Currently every variant.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        true
    }
}

impl From<ScheduleError> for AppError {
    fn from(err: ScheduleError) -> Self {
        Self::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ScheduleError::NonPositiveAmount.to_string(),
            "total amount must be greater than 0"
        );
        assert_eq!(
            ScheduleError::AmountTooLarge(Decimal::new(1_000, 0)).to_string(),
            "total amount must not exceed 1000"
        );
        assert_eq!(
            ScheduleError::NonPositiveDuration.to_string(),
            "duration must be greater than 0"
        );
        assert_eq!(
            ScheduleError::UnknownFrequency("weekly".into()).to_string(),
            "unrecognized payment frequency: weekly"
        );
        assert_eq!(
            ScheduleError::SinglePeriod(Frequency::Quarterly).to_string(),
            "lease is shorter than one quarterly period; use a one-time payment"
        );
    }

    #[test]
    fn test_maps_to_app_validation_error() {
        let err: AppError = ScheduleError::NonPositiveAmount.into();
        assert!(err.is_validation());
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert_eq!(
            err.to_string(),
            "Validation error: total amount must be greater than 0"
        );
    }
}
