use thiserror::Error;

/// Precondition failures reported synchronously by the timing utilities.
///
/// Nothing is scheduled when one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    #[error("animation duration must be a finite, non-negative number of ms (got {0})")]
    InvalidDuration(f64),
    #[error("throttle interval must be a finite, non-negative number of ms (got {0})")]
    InvalidInterval(f64),
    #[error("typing delay must be a finite, non-negative number of ms (got {0})")]
    InvalidDelay(f64),
    #[error("smoothing factor must lie in (0, 1] (got {0})")]
    InvalidSmoothing(f64),
    #[error("contact form is already showing its confirmation")]
    FormAlreadySubmitted,
}

pub type Result<T> = std::result::Result<T, Error>;

#[inline]
pub(crate) fn non_negative_ms(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
