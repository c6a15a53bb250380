//! Validation errors reported by the calculator.

use crate::expr::ExprError;

/// Reasons a render estimate could not be produced.
///
/// Every variant is a recoverable input problem. [`Display`] yields the
/// user-facing message, also available through [`ValidationError::message`].
///
/// [`Display`]: std::fmt::Display
///
/// # Examples
///
/// ```
/// use rendertime_core::ValidationError;
///
/// let err = ValidationError::MissingInput;
/// assert_eq!(err.to_string(), "Please fill in both inputs.");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::IsVariant,
)]
pub enum ValidationError {
    /// At least one input is blank after trimming.
    #[display("Please fill in both inputs.")]
    MissingInput,
    /// The frame count is not a valid arithmetic expression.
    #[display("Invalid frames expression.")]
    InvalidFrameExpression(#[error(source)] ExprError),
    /// The frame count evaluated to zero or a negative number.
    #[display("Number of frames must be positive.")]
    InvalidFrameCount,
    /// The seconds-per-frame input is not a finite real number.
    #[display("Invalid seconds input.")]
    InvalidSecondsExpression,
    /// The seconds-per-frame input is zero or negative.
    #[display("Seconds per frame must be positive.")]
    InvalidSecondsPerFrame,
    /// The finish time cannot be represented as a calendar date.
    #[display("Estimated finish time is out of range.")]
    FinishTimeOutOfRange,
}

impl ValidationError {
    /// Returns the message to show to the user.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingInput => "Please fill in both inputs.",
            Self::InvalidFrameExpression(_) => "Invalid frames expression.",
            Self::InvalidFrameCount => "Number of frames must be positive.",
            Self::InvalidSecondsExpression => "Invalid seconds input.",
            Self::InvalidSecondsPerFrame => "Seconds per frame must be positive.",
            Self::FinishTimeOutOfRange => "Estimated finish time is out of range.",
        }
    }

    /// Returns the underlying expression error, if any.
    ///
    /// Useful as a detail line under the short message.
    #[must_use]
    pub fn detail(&self) -> Option<ExprError> {
        match self {
            Self::InvalidFrameExpression(err) => Some(*err),
            _ => None,
        }
    }
}
