//! Render time estimation.

use std::{
    fmt::{self, Display},
    time::Duration,
};

use chrono::{NaiveDateTime, TimeDelta};

use crate::{Clock, ValidationError, expr};

/// Seconds in one minute.
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Minutes in one hour.
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// The result of a successful estimate.
///
/// Holds the validated inputs, the total render time in several units, and
/// the wall-clock instant at which rendering is expected to finish.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderEstimate {
    frame_count: u64,
    seconds_per_frame: f64,
    total_seconds: f64,
    total_minutes: f64,
    total_hours: f64,
    total_duration: TimeDelta,
    finish: NaiveDateTime,
}

impl RenderEstimate {
    /// Builds an estimate from already validated inputs.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidFrameCount`] if `frame_count` is zero,
    /// [`ValidationError::InvalidSecondsPerFrame`] if `seconds_per_frame` is not
    /// strictly positive, and [`ValidationError::FinishTimeOutOfRange`] if the
    /// finish instant is beyond the supported calendar range.
    #[expect(clippy::cast_precision_loss)]
    pub fn new(
        frame_count: u64,
        seconds_per_frame: f64,
        now: NaiveDateTime,
    ) -> Result<Self, ValidationError> {
        if frame_count == 0 {
            return Err(ValidationError::InvalidFrameCount);
        }
        if !seconds_per_frame.is_finite() {
            return Err(ValidationError::InvalidSecondsExpression);
        }
        if seconds_per_frame <= 0.0 {
            return Err(ValidationError::InvalidSecondsPerFrame);
        }

        let total_seconds = frame_count as f64 * seconds_per_frame;
        let total_minutes = total_seconds / SECONDS_PER_MINUTE;
        let total_hours = total_minutes / MINUTES_PER_HOUR;

        let total_duration = Duration::try_from_secs_f64(total_seconds)
            .ok()
            .and_then(|duration| TimeDelta::from_std(duration).ok())
            .ok_or(ValidationError::FinishTimeOutOfRange)?;
        let finish = now
            .checked_add_signed(total_duration)
            .ok_or(ValidationError::FinishTimeOutOfRange)?;

        Ok(Self {
            frame_count,
            seconds_per_frame,
            total_seconds,
            total_minutes,
            total_hours,
            total_duration,
            finish,
        })
    }

    /// Number of frames to render.
    #[must_use]
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Render time of a single frame, in seconds.
    #[must_use]
    pub const fn seconds_per_frame(&self) -> f64 {
        self.seconds_per_frame
    }

    /// Total render time in seconds.
    #[must_use]
    pub const fn total_seconds(&self) -> f64 {
        self.total_seconds
    }

    /// Total render time in minutes.
    #[must_use]
    pub const fn total_minutes(&self) -> f64 {
        self.total_minutes
    }

    /// Total render time in hours.
    #[must_use]
    pub const fn total_hours(&self) -> f64 {
        self.total_hours
    }

    /// Total render time as a calendar duration (nanosecond resolution).
    #[must_use]
    pub const fn total_duration(&self) -> TimeDelta {
        self.total_duration
    }

    /// Local wall-clock instant at which rendering finishes.
    #[must_use]
    pub const fn finish(&self) -> NaiveDateTime {
        self.finish
    }
}

/// Formats the estimate as a multi-line report.
///
/// ```text
/// Render Time:
/// 0.6 minutes
/// 0.0 hours
///
/// Finish By:
/// 01-01-2024
/// 10:00
/// ```
impl Display for RenderEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Render Time:")?;
        writeln!(f, "{:.1} minutes", self.total_minutes)?;
        writeln!(f, "{:.1} hours", self.total_hours)?;
        writeln!(f)?;
        writeln!(f, "Finish By:")?;
        writeln!(f, "{}", self.finish.format("%d-%m-%Y"))?;
        write!(f, "{}", self.finish.format("%H:%M"))
    }
}

/// Computes a render estimate from raw text inputs.
///
/// `frames_input` may be an arithmetic expression (see [`expr`]); its value is
/// truncated toward zero. `seconds_input` must be a plain real number. Both are
/// trimmed before parsing. The result does not depend on anything but the
/// three arguments.
///
/// # Errors
///
/// Checks run in order and the first failure is returned:
///
/// 1. [`ValidationError::MissingInput`] if either input is blank.
/// 2. [`ValidationError::InvalidFrameExpression`] if the frames input cannot
///    be evaluated, or [`ValidationError::InvalidFrameCount`] if it is not
///    positive.
/// 3. [`ValidationError::InvalidSecondsExpression`] if the seconds input is not
///    a finite number, or [`ValidationError::InvalidSecondsPerFrame`] if it is
///    not positive.
/// 4. [`ValidationError::FinishTimeOutOfRange`] if the finish instant cannot be
///    represented.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rendertime_core::compute_estimate;
///
/// let now = NaiveDate::from_ymd_opt(2024, 1, 1)
///     .unwrap()
///     .and_hms_opt(10, 0, 0)
///     .unwrap();
/// let estimate = compute_estimate("24", "1.5", now).unwrap();
/// assert_eq!(estimate.total_seconds(), 36.0);
/// assert_eq!(estimate.finish().to_string(), "2024-01-01 10:00:36");
/// ```
pub fn compute_estimate(
    frames_input: &str,
    seconds_input: &str,
    now: NaiveDateTime,
) -> Result<RenderEstimate, ValidationError> {
    let frames_text = frames_input.trim();
    let seconds_text = seconds_input.trim();
    if frames_text.is_empty() || seconds_text.is_empty() {
        return Err(ValidationError::MissingInput);
    }

    let frame_count = parse_frame_count(frames_text)?;
    let seconds_per_frame = parse_seconds_per_frame(seconds_text)?;
    RenderEstimate::new(frame_count, seconds_per_frame, now)
}

fn parse_frame_count(text: &str) -> Result<u64, ValidationError> {
    let value =
        expr::evaluate_integer(text).map_err(ValidationError::InvalidFrameExpression)?;
    if value <= 0 {
        return Err(ValidationError::InvalidFrameCount);
    }
    Ok(value.unsigned_abs())
}

fn parse_seconds_per_frame(text: &str) -> Result<f64, ValidationError> {
    let value: f64 = text
        .parse()
        .map_err(|_| ValidationError::InvalidSecondsExpression)?;
    if !value.is_finite() {
        return Err(ValidationError::InvalidSecondsExpression);
    }
    if value <= 0.0 {
        return Err(ValidationError::InvalidSecondsPerFrame);
    }
    Ok(value)
}

/// Estimates render times against a [`Clock`].
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rendertime_core::{FixedClock, RenderTimeCalculator};
///
/// let now = NaiveDate::from_ymd_opt(2024, 2, 28)
///     .unwrap()
///     .and_hms_opt(23, 0, 0)
///     .unwrap();
/// let calculator = RenderTimeCalculator::new(FixedClock::new(now));
/// let estimate = calculator.estimate("3600", "2").unwrap();
/// assert_eq!(estimate.finish().to_string(), "2024-02-29 01:00:00");
/// ```
#[derive(Debug, Default, Clone)]
pub struct RenderTimeCalculator<C> {
    clock: C,
}

impl<C> RenderTimeCalculator<C>
where
    C: Clock,
{
    /// Creates a calculator reading the time from `clock`.
    #[must_use]
    pub const fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Returns the clock in use.
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Computes an estimate relative to the clock's current time.
    ///
    /// # Errors
    ///
    /// See [`compute_estimate`].
    pub fn estimate(
        &self,
        frames_input: &str,
        seconds_input: &str,
    ) -> Result<RenderEstimate, ValidationError> {
        compute_estimate(frames_input, seconds_input, self.clock.now())
    }
}
