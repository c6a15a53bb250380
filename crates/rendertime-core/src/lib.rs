//! Core computation for render time estimates.
//!
//! This crate turns a frame count and a per-frame render time into a total
//! render duration and the wall-clock instant at which rendering finishes.
//! It performs no I/O and holds no state; the current time is always passed in
//! by the caller, either directly or through a [`Clock`].
//!
//! # Overview
//!
//! - [`estimate`]: [`compute_estimate`], [`RenderEstimate`] and
//!   [`RenderTimeCalculator`].
//! - [`error`]: [`ValidationError`], one variant per rejected input, each with a
//!   user-facing message.
//! - [`expr`]: the restricted arithmetic evaluator used for the frame count, so
//!   inputs like `24*60` work without evaluating arbitrary code.
//! - [`clock`]: [`Clock`] with [`LocalClock`] and [`FixedClock`].
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use rendertime_core::{ValidationError, compute_estimate};
//!
//! let now = NaiveDate::from_ymd_opt(2024, 12, 31)
//!     .unwrap()
//!     .and_hms_opt(23, 59, 0)
//!     .unwrap();
//!
//! let estimate = compute_estimate("24*5", "1", now).unwrap();
//! assert_eq!(estimate.total_seconds(), 120.0);
//! assert_eq!(estimate.finish().to_string(), "2025-01-01 00:01:00");
//!
//! let err = compute_estimate("24", "0", now).unwrap_err();
//! assert_eq!(err, ValidationError::InvalidSecondsPerFrame);
//! assert_eq!(err.to_string(), "Seconds per frame must be positive.");
//! ```

pub mod clock;
pub mod error;
pub mod estimate;
pub mod expr;

// Re-export commonly used types
pub use self::{
    clock::{Clock, FixedClock, LocalClock},
    error::ValidationError,
    estimate::{RenderEstimate, RenderTimeCalculator, compute_estimate},
};
