//! `series-processing` is a small library providing a typed, order-preserving
//! series container over kind-homogeneous values, with positional access and a
//! cancellable per-element transformation pass ("lambda").
//!
//! A [`series::Series`] holds an ordered sequence of [`types::Value`]s that all
//! share one [`types::ElementKind`], discovered at ingestion time. Supported
//! kinds are:
//!
//! - [`types::ElementKind::Int64`]
//! - [`types::ElementKind::Float64`]
//! - [`types::ElementKind::Bool`]
//! - [`types::ElementKind::Utf8`]
//!
//! ## Quick example: ingest, transform, read back
//!
//! ```rust
//! use series_processing::lambda::{CancelToken, LambdaOutcome};
//! use series_processing::series::Series;
//! use series_processing::types::Value;
//!
//! # fn main() -> Result<(), series_processing::SeriesError> {
//! let mut series = Series::new();
//! series.set_data(vec![1i64, 2, 3])?;
//!
//! let cancel = CancelToken::new();
//! let summary = series.lambda(&cancel, |_cancel, value| match value.as_i64() {
//!     Some(v) => LambdaOutcome::Commit(Value::Int64(v * 2)),
//!     None => LambdaOutcome::Keep,
//! })?;
//!
//! assert_eq!(summary.processed, 3);
//! assert_eq!(summary.committed, 3);
//! assert_eq!(series.get(0)?, &Value::Int64(2));
//! assert_eq!(series.get(2)?, &Value::Int64(6));
//! # Ok(())
//! # }
//! ```
//!
//! ## Cancellation
//!
//! The pass polls the token before each element and never interrupts the
//! callback mid-element; positions committed before cancellation are retained.
//!
//! ```rust
//! use series_processing::lambda::{CancelToken, LambdaOutcome};
//! use series_processing::series::Series;
//! use series_processing::types::Value;
//! use series_processing::SeriesError;
//!
//! let mut series = Series::new();
//! series.set_data(vec![1i64, 2, 3]).unwrap();
//!
//! let cancel = CancelToken::new();
//! let err = series
//!     .lambda(&cancel, |cancel, value| {
//!         // Stop the pass after the first element.
//!         cancel.cancel();
//!         match value.as_i64() {
//!             Some(v) => LambdaOutcome::Commit(Value::Int64(v * 2)),
//!             None => LambdaOutcome::Keep,
//!         }
//!     })
//!     .unwrap_err();
//!
//! assert!(matches!(err, SeriesError::Cancelled { processed: 1 }));
//! assert_eq!(series.get(0).unwrap(), &Value::Int64(2)); // committed
//! assert_eq!(series.get(1).unwrap(), &Value::Int64(2)); // untouched
//! ```
//!
//! ## Modules
//!
//! - [`series`]: the container itself (ingestion, positional reads)
//! - [`types`]: the element kind/value model
//! - [`lambda`]: the transformation engine, cancellation token, and observers
//! - [`error`]: error types shared across operations

pub mod error;
pub mod lambda;
pub mod series;
pub mod types;

pub use error::{SeriesError, SeriesResult};
