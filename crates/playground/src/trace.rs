//! Observers that log the values flowing through a pipeline.
//!
//! These are ordinary functions of `&T`, so they slot into a pipeline with
//! [`tap`](splice_core::tap) or [`Step::tap`](splice_core::Step::tap) without
//! changing what the pipeline returns.

use std::fmt::Debug;

use tracing::debug;

/// Returns an observer that logs each value it sees at debug level.
///
/// # Example
///
/// ```
/// use splice_core::tap;
/// use splice_playground::trace::log_stage;
///
/// let double = tap(|x: i32| x * 2, log_stage("double"));
/// assert_eq!(double(21), 42);
/// ```
pub fn log_stage<T: Debug>(stage: &'static str) -> impl Fn(&T) {
    move |value| debug!(stage, ?value, "stage produced a value")
}

/// Returns an observer for `Option`-returning stages.
///
/// Present values are logged like [`log_stage`]. An absent value is logged
/// as the point where the pipeline stopped.
pub fn log_presence<T: Debug>(stage: &'static str) -> impl Fn(&Option<T>) {
    move |value| match value {
        Some(value) => debug!(stage, ?value, "stage produced a value"),
        None => debug!(stage, "stage produced nothing; pipeline stops here"),
    }
}
