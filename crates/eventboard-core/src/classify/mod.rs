//! Temporal classification of tasks against a caller-supplied "now".
//!
//! This module provides:
//! - [`Bucket`]: NOW / NEXT / UPCOMING / FUTURE / PAST
//! - [`TemporalClassifier`]: per-task decision and whole-list `recompute`
//! - [`TimeBuckets`]: ordered task lists ready for display

mod bucket;
mod classifier;

pub use bucket::{Bucket, BucketCounts, TimeBuckets};
pub use classifier::{TemporalClassifier, DEFAULT_NEXT_WINDOW_HOURS};
