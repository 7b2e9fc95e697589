//! Typed ID definitions for domain entities.

pub use super::id::Id;

/// Marker type for job posting records.
pub struct JobPostingEntity;

pub type JobPostingId = Id<JobPostingEntity>;
