use crate::kernel::StorageError;

use super::validation::ValidationError;

/// Failure of a job service operation.
///
/// The two variants are kept apart all the way to the HTTP boundary:
/// validation failures are the caller's fault and never retried, storage
/// failures are infrastructure faults.
#[derive(Debug, thiserror::Error)]
pub enum JobError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
