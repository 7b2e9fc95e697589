//! Job deletion action

use tracing::{debug, info};

use crate::common::JobPostingId;
use crate::domains::jobs::data::DeleteJobResult;
use crate::domains::jobs::errors::JobError;
use crate::kernel::BaseJobStore;

/// Ensure the posting with `id` no longer exists.
///
/// Succeeds whether or not it existed. An id that is not a valid posting id
/// cannot name a stored record, so it is treated as already absent.
pub async fn delete_job(id: &str, store: &dyn BaseJobStore) -> Result<DeleteJobResult, JobError> {
    let Ok(job_id) = JobPostingId::parse(id.trim()) else {
        debug!(job_id = %id, "delete requested for malformed id, nothing to remove");
        return Ok(DeleteJobResult { success: true });
    };

    let removed = store.delete_by_id(job_id).await?;
    if removed {
        info!(job_id = %job_id, "job posting deleted");
    } else {
        debug!(job_id = %job_id, "delete requested for absent job posting");
    }

    Ok(DeleteJobResult { success: true })
}
