//! Job creation action

use tracing::{debug, info};

use crate::domains::jobs::data::CreateJobInput;
use crate::domains::jobs::errors::JobError;
use crate::domains::jobs::models::JobPosting;
use crate::domains::jobs::validation::validate;
use crate::kernel::BaseJobStore;

/// Validate `input` and store it.
///
/// Nothing reaches the store unless validation passes.
pub async fn create_job(
    input: CreateJobInput,
    store: &dyn BaseJobStore,
) -> Result<JobPosting, JobError> {
    let posting = validate(input).map_err(|e| {
        debug!(error = %e, "rejected job posting");
        e
    })?;

    let created = store.insert(posting).await?;
    info!(
        job_id = %created.id,
        employment_type = %created.employment_type,
        "job posting created"
    );

    Ok(created)
}
