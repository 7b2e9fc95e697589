use crate::domains::jobs::errors::JobError;
use crate::domains::jobs::models::{EmploymentType, JobPosting};
use crate::kernel::BaseJobStore;

/// All postings, newest first, exactly as the store returns them.
pub async fn list_jobs(store: &dyn BaseJobStore) -> Result<Vec<JobPosting>, JobError> {
    Ok(store.list_all().await?)
}

pub async fn list_jobs_by_employment_type(
    employment_type: EmploymentType,
    store: &dyn BaseJobStore,
) -> Result<Vec<JobPosting>, JobError> {
    Ok(store.find_by_employment_type(employment_type).await?)
}

/// Free-text search; a blank query matches nothing.
pub async fn search_jobs(query: &str, store: &dyn BaseJobStore) -> Result<Vec<JobPosting>, JobError> {
    let query = query.trim();
    if query.is_empty() {
        return Ok(Vec::new());
    }
    Ok(store.search(query).await?)
}
