// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Validation and defaulting belong to domains/jobs; the store only persists.

use async_trait::async_trait;

use super::StorageError;
use crate::common::JobPostingId;
use crate::domains::jobs::models::{EmploymentType, JobPosting, NewJobPosting};

// =============================================================================
// Job Store Trait (Infrastructure - persistence gateway)
// =============================================================================

#[async_trait]
pub trait BaseJobStore: Send + Sync {
    /// Persist a validated posting, assigning id, `created_at` and `updated_at`.
    async fn insert(&self, posting: NewJobPosting) -> Result<JobPosting, StorageError>;

    /// All postings ordered by `created_at` descending (newest first).
    async fn list_all(&self) -> Result<Vec<JobPosting>, StorageError>;

    async fn find_by_id(&self, id: JobPostingId) -> Result<Option<JobPosting>, StorageError>;

    /// Postings of one employment type, newest first.
    async fn find_by_employment_type(
        &self,
        employment_type: EmploymentType,
    ) -> Result<Vec<JobPosting>, StorageError>;

    /// Free-text search over title and description, newest first.
    async fn search(&self, query: &str) -> Result<Vec<JobPosting>, StorageError>;

    /// Remove a posting. Returns whether one existed; absence is not an error.
    async fn delete_by_id(&self, id: JobPostingId) -> Result<bool, StorageError>;

    /// Cheap round trip used by the health probe.
    async fn ping(&self) -> Result<(), StorageError>;

    /// Release underlying resources on shutdown.
    async fn close(&self) {}
}
