// TestDependencies - mock job stores for testing
//
// Provides stores that record calls or fail on demand, injected into
// ServerKernel by the service and HTTP tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use super::{BaseJobStore, ConnectionMonitor, MemoryJobStore, ServerKernel, StorageError};
use crate::common::JobPostingId;
use crate::domains::jobs::models::{EmploymentType, JobPosting, NewJobPosting};

// =============================================================================
// Spy Job Store
// =============================================================================

/// In-memory store that counts calls to the mutating operations.
#[derive(Default)]
pub struct SpyJobStore {
    inner: MemoryJobStore,
    insert_calls: AtomicUsize,
    delete_calls: AtomicUsize,
}

impl SpyJobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    pub fn stored(&self) -> usize {
        self.inner.len()
    }
}

#[async_trait]
impl BaseJobStore for SpyJobStore {
    async fn insert(&self, posting: NewJobPosting) -> Result<JobPosting, StorageError> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.insert(posting).await
    }

    async fn list_all(&self) -> Result<Vec<JobPosting>, StorageError> {
        self.inner.list_all().await
    }

    async fn find_by_id(&self, id: JobPostingId) -> Result<Option<JobPosting>, StorageError> {
        self.inner.find_by_id(id).await
    }

    async fn find_by_employment_type(
        &self,
        employment_type: EmploymentType,
    ) -> Result<Vec<JobPosting>, StorageError> {
        self.inner.find_by_employment_type(employment_type).await
    }

    async fn search(&self, query: &str) -> Result<Vec<JobPosting>, StorageError> {
        self.inner.search(query).await
    }

    async fn delete_by_id(&self, id: JobPostingId) -> Result<bool, StorageError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.delete_by_id(id).await
    }

    async fn ping(&self) -> Result<(), StorageError> {
        Ok(())
    }
}

// =============================================================================
// Flaky Job Store
// =============================================================================

/// Store whose every operation fails while `offline` is set.
pub struct FlakyJobStore {
    inner: MemoryJobStore,
    offline: AtomicBool,
    timeout: Duration,
}

impl FlakyJobStore {
    pub fn new() -> Self {
        Self {
            inner: MemoryJobStore::new(),
            offline: AtomicBool::new(false),
            timeout: Duration::from_millis(5000),
        }
    }

    pub fn offline() -> Self {
        let store = Self::new();
        store.set_offline(true);
        store
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.offline.load(Ordering::SeqCst) {
            Err(StorageError::Timeout(self.timeout))
        } else {
            Ok(())
        }
    }
}

impl Default for FlakyJobStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseJobStore for FlakyJobStore {
    async fn insert(&self, posting: NewJobPosting) -> Result<JobPosting, StorageError> {
        self.check()?;
        self.inner.insert(posting).await
    }

    async fn list_all(&self) -> Result<Vec<JobPosting>, StorageError> {
        self.check()?;
        self.inner.list_all().await
    }

    async fn find_by_id(&self, id: JobPostingId) -> Result<Option<JobPosting>, StorageError> {
        self.check()?;
        self.inner.find_by_id(id).await
    }

    async fn find_by_employment_type(
        &self,
        employment_type: EmploymentType,
    ) -> Result<Vec<JobPosting>, StorageError> {
        self.check()?;
        self.inner.find_by_employment_type(employment_type).await
    }

    async fn search(&self, query: &str) -> Result<Vec<JobPosting>, StorageError> {
        self.check()?;
        self.inner.search(query).await
    }

    async fn delete_by_id(&self, id: JobPostingId) -> Result<bool, StorageError> {
        self.check()?;
        self.inner.delete_by_id(id).await
    }

    async fn ping(&self) -> Result<(), StorageError> {
        self.check()
    }
}

// =============================================================================
// Kernel builders
// =============================================================================

pub struct TestDependencies;

impl TestDependencies {
    /// Kernel over the given store with a connected monitor.
    pub fn kernel_with(store: Arc<dyn BaseJobStore>) -> Arc<ServerKernel> {
        Arc::new(ServerKernel::new(store, ConnectionMonitor::connected()))
    }
}
