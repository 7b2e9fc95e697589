//! Process-local job store.
//!
//! Backs the `JOB_BOARD_STORE=memory` development mode and the service and
//! HTTP tests. Records are kept newest first so listing is a clone.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::RwLock;

use super::{BaseJobStore, StorageError};
use crate::common::JobPostingId;
use crate::domains::jobs::models::{EmploymentType, JobPosting, NewJobPosting};

#[derive(Default)]
pub struct MemoryJobStore {
    postings: RwLock<Vec<JobPosting>>,
}

impl MemoryJobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<JobPosting>> {
        // A poisoned lock only means another thread panicked mid-write; the
        // vector itself is still a valid list of postings.
        self.postings.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<JobPosting>> {
        self.postings.write().unwrap_or_else(|e| e.into_inner())
    }

    fn matches(posting: &JobPosting, terms: &[String]) -> bool {
        let haystack = format!("{} {}", posting.title, posting.description).to_lowercase();
        terms.iter().all(|term| haystack.contains(term.as_str()))
    }
}

#[async_trait]
impl BaseJobStore for MemoryJobStore {
    async fn insert(&self, posting: NewJobPosting) -> Result<JobPosting, StorageError> {
        let mut postings = self.write();
        let mut now = Utc::now();
        // Keep created_at non-decreasing even if the wall clock steps back.
        if let Some(newest) = postings.first() {
            if now < newest.created_at {
                now = newest.created_at;
            }
        }
        let stored = JobPosting::from_new(JobPostingId::new(), posting, now);
        postings.insert(0, stored.clone());
        Ok(stored)
    }

    async fn list_all(&self) -> Result<Vec<JobPosting>, StorageError> {
        Ok(self.read().clone())
    }

    async fn find_by_id(&self, id: JobPostingId) -> Result<Option<JobPosting>, StorageError> {
        Ok(self.read().iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_employment_type(
        &self,
        employment_type: EmploymentType,
    ) -> Result<Vec<JobPosting>, StorageError> {
        Ok(self
            .read()
            .iter()
            .filter(|p| p.employment_type == employment_type)
            .cloned()
            .collect())
    }

    async fn search(&self, query: &str) -> Result<Vec<JobPosting>, StorageError> {
        let terms: Vec<String> = query
            .split_whitespace()
            .map(|t| t.to_lowercase())
            .collect();
        if terms.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self
            .read()
            .iter()
            .filter(|p| Self::matches(p, &terms))
            .cloned()
            .collect())
    }

    async fn delete_by_id(&self, id: JobPostingId) -> Result<bool, StorageError> {
        let mut postings = self.write();
        let before = postings.len();
        postings.retain(|p| p.id != id);
        Ok(postings.len() < before)
    }

    async fn ping(&self) -> Result<(), StorageError> {
        Ok(())
    }
}
