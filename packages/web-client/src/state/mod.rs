//! Client-side job list
//!
//! Holds the last list fetched from the API. Deletes are optimistic: the
//! record leaves the local list before the server answers, and a failed
//! delete is reconciled by refetching the whole list. Creates are applied
//! only after the server returns the stored record.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

use crate::api::{ClientError, JobsApi};
use crate::types::{CreateJobInput, Job};

/// What a call to [`JobsStore::delete`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The server confirmed the delete.
    Deleted,
    /// A delete for this id was already in flight; nothing was sent.
    AlreadyPending,
}

#[derive(Default)]
struct JobsState {
    jobs: Vec<Job>,
    loaded: bool,
    pending_deletes: HashSet<String>,
}

impl JobsState {
    /// Replace the list with a fresh server copy. Records with a delete in
    /// flight stay hidden.
    fn replace(&mut self, jobs: Vec<Job>) {
        self.jobs = jobs
            .into_iter()
            .filter(|job| !self.pending_deletes.contains(&job.id))
            .collect();
        self.loaded = true;
    }
}

/// Job list cache over a [`JobsApi`].
///
/// The lock is never held across a network call.
pub struct JobsStore<A> {
    api: A,
    state: Mutex<JobsState>,
}

impl<A: JobsApi> JobsStore<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: Mutex::new(JobsState::default()),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    fn state(&self) -> MutexGuard<'_, JobsState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Snapshot of the current list, newest first.
    pub fn jobs(&self) -> Vec<Job> {
        self.state().jobs.clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.state().loaded
    }

    pub fn is_delete_pending(&self, id: &str) -> bool {
        self.state().pending_deletes.contains(id)
    }

    /// Fetch the list unless it has already been loaded.
    pub async fn load(&self) -> Result<(), ClientError> {
        if self.is_loaded() {
            return Ok(());
        }
        self.refresh().await
    }

    /// Mark the list stale so the next [`load`](Self::load) refetches.
    pub fn invalidate(&self) {
        self.state().loaded = false;
    }

    /// Refetch the list unconditionally.
    pub async fn refresh(&self) -> Result<(), ClientError> {
        let jobs = self.api.get_jobs().await?;
        tracing::debug!(count = jobs.len(), "job list fetched");
        self.state().replace(jobs);
        Ok(())
    }

    /// Submit a posting and prepend the stored record on success.
    ///
    /// On failure the list is untouched and the error is returned so the
    /// form can keep its contents.
    pub async fn create(&self, input: &CreateJobInput) -> Result<Job, ClientError> {
        let job = self.api.create_job(input).await?;

        let mut state = self.state();
        if !state.jobs.iter().any(|existing| existing.id == job.id) {
            state.jobs.insert(0, job.clone());
        }
        Ok(job)
    }

    /// Remove a posting locally, then on the server.
    ///
    /// If the server call fails the full list is refetched and the original
    /// error returned. A second delete for an id still in flight is
    /// suppressed.
    pub async fn delete(&self, id: &str) -> Result<DeleteOutcome, ClientError> {
        {
            let mut state = self.state();
            if !state.pending_deletes.insert(id.to_string()) {
                return Ok(DeleteOutcome::AlreadyPending);
            }
            state.jobs.retain(|job| job.id != id);
        }

        let result = self.api.delete_job(id).await;
        self.state().pending_deletes.remove(id);

        match result {
            Ok(()) => Ok(DeleteOutcome::Deleted),
            Err(err) => {
                tracing::warn!(%id, error = %err, "delete failed, resyncing job list");
                if let Err(refetch) = self.refresh().await {
                    tracing::warn!(error = %refetch, "resync failed, list marked stale");
                    self.invalidate();
                }
                Err(err)
            }
        }
    }
}
