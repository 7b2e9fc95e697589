//! PostgreSQL implementation of the job store.
//!
//! Queries live on the [`JobPosting`] model; this adapter bounds each call by
//! the server-selection timeout, classifies failures and feeds the outcome
//! to the connection monitor.

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::future::Future;
use std::time::Duration;
use tracing::{error, warn};

use super::{BaseJobStore, ConnectionMonitor, StorageError};
use crate::common::JobPostingId;
use crate::domains::jobs::models::{EmploymentType, JobPosting, NewJobPosting};

pub struct PostgresJobStore {
    pool: PgPool,
    timeout: Duration,
    monitor: ConnectionMonitor,
}

impl PostgresJobStore {
    pub fn new(pool: PgPool, timeout: Duration, monitor: ConnectionMonitor) -> Self {
        Self {
            pool,
            timeout,
            monitor,
        }
    }

    /// Open a bounded pool. Acquiring a connection fails after `timeout`
    /// instead of waiting indefinitely for the server.
    pub async fn connect(
        database_url: &str,
        max_connections: u32,
        timeout: Duration,
    ) -> Result<PgPool, StorageError> {
        PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(timeout)
            .connect(database_url)
            .await
            .map_err(StorageError::from_sqlx)
    }

    async fn run<T, F>(&self, operation: &'static str, fut: F) -> Result<T, StorageError>
    where
        F: Future<Output = sqlx::Result<T>> + Send,
    {
        let result = match tokio::time::timeout(self.timeout, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(StorageError::from_sqlx(e)),
            Err(_) => Err(StorageError::Timeout(self.timeout)),
        };

        match &result {
            Ok(_) => self.monitor.report_success(),
            Err(e) if e.is_connectivity() => {
                warn!(operation, error = %e, "job store unreachable");
                self.monitor.report_fault();
            }
            Err(e) => error!(operation, error = %e, "job store query failed"),
        }

        result
    }
}

#[async_trait]
impl BaseJobStore for PostgresJobStore {
    async fn insert(&self, posting: NewJobPosting) -> Result<JobPosting, StorageError> {
        self.run("insert", JobPosting::create(&posting, &self.pool))
            .await
    }

    async fn list_all(&self) -> Result<Vec<JobPosting>, StorageError> {
        self.run("list_all", JobPosting::find_all(&self.pool)).await
    }

    async fn find_by_id(&self, id: JobPostingId) -> Result<Option<JobPosting>, StorageError> {
        self.run("find_by_id", JobPosting::find_by_id(id, &self.pool))
            .await
    }

    async fn find_by_employment_type(
        &self,
        employment_type: EmploymentType,
    ) -> Result<Vec<JobPosting>, StorageError> {
        self.run(
            "find_by_employment_type",
            JobPosting::find_by_employment_type(employment_type, &self.pool),
        )
        .await
    }

    async fn search(&self, query: &str) -> Result<Vec<JobPosting>, StorageError> {
        self.run("search", JobPosting::search(query, &self.pool))
            .await
    }

    async fn delete_by_id(&self, id: JobPostingId) -> Result<bool, StorageError> {
        self.run("delete_by_id", JobPosting::delete(id, &self.pool))
            .await
    }

    async fn ping(&self) -> Result<(), StorageError> {
        self.run("ping", async {
            sqlx::query("SELECT 1").execute(&self.pool).await.map(|_| ())
        })
        .await
    }

    async fn close(&self) {
        self.pool.close().await;
        self.monitor.shutdown();
    }
}
