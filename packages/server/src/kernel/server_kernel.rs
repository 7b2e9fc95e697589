// ServerKernel - core infrastructure shared by every request
//
// Holds the job store behind a trait object (Postgres in production, the
// in-memory store in tests and dev mode) plus the connection monitor that
// health checks read.

use std::sync::Arc;

use super::{BaseJobStore, ConnectionMonitor, MemoryJobStore};

pub struct ServerKernel {
    pub job_store: Arc<dyn BaseJobStore>,
    pub connection: ConnectionMonitor,
}

impl ServerKernel {
    pub fn new(job_store: Arc<dyn BaseJobStore>, connection: ConnectionMonitor) -> Self {
        Self {
            job_store,
            connection,
        }
    }

    /// Kernel over a fresh in-memory store, already marked connected.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryJobStore::new()), ConnectionMonitor::connected())
    }

    /// Close the store and mark the connection disconnected.
    pub async fn shutdown(&self) {
        self.job_store.close().await;
        self.connection.shutdown();
    }
}
