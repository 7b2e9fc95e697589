//! Kernel module - server infrastructure and dependencies.

pub mod connection;
pub mod error;
pub mod job_store;
pub mod memory_store;
pub mod migrations;
pub mod server_kernel;
pub mod test_dependencies;
pub mod traits;

pub use connection::{spawn_health_probe, ConnectionMonitor, ConnectionState};
pub use error::StorageError;
pub use job_store::PostgresJobStore;
pub use memory_store::MemoryJobStore;
pub use migrations::{applied_versions, MIGRATOR};
pub use server_kernel::ServerKernel;
pub use traits::*;
