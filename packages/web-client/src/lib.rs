//! Job Board client
//!
//! Client-side half of the job board: a typed HTTP client for the API and
//! the in-memory job list the UI renders from. The list is a derived,
//! possibly stale copy; the server stays authoritative.
//!
//! ```ignore
//! let store = JobsStore::new(HttpJobsApi::from_env());
//! store.load().await?;
//! let job = store.create(&input).await?;
//! store.delete(&job.id).await?;
//! ```

pub mod api;
pub mod state;
pub mod types;
pub mod validation;

pub use api::{ClientError, HttpJobsApi, JobsApi};
pub use state::{DeleteOutcome, JobsStore};
pub use types::{CreateJobInput, EmploymentType, FieldError, Job};
pub use validation::validate_input;
