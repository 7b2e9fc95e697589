//! Job service operations.
//!
//! The only path from the HTTP boundary to the job store. Each action takes
//! the store as a trait object so tests can inject spies.

mod create_job;
mod delete_job;
mod list_jobs;

pub use create_job::create_job;
pub use delete_job::delete_job;
pub use list_jobs::{list_jobs, list_jobs_by_employment_type, search_jobs};
