pub mod actions;
pub mod data;
pub mod errors;
pub mod models;
pub mod validation;

pub use data::{CreateJobInput, DeleteJobResult, JobPostingData};
pub use errors::JobError;
pub use models::{EmploymentType, JobPosting, NewJobPosting};
pub use validation::{validate, FieldError, ValidationError};
