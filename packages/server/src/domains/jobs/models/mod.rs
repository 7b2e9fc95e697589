pub mod job_posting;

pub use job_posting::{EmploymentType, JobPosting, NewJobPosting, UnknownEmploymentType};
