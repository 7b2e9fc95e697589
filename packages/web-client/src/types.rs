//! Type definitions for job board API payloads
//!
//! These mirror the JSON contract served by the job board API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
}

/// A job posting as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub location: String,
    pub fixed_salary: String,
    pub job_role_type: Option<String>,
    pub employment_type: EmploymentType,
    pub educational_qualification: Option<String>,
    pub experience_required: String,
    pub required_skills: Option<Vec<String>>,
    pub language_requirements: Vec<String>,
    pub property_types: Option<Vec<String>>,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Form submission for a new posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobInput {
    pub title: String,
    pub location: String,
    pub fixed_salary: String,
    pub job_role_type: Option<String>,
    pub employment_type: EmploymentType,
    pub educational_qualification: Option<String>,
    pub experience_required: String,
    pub required_skills: Option<Vec<String>>,
    pub language_requirements: Vec<String>,
    pub property_types: Option<Vec<String>>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Error body returned by the API for non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
    pub message: String,
    #[serde(default)]
    pub fields: Vec<FieldError>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
}
