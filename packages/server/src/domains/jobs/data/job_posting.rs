use serde::{Deserialize, Serialize};

use crate::domains::jobs::models::{EmploymentType, JobPosting};

/// Request body of `POST /create/job`.
///
/// Every field is optional at the wire level so that a missing field turns
/// into a field-level validation error instead of an opaque body rejection.
/// Caller-supplied `_id`, `createdAt` and `updatedAt` are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobInput {
    pub title: Option<String>,
    pub location: Option<String>,
    pub fixed_salary: Option<String>,
    pub job_role_type: Option<String>,
    pub employment_type: Option<String>,
    pub educational_qualification: Option<String>,
    pub experience_required: Option<String>,
    pub required_skills: Option<Vec<String>>,
    pub language_requirements: Option<Vec<String>>,
    pub property_types: Option<Vec<String>>,
    pub description: Option<String>,
}

/// JSON shape of a job posting as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPostingData {
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
    pub created_at: String,
    pub updated_at: String,
}

impl From<JobPosting> for JobPostingData {
    fn from(job: JobPosting) -> Self {
        Self {
            id: job.id.to_string(),
            title: job.title,
            location: job.location,
            fixed_salary: job.fixed_salary,
            job_role_type: job.job_role_type,
            employment_type: job.employment_type,
            educational_qualification: job.educational_qualification,
            experience_required: job.experience_required,
            required_skills: job.required_skills,
            language_requirements: job.language_requirements,
            property_types: job.property_types,
            description: job.description,
            created_at: job.created_at.to_rfc3339(),
            updated_at: job.updated_at.to_rfc3339(),
        }
    }
}

/// Response body of `DELETE /jobs/:id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteJobResult {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::JobPostingId;
    use crate::domains::jobs::models::NewJobPosting;
    use chrono::Utc;

    #[test]
    fn serializes_with_underscore_id_and_explicit_nulls() {
        let new = NewJobPosting::builder()
            .title("Agent")
            .location("Pune")
            .fixed_salary("5L")
            .employment_type(EmploymentType::FullTime)
            .experience_required("2 years")
            .language_requirements(vec!["English".to_string()])
            .description("<p>Great role</p>")
            .build();
        let id = JobPostingId::new();
        let data = JobPostingData::from(JobPosting::from_new(id, new, Utc::now()));

        let json = serde_json::to_value(&data).unwrap();

        assert_eq!(json["_id"], id.to_string());
        assert_eq!(json["fixedSalary"], "5L");
        assert_eq!(json["employmentType"], "full-time");
        assert!(json["jobRoleType"].is_null());
        assert!(json["requiredSkills"].is_null());
        assert!(json.get("id").is_none());
    }

    #[test]
    fn input_ignores_server_assigned_fields() {
        let input: CreateJobInput = serde_json::from_value(serde_json::json!({
            "_id": "abc",
            "createdAt": "2020-01-01T00:00:00Z",
            "title": "Broker"
        }))
        .unwrap();

        assert_eq!(input.title.as_deref(), Some("Broker"));
        assert!(input.location.is_none());
    }
}
