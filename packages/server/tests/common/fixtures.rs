//! Test fixtures for job postings.

use job_board_core::domains::jobs::{CreateJobInput, EmploymentType, NewJobPosting};
use serde_json::{json, Value};

/// The canonical valid submission used across tests.
pub fn agent_input() -> CreateJobInput {
    CreateJobInput {
        title: Some("Agent".to_string()),
        location: Some("Pune".to_string()),
        fixed_salary: Some("5L".to_string()),
        employment_type: Some("full-time".to_string()),
        experience_required: Some("2 years".to_string()),
        language_requirements: Some(vec!["English".to_string()]),
        description: Some("<p>Great role</p>".to_string()),
        ..Default::default()
    }
}

/// A valid submission with a distinct title.
pub fn titled_input(title: &str) -> CreateJobInput {
    CreateJobInput {
        title: Some(title.to_string()),
        ..agent_input()
    }
}

/// The canonical valid submission as a JSON request body.
pub fn agent_payload() -> Value {
    json!({
        "title": "Agent",
        "location": "Pune",
        "fixedSalary": "5L",
        "employmentType": "full-time",
        "experienceRequired": "2 years",
        "languageRequirements": ["English"],
        "description": "<p>Great role</p>"
    })
}

/// A fully populated, already validated posting for gateway tests.
pub fn full_posting(title: &str, employment_type: EmploymentType) -> NewJobPosting {
    NewJobPosting::builder()
        .title(title)
        .location("Bengaluru")
        .fixed_salary("8L")
        .job_role_type(Some("Property Manager".to_string()))
        .employment_type(employment_type)
        .educational_qualification(Some("B.Com".to_string()))
        .experience_required("3 years")
        .required_skills(Some(vec!["Negotiation".to_string(), "CRM Software".to_string()]))
        .language_requirements(vec!["English".to_string(), "Kannada".to_string()])
        .property_types(Some(vec!["Commercial".to_string()]))
        .description("<p>Manage a portfolio of commercial properties</p>")
        .build()
}
