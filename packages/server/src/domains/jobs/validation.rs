//! Job posting validation.
//!
//! Pure and I/O free: turns a raw [`CreateJobInput`] into a [`NewJobPosting`]
//! or reports every offending field at once. Strings are trimmed and blank
//! list items dropped; nothing else is coerced.

use serde::Serialize;

use super::data::CreateJobInput;
use super::models::{EmploymentType, NewJobPosting};

pub const MAX_TITLE_CHARS: usize = 200;

/// One rejected field and the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Input rejected before reaching storage. Always the caller's fault.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid job posting: {}", describe(.fields))]
pub struct ValidationError {
    pub fields: Vec<FieldError>,
}

impl ValidationError {
    pub fn has_field(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f.field == field)
    }
}

fn describe(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|err| format!("{} {}", err.field, err.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validate a submitted posting.
pub fn validate(input: CreateJobInput) -> Result<NewJobPosting, ValidationError> {
    let mut errors = Vec::new();

    let title = required_text("title", input.title, &mut errors);
    if let Some(ref t) = title {
        if t.chars().count() > MAX_TITLE_CHARS {
            errors.push(FieldError::new(
                "title",
                format!("must be at most {} characters", MAX_TITLE_CHARS),
            ));
        }
    }
    let location = required_text("location", input.location, &mut errors);
    let fixed_salary = required_text("fixedSalary", input.fixed_salary, &mut errors);
    let employment_type = employment_type(input.employment_type, &mut errors);
    let experience_required =
        required_text("experienceRequired", input.experience_required, &mut errors);
    let language_requirements = language_requirements(input.language_requirements, &mut errors);
    let description = required_text("description", input.description, &mut errors);

    match (
        title,
        location,
        fixed_salary,
        employment_type,
        experience_required,
        language_requirements,
        description,
    ) {
        (
            Some(title),
            Some(location),
            Some(fixed_salary),
            Some(employment_type),
            Some(experience_required),
            Some(language_requirements),
            Some(description),
        ) if errors.is_empty() => Ok(NewJobPosting {
            title,
            location,
            fixed_salary,
            job_role_type: optional_text(input.job_role_type),
            employment_type,
            educational_qualification: optional_text(input.educational_qualification),
            experience_required,
            required_skills: optional_list(input.required_skills),
            language_requirements,
            property_types: optional_list(input.property_types),
            description,
        }),
        _ => Err(ValidationError { fields: errors }),
    }
}

fn required_text(
    field: &'static str,
    value: Option<String>,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Some(v),
        Some(_) => {
            errors.push(FieldError::new(field, "must not be empty"));
            None
        }
        None => {
            errors.push(FieldError::new(field, "is required"));
            None
        }
    }
}

fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn optional_list(value: Option<Vec<String>>) -> Option<Vec<String>> {
    value
        .map(|items| {
            items
                .into_iter()
                .map(|i| i.trim().to_string())
                .filter(|i| !i.is_empty())
                .collect::<Vec<_>>()
        })
        .filter(|items| !items.is_empty())
}

fn employment_type(value: Option<String>, errors: &mut Vec<FieldError>) -> Option<EmploymentType> {
    let Some(raw) = value else {
        errors.push(FieldError::new("employmentType", "is required"));
        return None;
    };
    match raw.trim().parse::<EmploymentType>() {
        Ok(kind) => Some(kind),
        Err(_) => {
            errors.push(FieldError::new(
                "employmentType",
                "must be one of full-time, part-time",
            ));
            None
        }
    }
}

fn language_requirements(
    value: Option<Vec<String>>,
    errors: &mut Vec<FieldError>,
) -> Option<Vec<String>> {
    let Some(items) = value else {
        errors.push(FieldError::new("languageRequirements", "is required"));
        return None;
    };
    if items.is_empty() {
        errors.push(FieldError::new(
            "languageRequirements",
            "must contain at least one language",
        ));
        return None;
    }
    let items: Vec<String> = items.into_iter().map(|i| i.trim().to_string()).collect();
    if items.iter().any(|i| i.is_empty()) {
        errors.push(FieldError::new(
            "languageRequirements",
            "must not contain empty entries",
        ));
        return None;
    }
    Some(items)
}
