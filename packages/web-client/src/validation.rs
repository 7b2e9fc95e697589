//! Form checks run before submitting a posting.
//!
//! Mirrors the server's rules so the form can flag fields without a round
//! trip. The server still validates; a clean result here is not a promise.

use crate::types::{CreateJobInput, FieldError};

pub const MAX_TITLE_CHARS: usize = 200;

/// Returns every field the server would reject. Empty means submittable.
pub fn validate_input(input: &CreateJobInput) -> Vec<FieldError> {
    let mut errors = Vec::new();

    required("title", &input.title, &mut errors);
    if input.title.trim().chars().count() > MAX_TITLE_CHARS {
        errors.push(field_error(
            "title",
            format!("must be at most {} characters", MAX_TITLE_CHARS),
        ));
    }
    required("location", &input.location, &mut errors);
    required("fixedSalary", &input.fixed_salary, &mut errors);
    required("experienceRequired", &input.experience_required, &mut errors);

    if input.language_requirements.is_empty() {
        errors.push(field_error(
            "languageRequirements",
            "must contain at least one language",
        ));
    } else if input
        .language_requirements
        .iter()
        .any(|l| l.trim().is_empty())
    {
        errors.push(field_error(
            "languageRequirements",
            "must not contain empty entries",
        ));
    }

    required("description", &input.description, &mut errors);
    errors
}

fn required(field: &str, value: &str, errors: &mut Vec<FieldError>) {
    if value.trim().is_empty() {
        errors.push(field_error(field, "must not be empty"));
    }
}

fn field_error(field: &str, message: impl Into<String>) -> FieldError {
    FieldError {
        field: field.to_string(),
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EmploymentType;

    fn input() -> CreateJobInput {
        CreateJobInput {
            title: "Agent".into(),
            location: "Pune".into(),
            fixed_salary: "5L".into(),
            job_role_type: None,
            employment_type: EmploymentType::FullTime,
            educational_qualification: None,
            experience_required: "2 years".into(),
            required_skills: None,
            language_requirements: vec!["English".into()],
            property_types: None,
            description: "<p>Great role</p>".into(),
        }
    }

    fn fields(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn valid_input_has_no_errors() {
        assert!(validate_input(&input()).is_empty());
    }

    #[test]
    fn whitespace_only_fields_are_flagged() {
        let mut form = input();
        form.title = "   ".into();
        form.description = "\n".into();
        assert_eq!(fields(&validate_input(&form)), vec!["title", "description"]);
    }

    #[test]
    fn empty_languages_are_flagged() {
        let mut form = input();
        form.language_requirements.clear();
        assert_eq!(
            fields(&validate_input(&form)),
            vec!["languageRequirements"]
        );

        form.language_requirements = vec!["English".into(), " ".into()];
        let errors = validate_input(&form);
        assert_eq!(errors[0].message, "must not contain empty entries");
    }

    #[test]
    fn long_title_is_flagged_by_characters() {
        let mut form = input();
        form.title = "é".repeat(MAX_TITLE_CHARS);
        assert!(validate_input(&form).is_empty());

        form.title.push('é');
        assert_eq!(fields(&validate_input(&form)), vec!["title"]);
    }
}
