use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use std::fmt;
use typed_builder::TypedBuilder;

use crate::common::JobPostingId;

/// Contract type of a posting. Stored and serialized as `full-time` / `part-time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown employment type '{0}'")]
pub struct UnknownEmploymentType(pub String);

impl EmploymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "full-time",
            EmploymentType::PartTime => "part-time",
        }
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for EmploymentType {
    type Error = UnknownEmploymentType;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::str::FromStr for EmploymentType {
    type Err = UnknownEmploymentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full-time" => Ok(EmploymentType::FullTime),
            "part-time" => Ok(EmploymentType::PartTime),
            other => Err(UnknownEmploymentType(other.to_string())),
        }
    }
}

/// A posting that passed validation and has not been stored yet.
///
/// Carries no id or timestamps; those are assigned by the storage gateway.
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct NewJobPosting {
    #[builder(setter(into))]
    pub title: String,
    #[builder(setter(into))]
    pub location: String,
    #[builder(setter(into))]
    pub fixed_salary: String,
    #[builder(default)]
    pub job_role_type: Option<String>,
    pub employment_type: EmploymentType,
    #[builder(default)]
    pub educational_qualification: Option<String>,
    #[builder(setter(into))]
    pub experience_required: String,
    #[builder(default)]
    pub required_skills: Option<Vec<String>>,
    pub language_requirements: Vec<String>,
    #[builder(default)]
    pub property_types: Option<Vec<String>>,
    #[builder(setter(into))]
    pub description: String,
}

/// A stored job posting.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct JobPosting {
    pub id: JobPostingId,
    pub title: String,
    pub location: String,
    pub fixed_salary: String,
    pub job_role_type: Option<String>,
    #[sqlx(try_from = "String")]
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

impl JobPosting {
    /// Builds the stored form of `new` with the given id and creation time.
    pub fn from_new(id: JobPostingId, new: NewJobPosting, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: new.title,
            location: new.location,
            fixed_salary: new.fixed_salary,
            job_role_type: new.job_role_type,
            employment_type: new.employment_type,
            educational_qualification: new.educational_qualification,
            experience_required: new.experience_required,
            required_skills: new.required_skills,
            language_requirements: new.language_requirements,
            property_types: new.property_types,
            description: new.description,
            created_at: now,
            updated_at: now,
        }
    }
}

// =============================================================================
// Job Posting Queries
// =============================================================================

impl JobPosting {
    pub async fn create(new: &NewJobPosting, pool: &PgPool) -> sqlx::Result<Self> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO job_postings (
                id, title, location, fixed_salary, job_role_type, employment_type,
                educational_qualification, experience_required, required_skills,
                language_requirements, property_types, description
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(JobPostingId::new())
        .bind(&new.title)
        .bind(&new.location)
        .bind(&new.fixed_salary)
        .bind(&new.job_role_type)
        .bind(new.employment_type.as_str())
        .bind(&new.educational_qualification)
        .bind(&new.experience_required)
        .bind(&new.required_skills)
        .bind(&new.language_requirements)
        .bind(&new.property_types)
        .bind(&new.description)
        .fetch_one(pool)
        .await
    }

    /// All postings, newest first. The id breaks ties between equal timestamps.
    pub async fn find_all(pool: &PgPool) -> sqlx::Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM job_postings ORDER BY created_at DESC, id DESC")
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(id: JobPostingId, pool: &PgPool) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM job_postings WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_employment_type(
        employment_type: EmploymentType,
        pool: &PgPool,
    ) -> sqlx::Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM job_postings
            WHERE employment_type = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(employment_type.as_str())
        .fetch_all(pool)
        .await
    }

    /// Free-text search over title and description.
    ///
    /// The `to_tsvector` expression must stay identical to the one in the
    /// `job_postings_text_idx` index or Postgres will not use the index.
    pub async fn search(query: &str, pool: &PgPool) -> sqlx::Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM job_postings
            WHERE to_tsvector('simple', title || ' ' || description)
                  @@ plainto_tsquery('simple', $1)
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(query)
        .fetch_all(pool)
        .await
    }

    /// Returns whether a row was removed.
    pub async fn delete(id: JobPostingId, pool: &PgPool) -> sqlx::Result<bool> {
        let result = sqlx::query("DELETE FROM job_postings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
