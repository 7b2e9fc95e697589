//! Job posting endpoints.
//!
//! - `GET /jobs`: all postings, newest first
//! - `POST /create/job`: validate and store a posting
//! - `DELETE /jobs/:id`: remove a posting; always `{success: true}`

use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Path};
use axum::Json;

use crate::domains::jobs::actions;
use crate::domains::jobs::{CreateJobInput, DeleteJobResult, JobPostingData};
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;

pub async fn list_jobs_handler(
    Extension(state): Extension<AxumAppState>,
) -> Result<Json<Vec<JobPostingData>>, ApiError> {
    let jobs = actions::list_jobs(state.kernel.job_store.as_ref()).await?;
    Ok(Json(jobs.into_iter().map(JobPostingData::from).collect()))
}

pub async fn create_job_handler(
    Extension(state): Extension<AxumAppState>,
    payload: Result<Json<CreateJobInput>, JsonRejection>,
) -> Result<Json<JobPostingData>, ApiError> {
    let Json(input) = payload?;
    let job = actions::create_job(input, state.kernel.job_store.as_ref()).await?;
    Ok(Json(job.into()))
}

pub async fn delete_job_handler(
    Extension(state): Extension<AxumAppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteJobResult>, ApiError> {
    let result = actions::delete_job(&id, state.kernel.job_store.as_ref()).await?;
    Ok(Json(result))
}
