use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use standard_error::{StandardError, Status};

use crate::{
    pkg::{
        internal::{
            adaptors::jobs::{
                mutators::{JobDraft, JobMutator, JobSubmission},
                selectors::{CategorySummary, JobSelector},
                spec::{JobPosting, QueryParameters},
            },
            errors::BoardError,
        },
        server::state::AppState,
    },
    prelude::Result,
};

/// Query string shared by the JSON search and the find-work page.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub rate_type: Option<String>,
}

impl SearchQuery {
    pub fn params(&self) -> QueryParameters {
        QueryParameters::from_raw(
            self.q.as_deref(),
            self.category.as_deref(),
            self.rate_type.as_deref(),
        )
    }
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<JobPosting>>> {
    let params = query.params();
    let jobs = JobSelector::new(&state.board)
        .matching(&params)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(jobs))
}

pub async fn retrieve(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<JobPosting>> {
    match JobSelector::new(&state.board).get_by_id(id) {
        Some(job) => Ok(Json(job.clone())),
        None => Err(StandardError::new("ERR-JOB-404").code(StatusCode::NOT_FOUND)),
    }
}

pub async fn create(
    State(_state): State<AppState>,
    Json(draft): Json<JobDraft>,
) -> Result<(StatusCode, Json<JobSubmission>)> {
    // TODO: hand the validated draft to the jobs backend once it exists
    let submission = JobMutator::submit(draft).map_err(BoardError::into_standard_error)?;
    Ok((StatusCode::ACCEPTED, Json(submission)))
}

pub async fn categories(State(state): State<AppState>) -> Result<Json<Vec<CategorySummary>>> {
    Ok(Json(JobSelector::new(&state.board).category_summaries()))
}
