use axum::{Router, routing::get};

use super::handlers;
use super::handlers::probes::{healthz, livez};
use super::handlers::ui::{find_work, home, post_job, post_job_form};
use super::state::AppState;
use crate::prelude::Result;

pub async fn build_routes() -> Result<Router> {
    let state = AppState::new().await?;
    Ok(routes(state))
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/find-work", get(find_work))
        .route("/post-job", get(post_job_form).post(post_job))
        .route("/jobs", get(handlers::jobs::list).post(handlers::jobs::create))
        .route("/jobs/:id", get(handlers::jobs::retrieve))
        .route("/categories", get(handlers::jobs::categories))
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
        .with_state(state)
}
