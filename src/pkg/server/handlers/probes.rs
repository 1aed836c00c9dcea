use axum::extract::State;

use crate::{pkg::server::state::AppState, prelude::Result};

pub async fn livez() -> Result<()> {
    tracing::debug!("service is live");
    Ok(())
}

pub async fn healthz(State(state): State<AppState>) -> Result<()> {
    if state.board.is_empty() {
        tracing::warn!("catalog has no postings");
    } else {
        tracing::debug!("service is healthy, {} postings loaded", state.board.len());
    }
    Ok(())
}
