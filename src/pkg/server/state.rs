use std::sync::Arc;

use crate::{
    conf::settings,
    pkg::internal::{catalog::JobBoard, errors::BoardError},
    prelude::Result,
};

#[derive(Debug, Clone)]
pub struct AppState {
    pub board: Arc<JobBoard>,
    pub featured_limit: usize,
}

impl AppState {
    pub async fn new() -> Result<AppState> {
        let board = match &settings.catalog_path {
            Some(path) => JobBoard::from_path(path)
                .await
                .map_err(BoardError::into_standard_error)?,
            None => {
                tracing::info!("no CATALOG_PATH set, serving sample postings");
                JobBoard::samples()
            }
        };
        Ok(AppState::with_board(board, settings.featured_limit))
    }

    pub fn with_board(board: JobBoard, featured_limit: usize) -> AppState {
        AppState {
            board: Arc::new(board),
            featured_limit,
        }
    }
}
