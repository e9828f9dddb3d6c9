//! Cafe listing

use crate::error::PageError;
use crate::views;
use crate::AppState;
use axum::{extract::State, response::Html};

pub async fn list(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let cafes = state.store.list_all().await?;
    tracing::debug!("Listing {} cafes", cafes.len());
    Ok(Html(views::cafes::cafes_page(&cafes)))
}
