//! Static page handlers

use axum::{extract::State, response::Html};

use crate::{error::ApiError, state::AppState};

/// Landing page with an empty search form
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    Ok(Html(state.templates.render_index(None)?))
}

/// Legal notice
pub async fn legal(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    Ok(Html(state.templates.render_legal()?))
}
