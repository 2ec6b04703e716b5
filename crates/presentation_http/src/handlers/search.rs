//! Search form handler

use axum::{
    extract::{Form, State, rejection::FormRejection},
    response::Html,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{error::ApiError, state::AppState};

/// Search form submission
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchForm {
    /// The user's question; a missing field is an empty query
    #[serde(default)]
    pub query: String,
}

/// Run the pipeline for the submitted query and render the result page
///
/// Always answers 200: failures inside the pipeline show up as an empty
/// source list and the no-results message, and an unreadable form counts as
/// an empty query.
#[instrument(skip(state, form))]
pub async fn search(
    State(state): State<AppState>,
    form: Result<Form<SearchForm>, FormRejection>,
) -> Result<Html<String>, ApiError> {
    let form = form.map_or_else(
        |rejection| {
            debug!(error = %rejection, "Unreadable search form");
            SearchForm::default()
        },
        |Form(form)| form,
    );

    let result = state.pipeline.run(&form.query).await;
    Ok(Html(state.templates.render_index(Some(&result))?))
}
