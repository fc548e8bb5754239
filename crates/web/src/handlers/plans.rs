//! Handler for the plans viewer.

use axum::extract::{Path, Query, State};
use axum::response::Html;

use crate::error::AppResult;
use crate::handlers::projects::load_project;
use crate::state::AppState;
use crate::views::plans::{plans_page, PlansQuery};

/// GET /projects/{slug}/plans
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<PlansQuery>,
) -> AppResult<Html<String>> {
    let project = load_project(&state, &slug).await?;
    let page = plans_page(&project, &state.media, &query);
    Ok(state.views.render("plans", &page)?)
}
