//! Handlers for the project index and project home pages.

use axum::extract::{Path, Query, State};
use axum::response::Html;
use plinth_core::model::Project;

use crate::error::{require, AppResult};
use crate::state::AppState;
use crate::views::home::{index_page, project_page, HomeQuery};

/// Fetch a project by slug, mapping a missing project to 404.
pub(crate) async fn load_project(state: &AppState, slug: &str) -> AppResult<Project> {
    require(state.cms.project(slug).await, "Project", slug)
}

/// GET /
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let projects = require(state.cms.all_projects().await, "Projects", "*")?;
    tracing::debug!(count = projects.len(), "Rendering project index");
    let page = index_page(&projects, &state.media);
    Ok(state.views.render("index", &page)?)
}

/// GET /projects/{slug}
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<HomeQuery>,
) -> AppResult<Html<String>> {
    let project = load_project(&state, &slug).await?;
    let page = project_page(&project, &state.media, &query);
    Ok(state.views.render("project", &page)?)
}
