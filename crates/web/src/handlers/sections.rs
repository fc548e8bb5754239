//! Handlers for the inspiration, colors and materials pages.

use axum::extract::{Path, Query, State};
use axum::response::Html;

use crate::error::AppResult;
use crate::handlers::projects::load_project;
use crate::state::AppState;
use crate::views::sections::{colors_page, inspiration_page, materials_page, ActiveQuery};

/// GET /projects/{slug}/inspiration
pub async fn inspiration(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<ActiveQuery>,
) -> AppResult<Html<String>> {
    let project = load_project(&state, &slug).await?;
    let page = inspiration_page(&project, &state.media, &query);
    Ok(state.views.render("inspiration", &page)?)
}

/// GET /projects/{slug}/colors
pub async fn colors(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<ActiveQuery>,
) -> AppResult<Html<String>> {
    let project = load_project(&state, &slug).await?;
    let page = colors_page(&project, &state.media, &query);
    Ok(state.views.render("colors", &page)?)
}

/// GET /projects/{slug}/materials
pub async fn materials(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<ActiveQuery>,
) -> AppResult<Html<String>> {
    let project = load_project(&state, &slug).await?;
    let page = materials_page(&project, &state.media, &query);
    Ok(state.views.render("materials", &page)?)
}
