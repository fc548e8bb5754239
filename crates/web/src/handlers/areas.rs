//! Handlers for the areas grid and single-room pages.

use axum::extract::{Path, Query, State};
use axum::response::Html;
use plinth_core::error::CoreError;

use crate::error::{require, AppResult};
use crate::state::AppState;
use crate::views::areas::{areas_page, room_page, AreasQuery, RoomQuery};

/// GET /projects/{slug}/areas
pub async fn list(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<AreasQuery>,
) -> AppResult<Html<String>> {
    let project = require(state.cms.project_areas(&slug).await, "Project", &slug)?;
    let page = areas_page(&project, &state.media, &query);
    Ok(state.views.render("areas", &page)?)
}

/// GET /projects/{slug}/areas/{area_slug}
pub async fn show(
    State(state): State<AppState>,
    Path((slug, area_slug)): Path<(String, String)>,
    Query(query): Query<RoomQuery>,
) -> AppResult<Html<String>> {
    let project = require(state.cms.project_areas(&slug).await, "Project", &slug)?;
    let page = room_page(&project, &state.media, &area_slug, &query)
        .ok_or_else(|| CoreError::not_found("Area", area_slug.as_str()))?;
    Ok(state.views.render("room", &page)?)
}
