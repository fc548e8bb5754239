//! Route definitions for the `/projects` pages.

use axum::routing::get;
use axum::Router;

use crate::handlers::{areas, plans, projects, sections};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET /{slug}                        -> projects::show
/// GET /{slug}/inspiration            -> sections::inspiration
/// GET /{slug}/colors                 -> sections::colors
/// GET /{slug}/materials              -> sections::materials
/// GET /{slug}/areas                  -> areas::list
/// GET /{slug}/areas/{area_slug}      -> areas::show
/// GET /{slug}/plans                  -> plans::show
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{slug}", get(projects::show))
        .route("/{slug}/inspiration", get(sections::inspiration))
        .route("/{slug}/colors", get(sections::colors))
        .route("/{slug}/materials", get(sections::materials))
        .route("/{slug}/areas", get(areas::list))
        .route("/{slug}/areas/{area_slug}", get(areas::show))
        .route("/{slug}/plans", get(plans::show))
}
