pub mod health;
pub mod projects;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the page route tree.
///
/// ```text
/// /                                        project index
/// /projects/{slug}                         project home (?menu)
/// /projects/{slug}/inspiration             inspiration (?active=n)
/// /projects/{slug}/colors                  colors (?active=n)
/// /projects/{slug}/materials               materials (?active=n)
/// /projects/{slug}/areas                   areas grid (?room=slug&photo=n)
/// /projects/{slug}/areas/{area_slug}       room page (?photo=n)
/// /projects/{slug}/plans                   plans viewer (?plan=cover|n)
/// ```
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::projects::index))
        .nest("/projects", projects::router())
}
