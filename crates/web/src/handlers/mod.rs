pub mod areas;
pub mod plans;
pub mod projects;
pub mod sections;

use plinth_core::error::CoreError;

use crate::error::{AppError, AppResult};

/// Fallback for unmatched routes: the HTML not-found page.
pub async fn not_found(uri: axum::http::Uri) -> AppResult<()> {
    Err(AppError::Core(CoreError::not_found("Page", uri.path())))
}
