use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use plinth_cms::{CmsApiError, ContentResult};
use plinth_core::error::CoreError;

use crate::views::escape_html;

/// Application-level error type for page handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce self-contained HTML error pages.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `plinth_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The content API could not be reached or answered with an error.
    #[error("Content unavailable: {0}")]
    ContentUnavailable(#[from] CmsApiError),

    /// A page template failed to render.
    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Turn a content query result into a handler result.
///
/// `NotFound` becomes a 404 for `entity` keyed by `key`; a failed fetch
/// becomes [`AppError::ContentUnavailable`].
pub fn require<T>(result: ContentResult<T>, entity: &'static str, key: &str) -> AppResult<T> {
    match result {
        ContentResult::Found(value) => Ok(value),
        ContentResult::NotFound => Err(CoreError::not_found(entity, key).into()),
        ContentResult::FetchError(err) => Err(err.into()),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, heading, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, key } => {
                    tracing::debug!(entity, key = %key, "Page not found");
                    (
                        StatusCode::NOT_FOUND,
                        "Page not found",
                        "We could not find the page you are looking for. It may have been \
                         removed or the address may be incorrect."
                            .to_string(),
                    )
                }
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "Bad request", msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal()
                }
            },

            // --- Content API errors ---
            AppError::ContentUnavailable(err) => {
                tracing::error!(error = %err, "Content API unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Content unavailable",
                    "The project content could not be loaded right now. Please try again \
                     in a moment."
                        .to_string(),
                )
            }

            // --- Rendering errors ---
            AppError::Render(err) => {
                tracing::error!(error = %err, "Template render error");
                internal()
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        };

        (status, Html(error_page(status, heading, &message))).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Something went wrong",
        "An internal error occurred".to_string(),
    )
}

/// Standalone error page. Rendered without the template registry so it
/// works even when templates are the thing that failed.
fn error_page(status: StatusCode, heading: &str, message: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{code} | {heading}</title>\n</head>\n<body class=\"error-page\">\n\
         <main>\n<h1>{code}</h1>\n<h2>{heading}</h2>\n<p>{message}</p>\n\
         <a href=\"/\">Back to home</a>\n</main>\n</body>\n</html>\n",
        code = status.as_u16(),
        heading = escape_html(heading),
        message = escape_html(message),
    )
}
