//! Client for the headless CMS content API.
//!
//! Serializes structured filter/populate trees into the API's bracketed
//! query-string format, issues authenticated requests with [`reqwest`], and
//! exposes the project queries the front-end pages need.

pub mod api;
pub mod config;
pub mod projects;
pub mod query;

pub use api::{CmsApi, CmsApiError, ContentResult, DataEnvelope};
pub use config::CmsConfig;
