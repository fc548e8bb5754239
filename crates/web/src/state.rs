use std::sync::Arc;

use plinth_cms::CmsApi;
use plinth_core::media::MediaResolver;

use crate::config::ServerConfig;
use crate::views::Views;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Content API client.
    pub cms: Arc<CmsApi>,
    /// Resolves CMS upload URLs against the content host.
    pub media: Arc<MediaResolver>,
    /// Compiled page templates.
    pub views: Arc<Views>,
}

impl AppState {
    /// Assemble state around an existing CMS client. Media URLs resolve
    /// against the client's base URL.
    pub fn new(config: ServerConfig, cms: CmsApi, views: Views) -> Self {
        let media = MediaResolver::new(cms.api_url());
        Self {
            config: Arc::new(config),
            cms: Arc::new(cms),
            media: Arc::new(media),
            views: Arc::new(views),
        }
    }
}
