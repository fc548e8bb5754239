/// Content API client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct CmsConfig {
    /// Base URL of the CMS, without the `/api` suffix.
    pub api_url: String,
    /// Bearer token; requests go out unauthenticated when unset.
    pub api_token: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl CmsConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var            | Default                 |
    /// |--------------------|-------------------------|
    /// | `CMS_API_URL`      | `http://localhost:1337` |
    /// | `CMS_API_TOKEN`    | unset                   |
    /// | `CMS_TIMEOUT_SECS` | `30`                    |
    pub fn from_env() -> Self {
        let api_url =
            std::env::var("CMS_API_URL").unwrap_or_else(|_| "http://localhost:1337".into());

        let api_token = std::env::var("CMS_API_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty());

        let timeout_secs: u64 = std::env::var("CMS_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("CMS_TIMEOUT_SECS must be a valid u64");

        Self {
            api_url,
            api_token,
            timeout_secs,
        }
    }
}
