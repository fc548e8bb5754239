//! Media URL resolution.
//!
//! The CMS returns upload URLs relative to its own host unless a remote
//! provider (S3, Cloudinary) already made them absolute.

use crate::model::Media;

/// Turns possibly-relative content asset URLs into absolute ones.
#[derive(Debug, Clone)]
pub struct MediaResolver {
    base: String,
}

impl MediaResolver {
    /// * `base` - Content host, e.g. `http://localhost:1337`. A trailing `/`
    ///   is dropped so joined paths never contain `//`.
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Resolve a URL against the content host.
    ///
    /// - absent or empty -> `None`
    /// - already absolute (`http...`) or protocol-relative (`//...`) -> unchanged
    /// - anything else -> prefixed with the base
    pub fn resolve(&self, url: Option<&str>) -> Option<String> {
        let url = url.filter(|u| !u.is_empty())?;
        if url.starts_with("http") || url.starts_with("//") {
            return Some(url.to_string());
        }
        if url.starts_with('/') {
            Some(format!("{}{url}", self.base))
        } else {
            Some(format!("{}/{url}", self.base))
        }
    }

    /// Resolve the main URL of an optional media entity.
    pub fn resolve_media(&self, media: Option<&Media>) -> Option<String> {
        self.resolve(media.map(|m| m.url.as_str()))
    }
}
