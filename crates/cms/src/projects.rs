//! Project queries against the `/projects` collection.

use plinth_core::model::Project;
use serde_json::{json, Value};

use crate::api::{CmsApi, ContentResult};

const PROJECTS_PATH: &str = "/projects";

/// Relations to populate for a full project page.
fn project_populate() -> Value {
    json!({
        "heroVideo": true,
        "inspiration": { "populate": { "gallery": true, "video": true, "cover": true } },
        "colors": { "populate": { "video": true, "palette": true } },
        "materials": { "populate": { "gallery": true, "video": true } },
        "areas": {
            "populate": {
                "video": true,
                "cover": true,
                "list": { "populate": { "video": true, "photos": true } }
            }
        },
        "plans": {
            "populate": {
                "cover": true,
                "list": { "populate": { "picture": true } }
            }
        }
    })
}

/// Query for every project, newest first.
pub fn all_projects_query() -> Value {
    json!({
        "populate": "*",
        "sort": ["createdAt:desc"],
    })
}

/// Query for the single project with `slug`, every section populated.
pub fn project_query(slug: &str) -> Value {
    json!({
        "filters": { "slug": { "$eq": slug } },
        "populate": project_populate(),
    })
}

impl CmsApi {
    /// Every project, newest first. An empty collection is `Found(vec![])`.
    pub async fn all_projects(&self) -> ContentResult<Vec<Project>> {
        self.fetch_list(PROJECTS_PATH, &all_projects_query()).await
    }

    /// The project with `slug`, or `NotFound` when no project matches.
    ///
    /// Slugs are unique in the CMS; should the filter still match several
    /// entries, the first one wins.
    pub async fn project(&self, slug: &str) -> ContentResult<Project> {
        match self.fetch_list(PROJECTS_PATH, &project_query(slug)).await {
            ContentResult::Found(projects) => match projects.into_iter().next() {
                Some(project) => ContentResult::Found(project),
                None => ContentResult::NotFound,
            },
            ContentResult::NotFound => ContentResult::NotFound,
            ContentResult::FetchError(err) => ContentResult::FetchError(err),
        }
    }

    /// The project backing the areas pages. Issues the same query as
    /// [`CmsApi::project`].
    pub async fn project_areas(&self, slug: &str) -> ContentResult<Project> {
        self.project(slug).await
    }
}
