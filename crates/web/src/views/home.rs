//! Project index and project home (hero + side menu).

use plinth_core::media::MediaResolver;
use plinth_core::model::{Media, Project};
use serde::{Deserialize, Serialize};

use super::{project_href, section_href, Page};

#[derive(Debug, Serialize)]
pub struct ProjectCard {
    pub title: String,
    pub author: String,
    pub href: String,
    pub image: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct IndexView {
    pub projects: Vec<ProjectCard>,
}

/// Every project, in the order the API returned them (newest first).
pub fn index_page(projects: &[Project], media: &MediaResolver) -> Page<IndexView> {
    let projects = projects
        .iter()
        .map(|project| ProjectCard {
            title: project.title.clone(),
            author: project.author_name.clone(),
            href: project_href(&project.slug),
            image: first_resolved(
                media,
                [project.areas_card(), project.inspiration_card(), project.plans_card()],
            ),
        })
        .collect();
    Page::standalone("Projects", IndexView { projects })
}

// ---------------------------------------------------------------------------
// Project home
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    /// Present (with any value) when the side menu is open.
    pub menu: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NavCard {
    pub label: &'static str,
    pub href: String,
    pub image: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProjectHomeView {
    pub project_title: String,
    pub author: String,
    pub hero_video: Option<String>,
    pub menu_open: bool,
    pub menu_toggle_href: String,
    pub cards: Vec<NavCard>,
}

pub fn project_page(project: &Project, media: &MediaResolver, query: &HomeQuery) -> Page<ProjectHomeView> {
    let slug = &project.slug;
    let menu_open = query.menu.is_some();
    let home = project_href(slug);
    let menu_toggle_href = if menu_open {
        home
    } else {
        format!("{home}?menu")
    };

    let cards = vec![
        NavCard {
            label: "Inspiration",
            href: section_href(slug, "inspiration"),
            image: media.resolve_media(project.inspiration_card()),
        },
        NavCard {
            label: "Areas",
            href: section_href(slug, "areas"),
            image: media.resolve_media(project.areas_card()),
        },
        NavCard {
            label: "+ Info",
            href: section_href(slug, "plans"),
            image: media.resolve_media(project.plans_card()),
        },
    ];

    Page::project_home(
        project,
        ProjectHomeView {
            project_title: project.title.clone(),
            author: project.author_name.clone(),
            hero_video: media.resolve_media(project.hero_video.as_ref()),
            menu_open,
            menu_toggle_href,
            cards,
        },
    )
}

fn first_resolved<const N: usize>(media: &MediaResolver, candidates: [Option<&Media>; N]) -> Option<String> {
    candidates
        .into_iter()
        .find_map(|candidate| media.resolve_media(candidate))
}
