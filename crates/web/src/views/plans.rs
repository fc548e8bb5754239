//! Plans viewer: a stage showing the cover or one plan, and a strip of
//! thumbnails labelled by description.

use plinth_core::gallery::{Gallery, GalleryLayout, GalleryPolicy, GalleryState};
use plinth_core::media::MediaResolver;
use plinth_core::model::Project;
use serde::{Deserialize, Serialize};

use super::gallery::{controls, plans_state, GalleryControls, GalleryLinks, PlanLinks};
use super::Page;

#[derive(Debug, Default, Deserialize)]
pub struct PlansQuery {
    /// `cover` or a zero-based plan index.
    pub plan: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Stage {
    pub image: Option<String>,
    pub alt: String,
    pub label: String,
}

#[derive(Debug, Serialize)]
pub struct PlanThumb {
    pub label: String,
    pub href: String,
    pub image: Option<String>,
    pub active: bool,
}

#[derive(Debug, Serialize)]
pub struct PlansView {
    pub heading: Option<String>,
    pub stage: Option<Stage>,
    /// Cover entry at the head of the strip, when the section has one.
    pub cover_thumb: Option<PlanThumb>,
    pub strip: Vec<PlanThumb>,
    pub controls: Option<GalleryControls>,
}

pub fn plans_page(project: &Project, media: &MediaResolver, query: &PlansQuery) -> Page<PlansView> {
    let plans = project.plans();
    let cover_url = media.resolve_media(project.plans_cover());

    let layout = GalleryLayout::from_plans(plans, cover_url.is_some());
    let gallery = Gallery::new(layout, GalleryPolicy::plans());
    let links = PlanLinks::new(&project.slug);
    let state = plans_state(&gallery, query.plan.as_deref());

    let stage = match state {
        GalleryState::Cover => Some(Stage {
            image: cover_url.clone(),
            alt: "Cover".to_string(),
            label: "Cover".to_string(),
        }),
        GalleryState::Open { item, .. } => plans.get(item).map(|plan| Stage {
            image: media.resolve_media(plan.picture.as_ref()),
            alt: plan
                .picture
                .as_ref()
                .map_or_else(|| plan.label(item), |p| p.alt_or(&plan.label(item)).to_string()),
            label: plan.label(item),
        }),
        GalleryState::Closed => None,
    };

    let cover_thumb = cover_url.map(|image| PlanThumb {
        label: "Cover".to_string(),
        href: links.step_href(gallery.select_cover(state)),
        image: Some(image),
        active: state == GalleryState::Cover,
    });

    let strip = plans
        .iter()
        .enumerate()
        .map(|(item, plan)| PlanThumb {
            label: plan.label(item),
            href: links.step_href(gallery.select_item(state, 0, item)),
            image: media.resolve_media(plan.picture.as_ref()),
            active: state == GalleryState::Open { group: 0, item },
        })
        .collect();

    let controls = state.is_open().then(|| controls(&gallery, state, &links));

    Page::project_section(
        project,
        PlansView {
            heading: project.plans.as_ref().and_then(|p| p.title.clone()),
            stage,
            cover_thumb,
            strip,
            controls,
        },
    )
}
