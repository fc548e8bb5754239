//! Inspiration, colors and materials pages.
//!
//! The three share a layout: section video on one side, section navigation
//! and body on the other. `?active=n` expands one gallery image or swatch;
//! following the active item's link again collapses it.

use plinth_core::inspiration::{plain_text, scatter_position};
use plinth_core::media::MediaResolver;
use plinth_core::model::{Media, Project};
use plinth_core::palette::{contrast_tone, TextTone};
use serde::{Deserialize, Serialize};

use super::{parse_index, section_href, Page};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Inspiration,
    Colors,
    Materials,
}

impl Section {
    const ALL: [Section; 3] = [Section::Inspiration, Section::Colors, Section::Materials];

    pub fn path(self) -> &'static str {
        match self {
            Section::Inspiration => "inspiration",
            Section::Colors => "colors",
            Section::Materials => "materials",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Section::Inspiration => "Inspiration",
            Section::Colors => "Colors",
            Section::Materials => "Materials",
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ActiveQuery {
    pub active: Option<String>,
}

impl ActiveQuery {
    fn index(&self) -> Option<usize> {
        parse_index(self.active.as_deref())
    }
}

#[derive(Debug, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

fn section_nav(slug: &str, current: Section) -> Vec<NavItem> {
    Section::ALL
        .iter()
        .map(|&section| NavItem {
            label: section.label(),
            href: section_href(slug, section.path()),
            active: section == current,
        })
        .collect()
}

/// Link for item `index`: expands it, or collapses it when already active.
fn toggle_href(base: &str, index: usize, active: Option<usize>) -> String {
    if active == Some(index) {
        base.to_string()
    } else {
        format!("{base}?active={index}")
    }
}

/// An image shown enlarged above the section body.
#[derive(Debug, Serialize)]
pub struct Expanded {
    pub image: String,
    pub alt: String,
    pub close_href: String,
}

fn expanded(
    gallery: &[Media],
    active: Option<usize>,
    media: &MediaResolver,
    base: &str,
    fallback_alt: &str,
) -> Option<Expanded> {
    let item = gallery.get(active?)?;
    Some(Expanded {
        image: media.resolve(Some(&item.url))?,
        alt: item.alt_or(fallback_alt).to_string(),
        close_href: base.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Inspiration
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ScatterImage {
    pub image: String,
    pub alt: String,
    pub style: String,
    pub href: String,
    pub active: bool,
}

#[derive(Debug, Serialize)]
pub struct InspirationView {
    pub nav: Vec<NavItem>,
    pub video: Option<String>,
    pub paragraphs: Vec<String>,
    pub images: Vec<ScatterImage>,
    pub expanded: Option<Expanded>,
}

pub fn inspiration_page(
    project: &Project,
    media: &MediaResolver,
    query: &ActiveQuery,
) -> Page<InspirationView> {
    let base = section_href(&project.slug, Section::Inspiration.path());
    let active = query.index();
    let section = project.inspiration.as_ref();
    let gallery = section.map(|s| s.gallery.as_slice()).unwrap_or(&[]);

    let paragraphs = plain_text(section.and_then(|s| s.text.as_ref()))
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();

    let images = gallery
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            Some(ScatterImage {
                image: media.resolve(Some(&item.url))?,
                alt: item.alt_or("Inspiration").to_string(),
                style: scatter_position(index).to_style(),
                href: toggle_href(&base, index, active),
                active: active == Some(index),
            })
        })
        .collect();

    Page::project_section(
        project,
        InspirationView {
            nav: section_nav(&project.slug, Section::Inspiration),
            video: media.resolve_media(section.and_then(|s| s.video.as_ref())),
            paragraphs,
            images,
            expanded: expanded(gallery, active, media, &base, "Inspiration"),
        },
    )
}

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct Swatch {
    pub name: String,
    pub hex: String,
    pub tone: TextTone,
    pub href: String,
    pub active: bool,
}

#[derive(Debug, Serialize)]
pub struct ColorsView {
    pub nav: Vec<NavItem>,
    pub video: Option<String>,
    pub description: Option<String>,
    pub swatches: Vec<Swatch>,
}

pub fn colors_page(project: &Project, media: &MediaResolver, query: &ActiveQuery) -> Page<ColorsView> {
    let base = section_href(&project.slug, Section::Colors.path());
    let active = query.index();
    let section = project.colors.as_ref();

    let swatches = section
        .map(|s| s.palette.as_slice())
        .unwrap_or(&[])
        .iter()
        .enumerate()
        .map(|(index, color)| Swatch {
            name: color.name.clone(),
            hex: color.hex.clone(),
            tone: contrast_tone(&color.hex),
            href: toggle_href(&base, index, active),
            active: active == Some(index),
        })
        .collect();

    Page::project_section(
        project,
        ColorsView {
            nav: section_nav(&project.slug, Section::Colors),
            video: media.resolve_media(section.and_then(|s| s.video.as_ref())),
            description: section.and_then(|s| s.description.clone()),
            swatches,
        },
    )
}

// ---------------------------------------------------------------------------
// Materials
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct MaterialThumb {
    pub image: String,
    pub alt: String,
    pub href: String,
    pub active: bool,
}

#[derive(Debug, Serialize)]
pub struct MaterialsView {
    pub nav: Vec<NavItem>,
    pub video: Option<String>,
    pub description: Option<String>,
    pub items: Vec<MaterialThumb>,
    pub expanded: Option<Expanded>,
}

pub fn materials_page(
    project: &Project,
    media: &MediaResolver,
    query: &ActiveQuery,
) -> Page<MaterialsView> {
    let base = section_href(&project.slug, Section::Materials.path());
    let active = query.index();
    let section = project.materials.as_ref();
    let gallery = section.map(|s| s.gallery.as_slice()).unwrap_or(&[]);

    let items = gallery
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            Some(MaterialThumb {
                image: media.resolve(Some(&item.url))?,
                alt: item.alt_or("Material").to_string(),
                href: toggle_href(&base, index, active),
                active: active == Some(index),
            })
        })
        .collect();

    Page::project_section(
        project,
        MaterialsView {
            nav: section_nav(&project.slug, Section::Materials),
            video: media.resolve_media(section.and_then(|s| s.video.as_ref())),
            description: section.and_then(|s| s.description.clone()),
            items,
            expanded: expanded(gallery, active, media, &base, "Material"),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use plinth_core::inspiration::FALLBACK_TEXT;
    use serde_json::json;

    fn project(value: serde_json::Value) -> Project {
        serde_json::from_value(value).unwrap()
    }

    fn resolver() -> MediaResolver {
        MediaResolver::new("http://cms/")
    }

    fn active(index: usize) -> ActiveQuery {
        ActiveQuery {
            active: Some(index.to_string()),
        }
    }

    #[test]
    fn nav_marks_current_section() {
        let p = project(json!({ "id": 1, "slug": "casa" }));
        let page = colors_page(&p, &resolver(), &ActiveQuery::default());

        let flags: Vec<_> = page.body.nav.iter().map(|n| (n.label, n.active)).collect();
        assert_eq!(
            flags,
            vec![("Inspiration", false), ("Colors", true), ("Materials", false)]
        );
        assert_eq!(page.home_href.as_deref(), Some("/projects/casa"));
    }

    #[test]
    fn inspiration_without_text_uses_fallback() {
        let p = project(json!({ "id": 1, "slug": "casa", "inspiration": {} }));
        let view = inspiration_page(&p, &resolver(), &ActiveQuery::default()).body;
        assert_eq!(view.paragraphs, vec![FALLBACK_TEXT.to_string()]);
        assert!(view.video.is_none());
    }

    #[test]
    fn inspiration_blocks_become_paragraphs_and_scatter() {
        let p = project(json!({
            "id": 1,
            "slug": "casa",
            "inspiration": {
                "text": [
                    { "type": "paragraph", "children": [{ "text": "Warm " }, { "text": "wood." }] },
                    { "type": "paragraph", "children": [{ "text": "Stone." }] }
                ],
                "gallery": [
                    { "id": 1, "url": "/a.jpg" },
                    { "id": 2, "url": "" },
                    { "id": 3, "url": "/c.jpg", "alternativeText": "Clay" }
                ]
            }
        }));
        let view = inspiration_page(&p, &resolver(), &active(2)).body;

        assert_eq!(view.paragraphs, vec!["Warm wood.", "Stone."]);
        // The image without a URL is not rendered.
        assert_eq!(view.images.len(), 2);
        assert_eq!(view.images[1].style, scatter_position(2).to_style());
        assert!(view.images[1].active);
        assert_eq!(view.images[1].href, "/projects/casa/inspiration");
        assert_eq!(view.images[0].href, "/projects/casa/inspiration?active=0");

        let expanded = view.expanded.unwrap();
        assert_eq!(expanded.image, "http://cms/c.jpg");
        assert_eq!(expanded.alt, "Clay");
    }

    #[test]
    fn swatches_carry_contrast_tone() {
        let p = project(json!({
            "id": 1,
            "slug": "casa",
            "colors": {
                "description": "Earthy",
                "palette": [
                    { "name": "Bone", "hex": "#fff" },
                    { "name": "Ink", "hex": "#101820" }
                ]
            }
        }));
        let view = colors_page(&p, &resolver(), &active(1)).body;

        assert_eq!(view.swatches[0].tone, TextTone::Dark);
        assert_eq!(view.swatches[1].tone, TextTone::Light);
        assert!(view.swatches[1].active);
        assert_eq!(view.description.as_deref(), Some("Earthy"));
    }

    #[test]
    fn materials_expand_active_item() {
        let p = project(json!({
            "id": 1,
            "slug": "casa",
            "materials": { "gallery": [{ "id": 1, "url": "/oak.jpg", "name": "oak.jpg" }] }
        }));

        let collapsed = materials_page(&p, &resolver(), &ActiveQuery::default()).body;
        assert!(collapsed.expanded.is_none());
        assert_eq!(collapsed.items[0].href, "/projects/casa/materials?active=0");

        let open = materials_page(&p, &resolver(), &active(0)).body;
        let expanded = open.expanded.unwrap();
        assert_eq!(expanded.image, "http://cms/oak.jpg");
        assert_eq!(expanded.alt, "oak.jpg");
        assert_eq!(expanded.close_href, "/projects/casa/materials");

        let out_of_range = materials_page(&p, &resolver(), &active(5)).body;
        assert!(out_of_range.expanded.is_none());
    }
}
