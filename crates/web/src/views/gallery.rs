//! Gallery state in URLs.
//!
//! Pages keep the slideshow position in the query string, so every control
//! (prev, next, close, thumbnails, keyboard) is a plain link whose target is
//! the [`Step`] the controller takes for that input.

use plinth_core::gallery::{Destination, Gallery, GalleryLayout, GalleryState, Step};
use plinth_core::keyboard::{Key, KeyBindings};
use serde::Serialize;

use super::section_href;

/// Maps a page's gallery states and destinations to URLs.
pub trait GalleryLinks {
    fn state_href(&self, state: GalleryState) -> String;

    fn destination_href(&self, destination: Destination) -> String;

    fn step_href(&self, step: Step) -> String {
        match step {
            Step::Show(state) => self.state_href(state),
            Step::Leave(destination) => self.destination_href(destination),
        }
    }
}

/// A keyboard shortcut rendered as a hidden link the page script follows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyLink {
    pub key: &'static str,
    pub href: String,
}

/// Navigation links for an open slideshow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryControls {
    pub prev_href: String,
    pub next_href: String,
    /// Absent when the view cannot be closed.
    pub close_href: Option<String>,
    pub keys: Vec<KeyLink>,
}

const KEYS: [Key; 3] = [Key::ArrowLeft, Key::ArrowRight, Key::Escape];

/// Links for every input available in `state`.
pub fn controls(gallery: &Gallery, state: GalleryState, links: &impl GalleryLinks) -> GalleryControls {
    let bindings = KeyBindings::for_policy(gallery.policy());
    let keys = KEYS
        .iter()
        .filter_map(|key| {
            let command = bindings.command_for(key, state)?;
            let href = links.step_href(gallery.apply(state, command));
            Some(KeyLink {
                key: static_key_name(key),
                href,
            })
        })
        .collect();

    GalleryControls {
        prev_href: links.step_href(gallery.retreat(state)),
        next_href: links.step_href(gallery.advance(state)),
        close_href: gallery
            .policy()
            .bind_escape
            .then(|| links.step_href(gallery.close())),
        keys,
    }
}

fn static_key_name(key: &Key) -> &'static str {
    match key {
        Key::ArrowLeft => "ArrowLeft",
        Key::ArrowRight => "ArrowRight",
        Key::Escape => "Escape",
        Key::Other(_) => "",
    }
}

// ---------------------------------------------------------------------------
// Areas
// ---------------------------------------------------------------------------

/// URLs for the areas grid and the room pages.
///
/// * areas grid: `/areas`, `/areas?room={room}`, `/areas?room={room}&photo={n}`
/// * room page: `/areas/{room}`, `/areas/{room}?photo={n}`
pub struct AreaLinks<'a> {
    project_slug: &'a str,
    layout: &'a GalleryLayout,
    pinned: Option<usize>,
}

impl<'a> AreaLinks<'a> {
    pub fn grid(project_slug: &'a str, layout: &'a GalleryLayout) -> Self {
        Self {
            project_slug,
            layout,
            pinned: None,
        }
    }

    pub fn room_page(project_slug: &'a str, layout: &'a GalleryLayout, room: usize) -> Self {
        Self {
            project_slug,
            layout,
            pinned: Some(room),
        }
    }

    fn index_href(&self) -> String {
        section_href(self.project_slug, "areas")
    }

    fn room_slug(&self, group: usize) -> String {
        urlencoding::encode(self.layout.group_slug(group).unwrap_or_default()).into_owned()
    }

    fn room_href(&self, group: usize) -> String {
        format!("{}/{}", self.index_href(), self.room_slug(group))
    }

    fn deep_link_href(&self, group: usize) -> String {
        format!("{}?room={}", self.index_href(), self.room_slug(group))
    }
}

impl GalleryLinks for AreaLinks<'_> {
    fn state_href(&self, state: GalleryState) -> String {
        match (state, self.pinned) {
            (GalleryState::Open { group, item }, Some(pinned)) if group == pinned => {
                format!("{}?photo={item}", self.room_href(group))
            }
            (GalleryState::Open { group, item: 0 }, None) => self.deep_link_href(group),
            (GalleryState::Open { group, item }, None) => {
                format!("{}&photo={item}", self.deep_link_href(group))
            }
            (_, Some(pinned)) => self.room_href(pinned),
            (_, None) => self.index_href(),
        }
    }

    fn destination_href(&self, destination: Destination) -> String {
        match destination {
            Destination::GroupPage(group) => self.room_href(group),
            Destination::GroupDeepLink(group) => self.deep_link_href(group),
            Destination::Index => self.index_href(),
        }
    }
}

/// Gallery position on the areas grid from `?room=` and `?photo=`.
///
/// An unknown room leaves the gallery closed; an out-of-range photo falls
/// back to the room's first photo.
pub fn areas_state(gallery: &Gallery, room: Option<&str>, photo: Option<usize>) -> GalleryState {
    let Some(room) = room else {
        return GalleryState::Closed;
    };
    let linked = gallery.deep_link(room);
    match (linked, photo) {
        (GalleryState::Open { group, .. }, Some(item)) => {
            let candidate = GalleryState::Open { group, item };
            if gallery.restore(candidate) == candidate {
                candidate
            } else {
                linked
            }
        }
        _ => linked,
    }
}

// ---------------------------------------------------------------------------
// Plans
// ---------------------------------------------------------------------------

/// URLs for the plans viewer: `/plans?plan=cover` or `/plans?plan={n}`.
pub struct PlanLinks<'a> {
    project_slug: &'a str,
}

impl<'a> PlanLinks<'a> {
    pub fn new(project_slug: &'a str) -> Self {
        Self { project_slug }
    }
}

impl GalleryLinks for PlanLinks<'_> {
    fn state_href(&self, state: GalleryState) -> String {
        let base = section_href(self.project_slug, "plans");
        match state {
            GalleryState::Closed => base,
            GalleryState::Cover => format!("{base}?plan=cover"),
            GalleryState::Open { item, .. } => format!("{base}?plan={item}"),
        }
    }

    fn destination_href(&self, _destination: Destination) -> String {
        section_href(self.project_slug, "plans")
    }
}

/// Decode `?plan=`; anything invalid restores the viewer's initial state.
pub fn plans_state(gallery: &Gallery, plan: Option<&str>) -> GalleryState {
    let requested = match plan.map(str::trim) {
        Some("cover") => GalleryState::Cover,
        Some(value) => match value.parse() {
            Ok(item) => GalleryState::Open { group: 0, item },
            Err(_) => gallery.initial_state(),
        },
        None => gallery.initial_state(),
    };
    gallery.restore(requested)
}

#[cfg(test)]
mod tests {
    use super::*;
    use plinth_core::gallery::{GalleryGroup, GalleryPolicy};

    fn rooms(counts: &[(&str, usize)]) -> GalleryLayout {
        let groups = counts
            .iter()
            .map(|&(slug, items)| GalleryGroup {
                slug: slug.to_string(),
                items,
            })
            .collect();
        GalleryLayout::new(groups, false)
    }

    fn open(group: usize, item: usize) -> GalleryState {
        GalleryState::Open { group, item }
    }

    #[test]
    fn grid_links_route_rooms_by_photo_count() {
        let layout = rooms(&[("main-hall", 3), ("lobby", 1)]);
        let gallery = Gallery::new(layout.clone(), GalleryPolicy::area_gallery());
        let links = AreaLinks::grid("casa", &layout);

        assert_eq!(
            links.step_href(gallery.select(GalleryState::Closed, 0)),
            "/projects/casa/areas/main-hall"
        );
        assert_eq!(
            links.step_href(gallery.select(GalleryState::Closed, 1)),
            "/projects/casa/areas?room=lobby"
        );
    }

    #[test]
    fn grid_controls_follow_area_policy() {
        let layout = rooms(&[("lobby", 1), ("patio", 1)]);
        let gallery = Gallery::new(layout.clone(), GalleryPolicy::area_gallery());
        let links = AreaLinks::grid("casa", &layout);

        let controls = controls(&gallery, open(0, 0), &links);
        assert_eq!(controls.prev_href, "/projects/casa/areas");
        assert_eq!(controls.next_href, "/projects/casa/areas?room=patio");
        assert_eq!(controls.close_href.as_deref(), Some("/projects/casa/areas"));
        assert_eq!(controls.keys.len(), 3);
        assert_eq!(controls.keys[2].key, "Escape");
    }

    #[test]
    fn room_page_links_stay_on_room_and_leave_at_end() {
        let layout = rooms(&[("main-hall", 2), ("lobby", 1)]);
        let gallery = Gallery::new(layout.clone(), GalleryPolicy::room_page(0));
        let links = AreaLinks::room_page("casa", &layout, 0);

        let controls = controls(&gallery, open(0, 0), &links);
        assert_eq!(controls.next_href, "/projects/casa/areas/main-hall?photo=1");
        assert_eq!(controls.prev_href, "/projects/casa/areas/main-hall");

        let at_end = super::controls(&gallery, open(0, 1), &links);
        assert_eq!(at_end.next_href, "/projects/casa/areas?room=lobby");
    }

    #[test]
    fn areas_state_decodes_query() {
        let layout = rooms(&[("main-hall", 3), ("lobby", 1)]);
        let gallery = Gallery::new(layout, GalleryPolicy::area_gallery());

        assert_eq!(areas_state(&gallery, None, Some(1)), GalleryState::Closed);
        assert_eq!(areas_state(&gallery, Some("lobby"), None), open(1, 0));
        assert_eq!(areas_state(&gallery, Some("main-hall"), Some(2)), open(0, 2));
        assert_eq!(areas_state(&gallery, Some("main-hall"), Some(9)), open(0, 0));
        assert_eq!(areas_state(&gallery, Some("nowhere"), None), GalleryState::Closed);
    }

    #[test]
    fn plan_links_and_state() {
        let layout = GalleryLayout::new(
            vec![GalleryGroup {
                slug: "plans".into(),
                items: 2,
            }],
            true,
        );
        let gallery = Gallery::new(layout, GalleryPolicy::plans());
        let links = PlanLinks::new("casa");

        assert_eq!(plans_state(&gallery, None), GalleryState::Cover);
        assert_eq!(plans_state(&gallery, Some("1")), open(0, 1));
        assert_eq!(plans_state(&gallery, Some("7")), GalleryState::Cover);
        assert_eq!(plans_state(&gallery, Some("junk")), GalleryState::Cover);

        let controls = controls(&gallery, open(0, 1), &links);
        assert_eq!(controls.next_href, "/projects/casa/plans?plan=cover");
        assert_eq!(controls.prev_href, "/projects/casa/plans?plan=0");
        assert!(controls.close_href.is_none());
        assert_eq!(controls.keys.len(), 2);
    }
}
