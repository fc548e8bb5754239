//! Areas grid and single-room pages.
//!
//! Both pages run the same gallery over the project's rooms, with the area
//! policy on the grid and the room-page policy on a room's own page.

use plinth_core::gallery::{Gallery, GalleryLayout, GalleryPolicy, GalleryState};
use plinth_core::media::MediaResolver;
use plinth_core::model::{Project, Room};
use plinth_core::slug::find_by_slug;
use serde::{Deserialize, Serialize};

use super::gallery::{areas_state, controls, AreaLinks, GalleryControls, GalleryLinks};
use super::{parse_index, section_href, Page};

#[derive(Debug, Default, Deserialize)]
pub struct AreasQuery {
    pub room: Option<String>,
    pub photo: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RoomQuery {
    pub photo: Option<String>,
}

/// The slideshow overlay.
#[derive(Debug, Serialize)]
pub struct PhotoModal {
    pub room_name: String,
    pub image: Option<String>,
    pub alt: String,
    /// `"2 / 5"`
    pub position: String,
    pub controls: GalleryControls,
}

fn photo_modal(
    rooms: &[Room],
    gallery: &Gallery,
    state: GalleryState,
    links: &impl GalleryLinks,
    media: &MediaResolver,
) -> Option<PhotoModal> {
    let GalleryState::Open { group, item } = state else {
        return None;
    };
    let room = rooms.get(group)?;
    let photo = room.photos.get(item)?;
    Some(PhotoModal {
        room_name: room.name.clone(),
        image: media.resolve(Some(&photo.url)),
        alt: photo.alt_or(&room.name).to_string(),
        position: format!("{} / {}", item + 1, room.photos.len()),
        controls: controls(gallery, state, links),
    })
}

// ---------------------------------------------------------------------------
// Areas grid
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct RoomCard {
    pub name: String,
    pub href: String,
    pub image: String,
    pub alt: String,
    pub photo_count: usize,
}

#[derive(Debug, Serialize)]
pub struct AreasView {
    pub video: Option<String>,
    pub rooms: Vec<RoomCard>,
    pub modal: Option<PhotoModal>,
}

pub fn areas_page(project: &Project, media: &MediaResolver, query: &AreasQuery) -> Page<AreasView> {
    let rooms = project.rooms();
    let layout = GalleryLayout::from_rooms(rooms);
    let gallery = Gallery::new(layout.clone(), GalleryPolicy::area_gallery());
    let links = AreaLinks::grid(&project.slug, &layout);

    let state = areas_state(
        &gallery,
        query.room.as_deref(),
        parse_index(query.photo.as_deref()),
    );

    let cards = rooms
        .iter()
        .enumerate()
        .filter_map(|(group, room)| {
            let cover = room.cover_photo()?;
            Some(RoomCard {
                name: room.name.clone(),
                href: links.step_href(gallery.select(GalleryState::Closed, group)),
                image: media.resolve(Some(&cover.url))?,
                alt: cover.alt_or(&room.name).to_string(),
                photo_count: room.photos.len(),
            })
        })
        .collect();

    Page::project_section(
        project,
        AreasView {
            video: media.resolve_media(project.areas.as_ref().and_then(|a| a.video.as_ref())),
            rooms: cards,
            modal: photo_modal(rooms, &gallery, state, &links, media),
        },
    )
}

// ---------------------------------------------------------------------------
// Room page
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct PhotoThumb {
    pub href: String,
    pub image: String,
    pub alt: String,
}

#[derive(Debug, Serialize)]
pub struct RoomView {
    pub room_name: String,
    pub video: Option<String>,
    pub back_href: String,
    pub photos: Vec<PhotoThumb>,
    pub modal: Option<PhotoModal>,
}

/// The page of the room whose name normalizes to `area_slug`, or `None`
/// when no room matches.
pub fn room_page(
    project: &Project,
    media: &MediaResolver,
    area_slug: &str,
    query: &RoomQuery,
) -> Option<Page<RoomView>> {
    let rooms = project.rooms();
    let (group, room) = find_by_slug(rooms, |r| r.name.as_str(), area_slug)?;

    let layout = GalleryLayout::from_rooms(rooms);
    let gallery = Gallery::new(layout.clone(), GalleryPolicy::room_page(group));
    let links = AreaLinks::room_page(&project.slug, &layout, group);

    let state = match parse_index(query.photo.as_deref()) {
        Some(item) => gallery.restore(GalleryState::Open { group, item }),
        None => gallery.initial_state(),
    };

    let photos = room
        .photos
        .iter()
        .enumerate()
        .filter_map(|(item, photo)| {
            Some(PhotoThumb {
                href: links.step_href(gallery.select_item(GalleryState::Closed, group, item)),
                image: media.resolve(Some(&photo.url))?,
                alt: photo.alt_or(&room.name).to_string(),
            })
        })
        .collect();

    Some(Page::project_section(
        project,
        RoomView {
            room_name: room.name.clone(),
            video: media.resolve_media(room.video.as_ref()),
            back_href: section_href(&project.slug, "areas"),
            photos,
            modal: photo_modal(rooms, &gallery, state, &links, media),
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn photos(n: usize) -> serde_json::Value {
        (0..n)
            .map(|i| json!({ "id": i, "url": format!("/p{i}.jpg") }))
            .collect()
    }

    fn project() -> Project {
        serde_json::from_value(json!({
            "id": 1,
            "slug": "casa",
            "title": "Casa",
            "authorName": "Norte",
            "areas": {
                "video": { "id": 9, "url": "/areas.mp4" },
                "list": [
                    { "id": 1, "name": "Main Hall", "photos": photos(3) },
                    { "id": 2, "name": "Lobby", "photos": photos(1) },
                    { "id": 3, "name": "Storage", "photos": [] }
                ]
            }
        }))
        .unwrap()
    }

    fn resolver() -> MediaResolver {
        MediaResolver::new("http://cms")
    }

    #[test]
    fn grid_links_by_photo_count_and_skips_coverless_rooms() {
        let page = areas_page(&project(), &resolver(), &AreasQuery::default());
        let view = page.body;

        assert_eq!(view.rooms.len(), 2);
        assert_eq!(view.rooms[0].href, "/projects/casa/areas/main-hall");
        assert_eq!(view.rooms[1].href, "/projects/casa/areas?room=lobby");
        assert_eq!(view.video.as_deref(), Some("http://cms/areas.mp4"));
        assert!(view.modal.is_none());
    }

    #[test]
    fn room_query_opens_modal_in_place() {
        let query = AreasQuery {
            room: Some("lobby".into()),
            photo: None,
        };
        let modal = areas_page(&project(), &resolver(), &query).body.modal.unwrap();

        assert_eq!(modal.room_name, "Lobby");
        assert_eq!(modal.image.as_deref(), Some("http://cms/p0.jpg"));
        assert_eq!(modal.position, "1 / 1");
        assert_eq!(modal.controls.close_href.as_deref(), Some("/projects/casa/areas"));
        // Storage has no photos, so the gallery closes after the lobby.
        assert_eq!(modal.controls.next_href, "/projects/casa/areas");
    }

    #[test]
    fn room_page_resolves_slug_and_photo() {
        let query = RoomQuery {
            photo: Some("2".into()),
        };
        let page = room_page(&project(), &resolver(), "main-hall", &query).unwrap();
        let view = page.body;

        assert_eq!(view.room_name, "Main Hall");
        assert_eq!(view.back_href, "/projects/casa/areas");
        assert_eq!(view.photos.len(), 3);
        assert_eq!(view.photos[1].href, "/projects/casa/areas/main-hall?photo=1");

        let modal = view.modal.unwrap();
        assert_eq!(modal.position, "3 / 3");
        assert_eq!(modal.controls.prev_href, "/projects/casa/areas/main-hall?photo=1");
        // Next room has a single photo: deep link on the grid.
        assert_eq!(modal.controls.next_href, "/projects/casa/areas?room=lobby");
    }

    #[test]
    fn room_page_ignores_out_of_range_photo() {
        let query = RoomQuery {
            photo: Some("10".into()),
        };
        let page = room_page(&project(), &resolver(), "main-hall", &query).unwrap();
        assert!(page.body.modal.is_none());
    }

    #[test]
    fn unknown_room_is_none() {
        assert!(room_page(&project(), &resolver(), "attic", &RoomQuery::default()).is_none());
    }
}
