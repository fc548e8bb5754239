//! Content model as returned by the CMS REST API.
//!
//! Every entity is read-only: it is created by a fetch and dropped once the
//! page that requested it has been rendered. Field names follow the API's
//! camelCase JSON. Collections the API omits or sends as `null` deserialize
//! to empty vectors.

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::{CmsId, Timestamp};

// ---------------------------------------------------------------------------
// Media
// ---------------------------------------------------------------------------

/// One named size variant of an uploaded image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageFormat {
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// Size variants generated by the CMS upload plugin.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MediaFormats {
    #[serde(default)]
    pub thumbnail: Option<ImageFormat>,
    #[serde(default)]
    pub small: Option<ImageFormat>,
    #[serde(default)]
    pub medium: Option<ImageFormat>,
    #[serde(default)]
    pub large: Option<ImageFormat>,
}

/// An uploaded file (image or video).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub id: CmsId,
    #[serde(default)]
    pub document_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub alternative_text: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    /// Relative or absolute URL. Empty when the API omitted it.
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub formats: Option<MediaFormats>,
}

impl Media {
    /// Alt text for an `<img>`: alternative text, then file name, then `fallback`.
    pub fn alt_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        [self.alternative_text.as_deref(), self.name.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
            .unwrap_or(fallback)
    }
}

// ---------------------------------------------------------------------------
// Section items
// ---------------------------------------------------------------------------

/// A room of the areas section: a name, an optional walkthrough video and an
/// ordered list of photos.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Room {
    pub id: CmsId,
    pub name: String,
    #[serde(default)]
    pub video: Option<Media>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub photos: Vec<Media>,
}

impl Room {
    /// The first photo doubles as the room's cover in the areas grid.
    pub fn cover_photo(&self) -> Option<&Media> {
        self.photos.first()
    }
}

/// One floor plan picture with an optional caption.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanItem {
    pub id: CmsId,
    #[serde(default)]
    pub picture: Option<Media>,
    #[serde(default)]
    pub description: Option<String>,
}

impl PlanItem {
    /// Label shown in the plan strip; plans are numbered from 1.
    pub fn label(&self, index: usize) -> String {
        match self.description.as_deref().filter(|d| !d.trim().is_empty()) {
            Some(description) => description.to_string(),
            None => format!("PLAN {}", index + 1),
        }
    }
}

/// A named palette swatch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColorItem {
    #[serde(default)]
    pub id: Option<CmsId>,
    pub name: String,
    pub hex: String,
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InspirationSection {
    #[serde(default)]
    pub id: Option<CmsId>,
    /// Rich text: either a plain string or a list of blocks.
    #[serde(default)]
    pub text: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub gallery: Vec<Media>,
    #[serde(default)]
    pub video: Option<Media>,
    #[serde(default)]
    pub cover: Option<Media>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ColorsSection {
    #[serde(default)]
    pub id: Option<CmsId>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub palette: Vec<ColorItem>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub video: Option<Media>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MaterialsSection {
    #[serde(default)]
    pub id: Option<CmsId>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub gallery: Vec<Media>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub video: Option<Media>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AreasSection {
    #[serde(default)]
    pub id: Option<CmsId>,
    #[serde(default)]
    pub video: Option<Media>,
    #[serde(default)]
    pub cover: Option<Media>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub list: Vec<Room>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlansSection {
    #[serde(default)]
    pub id: Option<CmsId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub cover: Option<Media>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub list: Vec<PlanItem>,
}

// ---------------------------------------------------------------------------
// Project
// ---------------------------------------------------------------------------

/// A studio project, addressed by its unique slug.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: CmsId,
    #[serde(default)]
    pub document_id: Option<String>,
    #[serde(default)]
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub hero_video: Option<Media>,

    #[serde(default)]
    pub inspiration: Option<InspirationSection>,
    #[serde(default)]
    pub colors: Option<ColorsSection>,
    #[serde(default)]
    pub materials: Option<MaterialsSection>,
    #[serde(default)]
    pub areas: Option<AreasSection>,
    #[serde(default)]
    pub plans: Option<PlansSection>,

    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
    #[serde(default)]
    pub published_at: Option<Timestamp>,
}

impl Project {
    /// Document title: `{title} | {author}`.
    pub fn page_title(&self) -> String {
        format!("{} | {}", self.title, self.author_name)
    }

    /// Rooms of the areas section in API order.
    pub fn rooms(&self) -> &[Room] {
        self.areas.as_ref().map(|a| a.list.as_slice()).unwrap_or(&[])
    }

    /// Plan items in API order.
    pub fn plans(&self) -> &[PlanItem] {
        self.plans.as_ref().map(|p| p.list.as_slice()).unwrap_or(&[])
    }

    pub fn plans_cover(&self) -> Option<&Media> {
        self.plans.as_ref().and_then(|p| p.cover.as_ref())
    }

    /// Card image for the inspiration entry: section cover, else first gallery image.
    pub fn inspiration_card(&self) -> Option<&Media> {
        let section = self.inspiration.as_ref()?;
        section.cover.as_ref().or_else(|| section.gallery.first())
    }

    /// Card image for the areas entry: section cover, else the first room's first photo.
    pub fn areas_card(&self) -> Option<&Media> {
        let section = self.areas.as_ref()?;
        section
            .cover
            .as_ref()
            .or_else(|| section.list.first().and_then(Room::cover_photo))
    }

    /// Card image for the plans entry: section cover, else the first plan picture.
    pub fn plans_card(&self) -> Option<&Media> {
        let section = self.plans.as_ref()?;
        section
            .cover
            .as_ref()
            .or_else(|| section.list.first().and_then(|p| p.picture.as_ref()))
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
