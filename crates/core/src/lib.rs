//! Domain layer for the Plinth project gallery.
//!
//! Holds the content model shared by the CMS client and the web front-end,
//! together with the pure logic that drives page composition: slug
//! normalization, media URL resolution, gallery navigation and keyboard
//! control. This crate has zero internal deps.

pub mod error;
pub mod gallery;
pub mod inspiration;
pub mod keyboard;
pub mod media;
pub mod model;
pub mod palette;
pub mod slug;
pub mod types;
