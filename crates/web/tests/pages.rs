//! End-to-end page rendering against a stub CMS.

mod common;

use axum::http::StatusCode;
use common::{app_with_stub_cms, body_text, get, BROKEN_SLUG};

/// GET `uri` and return the status with the body text.
async fn fetch_page(uri: &str) -> (StatusCode, String) {
    let app = app_with_stub_cms().await;
    let response = get(app, uri).await;
    let status = response.status();
    (status, body_text(response).await)
}

// ---------------------------------------------------------------------------
// Project index and home
// ---------------------------------------------------------------------------

#[tokio::test]
async fn index_lists_projects() {
    let (status, html) = fetch_page("/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<title>Projects</title>"));
    assert!(html.contains("href=\"/projects/casa-lago\""));
    assert!(html.contains("Studio Norte"));
}

#[tokio::test]
async fn project_home_renders_hero_and_title() {
    let (status, html) = fetch_page("/projects/casa-lago").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<title>Casa Lago | Studio Norte</title>"));
    assert!(html.contains("src=\"http://127.0.0.1:"));
    assert!(html.contains("/uploads/hero.mp4\""));
    assert!(html.contains("href=\"/projects/casa-lago?menu\""));
    // Menu is closed: no navigation cards yet.
    assert!(!html.contains("nav-card"));
}

#[tokio::test]
async fn project_home_menu_shows_cards() {
    let (status, html) = fetch_page("/projects/casa-lago?menu").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("href=\"/projects/casa-lago/inspiration\""));
    assert!(html.contains("href=\"/projects/casa-lago/areas\""));
    assert!(html.contains("href=\"/projects/casa-lago/plans\""));
    assert!(html.contains("+ INFO"));
    // Areas card falls back to the first room's first photo.
    assert!(html.contains("/uploads/hall-0.jpg"));
}

#[tokio::test]
async fn unknown_project_is_404() {
    let (status, html) = fetch_page("/projects/nowhere").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Page not found"));
}

#[tokio::test]
async fn cms_failure_is_503() {
    let (status, html) = fetch_page(&format!("/projects/{BROKEN_SLUG}/areas")).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(html.contains("Content unavailable"));
}

// ---------------------------------------------------------------------------
// Areas
// ---------------------------------------------------------------------------

#[tokio::test]
async fn areas_grid_routes_rooms_by_photo_count() {
    let (status, html) = fetch_page("/projects/casa-lago/areas").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("href=\"/projects/casa-lago/areas/main-hall\""));
    assert!(html.contains("href=\"/projects/casa-lago/areas?room=lobby\""));
    assert!(html.contains("href=\"/projects/casa-lago\""), "sub-pages link home");
    assert!(!html.contains("class=\"modal\""));
}

#[tokio::test]
async fn single_photo_room_opens_modal_on_grid() {
    let (status, html) = fetch_page("/projects/casa-lago/areas?room=lobby").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("class=\"modal\""));
    assert!(html.contains("/uploads/lobby-0.jpg"));
    assert!(html.contains("data-key=\"Escape\" href=\"/projects/casa-lago/areas\""));
    assert!(html.contains("data-key=\"ArrowRight\""));
}

#[tokio::test]
async fn room_page_renders_photos_and_modal() {
    let (status, html) = fetch_page("/projects/casa-lago/areas/main-hall?photo=2").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("MAIN HALL"));
    assert!(html.contains("href=\"/projects/casa-lago/areas/main-hall?photo=0\""));
    assert!(html.contains("3 / 3"));
    // Past the last photo the next room has one photo: deep link on the grid.
    assert!(html.contains("data-key=\"ArrowRight\" href=\"/projects/casa-lago/areas?room=lobby\""));
}

#[tokio::test]
async fn unknown_room_is_404() {
    let (status, _) = fetch_page("/projects/casa-lago/areas/attic").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Sections and plans
// ---------------------------------------------------------------------------

#[tokio::test]
async fn inspiration_renders_text_and_scatter() {
    let (status, html) = fetch_page("/projects/casa-lago/inspiration?active=1").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<p>Lake light.</p>"));
    assert!(html.contains("calc(12% + 0rem)"));
    assert!(html.contains("aria-current=\"page\">INSPIRATION"));
    assert!(html.contains("No video available"));
    assert!(html.contains("class=\"modal\""));
}

#[tokio::test]
async fn colors_render_swatches_with_tone() {
    let (status, html) = fetch_page("/projects/casa-lago/colors").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("swatch tone-dark"));
    assert!(html.contains("swatch tone-light"));
    assert!(html.contains("Earth tones"));
    assert!(html.contains("href=\"/projects/casa-lago/colors?active=1\""));
}

#[tokio::test]
async fn materials_render_strip() {
    let (status, html) = fetch_page("/projects/casa-lago/materials").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("/uploads/mat-0.jpg"));
    assert!(html.contains("aria-current=\"page\">MATERIALS"));
}

#[tokio::test]
async fn plans_start_on_cover_and_wrap() {
    let (status, html) = fetch_page("/projects/casa-lago/plans").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("/uploads/plans-cover.jpg"));
    assert!(html.contains("GROUND FLOOR"));
    assert!(html.contains("PLAN 2"));
    assert!(html.contains("class=\"plan-next\" href=\"/projects/casa-lago/plans?plan=0\""));

    let (_, last) = fetch_page("/projects/casa-lago/plans?plan=1").await;
    assert!(last.contains("class=\"plan-next\" href=\"/projects/casa-lago/plans?plan=cover\""));
    assert!(!last.contains("data-key=\"Escape\""));
}
