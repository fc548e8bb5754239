//! Server-side page composition.
//!
//! Each submodule turns a fetched [`Project`] plus the page's query string
//! into a serializable view model; [`Views`] renders the models through the
//! handlebars templates under `templates/`. Values are HTML-escaped by the
//! registry.

pub mod areas;
pub mod gallery;
pub mod home;
pub mod plans;
pub mod sections;

use axum::response::Html;
use handlebars::{
    Context, Handlebars, Helper, HelperResult, Output, RenderContext, RenderError, TemplateError,
};
use plinth_core::model::Project;
use serde::Serialize;

const PARTIALS: &[(&str, &str)] = &[
    ("base", include_str!("../../templates/partials/base.hbs")),
    ("section_nav", include_str!("../../templates/partials/section_nav.hbs")),
    ("video", include_str!("../../templates/partials/video.hbs")),
    ("key_script", include_str!("../../templates/partials/key_script.hbs")),
    ("photo_modal", include_str!("../../templates/partials/photo_modal.hbs")),
];

const PAGES: &[(&str, &str)] = &[
    ("index", include_str!("../../templates/index.hbs")),
    ("project", include_str!("../../templates/project.hbs")),
    ("inspiration", include_str!("../../templates/inspiration.hbs")),
    ("colors", include_str!("../../templates/colors.hbs")),
    ("materials", include_str!("../../templates/materials.hbs")),
    ("areas", include_str!("../../templates/areas.hbs")),
    ("room", include_str!("../../templates/room.hbs")),
    ("plans", include_str!("../../templates/plans.hbs")),
];

/// Compiled template registry.
pub struct Views {
    registry: Handlebars<'static>,
}

impl Views {
    /// Compile every page and partial. Fails on the first template with a
    /// syntax error.
    pub fn new() -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(escape_html);
        registry.register_helper("uppercase", Box::new(uppercase_helper));

        for (name, source) in PARTIALS {
            registry.register_partial(name, *source)?;
        }
        for (name, source) in PAGES {
            registry.register_template_string(name, *source)?;
        }
        Ok(Self { registry })
    }

    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<Html<String>, RenderError> {
        self.registry.render(name, data).map(Html)
    }
}

/// Escape text for HTML bodies and double-quoted attributes.
///
/// Unlike the registry default this leaves `=` alone, so query strings in
/// `href`s stay readable in the page source.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn uppercase_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let param = h.param(0).and_then(|v| v.value().as_str()).unwrap_or("");
    out.write(&param.to_uppercase())?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Shared view pieces
// ---------------------------------------------------------------------------

/// Document wrapper every page template receives.
#[derive(Debug, Serialize)]
pub struct Page<T> {
    /// `<title>` content.
    pub title: String,
    /// Link back to the project home; absent on the home page itself.
    pub home_href: Option<String>,
    #[serde(flatten)]
    pub body: T,
}

impl<T> Page<T> {
    /// A page outside any project.
    pub fn standalone(title: impl Into<String>, body: T) -> Self {
        Self {
            title: title.into(),
            home_href: None,
            body,
        }
    }

    /// A project's home page.
    pub fn project_home(project: &Project, body: T) -> Self {
        Self {
            title: project.page_title(),
            home_href: None,
            body,
        }
    }

    /// A project sub-page, linking back to the project home.
    pub fn project_section(project: &Project, body: T) -> Self {
        Self {
            title: project.page_title(),
            home_href: Some(project_href(&project.slug)),
            body,
        }
    }
}

/// `/projects/{slug}`
pub fn project_href(slug: &str) -> String {
    format!("/projects/{}", urlencoding::encode(slug))
}

/// `/projects/{slug}/{section}`
pub fn section_href(slug: &str, section: &str) -> String {
    format!("{}/{section}", project_href(slug))
}

/// Parse an index-valued query parameter, ignoring anything malformed.
pub fn parse_index(value: Option<&str>) -> Option<usize> {
    value.and_then(|v| v.trim().parse().ok())
}
