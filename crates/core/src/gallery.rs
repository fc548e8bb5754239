//! Gallery navigation state machine.
//!
//! One controller drives every slideshow on the site: the areas grid (rooms
//! of photos), a single room's page, and the plans viewer. The views differ
//! only in their [`GalleryPolicy`]; the transition rules live here.
//!
//! [`Gallery`] holds the pure transition functions. Each returns a [`Step`]:
//! either a new state to show on the current page, or a [`Destination`] to
//! leave for. [`GalleryController`] owns a state and applies steps, handing
//! page changes to an injected [`Navigator`].

use crate::model::{PlanItem, Room};
use crate::slug::slugify;

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// One navigable group (a room, or the whole plan list).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryGroup {
    /// Normalized slug used for routes and deep links.
    pub slug: String,
    /// Number of items (photos, plans) in the group.
    pub items: usize,
}

/// The shape of the collection being browsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryLayout {
    groups: Vec<GalleryGroup>,
    has_cover: bool,
}

impl GalleryLayout {
    pub fn new(groups: Vec<GalleryGroup>, has_cover: bool) -> Self {
        Self { groups, has_cover }
    }

    /// One group per room, in API order.
    pub fn from_rooms(rooms: &[Room]) -> Self {
        let groups = rooms
            .iter()
            .map(|room| GalleryGroup {
                slug: slugify(&room.name),
                items: room.photos.len(),
            })
            .collect();
        Self::new(groups, false)
    }

    /// A single group holding every plan, optionally preceded by a cover.
    pub fn from_plans(plans: &[PlanItem], has_cover: bool) -> Self {
        let group = GalleryGroup {
            slug: "plans".to_string(),
            items: plans.len(),
        };
        Self::new(vec![group], has_cover)
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Item count of `group`; zero when the group does not exist.
    pub fn item_count(&self, group: usize) -> usize {
        self.groups.get(group).map_or(0, |g| g.items)
    }

    pub fn group_slug(&self, group: usize) -> Option<&str> {
        self.groups.get(group).map(|g| g.slug.as_str())
    }

    pub fn has_cover(&self) -> bool {
        self.has_cover
    }

    /// First group at or after `from` that has at least one item.
    fn first_non_empty_from(&self, from: usize) -> Option<usize> {
        (from..self.groups.len()).find(|&g| self.item_count(g) > 0)
    }
}

// ---------------------------------------------------------------------------
// State and steps
// ---------------------------------------------------------------------------

/// What the slideshow currently shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GalleryState {
    /// Nothing selected; the modal is hidden.
    #[default]
    Closed,
    /// The section cover, positioned before the first item.
    Cover,
    Open { group: usize, item: usize },
}

impl GalleryState {
    /// Keyboard bindings are active in every state but `Closed`.
    pub fn is_open(&self) -> bool {
        !matches!(self, GalleryState::Closed)
    }
}

/// A page outside the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// The dedicated page of a group (a room with several photos).
    GroupPage(usize),
    /// The index page with the group pre-selected through the query string.
    GroupDeepLink(usize),
    /// The index page itself, nothing selected.
    Index,
}

/// Result of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Show(GalleryState),
    Leave(Destination),
}

/// User intent, independent of the input device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryCommand {
    Advance,
    Retreat,
    Close,
}

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

/// What advancing past the last item does when no further group exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtEnd {
    Close,
    /// Back to the cover, or the first item when there is no cover.
    Wrap,
    /// Leave for [`Destination::Index`].
    Leave,
}

/// What retreating from the first position does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtStart {
    Close,
    Hold,
}

/// Per-view navigation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryPolicy {
    /// Groups with more than one item are browsed on their own page.
    pub route_multi_item_groups: bool,
    /// The group this page is dedicated to, if any. Every other group is
    /// on another page.
    pub pinned_group: Option<usize>,
    pub at_end: AtEnd,
    pub at_start: AtStart,
    /// Whether Escape closes the slideshow.
    pub bind_escape: bool,
    /// Start on the first position instead of `Closed`.
    pub start_open: bool,
}

impl GalleryPolicy {
    /// The areas grid: single-photo rooms open in place, others route out.
    pub fn area_gallery() -> Self {
        Self {
            route_multi_item_groups: true,
            pinned_group: None,
            at_end: AtEnd::Close,
            at_start: AtStart::Close,
            bind_escape: true,
            start_open: false,
        }
    }

    /// A room's own page. Running off its last photo continues with the
    /// next room elsewhere, or returns to the areas grid.
    pub fn room_page(room: usize) -> Self {
        Self {
            route_multi_item_groups: true,
            pinned_group: Some(room),
            at_end: AtEnd::Leave,
            at_start: AtStart::Close,
            bind_escape: true,
            start_open: false,
        }
    }

    /// The plans viewer: always showing something, wraps forward only.
    pub fn plans() -> Self {
        Self {
            route_multi_item_groups: false,
            pinned_group: None,
            at_end: AtEnd::Wrap,
            at_start: AtStart::Hold,
            bind_escape: false,
            start_open: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Transitions
// ---------------------------------------------------------------------------

/// A layout paired with the policy of the view browsing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    layout: GalleryLayout,
    policy: GalleryPolicy,
}

impl Gallery {
    pub fn new(layout: GalleryLayout, policy: GalleryPolicy) -> Self {
        Self { layout, policy }
    }

    pub fn layout(&self) -> &GalleryLayout {
        &self.layout
    }

    pub fn policy(&self) -> &GalleryPolicy {
        &self.policy
    }

    /// State a freshly mounted view starts in.
    pub fn initial_state(&self) -> GalleryState {
        if self.policy.start_open {
            self.first_position()
        } else {
            GalleryState::Closed
        }
    }

    /// Cover if there is one, else the first item, else `Closed`.
    fn first_position(&self) -> GalleryState {
        if self.layout.has_cover {
            return GalleryState::Cover;
        }
        self.first_item()
    }

    fn first_item(&self) -> GalleryState {
        match self.layout.first_non_empty_from(0) {
            Some(group) => GalleryState::Open { group, item: 0 },
            None => GalleryState::Closed,
        }
    }

    /// Step into `group` from another group.
    fn enter_group(&self, group: usize) -> Step {
        if self.policy.route_multi_item_groups && self.layout.item_count(group) > 1 {
            return Step::Leave(Destination::GroupPage(group));
        }
        if self.policy.pinned_group.is_some() {
            return Step::Leave(Destination::GroupDeepLink(group));
        }
        Step::Show(GalleryState::Open { group, item: 0 })
    }

    /// A group was picked from the grid.
    ///
    /// Empty or unknown groups never open. On a pinned page, picking the
    /// pinned group opens its first item in place.
    pub fn select(&self, current: GalleryState, group: usize) -> Step {
        if self.layout.item_count(group) == 0 {
            return Step::Show(current);
        }
        if self.policy.pinned_group == Some(group) {
            return Step::Show(GalleryState::Open { group, item: 0 });
        }
        self.enter_group(group)
    }

    /// A specific item of a group shown on this page was picked.
    pub fn select_item(&self, current: GalleryState, group: usize, item: usize) -> Step {
        let on_page = self.policy.pinned_group.map_or(true, |p| p == group);
        if on_page && item < self.layout.item_count(group) {
            Step::Show(GalleryState::Open { group, item })
        } else {
            Step::Show(current)
        }
    }

    /// The cover was picked; ignored when the section has none.
    pub fn select_cover(&self, current: GalleryState) -> Step {
        if self.layout.has_cover {
            Step::Show(GalleryState::Cover)
        } else {
            Step::Show(current)
        }
    }

    pub fn advance(&self, current: GalleryState) -> Step {
        match current {
            GalleryState::Closed => Step::Show(GalleryState::Closed),
            GalleryState::Cover => match self.first_item() {
                GalleryState::Closed => Step::Show(GalleryState::Cover),
                first => Step::Show(first),
            },
            GalleryState::Open { group, item } => {
                if item + 1 < self.layout.item_count(group) {
                    return Step::Show(GalleryState::Open {
                        group,
                        item: item + 1,
                    });
                }
                match self.layout.first_non_empty_from(group + 1) {
                    Some(next) => self.enter_group(next),
                    None => match self.policy.at_end {
                        AtEnd::Close => Step::Show(GalleryState::Closed),
                        AtEnd::Wrap => Step::Show(self.first_position()),
                        AtEnd::Leave => Step::Leave(Destination::Index),
                    },
                }
            }
        }
    }

    pub fn retreat(&self, current: GalleryState) -> Step {
        match current {
            GalleryState::Closed => Step::Show(GalleryState::Closed),
            GalleryState::Open { group, item } if item > 0 => Step::Show(GalleryState::Open {
                group,
                item: item - 1,
            }),
            GalleryState::Open { group, .. }
                if self.layout.has_cover && Some(group) == self.layout.first_non_empty_from(0) =>
            {
                Step::Show(GalleryState::Cover)
            }
            GalleryState::Open { .. } | GalleryState::Cover => match self.policy.at_start {
                AtStart::Close => Step::Show(GalleryState::Closed),
                AtStart::Hold => Step::Show(current),
            },
        }
    }

    pub fn close(&self) -> Step {
        Step::Show(GalleryState::Closed)
    }

    pub fn apply(&self, current: GalleryState, command: GalleryCommand) -> Step {
        match command {
            GalleryCommand::Advance => self.advance(current),
            GalleryCommand::Retreat => self.retreat(current),
            GalleryCommand::Close => self.close(),
        }
    }

    /// Resolve a `?room=` style query parameter.
    ///
    /// The first group whose slug matches is opened at its first item. An
    /// unknown slug, or a match with no items, leaves the gallery closed.
    pub fn deep_link(&self, slug: &str) -> GalleryState {
        let matched = (0..self.layout.group_count())
            .find(|&g| self.layout.group_slug(g) == Some(slug));
        match matched {
            Some(group) if self.layout.item_count(group) > 0 => {
                GalleryState::Open { group, item: 0 }
            }
            _ => GalleryState::Closed,
        }
    }

    /// Validate a state decoded from a URL, falling back to the initial state.
    pub fn restore(&self, state: GalleryState) -> GalleryState {
        let valid = match state {
            GalleryState::Closed => !self.policy.start_open,
            GalleryState::Cover => self.layout.has_cover,
            GalleryState::Open { group, item } => {
                item < self.layout.item_count(group)
                    && self.policy.pinned_group.map_or(true, |p| p == group)
            }
        };
        if valid {
            state
        } else {
            self.initial_state()
        }
    }
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

/// A page change requested by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Go to a new page, adding a history entry.
    Push(Destination),
    /// Rewrite the current URL in place without reloading.
    Replace(Destination),
}

/// Performs page changes on behalf of a [`GalleryController`].
pub trait Navigator {
    fn navigate(&mut self, navigation: Navigation);
}

impl<F> Navigator for F
where
    F: FnMut(Navigation),
{
    fn navigate(&mut self, navigation: Navigation) {
        (*self)(navigation)
    }
}

/// Stateful driver around a [`Gallery`].
#[derive(Debug)]
pub struct GalleryController<N> {
    gallery: Gallery,
    state: GalleryState,
    /// The current selection came from the URL query string.
    deep_linked: bool,
    navigator: N,
}

impl<N: Navigator> GalleryController<N> {
    pub fn new(gallery: Gallery, navigator: N) -> Self {
        let state = gallery.initial_state();
        Self {
            gallery,
            state,
            deep_linked: false,
            navigator,
        }
    }

    /// Mount with a deep-link parameter. An unmatched slug leaves the
    /// controller in its initial state.
    pub fn with_deep_link(gallery: Gallery, navigator: N, slug: &str) -> Self {
        let mut controller = Self::new(gallery, navigator);
        let linked = controller.gallery.deep_link(slug);
        if linked.is_open() {
            controller.state = linked;
            controller.deep_linked = true;
        }
        controller
    }

    pub fn state(&self) -> GalleryState {
        self.state
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn select(&mut self, group: usize) -> GalleryState {
        let step = self.gallery.select(self.state, group);
        self.apply_step(step)
    }

    pub fn select_item(&mut self, group: usize, item: usize) -> GalleryState {
        let step = self.gallery.select_item(self.state, group, item);
        self.apply_step(step)
    }

    pub fn select_cover(&mut self) -> GalleryState {
        let step = self.gallery.select_cover(self.state);
        self.apply_step(step)
    }

    pub fn advance(&mut self) -> GalleryState {
        let step = self.gallery.advance(self.state);
        self.apply_step(step)
    }

    pub fn retreat(&mut self) -> GalleryState {
        let step = self.gallery.retreat(self.state);
        self.apply_step(step)
    }

    pub fn close(&mut self) -> GalleryState {
        let step = self.gallery.close();
        self.apply_step(step)
    }

    pub fn apply(&mut self, command: GalleryCommand) -> GalleryState {
        let step = self.gallery.apply(self.state, command);
        self.apply_step(step)
    }

    fn apply_step(&mut self, step: Step) -> GalleryState {
        match step {
            Step::Show(next) => {
                if next == GalleryState::Closed && self.deep_linked {
                    self.navigator
                        .navigate(Navigation::Replace(Destination::Index));
                    self.deep_linked = false;
                }
                self.state = next;
            }
            // The page is being replaced; the destination mounts its own
            // controller starting from its initial state.
            Step::Leave(destination) => {
                self.navigator.navigate(Navigation::Push(destination));
            }
        }
        self.state
    }
}
