// Sidebar widget - mounts the table of contents for one page load
//
// Mounting renders the tree for the current page depth, marks the entry for
// the current page, reveals it, restores the scroll offset left by the
// previous page and registers the click listeners.

pub mod html;

use crate::location::{rewrite_href, ActiveLocation};
use crate::model::{Entry, EntryId, NavTree};
use crate::state::{persist_scroll, take_scroll, ExpansionState, SessionStore};

/// The scrollable element hosting the sidebar.
pub trait ScrollSurface {
    fn scroll_offset(&self) -> f32;
    fn set_scroll_offset(&mut self, offset: f32);
    /// Scroll so `entry` sits in the vertical middle of the viewport.
    fn center_on(&mut self, entry: EntryId);
}

/// What a click landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    Link(EntryId),
    Toggle(EntryId),
    /// Anywhere else inside the sidebar (labels without links, padding).
    Other,
}

/// Handle to a registered listener, used to dispose it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerHandle(usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Listener {
    PersistScroll,
    Toggle(EntryId),
}

/// Where the first scroll position came from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InitialScroll {
    Restored(f32),
    Centered(EntryId),
    Top,
}

pub struct Sidebar {
    tree: NavTree,
    location: ActiveLocation,
    expansion: ExpansionState,
    active: Option<EntryId>,
    initial_scroll: InitialScroll,
    listeners: Vec<Option<Listener>>,
}

/// Attach the sidebar to `container` for the page at `location`.
pub fn mount<C, S>(
    container: &mut C,
    tree: &NavTree,
    location: &str,
    path_to_root: &str,
    store: &mut S,
) -> Sidebar
where
    C: ScrollSurface + ?Sized,
    S: SessionStore + ?Sized,
{
    let tree = tree.map_hrefs(|href| rewrite_href(href, path_to_root));
    let location = ActiveLocation::from_document(location);

    let active = find_active(&tree, &location, path_to_root);
    let mut expansion = ExpansionState::initial(&tree);
    if let Some(id) = active {
        expansion.reveal(&tree, id);
    }
    log::debug!(
        "Mounted sidebar for {} (active: {:?})",
        location.as_str(),
        active.and_then(|id| tree.get(id)).map(|e| e.label.as_str())
    );

    let initial_scroll = match (take_scroll(store), active) {
        (Some(offset), _) => {
            container.set_scroll_offset(offset);
            InitialScroll::Restored(offset)
        }
        (None, Some(id)) => {
            container.center_on(id);
            InitialScroll::Centered(id)
        }
        (None, None) => InitialScroll::Top,
    };

    let mut listeners = vec![Some(Listener::PersistScroll)];
    listeners.extend(
        tree.entries()
            .iter()
            .filter(|e| has_toggle(&tree, e))
            .map(|e| Some(Listener::Toggle(e.id))),
    );

    Sidebar {
        tree,
        location,
        expansion,
        active,
        initial_scroll,
        listeners,
    }
}

/// First link resolving to the current page. An empty path to root means
/// the page is rendered from the site root, where the index also aliases
/// the first link.
fn find_active(tree: &NavTree, location: &ActiveLocation, path_to_root: &str) -> Option<EntryId> {
    let from_root = path_to_root.is_empty();
    tree.links()
        .enumerate()
        .find(|(i, entry)| {
            let href = entry.href.as_deref().unwrap_or_default();
            location.matches(href)
                || (from_root && location.matches_from_root(href))
                || (*i == 0 && from_root && location.is_index())
        })
        .map(|(_, entry)| entry.id)
}

fn has_toggle(tree: &NavTree, entry: &Entry) -> bool {
    tree.fold().enable && entry.is_section()
}

impl Sidebar {
    /// The rendered tree, hrefs already prefixed with the path to root.
    pub fn tree(&self) -> &NavTree {
        &self.tree
    }

    pub fn location(&self) -> &ActiveLocation {
        &self.location
    }

    pub fn active(&self) -> Option<EntryId> {
        self.active
    }

    pub fn is_active(&self, id: EntryId) -> bool {
        self.active == Some(id)
    }

    pub fn is_expanded(&self, id: EntryId) -> bool {
        self.expansion.is_expanded(id)
    }

    pub fn initial_scroll(&self) -> InitialScroll {
        self.initial_scroll
    }

    pub fn has_toggle(&self, id: EntryId) -> bool {
        self.tree.get(id).is_some_and(|e| has_toggle(&self.tree, e))
    }

    /// Live listener handles in registration order.
    pub fn listeners(&self) -> Vec<ListenerHandle> {
        self.listeners
            .iter()
            .enumerate()
            .filter(|(_, l)| l.is_some())
            .map(|(i, _)| ListenerHandle(i))
            .collect()
    }

    /// Remove one listener. Returns false if it was already gone.
    pub fn dispose(&mut self, handle: ListenerHandle) -> bool {
        self.listeners
            .get_mut(handle.0)
            .and_then(Option::take)
            .is_some()
    }

    /// Dispose every listener; the rendered state stays readable.
    pub fn unmount(&mut self) {
        self.listeners.iter_mut().for_each(|l| *l = None);
    }

    /// Run the listeners for a click. Returns the href to navigate to when
    /// a link was clicked.
    pub fn click<C, S>(&mut self, target: ClickTarget, container: &C, store: &mut S) -> Option<String>
    where
        C: ScrollSurface + ?Sized,
        S: SessionStore + ?Sized,
    {
        for listener in self.listeners.iter().flatten() {
            match (*listener, target) {
                (Listener::PersistScroll, ClickTarget::Link(_)) => {
                    persist_scroll(store, container.scroll_offset());
                }
                (Listener::Toggle(id), ClickTarget::Toggle(clicked)) if id == clicked => {
                    let expanded = self.expansion.toggle(id);
                    log::trace!("Section {:?} expanded: {}", id, expanded);
                }
                _ => {}
            }
        }

        match target {
            ClickTarget::Link(id) => self.tree.get(id).and_then(|e| e.href.clone()),
            _ => None,
        }
    }
}
