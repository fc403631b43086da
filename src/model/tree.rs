// Navigation tree - flattened arena with parent links stored as ids
use super::node::NavigationNode;
use serde::{Deserialize, Serialize};

/// Position of an entry in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(usize);

impl EntryId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Initial folding baked in by the book generator.
///
/// With folding disabled every section starts expanded and no toggle
/// controls are rendered. With folding enabled, entries at a depth below
/// `level` start expanded and the rest start collapsed.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Fold {
    pub enable: bool,
    pub level: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub id: EntryId,
    pub parent: Option<EntryId>,
    pub depth: usize,
    pub href: Option<String>,
    pub label: String,
    pub number: Option<String>,
    pub affix: bool,
    pub children: Vec<EntryId>,
}

impl Entry {
    pub fn is_section(&self) -> bool {
        !self.children.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct NavTree {
    entries: Vec<Entry>,
    roots: Vec<EntryId>,
    fold: Fold,
}

impl NavTree {
    pub fn from_nodes(nodes: &[NavigationNode]) -> Self {
        let mut tree = Self::default();
        for node in nodes {
            let id = tree.push_subtree(node, None, 0);
            tree.roots.push(id);
        }
        tree
    }

    pub fn with_fold(mut self, fold: Fold) -> Self {
        self.fold = fold;
        self
    }

    fn push_subtree(&mut self, node: &NavigationNode, parent: Option<EntryId>, depth: usize) -> EntryId {
        let id = EntryId(self.entries.len());
        self.entries.push(Entry {
            id,
            parent,
            depth,
            href: node.href.clone(),
            label: node.label.clone(),
            number: node.number.clone(),
            affix: node.affix,
            children: Vec::new(),
        });
        for child in &node.children {
            let child_id = self.push_subtree(child, Some(id), depth + 1);
            self.entries[id.0].children.push(child_id);
        }
        id
    }

    pub fn fold(&self) -> Fold {
        self.fold
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.get(id.0)
    }

    pub fn roots(&self) -> &[EntryId] {
        &self.roots
    }

    /// All entries in document order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Entries carrying an href, in document order.
    pub fn links(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.href.is_some())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Walks from the parent of `id` up to its root.
    pub fn ancestors(&self, id: EntryId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.get(id).and_then(|e| e.parent),
        }
    }

    /// Copy of the tree with every href passed through `rewrite`.
    pub fn map_hrefs(&self, rewrite: impl Fn(&str) -> String) -> Self {
        let entries = self
            .entries
            .iter()
            .map(|e| Entry {
                href: e.href.as_deref().map(&rewrite),
                ..e.clone()
            })
            .collect();
        Self {
            entries,
            roots: self.roots.clone(),
            fold: self.fold,
        }
    }
}

pub struct Ancestors<'a> {
    tree: &'a NavTree,
    next: Option<EntryId>,
}

impl Iterator for Ancestors<'_> {
    type Item = EntryId;

    fn next(&mut self) -> Option<EntryId> {
        let id = self.next?;
        self.next = self.tree.get(id).and_then(|e| e.parent);
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NavTree {
        NavTree::from_nodes(&[
            NavigationNode::link("Intro", "intro.html"),
            NavigationNode::link("Guide", "guide/index.html").with_children(vec![
                NavigationNode::link("Setup", "guide/setup.html"),
                NavigationNode::heading("Advanced").with_children(vec![
                    NavigationNode::link("Tuning", "guide/tuning.html"),
                ]),
            ]),
            NavigationNode::link("FAQ", "faq.html"),
        ])
    }

    #[test]
    fn test_ids_follow_document_order() {
        let tree = sample();
        let labels: Vec<_> = tree.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["Intro", "Guide", "Setup", "Advanced", "Tuning", "FAQ"]);
        assert_eq!(tree.roots(), &[EntryId(0), EntryId(1), EntryId(5)]);
    }

    #[test]
    fn test_parent_and_depth() {
        let tree = sample();
        let tuning = tree.get(EntryId(4)).unwrap();
        assert_eq!(tuning.parent, Some(EntryId(3)));
        assert_eq!(tuning.depth, 2);
        assert_eq!(tree.get(EntryId(1)).unwrap().children, vec![EntryId(2), EntryId(3)]);
        assert!(tree.get(EntryId(3)).unwrap().is_section());
    }

    #[test]
    fn test_ancestors_stop_at_root() {
        let tree = sample();
        let chain: Vec<_> = tree.ancestors(EntryId(4)).collect();
        assert_eq!(chain, vec![EntryId(3), EntryId(1)]);
        assert_eq!(tree.ancestors(EntryId(0)).count(), 0);
        assert_eq!(tree.ancestors(EntryId(99)).count(), 0);
    }

    #[test]
    fn test_links_skip_headings() {
        let tree = sample();
        assert_eq!(tree.links().count(), 5);
    }

    #[test]
    fn test_map_hrefs_keeps_structure() {
        let tree = sample().with_fold(Fold { enable: true, level: 1 });
        let mapped = tree.map_hrefs(|h| format!("../{h}"));
        assert_eq!(mapped.get(EntryId(2)).unwrap().href.as_deref(), Some("../guide/setup.html"));
        assert_eq!(mapped.get(EntryId(3)).unwrap().href, None);
        assert_eq!(mapped.fold(), tree.fold());
        assert_eq!(mapped.roots(), tree.roots());
    }
}
