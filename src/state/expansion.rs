// Expansion state - which sections show their children
use crate::model::{EntryId, NavTree};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: Vec<bool>,
}

impl ExpansionState {
    /// Initial state as baked in by the generator's fold setting.
    pub fn initial(tree: &NavTree) -> Self {
        let fold = tree.fold();
        let expanded = tree
            .entries()
            .iter()
            .map(|e| !fold.enable || e.depth < fold.level)
            .collect();
        Self { expanded }
    }

    pub fn is_expanded(&self, id: EntryId) -> bool {
        self.expanded.get(id.index()).copied().unwrap_or(false)
    }

    pub fn expand(&mut self, id: EntryId) {
        if let Some(slot) = self.expanded.get_mut(id.index()) {
            *slot = true;
        }
    }

    /// Flip one entry; returns the new state.
    pub fn toggle(&mut self, id: EntryId) -> bool {
        match self.expanded.get_mut(id.index()) {
            Some(slot) => {
                *slot = !*slot;
                *slot
            }
            None => false,
        }
    }

    /// Expand `id` and every section above it.
    pub fn reveal(&mut self, tree: &NavTree, id: EntryId) {
        self.expand(id);
        for ancestor in tree.ancestors(id) {
            self.expand(ancestor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Fold, NavigationNode};

    fn folded_tree() -> NavTree {
        NavTree::from_nodes(&[
            NavigationNode::link("A", "a.html").with_children(vec![
                NavigationNode::link("A1", "a/1.html").with_children(vec![
                    NavigationNode::link("A1x", "a/1/x.html"),
                ]),
            ]),
            NavigationNode::link("B", "b.html").with_children(vec![
                NavigationNode::link("B1", "b/1.html"),
            ]),
        ])
        .with_fold(Fold { enable: true, level: 0 })
    }

    fn id_of(tree: &NavTree, label: &str) -> EntryId {
        tree.entries().iter().find(|e| e.label == label).unwrap().id
    }

    #[test]
    fn test_unfolded_tree_starts_expanded() {
        let tree = folded_tree().with_fold(Fold::default());
        let state = ExpansionState::initial(&tree);
        assert!(tree.entries().iter().all(|e| state.is_expanded(e.id)));
    }

    #[test]
    fn test_fold_level_limits_initial_expansion() {
        let tree = folded_tree().with_fold(Fold { enable: true, level: 1 });
        let state = ExpansionState::initial(&tree);
        assert!(state.is_expanded(id_of(&tree, "A")));
        assert!(!state.is_expanded(id_of(&tree, "A1")));
    }

    #[test]
    fn test_reveal_expands_ancestors_only() {
        let tree = folded_tree();
        let mut state = ExpansionState::initial(&tree);
        state.reveal(&tree, id_of(&tree, "A1x"));
        assert!(state.is_expanded(id_of(&tree, "A1x")));
        assert!(state.is_expanded(id_of(&tree, "A1")));
        assert!(state.is_expanded(id_of(&tree, "A")));
        assert!(!state.is_expanded(id_of(&tree, "B")));
        assert!(!state.is_expanded(id_of(&tree, "B1")));
    }

    #[test]
    fn test_toggle_twice_restores() {
        let tree = folded_tree();
        let mut state = ExpansionState::initial(&tree);
        let b = id_of(&tree, "B");
        let before = state.clone();
        assert!(state.toggle(b));
        assert!(!state.toggle(b));
        assert_eq!(state, before);
    }
}
