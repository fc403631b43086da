mod node;
mod tree;

pub use node::NavigationNode;
pub use tree::{Ancestors, Entry, EntryId, Fold, NavTree};
