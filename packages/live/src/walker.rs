use crate::artifact::ArtifactFilter;
use crate::tree::{next_in_order, LiveTree};

/// Walks the non-artifact text nodes of a subtree in document order.
///
/// Sentinel text nodes are yielded (they are addressable) but have a
/// [`length_of`](TextWalker::length_of) of zero.
pub struct TextWalker<'t, T: LiveTree> {
    tree: &'t T,
    root: T::Node,
    filter: ArtifactFilter,
    next: Option<T::Node>,
}

impl<'t, T: LiveTree> TextWalker<'t, T> {
    pub fn new(tree: &'t T, root: T::Node, filter: ArtifactFilter) -> Self {
        Self {
            tree,
            root,
            filter,
            next: Some(root),
        }
    }

    pub fn next_visible_text_node(&mut self) -> Option<T::Node> {
        loop {
            let node = self.next?;
            self.next = next_in_order(self.tree, node, self.root);
            if self.tree.is_text(node) && !self.filter.is_artifact(self.tree, node) {
                return Some(node);
            }
        }
    }

    pub fn length_of(&self, node: T::Node) -> usize {
        self.filter.length_of(self.tree, node)
    }
}

impl<'t, T: LiveTree> Iterator for TextWalker<'t, T> {
    type Item = T::Node;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_visible_text_node()
    }
}
