//! The live-tree capability
//!
//! The live tree is whatever an external renderer produced: a browser DOM,
//! a snapshot shipped over a channel, or the in-memory [`crate::LiveDocument`].
//! The engine only needs DOM-style navigation and read access.

use std::fmt::Debug;

/// Read-only, DOM-like navigation over a rendered tree
pub trait LiveTree {
    /// Cheap node handle
    type Node: Copy + Eq + Debug;

    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    fn first_child(&self, node: Self::Node) -> Option<Self::Node>;

    fn next_sibling(&self, node: Self::Node) -> Option<Self::Node>;

    fn previous_sibling(&self, node: Self::Node) -> Option<Self::Node>;

    /// Content of a text node, `None` for elements
    fn text(&self, node: Self::Node) -> Option<&str>;

    /// Tag name of an element, `None` for text nodes
    fn tag_name(&self, node: Self::Node) -> Option<&str>;

    fn attribute(&self, node: Self::Node, name: &str) -> Option<&str>;

    fn is_text(&self, node: Self::Node) -> bool {
        self.text(node).is_some()
    }

    fn is_element(&self, node: Self::Node) -> bool {
        self.tag_name(node).is_some()
    }
}

/// Iterator over the direct children of a node
pub struct Children<'t, T: LiveTree> {
    tree: &'t T,
    next: Option<T::Node>,
}

impl<'t, T: LiveTree> Iterator for Children<'t, T> {
    type Item = T::Node;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.tree.next_sibling(current);
        Some(current)
    }
}

pub fn children<T: LiveTree>(tree: &T, node: T::Node) -> Children<'_, T> {
    Children {
        tree,
        next: tree.first_child(node),
    }
}

/// Pre-order iterator over `root` and everything below it
pub struct Descendants<'t, T: LiveTree> {
    tree: &'t T,
    root: T::Node,
    next: Option<T::Node>,
}

impl<'t, T: LiveTree> Iterator for Descendants<'t, T> {
    type Item = T::Node;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = next_in_order(self.tree, current, self.root);
        Some(current)
    }
}

pub fn descendants<T: LiveTree>(tree: &T, root: T::Node) -> Descendants<'_, T> {
    Descendants {
        tree,
        root,
        next: Some(root),
    }
}

/// Next node in document order, staying inside `root`
pub fn next_in_order<T: LiveTree>(tree: &T, node: T::Node, root: T::Node) -> Option<T::Node> {
    if let Some(child) = tree.first_child(node) {
        return Some(child);
    }
    next_after_subtree(tree, node, root)
}

/// First node in document order after the subtree of `node`, staying inside `root`
pub fn next_after_subtree<T: LiveTree>(
    tree: &T,
    node: T::Node,
    root: T::Node,
) -> Option<T::Node> {
    let mut current = node;
    loop {
        if current == root {
            return None;
        }
        if let Some(sibling) = tree.next_sibling(current) {
            return Some(sibling);
        }
        current = tree.parent(current)?;
    }
}

/// Whether `node` is `ancestor` or lies below it
pub fn contains<T: LiveTree>(tree: &T, ancestor: T::Node, node: T::Node) -> bool {
    let mut current = Some(node);
    while let Some(n) = current {
        if n == ancestor {
            return true;
        }
        current = tree.parent(n);
    }
    false
}
