use crate::model::{DocumentNode, ElementNode, TextNode};

/// Visitor pattern for traversing document trees immutably
///
/// Default implementations walk the whole tree in document order. Each
/// callback receives the node's path (child index at every level).
pub trait Visitor: Sized {
    fn visit_node(&mut self, node: &DocumentNode, path: &[usize]) {
        walk_node(self, node, path);
    }

    fn visit_element(&mut self, element: &ElementNode, path: &[usize]) {
        walk_element(self, element, path);
    }

    fn visit_text(&mut self, _text: &TextNode, _path: &[usize]) {
        // Leaf node, no children to walk
    }
}

pub fn walk_tree<V: Visitor>(visitor: &mut V, tree: &[DocumentNode]) {
    for (i, node) in tree.iter().enumerate() {
        visitor.visit_node(node, &[i]);
    }
}

pub fn walk_node<V: Visitor>(visitor: &mut V, node: &DocumentNode, path: &[usize]) {
    match node {
        DocumentNode::Element(el) => visitor.visit_element(el, path),
        DocumentNode::Text(t) => visitor.visit_text(t, path),
    }
}

pub fn walk_element<V: Visitor>(visitor: &mut V, element: &ElementNode, path: &[usize]) {
    let mut child_path = Vec::with_capacity(path.len() + 1);
    child_path.extend_from_slice(path);
    child_path.push(0);

    for (i, child) in element.children.iter().enumerate() {
        if let Some(last) = child_path.last_mut() {
            *last = i;
        }
        visitor.visit_node(child, &child_path);
    }
}

/// Counts elements and text leaves
#[derive(Debug, Default)]
pub struct NodeCounter {
    pub elements: usize,
    pub texts: usize,
}

impl Visitor for NodeCounter {
    fn visit_element(&mut self, element: &ElementNode, path: &[usize]) {
        self.elements += 1;
        walk_element(self, element, path);
    }

    fn visit_text(&mut self, _text: &TextNode, _path: &[usize]) {
        self.texts += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PathCollector(Vec<Vec<usize>>);

    impl Visitor for PathCollector {
        fn visit_text(&mut self, _text: &TextNode, path: &[usize]) {
            self.0.push(path.to_vec());
        }
    }

    #[test]
    fn test_walks_in_document_order() {
        let tree = vec![
            DocumentNode::element("p")
                .with_child(DocumentNode::text("a"))
                .with_child(DocumentNode::element("strong").with_child(DocumentNode::text("b"))),
            DocumentNode::element("p").with_child(DocumentNode::text("c")),
        ];

        let mut collector = PathCollector(Vec::new());
        walk_tree(&mut collector, &tree);
        assert_eq!(collector.0, vec![vec![0, 0], vec![0, 1, 0], vec![1, 0]]);

        let mut counter = NodeCounter::default();
        walk_tree(&mut counter, &tree);
        assert_eq!(counter.elements, 3);
        assert_eq!(counter.texts, 3);
    }
}
