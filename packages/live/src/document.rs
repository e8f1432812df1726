//! In-memory live tree
//!
//! An arena-backed DOM used when the rendered tree arrives as a snapshot
//! (e.g. JSON over the host channel) and in tests. [`LiveNode`] is the
//! declarative description that gets mounted into a [`LiveDocument`].

use crate::tree::LiveTree;
use inkbridge_common::{DEFAULT_BOUNDARY_ATTRIBUTE, DEFAULT_NODE_ID_ATTRIBUTE};
use serde::{Deserialize, Serialize};

/// Handle into a [`LiveDocument`] arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LiveNodeId(u32);

impl LiveNodeId {
    fn for_slot(index: usize) -> Self {
        match u32::try_from(index) {
            Ok(raw) => LiveNodeId(raw),
            Err(_) => panic!("live document is full: node ids no longer fit in u32"),
        }
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Declarative live node, mountable into a [`LiveDocument`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LiveNode {
    Element {
        tag: String,
        #[serde(default)]
        attributes: Vec<(String, String)>,
        #[serde(default)]
        children: Vec<LiveNode>,
    },
    Text { content: String },
}

impl LiveNode {
    pub fn element(tag: impl Into<String>) -> Self {
        LiveNode::Element {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        LiveNode::Text {
            content: content.into(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let LiveNode::Element {
            ref mut attributes, ..
        } = self
        {
            let key = key.into();
            let value = value.into();
            match attributes.iter_mut().find(|(k, _)| *k == key) {
                Some(existing) => existing.1 = value,
                None => attributes.push((key, value)),
            }
        }
        self
    }

    /// Mirror a document node id using the default attribute name
    pub fn with_node_id(self, id: impl Into<String>) -> Self {
        self.with_attr(DEFAULT_NODE_ID_ATTRIBUTE, id)
    }

    /// Mark as the root of an editable region using the default attribute name
    pub fn editable_root(self) -> Self {
        self.with_attr(DEFAULT_BOUNDARY_ATTRIBUTE, "true")
    }

    pub fn with_child(mut self, child: LiveNode) -> Self {
        if let LiveNode::Element {
            ref mut children, ..
        } = self
        {
            children.push(child);
        }
        self
    }

    pub fn with_children(mut self, new_children: Vec<LiveNode>) -> Self {
        if let LiveNode::Element {
            ref mut children, ..
        } = self
        {
            children.extend(new_children);
        }
        self
    }
}

#[derive(Debug, Clone)]
enum NodeData {
    Element {
        tag: String,
        attributes: Vec<(String, String)>,
    },
    Text(String),
}

#[derive(Debug, Clone)]
struct Slot {
    data: NodeData,
    parent: Option<LiveNodeId>,
    first_child: Option<LiveNodeId>,
    last_child: Option<LiveNodeId>,
    prev_sibling: Option<LiveNodeId>,
    next_sibling: Option<LiveNodeId>,
}

/// Arena DOM
#[derive(Debug, Clone, Default)]
pub struct LiveDocument {
    slots: Vec<Slot>,
}

impl LiveDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from a description, returning it with its root
    pub fn from_node(node: &LiveNode) -> (Self, LiveNodeId) {
        let mut doc = Self::new();
        let root = doc.mount(node);
        (doc, root)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// # Panics
    ///
    /// Node ids are `u32`; panics once a new id would not fit.
    pub fn create_element(&mut self, tag: impl Into<String>) -> LiveNodeId {
        self.push(NodeData::Element {
            tag: tag.into(),
            attributes: Vec::new(),
        })
    }

    /// # Panics
    ///
    /// Same node cap as [`create_element`](Self::create_element).
    pub fn create_text(&mut self, content: impl Into<String>) -> LiveNodeId {
        self.push(NodeData::Text(content.into()))
    }

    /// Mount a description as a detached subtree and return its root
    pub fn mount(&mut self, node: &LiveNode) -> LiveNodeId {
        match node {
            LiveNode::Element {
                tag,
                attributes,
                children,
            } => {
                let id = self.push(NodeData::Element {
                    tag: tag.clone(),
                    attributes: attributes.clone(),
                });
                for child in children {
                    let child_id = self.mount(child);
                    self.append_child(id, child_id);
                }
                id
            }
            LiveNode::Text { content } => self.create_text(content.clone()),
        }
    }

    /// Append `child` as the last child of `parent`, detaching it first.
    ///
    /// Returns false when either handle is unknown or `parent` is a text node.
    pub fn append_child(&mut self, parent: LiveNodeId, child: LiveNodeId) -> bool {
        let parent_is_element = matches!(
            self.slot(parent).map(|s| &s.data),
            Some(NodeData::Element { .. })
        );
        if !parent_is_element || self.slot(child).is_none() || parent == child {
            return false;
        }

        self.detach(child);

        let last = self.slot(parent).and_then(|s| s.last_child);
        if let Some(slot) = self.slot_mut(child) {
            slot.parent = Some(parent);
            slot.prev_sibling = last;
            slot.next_sibling = None;
        }
        match last {
            Some(last) => {
                if let Some(slot) = self.slot_mut(last) {
                    slot.next_sibling = Some(child);
                }
            }
            None => {
                if let Some(slot) = self.slot_mut(parent) {
                    slot.first_child = Some(child);
                }
            }
        }
        if let Some(slot) = self.slot_mut(parent) {
            slot.last_child = Some(child);
        }
        true
    }

    /// Unlink a node from its parent and siblings; its subtree stays intact
    pub fn detach(&mut self, node: LiveNodeId) {
        let Some(slot) = self.slot(node) else {
            return;
        };
        let (parent, prev, next) = (slot.parent, slot.prev_sibling, slot.next_sibling);

        match prev {
            Some(prev) => {
                if let Some(s) = self.slot_mut(prev) {
                    s.next_sibling = next;
                }
            }
            None => {
                if let Some(s) = parent.and_then(|p| self.slot_mut(p)) {
                    s.first_child = next;
                }
            }
        }
        match next {
            Some(next) => {
                if let Some(s) = self.slot_mut(next) {
                    s.prev_sibling = prev;
                }
            }
            None => {
                if let Some(s) = parent.and_then(|p| self.slot_mut(p)) {
                    s.last_child = prev;
                }
            }
        }

        if let Some(slot) = self.slot_mut(node) {
            slot.parent = None;
            slot.prev_sibling = None;
            slot.next_sibling = None;
        }
    }

    pub fn set_attribute(
        &mut self,
        node: LiveNodeId,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> bool {
        let Some(Slot {
            data: NodeData::Element { attributes, .. },
            ..
        }) = self.slot_mut(node)
        else {
            return false;
        };
        let name = name.into();
        let value = value.into();
        match attributes.iter_mut().find(|(k, _)| *k == name) {
            Some(existing) => existing.1 = value,
            None => attributes.push((name, value)),
        }
        true
    }

    /// Replace the content of a text node
    pub fn set_text(&mut self, node: LiveNodeId, content: impl Into<String>) -> bool {
        match self.slot_mut(node) {
            Some(Slot {
                data: NodeData::Text(text),
                ..
            }) => {
                *text = content.into();
                true
            }
            _ => false,
        }
    }

    fn push(&mut self, data: NodeData) -> LiveNodeId {
        let id = LiveNodeId::for_slot(self.slots.len());
        self.slots.push(Slot {
            data,
            parent: None,
            first_child: None,
            last_child: None,
            prev_sibling: None,
            next_sibling: None,
        });
        id
    }

    fn slot(&self, node: LiveNodeId) -> Option<&Slot> {
        self.slots.get(node.index())
    }

    fn slot_mut(&mut self, node: LiveNodeId) -> Option<&mut Slot> {
        self.slots.get_mut(node.index())
    }
}

impl LiveTree for LiveDocument {
    type Node = LiveNodeId;

    fn parent(&self, node: LiveNodeId) -> Option<LiveNodeId> {
        self.slot(node)?.parent
    }

    fn first_child(&self, node: LiveNodeId) -> Option<LiveNodeId> {
        self.slot(node)?.first_child
    }

    fn next_sibling(&self, node: LiveNodeId) -> Option<LiveNodeId> {
        self.slot(node)?.next_sibling
    }

    fn previous_sibling(&self, node: LiveNodeId) -> Option<LiveNodeId> {
        self.slot(node)?.prev_sibling
    }

    fn text(&self, node: LiveNodeId) -> Option<&str> {
        match &self.slot(node)?.data {
            NodeData::Text(text) => Some(text),
            NodeData::Element { .. } => None,
        }
    }

    fn tag_name(&self, node: LiveNodeId) -> Option<&str> {
        match &self.slot(node)?.data {
            NodeData::Element { tag, .. } => Some(tag),
            NodeData::Text(_) => None,
        }
    }

    fn attribute(&self, node: LiveNodeId, name: &str) -> Option<&str> {
        match &self.slot(node)?.data {
            NodeData::Element { attributes, .. } => attributes
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str()),
            NodeData::Text(_) => None,
        }
    }
}
