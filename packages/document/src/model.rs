//! # Document Model
//!
//! The canonical rich-text tree: a closed union of [`ElementNode`] (typed,
//! with children) and [`TextNode`] (leaf). The JSON shape follows the
//! Slate convention:
//!
//! ```text
//! {"type": "p", "nodeId": "0", "children": [{"text": "Hi", "bold": true}]}
//! ```
//!
//! ## Read tolerance
//!
//! Upstream data sometimes carries an element with both `text` and
//! `children`. Such a node deserializes as an [`ElementNode`] whose
//! `stray_text` keeps the value verbatim so callers can detect and report
//! it (see [`crate::validator`]). Nothing in this crate ever writes
//! `stray_text`.

use inkbridge_common::{is_sentinel_char, visible_len, NodeId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;

/// Document-model node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged, try_from = "RawNode")]
pub enum DocumentNode {
    Element(ElementNode),
    Text(TextNode),
}

/// Element node: typed container with children
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementNode {
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub kind: String,

    /// Path-encoded identifier, stamped before each render
    #[serde(rename = "nodeId", skip_serializing_if = "Option::is_none")]
    pub node_id: Option<NodeId>,

    pub children: Vec<DocumentNode>,

    /// Text found on a malformed input element, preserved but ignored
    #[serde(rename = "text", skip_serializing_if = "Option::is_none")]
    pub stray_text: Option<String>,

    #[serde(flatten)]
    pub attributes: BTreeMap<String, Value>,
}

/// Text leaf with optional formatting marks (`bold`, `italic`, ...)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextNode {
    pub text: String,

    #[serde(flatten)]
    pub marks: BTreeMap<String, Value>,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NodeShapeError {
    #[error("node has neither `type`, `children` nor `text`")]
    Unrecognized,
}

/// Wire shape accepted on read, before classification
#[derive(Deserialize)]
struct RawNode {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(rename = "nodeId", default)]
    node_id: Option<NodeId>,
    #[serde(default)]
    children: Option<Vec<DocumentNode>>,
    #[serde(default)]
    text: Option<String>,
    #[serde(flatten)]
    rest: BTreeMap<String, Value>,
}

impl TryFrom<RawNode> for DocumentNode {
    type Error = NodeShapeError;

    fn try_from(raw: RawNode) -> Result<Self, Self::Error> {
        if raw.kind.is_some() || raw.children.is_some() {
            return Ok(DocumentNode::Element(ElementNode {
                kind: raw.kind.unwrap_or_default(),
                node_id: raw.node_id,
                children: raw.children.unwrap_or_default(),
                stray_text: raw.text,
                attributes: raw.rest,
            }));
        }

        match raw.text {
            Some(text) => {
                if let Some(id) = raw.node_id {
                    debug!(node_id = %id, "Dropping node id found on text leaf");
                }
                Ok(DocumentNode::Text(TextNode {
                    text,
                    marks: raw.rest,
                }))
            }
            None => Err(NodeShapeError::Unrecognized),
        }
    }
}

impl DocumentNode {
    pub fn element(kind: impl Into<String>) -> Self {
        DocumentNode::Element(ElementNode::new(kind))
    }

    pub fn text(text: impl Into<String>) -> Self {
        DocumentNode::Text(TextNode::new(text))
    }

    pub fn with_child(mut self, child: DocumentNode) -> Self {
        if let DocumentNode::Element(ref mut el) = self {
            el.children.push(child);
        }
        self
    }

    pub fn with_children(mut self, new_children: Vec<DocumentNode>) -> Self {
        if let DocumentNode::Element(ref mut el) = self {
            el.children.extend(new_children);
        }
        self
    }

    pub fn with_node_id(mut self, id: impl Into<NodeId>) -> Self {
        if let DocumentNode::Element(ref mut el) = self {
            el.node_id = Some(id.into());
        }
        self
    }

    /// Element attribute, or text mark on a leaf
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        match self {
            DocumentNode::Element(ref mut el) => {
                el.attributes.insert(key.into(), value.into());
            }
            DocumentNode::Text(ref mut t) => {
                t.marks.insert(key.into(), value.into());
            }
        }
        self
    }

    pub fn is_element(&self) -> bool {
        matches!(self, DocumentNode::Element(_))
    }

    pub fn as_element(&self) -> Option<&ElementNode> {
        match self {
            DocumentNode::Element(el) => Some(el),
            DocumentNode::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextNode> {
        match self {
            DocumentNode::Text(t) => Some(t),
            DocumentNode::Element(_) => None,
        }
    }

    pub fn node_id(&self) -> Option<&NodeId> {
        self.as_element().and_then(|el| el.node_id.as_ref())
    }

    /// Concatenated visible text of every leaf under this node
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    /// Visible length of the flattened text (sentinels excluded)
    pub fn visible_text_len(&self) -> usize {
        match self {
            DocumentNode::Text(t) => visible_len(&t.text),
            DocumentNode::Element(el) => el.children.iter().map(|c| c.visible_text_len()).sum(),
        }
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            DocumentNode::Text(t) => out.extend(t.text.chars().filter(|c| !is_sentinel_char(*c))),
            DocumentNode::Element(el) => {
                for child in &el.children {
                    child.collect_text(out);
                }
            }
        }
    }
}

impl ElementNode {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            node_id: None,
            children: Vec::new(),
            stray_text: None,
            attributes: BTreeMap::new(),
        }
    }

    /// Index of the first text child
    pub fn first_text_index(&self) -> Option<usize> {
        self.children
            .iter()
            .position(|c| matches!(c, DocumentNode::Text(_)))
    }
}

impl TextNode {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marks: BTreeMap::new(),
        }
    }
}

/// Parse a document tree (array of root nodes) from JSON
pub fn from_json(json: &str) -> Result<Vec<DocumentNode>, serde_json::Error> {
    serde_json::from_str(json)
}
