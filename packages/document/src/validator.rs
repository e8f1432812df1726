/// Structural validation for document trees coming from upstream
///
/// Malformed input is tolerated everywhere else in the engine; this module
/// is how callers find out about it and report it as a data-quality issue.
use crate::model::{DocumentNode, ElementNode};
use crate::visitor::{walk_element, walk_tree, Visitor};
use inkbridge_common::{format_path, CANONICAL_SEPARATOR};
use serde::Serialize;

/// Severity of a structural issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueLevel {
    /// Stale or odd data that resolution can still cope with
    Warning,
    /// Ambiguous node shape
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum IssueKind {
    /// Element carrying both `text` and `children`
    ElementWithText { text: String },
    /// Stamped id disagrees with the element's current position
    StaleNodeId { found: String, expected: String },
    /// Stamped id is not a sequence of integer segments
    UnparseableNodeId { found: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructuralIssue {
    pub level: IssueLevel,
    pub path: Vec<usize>,
    #[serde(flatten)]
    pub kind: IssueKind,
}

impl StructuralIssue {
    pub fn message(&self) -> String {
        let at = format_path(&self.path, CANONICAL_SEPARATOR);
        match &self.kind {
            IssueKind::ElementWithText { text } => {
                format!("element at {} carries both text ({:?}) and children", at, text)
            }
            IssueKind::StaleNodeId { found, expected } => {
                format!("element at {} is stamped '{}', expected '{}'", at, found, expected)
            }
            IssueKind::UnparseableNodeId { found } => {
                format!("element at {} has unparseable node id '{}'", at, found)
            }
        }
    }
}

/// Collects structural issues while walking a tree
#[derive(Debug, Default)]
pub struct Validator {
    issues: Vec<StructuralIssue>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&mut self, tree: &[DocumentNode]) -> Vec<StructuralIssue> {
        self.issues.clear();
        walk_tree(self, tree);
        std::mem::take(&mut self.issues)
    }
}

impl Visitor for Validator {
    fn visit_element(&mut self, element: &ElementNode, path: &[usize]) {
        if let Some(text) = &element.stray_text {
            self.issues.push(StructuralIssue {
                level: IssueLevel::Error,
                path: path.to_vec(),
                kind: IssueKind::ElementWithText { text: text.clone() },
            });
        }

        if let Some(id) = &element.node_id {
            match id.segments() {
                Some(segments) if segments.as_slice() != path => {
                    self.issues.push(StructuralIssue {
                        level: IssueLevel::Warning,
                        path: path.to_vec(),
                        kind: IssueKind::StaleNodeId {
                            found: id.to_string(),
                            expected: format_path(path, CANONICAL_SEPARATOR),
                        },
                    });
                }
                Some(_) => {}
                None => {
                    self.issues.push(StructuralIssue {
                        level: IssueLevel::Warning,
                        path: path.to_vec(),
                        kind: IssueKind::UnparseableNodeId {
                            found: id.to_string(),
                        },
                    });
                }
            }
        }

        walk_element(self, element, path);
    }
}

/// Validate a tree with a fresh [`Validator`]
pub fn validate(tree: &[DocumentNode]) -> Vec<StructuralIssue> {
    Validator::new().validate(tree)
}
