//! # Visible Offsets
//!
//! Maps between live-tree positions and the number of visible characters
//! preceding them inside a subtree. Artifacts contribute nothing and
//! sentinel characters are not counted, so the same visible offset
//! survives a re-render that reshuffles whitespace or wrapper elements.
//!
//! ## Boundary tie-break
//!
//! A visible offset at the end of an inline element's text is also the
//! start of the text that follows the element. The following text wins,
//! so a caret that should leave a formatted span is not trapped inside it:
//!
//! ```text
//! <p>Hello <strong>world</strong> after</p>
//!                       ^ offset 11 → start of " after", not end of "world"
//! ```
//!
//! Without following text the end of the element's text is used.

use crate::tree::{children, contains, descendants, next_after_subtree, LiveTree};
use crate::view::{LiveView, Position};
use inkbridge_common::{char_offset_for_visible, is_sentinel_text, visible_prefix_len};
use tracing::trace;

impl<'t, T: LiveTree> LiveView<'t, T> {
    /// Visible characters preceding `position` inside `root`.
    ///
    /// Returns `None` when the position is not inside `root`.
    pub fn visible_offset(&self, root: T::Node, position: Position<T::Node>) -> Option<usize> {
        if !contains(self.tree, root, position.node) {
            return None;
        }

        // Where counting stops, and how much of the stop node itself counts
        let (stop, partial) = if self.tree.is_text(position.node) {
            let partial = if self.is_artifact(position.node) {
                0
            } else {
                self.tree
                    .text(position.node)
                    .map_or(0, |text| visible_prefix_len(text, position.offset))
            };
            (Some(position.node), partial)
        } else {
            let stop = children(self.tree, position.node)
                .nth(position.offset)
                .or_else(|| next_after_subtree(self.tree, position.node, root));
            (stop, 0)
        };

        let mut total = 0;
        for node in descendants(self.tree, root) {
            if Some(node) == stop {
                break;
            }
            total += self.filter.length_of(self.tree, node);
        }
        Some(total + partial)
    }

    /// Inverse of [`visible_offset`](Self::visible_offset).
    ///
    /// Offsets past the end clamp to the end of the last visible text. A
    /// subtree with only sentinel text resolves to the first sentinel; one
    /// with nothing but artifacts resolves to `None`.
    pub fn find_position_by_visible_offset(
        &self,
        root: T::Node,
        target: usize,
    ) -> Option<Position<T::Node>> {
        let mut walker = self.text_walker(root);
        let mut content = Vec::new();
        let mut sentinel = None;
        while let Some(node) = walker.next_visible_text_node() {
            let len = walker.length_of(node);
            if len > 0 {
                content.push((node, len));
            } else if sentinel.is_none() && self.tree.text(node).is_some_and(is_sentinel_text) {
                sentinel = Some(node);
            }
        }

        let Some(&(last, _)) = content.last() else {
            trace!(target_offset = target, "No visible text, falling back to sentinel");
            return sentinel.map(|node| Position::new(node, 0));
        };

        let mut start = 0;
        for (i, &(node, len)) in content.iter().enumerate() {
            let end = start + len;
            if target < end {
                return Some(self.position_in(node, target - start));
            }
            if target == end {
                if let Some(&(next, _)) = content.get(i + 1) {
                    if self.exits_inline(node, next, root) {
                        return Some(Position::new(next, 0));
                    }
                }
                return Some(self.position_in(node, len));
            }
            start = end;
        }

        trace!(target_offset = target, total = start, "Offset past end, clamping");
        Some(self.end_of(last))
    }

    /// Live child matching a document-model child index.
    ///
    /// Artifact text is skipped, and consecutive sibling elements carrying
    /// the same identifier count once.
    pub fn find_child_by_slate_index(&self, parent: T::Node, index: isize) -> Option<T::Node> {
        let mut remaining = usize::try_from(index).ok()?;
        let mut previous_id: Option<&str> = None;

        for child in children(self.tree, parent) {
            if self.is_artifact(child) {
                continue;
            }

            let id = if self.tree.is_element(child) {
                self.node_id_of(child)
            } else {
                None
            };
            if id.is_some() && id == previous_id {
                continue;
            }
            previous_id = id;

            if remaining == 0 {
                return Some(child);
            }
            remaining -= 1;
        }
        None
    }

    fn position_in(&self, node: T::Node, visible: usize) -> Position<T::Node> {
        let offset = self
            .tree
            .text(node)
            .map_or(0, |text| char_offset_for_visible(text, visible));
        Position::new(node, offset)
    }

    fn end_of(&self, node: T::Node) -> Position<T::Node> {
        let visible = self.filter.length_of(self.tree, node);
        self.position_in(node, visible)
    }

    /// `current` sits inside an inline element that does not contain `next`
    fn exits_inline(&self, current: T::Node, next: T::Node, root: T::Node) -> bool {
        match self.tree.parent(current) {
            Some(parent) if parent != root => {
                !self.is_block(parent) && !contains(self.tree, parent, next)
            }
            _ => false,
        }
    }
}
