//! Live-tree mapping tests against renderer-shaped trees

use inkbridge_live::{
    children, descendants, ArtifactPolicy, BridgeConfig, LiveDocument, LiveNode, LiveNodeId,
    LiveTree, LiveView, Position,
};

fn find_text(doc: &LiveDocument, root: LiveNodeId, text: &str) -> LiveNodeId {
    descendants(doc, root)
        .find(|&n| doc.text(n) == Some(text))
        .expect("text node present")
}

/// A block as a pretty-printing template engine would emit it
fn templated_paragraph() -> LiveNode {
    LiveNode::element("section").editable_root().with_children(vec![
        LiveNode::text("\n  "),
        LiveNode::element("p").with_node_id("0").with_children(vec![
            LiveNode::text("Hello "),
            LiveNode::element("strong")
                .with_node_id("0.1")
                .with_children(vec![LiveNode::text(""), LiveNode::text("world")]),
            LiveNode::text(" and "),
            LiveNode::element("a")
                .with_node_id("0.3")
                .with_child(LiveNode::text("\u{FEFF}")),
            LiveNode::text("!"),
        ]),
        LiveNode::text("\n"),
    ])
}

#[test]
fn test_every_caret_round_trips() {
    let (doc, root) = LiveDocument::from_node(&templated_paragraph());
    let view = LiveView::new(&doc);
    let p = view.find_by_node_id(root, "0").unwrap();

    // "Hello world and !" has 17 visible characters
    for offset in 0..=17 {
        let pos = view.find_position_by_visible_offset(p, offset).unwrap();
        assert_eq!(
            view.visible_offset(p, pos),
            Some(offset),
            "offset {} resolved to {:?}",
            offset,
            pos
        );
    }
}

#[test]
fn test_paths_for_templated_block() {
    let (doc, root) = LiveDocument::from_node(&templated_paragraph());
    let view = LiveView::new(&doc);

    assert_eq!(view.get_path(find_text(&doc, root, "Hello ")), Some(vec![0, 0]));
    assert_eq!(view.get_path(find_text(&doc, root, "world")), Some(vec![0, 1, 0]));
    assert_eq!(view.get_path(find_text(&doc, root, " and ")), Some(vec![0, 2]));
    assert_eq!(view.get_path(find_text(&doc, root, "\u{FEFF}")), Some(vec![0, 3, 0]));
    assert_eq!(view.get_path(find_text(&doc, root, "!")), Some(vec![0, 4]));
}

#[test]
fn test_exiting_link_lands_after_it() {
    let (doc, root) = LiveDocument::from_node(&templated_paragraph());
    let view = LiveView::new(&doc);
    let p = view.find_by_node_id(root, "0").unwrap();

    // End of " and " is also the (empty) link; the caret stays in text
    let pos = view.find_position_by_visible_offset(p, 16).unwrap();
    assert_eq!(doc.text(pos.node), Some(" and "));
    assert_eq!(pos.offset, 5);

    // End of "world" exits the strong element
    let pos = view.find_position_by_visible_offset(p, 11).unwrap();
    assert_eq!(doc.text(pos.node), Some(" and "));
    assert_eq!(pos.offset, 0);
}

#[test]
fn test_empty_link_is_addressable_by_sentinel() {
    let (doc, root) = LiveDocument::from_node(&templated_paragraph());
    let view = LiveView::new(&doc);
    let link = view.find_by_node_id(root, "0.3").unwrap();

    let pos = view.find_position_by_visible_offset(link, 0).unwrap();
    assert_eq!(doc.text(pos.node), Some("\u{FEFF}"));
    assert_eq!(view.visible_offset(link, pos), Some(0));
}

#[test]
fn test_slate_index_lookup_matches_path() {
    let (doc, root) = LiveDocument::from_node(&templated_paragraph());
    let view = LiveView::new(&doc);
    let p = view.find_by_node_id(root, "0").unwrap();

    let strong = view.find_child_by_slate_index(p, 1).unwrap();
    assert_eq!(view.node_id_of(strong), Some("0.1"));

    let world = view.find_child_by_slate_index(strong, 0).unwrap();
    assert_eq!(doc.text(world), Some("world"));

    let bang = view.find_child_by_slate_index(p, 4).unwrap();
    assert_eq!(view.get_path(bang), Some(vec![0, 4]));
    assert!(view.find_child_by_slate_index(p, 5).is_none());
}

#[test]
fn test_strict_policy_keeps_whitespace() {
    let config = BridgeConfig {
        artifact_policy: ArtifactPolicy::EmptyOnly,
        ..BridgeConfig::default()
    };
    let (doc, root) = LiveDocument::from_node(&templated_paragraph());
    let view = LiveView::with_config(&doc, &config);

    // The indentation before <p> now counts as content
    let first = children(&doc, root).next().unwrap();
    assert!(!view.is_artifact(first));
    assert_eq!(view.visible_offset(root, Position::new(first, 3)), Some(3));
}

#[test]
fn test_snapshot_from_json() {
    let snapshot = r#"{
        "type": "Element", "tag": "div",
        "attributes": [["data-editable-root", "true"]],
        "children": [{
            "type": "Element", "tag": "ol",
            "attributes": [["data-node-id", "2"]],
            "children": [{
                "type": "Element", "tag": "li",
                "attributes": [["data-node-id", "2-0"]],
                "children": [{"type": "Text", "content": "item"}]
            }]
        }]
    }"#;
    let node: LiveNode = serde_json::from_str(snapshot).unwrap();
    let (doc, root) = LiveDocument::from_node(&node);
    let view = LiveView::new(&doc);

    let item = find_text(&doc, root, "item");
    assert_eq!(view.get_path(item), Some(vec![2, 0, 0]));
    assert_eq!(view.find_by_node_id(root, "2.0"), doc.parent(item));
}

/// Slate keeps an empty text leaf on both sides of an inline
fn normalized_list_item() -> LiveNode {
    LiveNode::element("div").editable_root().with_child(
        LiveNode::element("ul").with_node_id("0").with_child(
            LiveNode::element("li").with_node_id("0.0").with_children(vec![
                LiveNode::text(""),
                LiveNode::element("a")
                    .with_node_id("0.0.1")
                    .with_child(LiveNode::text("x")),
                LiveNode::text(""),
            ]),
        ),
    )
}

#[test]
fn test_child_lookup_around_inline() {
    let (doc, root) = LiveDocument::from_node(&normalized_list_item());
    let view = LiveView::new(&doc);
    let li = view.find_by_node_id(root, "0.0").unwrap();
    let live: Vec<_> = children(&doc, li).collect();

    // Artifact leaves are skipped: the first content child is the link
    assert_eq!(view.find_child_by_slate_index(li, 0), Some(live[1]));
    assert_eq!(view.find_child_by_slate_index(li, 1), None);

    // Leaf lookup follows document-model indices instead
    assert_eq!(view.find_text_by_slate_index(li, 0), Some(live[0]));
    assert_eq!(view.find_text_by_slate_index(li, 1), None);
    assert_eq!(view.find_text_by_slate_index(li, 2), Some(live[2]));

    assert_eq!(view.slate_index_among_siblings(live[0]), 0);
    assert_eq!(view.slate_index_among_siblings(live[1]), 1);
    assert_eq!(view.slate_index_among_siblings(live[2]), 2);
    assert_eq!(view.get_path(live[2]), Some(vec![0, 0, 2]));
}
