use inkbridge_common::{Path, CANONICAL_SEPARATOR};
use inkbridge_document::{
    calculate_absolute_offset, from_json, get_node_id_from_path, update_text, validate,
    DocumentNode, NodeIdAssigner,
};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Stamp positional node ids onto a JSON document tree
#[wasm_bindgen(js_name = assignIds)]
pub fn assign_ids_js(tree_json: &str) -> Result<String, JsValue> {
    assign_ids_json(tree_json, CANONICAL_SEPARATOR).map_err(|e| JsValue::from_str(&e))
}

/// Replace the first text leaf of the element with `node_id`
#[wasm_bindgen(js_name = updateText)]
pub fn update_text_js(tree_json: &str, node_id: &str, text: &str) -> Result<String, JsValue> {
    update_text_json(tree_json, node_id, text).map_err(|e| JsValue::from_str(&e))
}

/// Resolve a document path; `None` (JS `null`) when it addresses nothing
#[wasm_bindgen(js_name = getNodeIdFromPath)]
pub fn get_node_id_from_path_js(tree_json: &str, path_json: &str) -> Result<Option<String>, JsValue> {
    node_id_from_path_json(tree_json, path_json).map_err(|e| JsValue::from_str(&e))
}

/// Offset across a parent element from an offset inside one of its text leaves
#[wasm_bindgen(js_name = calculateAbsoluteOffset)]
pub fn calculate_absolute_offset_js(
    children_json: &str,
    text_child_index: usize,
    inner_offset: usize,
) -> Result<usize, JsValue> {
    absolute_offset_json(children_json, text_child_index, inner_offset)
        .map_err(|e| JsValue::from_str(&e))
}

/// Structural issues of a JSON document tree, as a JSON array
#[wasm_bindgen(js_name = validate)]
pub fn validate_js(tree_json: &str) -> Result<String, JsValue> {
    validate_json(tree_json).map_err(|e| JsValue::from_str(&e))
}

fn parse_tree(json: &str) -> Result<Vec<DocumentNode>, String> {
    from_json(json).map_err(|e| format!("Document JSON error: {}", e))
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

fn assign_ids_json(tree_json: &str, separator: char) -> Result<String, String> {
    let tree = parse_tree(tree_json)?;
    to_json(&NodeIdAssigner::new(separator).assign(&tree))
}

fn update_text_json(tree_json: &str, node_id: &str, text: &str) -> Result<String, String> {
    let tree = parse_tree(tree_json)?;
    to_json(&update_text(&tree, node_id, text))
}

fn node_id_from_path_json(tree_json: &str, path_json: &str) -> Result<Option<String>, String> {
    let tree = parse_tree(tree_json)?;
    let path: Path =
        serde_json::from_str(path_json).map_err(|e| format!("Path JSON error: {}", e))?;

    get_node_id_from_path(&tree, &path)
        .map(|location| to_json(&location))
        .transpose()
}

fn absolute_offset_json(
    children_json: &str,
    text_child_index: usize,
    inner_offset: usize,
) -> Result<usize, String> {
    let children = parse_tree(children_json)?;
    Ok(calculate_absolute_offset(&children, text_child_index, inner_offset))
}

fn validate_json(tree_json: &str) -> Result<String, String> {
    let tree = parse_tree(tree_json)?;
    to_json(&validate(&tree))
}
