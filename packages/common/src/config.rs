use crate::{BridgeError, BridgeResult, CANONICAL_SEPARATOR};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "inkbridge.config.json";

pub const DEFAULT_NODE_ID_ATTRIBUTE: &str = "data-node-id";
pub const DEFAULT_BOUNDARY_ATTRIBUTE: &str = "data-editable-root";

/// How aggressively renderer-injected whitespace is classified as artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ArtifactPolicy {
    /// Only empty text nodes are artifacts
    EmptyOnly,
    /// Empty text, plus whitespace-only runs containing a line break that
    /// sit between element boundaries (template pretty-printing)
    #[default]
    FormattingWhitespace,
    /// Any whitespace-only text node is an artifact
    AllWhitespace,
}

/// Bridge configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeConfig {
    /// Live-tree attribute mirroring an element's node id
    #[serde(default = "default_node_id_attribute")]
    pub node_id_attribute: String,

    /// Live-tree attribute marking the root of an editable region
    #[serde(default = "default_boundary_attribute")]
    pub boundary_attribute: String,

    /// Separator written when stamping node ids
    #[serde(default = "default_separator")]
    pub separator: char,

    #[serde(default)]
    pub artifact_policy: ArtifactPolicy,

    /// Tag names treated as block containers when resolving paths
    #[serde(default = "default_block_tags")]
    pub block_tags: Vec<String>,
}

fn default_node_id_attribute() -> String {
    DEFAULT_NODE_ID_ATTRIBUTE.to_string()
}

fn default_boundary_attribute() -> String {
    DEFAULT_BOUNDARY_ATTRIBUTE.to_string()
}

fn default_separator() -> char {
    CANONICAL_SEPARATOR
}

fn default_block_tags() -> Vec<String> {
    [
        "address", "article", "aside", "blockquote", "dd", "div", "dl", "dt", "figcaption",
        "figure", "footer", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main",
        "nav", "ol", "p", "pre", "section", "table", "tbody", "td", "tfoot", "th", "thead", "tr",
        "ul",
    ]
    .iter()
    .map(|tag| tag.to_string())
    .collect()
}

impl BridgeConfig {
    /// Load config from a directory, falling back to defaults when absent
    pub fn load(dir: impl AsRef<Path>) -> BridgeResult<Self> {
        let config_path = Self::config_path(dir);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_json(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_json(content: &str) -> BridgeResult<Self> {
        let config: BridgeConfig = serde_json::from_str(content)?;
        config.check()?;
        Ok(config)
    }

    pub fn config_path(dir: impl AsRef<Path>) -> PathBuf {
        dir.as_ref().join(DEFAULT_CONFIG_NAME)
    }

    /// Whether `tag` names a block container (case-insensitive)
    pub fn is_block_tag(&self, tag: &str) -> bool {
        self.block_tags.iter().any(|b| b.eq_ignore_ascii_case(tag))
    }

    fn check(&self) -> BridgeResult<()> {
        if !crate::ACCEPTED_SEPARATORS.contains(&self.separator) {
            return Err(BridgeError::Config(format!(
                "separator must be '.' or '-', got {:?}",
                self.separator
            )));
        }
        if self.node_id_attribute.is_empty() || self.boundary_attribute.is_empty() {
            return Err(BridgeError::Config(
                "attribute names must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            node_id_attribute: default_node_id_attribute(),
            boundary_attribute: default_boundary_attribute(),
            separator: default_separator(),
            artifact_policy: ArtifactPolicy::default(),
            block_tags: default_block_tags(),
        }
    }
}
