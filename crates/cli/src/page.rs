use std::path::Path;

use anyhow::{Context, Result};
use lexicon_search::{Document, NodeId, NodeKind};
use serde::Deserialize;

/// Page shipped with the binary, used when no page is configured.
pub const SAMPLE_PAGE: &str = include_str!("../assets/sample_page.json");

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PageNode {
    Text(String),
    Element(ElementNode),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ElementNode {
    #[serde(default = "default_tag")]
    tag: String,
    #[serde(default)]
    class: String,
    #[serde(default)]
    children: Vec<PageNode>,
}

fn default_tag() -> String {
    "div".to_string()
}

/// A loaded page: the element tree and its entries in document order.
#[derive(Debug, Clone)]
pub struct Page {
    pub doc: Document,
    pub entries: Vec<NodeId>,
}

impl Page {
    /// Reads the page at `path`, or the sample page when `path` is `None`.
    pub fn load(path: Option<&Path>, entry_class: &str) -> Result<Self> {
        match path {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read page {}", path.display()))?;
                Self::from_json(&json, entry_class)
                    .with_context(|| format!("invalid page {}", path.display()))
            }
            None => Self::from_json(SAMPLE_PAGE, entry_class).context("invalid sample page"),
        }
    }

    pub fn from_json(json: &str, entry_class: &str) -> Result<Self> {
        let nodes: Vec<PageNode> = serde_json::from_str(json)?;

        let mut doc = Document::new();
        let root = doc.root();
        for node in &nodes {
            build(&mut doc, root, node);
        }

        let entries = doc.elements_with_class(root, entry_class);
        log::debug!(
            "loaded page with {} nodes and {} entries",
            doc.len(),
            entries.len()
        );

        Ok(Self { doc, entries })
    }

    /// Entries in their current container order, hidden ones included.
    pub fn displayed(&self) -> Vec<NodeId> {
        let mut containers: Vec<NodeId> = Vec::new();
        for &entry in &self.entries {
            if let Some(parent) = self.doc.parent(entry)
                && !containers.contains(&parent)
            {
                containers.push(parent);
            }
        }

        containers
            .into_iter()
            .flat_map(|container| self.doc.child_ids(container).iter().copied())
            .filter(|id| self.entries.contains(id))
            .collect()
    }

    /// Human readable text of `id`: its text pieces trimmed and joined by spaces.
    ///
    /// Adjacent text with no whitespace in the source (`<b>Pine</b>apple`)
    /// stays joined.
    pub fn label(&self, id: NodeId) -> String {
        let mut label = String::new();
        collect_label(&self.doc, id, &mut label);
        label.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

fn build(doc: &mut Document, parent: NodeId, node: &PageNode) {
    match node {
        PageNode::Text(value) => {
            doc.add_text(parent, value);
        }
        PageNode::Element(element) => {
            let classes: Vec<&str> = element.class.split_whitespace().collect();
            let id = doc.add_element(parent, &element.tag, &classes);
            for child in &element.children {
                build(doc, id, child);
            }
        }
    }
}

fn collect_label(doc: &Document, id: NodeId, out: &mut String) {
    match doc.kind(id) {
        NodeKind::Text(value) => out.push_str(value),
        NodeKind::Element { tag, .. } => {
            let block = tag != "b" && tag != "i" && tag != "em" && tag != "strong";
            if block && !out.is_empty() {
                out.push(' ');
            }
            for &child in doc.child_ids(id) {
                collect_label(doc, child, out);
            }
        }
    }
}
