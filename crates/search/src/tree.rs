use crate::dom::Dom;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Element {
        tag: String,
        classes: Vec<String>,
        visible: bool,
    },
    Text(String),
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena-backed element tree.
///
/// Nodes are never freed; detached nodes simply have no parent. The root is a
/// `body` element created with the document.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            root: NodeId(0),
        };
        doc.root = doc.create_element("body");
        doc
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Creates a detached element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeKind::Element {
            tag: tag.to_string(),
            classes: Vec::new(),
            visible: true,
        })
    }

    /// Creates a detached text node.
    pub fn create_text(&mut self, value: &str) -> NodeId {
        self.push(NodeKind::Text(value.to_string()))
    }

    /// Appends `child` to `parent`, detaching it from its previous parent.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
    }

    fn detach(&mut self, child: NodeId) {
        if let Some(old_parent) = self.nodes[child.0].parent.take() {
            self.nodes[old_parent.0].children.retain(|&id| id != child);
        }
    }

    /// Creates an element with `classes` and appends it to `parent`.
    pub fn add_element(&mut self, parent: NodeId, tag: &str, classes: &[&str]) -> NodeId {
        let id = self.create_element(tag);
        for class in classes {
            self.set_class(&id, class, true);
        }
        self.append_child(parent, id);
        id
    }

    /// Creates a text node and appends it to `parent`.
    pub fn add_text(&mut self, parent: NodeId, value: &str) -> NodeId {
        let id = self.create_text(value);
        self.append_child(parent, id);
        id
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.0].kind
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn child_ids(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match &self.nodes[id.0].kind {
            NodeKind::Element { tag, .. } => Some(tag),
            NodeKind::Text(_) => None,
        }
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        match &self.nodes[id.0].kind {
            NodeKind::Element { classes, .. } => classes.iter().any(|c| c == class),
            NodeKind::Text(_) => false,
        }
    }

    pub fn classes(&self, id: NodeId) -> &[String] {
        match &self.nodes[id.0].kind {
            NodeKind::Element { classes, .. } => classes,
            NodeKind::Text(_) => &[],
        }
    }

    /// Text nodes are always visible; elements follow their display state.
    pub fn is_visible(&self, id: NodeId) -> bool {
        match &self.nodes[id.0].kind {
            NodeKind::Element { visible, .. } => *visible,
            NodeKind::Text(_) => true,
        }
    }

    /// All descendant text of `id`, concatenated in document order.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match &self.nodes[id.0].kind {
            NodeKind::Text(value) => out.push_str(value),
            NodeKind::Element { .. } => {
                for &child in &self.nodes[id.0].children {
                    self.collect_text(child, out);
                }
            }
        }
    }

    /// Elements under `root` carrying `class`, in document order.
    ///
    /// Matching elements are not searched for nested matches.
    pub fn elements_with_class(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        let mut found = Vec::new();
        for &child in self.child_ids(root) {
            self.collect_with_class(child, class, &mut found);
        }
        found
    }

    fn collect_with_class(&self, id: NodeId, class: &str, found: &mut Vec<NodeId>) {
        if self.has_class(id, class) {
            found.push(id);
            return;
        }
        for &child in self.child_ids(id) {
            self.collect_with_class(child, class, found);
        }
    }
}

impl Dom for Document {
    type Node = NodeId;

    fn children(&self, node: &NodeId) -> Vec<NodeId> {
        self.child_ids(*node).to_vec()
    }

    fn text(&self, node: &NodeId) -> Option<String> {
        match &self.nodes[node.0].kind {
            NodeKind::Text(value) => Some(value.clone()),
            NodeKind::Element { .. } => None,
        }
    }

    fn set_visible(&mut self, node: &NodeId, shown: bool) {
        if let NodeKind::Element { visible, .. } = &mut self.nodes[node.0].kind {
            *visible = shown;
        }
    }

    fn set_class(&mut self, node: &NodeId, class: &str, enabled: bool) {
        let NodeKind::Element { classes, .. } = &mut self.nodes[node.0].kind else {
            return;
        };
        let present = classes.iter().any(|c| c == class);
        if enabled && !present {
            classes.push(class.to_string());
        } else if !enabled && present {
            classes.retain(|c| c != class);
        }
    }

    fn append_to_parent(&mut self, node: &NodeId) {
        let Some(parent) = self.parent(*node) else {
            log::warn!("cannot move node {:?}: it has no parent", node);
            return;
        };
        self.append_child(parent, *node);
    }
}
