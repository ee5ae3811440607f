use lexicon_search::Dom;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Node};

/// [`Dom`] over the browser document.
///
/// Visibility is written to the inline `display` style, markers go through
/// `classList`, and moves use `appendChild` on the current parent.
pub struct WebDom {
    display: String,
}

impl WebDom {
    /// `display` is the value used for shown elements, e.g. `flex`.
    pub fn new(display: impl Into<String>) -> Self {
        Self {
            display: display.into(),
        }
    }
}

impl Dom for WebDom {
    type Node = Node;

    fn children(&self, node: &Node) -> Vec<Node> {
        let list = node.child_nodes();
        (0..list.length()).filter_map(|i| list.item(i)).collect()
    }

    fn text(&self, node: &Node) -> Option<String> {
        if node.node_type() == Node::TEXT_NODE {
            Some(node.node_value().unwrap_or_default())
        } else {
            None
        }
    }

    fn set_visible(&mut self, node: &Node, visible: bool) {
        let Some(element) = node.dyn_ref::<HtmlElement>() else {
            return;
        };
        let value = if visible { self.display.as_str() } else { "none" };
        if let Err(e) = element.style().set_property("display", value) {
            log::warn!("failed to set display to {}: {:?}", value, e);
        }
    }

    fn set_class(&mut self, node: &Node, class: &str, enabled: bool) {
        let Some(element) = node.dyn_ref::<Element>() else {
            return;
        };
        let classes = element.class_list();
        let result = if enabled {
            classes.add_1(class)
        } else {
            classes.remove_1(class)
        };
        if let Err(e) = result {
            log::warn!("failed to update class {}: {:?}", class, e);
        }
    }

    fn append_to_parent(&mut self, node: &Node) {
        let Some(parent) = node.parent_node() else {
            log::warn!("cannot move entry: it has no parent");
            return;
        };
        if let Err(e) = parent.append_child(node) {
            log::warn!("failed to move entry: {:?}", e);
        }
    }
}
