/// Host element tree the searcher operates on.
///
/// The searcher never owns elements. It holds cloned handles and asks the
/// host to read text and to change display state through this trait, so the
/// same search logic drives the in-memory [`Document`](crate::Document) and a
/// browser DOM alike.
pub trait Dom {
    /// Cheap handle to a node in the host tree.
    type Node: Clone;

    /// Direct children of `node`, text and element nodes alike, in order.
    fn children(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// The value of `node` if it is a pure text node.
    fn text(&self, node: &Self::Node) -> Option<String>;

    /// Show (flex layout) or hide (removed from layout) `node`.
    fn set_visible(&mut self, node: &Self::Node, visible: bool);

    /// Add or remove a named marker class on `node`.
    fn set_class(&mut self, node: &Self::Node, class: &str, enabled: bool);

    /// Move `node` to the end of its parent's children.
    ///
    /// Nodes without a parent are left where they are.
    fn append_to_parent(&mut self, node: &Self::Node);
}
