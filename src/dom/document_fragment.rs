use super::{DOMException, NodeType, check_vertical_hierarchy, node::Node};

/// Implementation of [DocumentFragment](https://www.w3.org/TR/2004/REC-DOM-Level-3-Core-20040407/DOM3-Core.html#core-B63ED1A3)
/// interface on [1.4 Fundamental Interfaces: Core Module](https://www.w3.org/TR/2004/REC-DOM-Level-3-Core-20040407/DOM3-Core.html#core-ID-BBACDC08)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentFragment {
    /// [1.1.1 The DOM Structure Model](https://www.w3.org/TR/2004/REC-DOM-Level-3-Core-20040407/DOM3-Core.html#core-ID-1590626202)
    /// - `Element`
    /// - `ProcessingInstruction`
    /// - `Comment`
    /// - `Text`
    /// - `CDATASection`
    /// - `EntityReference`
    children: Vec<Node>,
}

impl DocumentFragment {
    #[doc(alias = "createDocumentFragment")]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Implementation of `appendChild` method.
    pub fn append_child(&mut self, node: impl Into<Node>) -> Result<(), DOMException> {
        let node = node.into();
        if !check_vertical_hierarchy(NodeType::DocumentFragment, node.node_type()) {
            return Err(DOMException::HierarchyRequestErr);
        }
        self.children.push(node);
        Ok(())
    }
}
