use std::rc::Rc;

use super::{
    DOMException, NodeType, attr::Attr, check_vertical_hierarchy, named_node_map::AttributeMap,
    node::Node, non_empty_uri, split_qname2,
};

/// Implementation of [Element](https://www.w3.org/TR/2004/REC-DOM-Level-3-Core-20040407/DOM3-Core.html#core-ID-745549614)
/// interface on [1.4 Fundamental Interfaces: Core Module](https://www.w3.org/TR/2004/REC-DOM-Level-3-Core-20040407/DOM3-Core.html#core-ID-BBACDC08)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Implementation of `tagName` for `Element`.
    /// as same as `nodeName` for `Node`.
    ///
    /// If `local_name` is `Some`, this field represents a QName.
    tag_name: Rc<str>,
    /// Implementation of `namespaceURI` for `Node`.
    namespace_uri: Option<Rc<str>>,
    /// Implementation of `prefix` for `Node`.
    prefix: Option<Rc<str>>,
    /// Implementation of `localName` for `Node`.
    ///
    /// `None` for elements created without namespace processing.
    local_name: Option<Rc<str>>,
    /// Implementation of `attributes` attribute.
    attributes: AttributeMap,
    /// [1.1.1 The DOM Structure Model](https://www.w3.org/TR/2004/REC-DOM-Level-3-Core-20040407/DOM3-Core.html#core-ID-1590626202)
    /// - `Element`
    /// - `Text`
    /// - `Comment`
    /// - `ProcessingInstruction`
    /// - `CDATASection`
    /// - `EntityReference`
    children: Vec<Node>,
}

impl Element {
    /// Create an element that is not namespace-aware (DOM Level 1).
    #[doc(alias = "createElement")]
    pub fn new(tag_name: impl Into<Rc<str>>) -> Self {
        Self {
            tag_name: tag_name.into(),
            namespace_uri: None,
            prefix: None,
            local_name: None,
            attributes: AttributeMap::new(),
            children: vec![],
        }
    }

    /// Create a namespace-aware element.
    ///
    /// The prefix and local name are taken from `qname`, and an empty
    /// `namespace_uri` is treated as no namespace.
    #[doc(alias = "createElementNS")]
    pub fn new_ns(namespace_uri: Option<&str>, qname: impl Into<Rc<str>>) -> Self {
        let tag_name: Rc<str> = qname.into();
        let (prefix, local_name) = match split_qname2(&tag_name) {
            Some((prefix, local)) => (Some(prefix.into()), local.into()),
            None => (None, tag_name.clone()),
        };
        Self {
            namespace_uri: non_empty_uri(namespace_uri),
            prefix,
            local_name: Some(local_name),
            tag_name,
            attributes: AttributeMap::new(),
            children: vec![],
        }
    }

    /// Implementation of `tagName` attribute.
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Implementation of `namespaceURI` attribute.
    pub fn namespace_uri(&self) -> Option<&str> {
        self.namespace_uri.as_deref()
    }

    /// Implementation of `prefix` attribute.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Implementation of `localName` attribute.
    pub fn local_name(&self) -> Option<&str> {
        self.local_name.as_deref()
    }

    /// Implementation of `attributes` attribute.
    pub fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    /// Implementation of `hasAttributes` method.
    pub fn has_attributes(&self) -> bool {
        !self.attributes.is_empty()
    }

    /// Implementation of [`getAttribute`](https://www.w3.org/TR/2004/REC-DOM-Level-3-Core-20040407/DOM3-Core.html#core-ID-666EE0F9) method.
    ///
    /// Return `None` instead of an empty string if the attribute does not exist.
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get_named_item(name).map(|attr| attr.value())
    }

    /// Implementation of [`setAttribute`](https://www.w3.org/TR/2004/REC-DOM-Level-3-Core-20040407/DOM3-Core.html#core-ID-F68F082) method.
    ///
    /// # Specification
    /// ```text
    /// Adds a new attribute. If an attribute with that name is already present in the
    /// element, its value is changed to be that of the value parameter. This value is
    /// a simple string; it is not parsed as it is being set. So any markup (such as
    /// syntax to be recognized as an entity reference) is treated as literal text, and
    /// needs to be appropriately escaped by the implementation when it is written out.
    /// ```
    pub fn set_attribute(&mut self, name: impl Into<Rc<str>>, value: impl Into<Rc<str>>) {
        let name: Rc<str> = name.into();
        match self.attributes.get_named_item_mut(&name) {
            Some(attr) => {
                attr.set_value(value);
            }
            None => {
                self.attributes.set_named_item(Attr::new(name, value));
            }
        }
    }

    /// Implementation of [`getAttributeNS`](https://www.w3.org/TR/2004/REC-DOM-Level-3-Core-20040407/DOM3-Core.html#core-ID-ElGetAttrNS) method.
    pub fn get_attribute_ns(&self, namespace_uri: Option<&str>, local_name: &str) -> Option<&str> {
        self.attributes
            .get_named_item_ns(namespace_uri, local_name)
            .map(|attr| attr.value())
    }

    /// Implementation of [`setAttributeNS`](https://www.w3.org/TR/2004/REC-DOM-Level-3-Core-20040407/DOM3-Core.html#core-ID-ElSetAttrNS) method.
    ///
    /// # Specification
    /// ```text
    /// Adds a new attribute. If an attribute with the same local name and namespace URI
    /// is already present on the element, its prefix is changed to be the prefix part
    /// of the qualifiedName, and its value is changed to be the value parameter.
    /// ```
    pub fn set_attribute_ns(
        &mut self,
        namespace_uri: Option<&str>,
        qname: impl Into<Rc<str>>,
        value: impl Into<Rc<str>>,
    ) {
        self.attributes
            .set_named_item_ns(Attr::new_ns(namespace_uri, qname, value));
    }

    /// Remove the attribute named `name` and return it.
    pub fn remove_attribute(&mut self, name: &str) -> Option<Attr> {
        self.attributes.remove_named_item(name)
    }

    /// Return the children in document order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Implementation of `hasChildNodes` method.
    pub fn has_child_nodes(&self) -> bool {
        !self.children.is_empty()
    }

    /// Implementation of `appendChild` method.
    ///
    /// # Errors
    /// - `HierarchyRequestErr`: `node` is a kind of node an element cannot contain.
    pub fn append_child(&mut self, node: impl Into<Node>) -> Result<(), DOMException> {
        let node = node.into();
        if !check_vertical_hierarchy(NodeType::Element, node.node_type()) {
            return Err(DOMException::HierarchyRequestErr);
        }
        self.children.push(node);
        Ok(())
    }

    /// Append `node` without a hierarchy check and return its index.
    pub(crate) fn push_child(&mut self, node: Node) -> usize {
        self.children.push(node);
        self.children.len() - 1
    }

    pub(crate) fn child_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.children.get_mut(index)
    }
}
