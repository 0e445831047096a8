use std::rc::Rc;

use crate::{
    error::{BuildError, ParseException},
    sax::{FEATURE_NAMESPACE_PREFIXES, FEATURE_NAMESPACES, FEATURE_REPORT_START_END_ENTITY, XmlReader},
    sax2::TreeBuilder,
};

use super::{
    DOMException, NodeType, check_vertical_hierarchy, document_type::DocumentType,
    element::Element, node::Node,
};

/// Implementation of [Document](https://www.w3.org/TR/2004/REC-DOM-Level-3-Core-20040407/DOM3-Core.html#core-i-Document)
/// interface on [1.4 Fundamental Interfaces: Core Module](https://www.w3.org/TR/2004/REC-DOM-Level-3-Core-20040407/DOM3-Core.html#core-ID-BBACDC08)
///
/// `clone` is a deep copy of the whole tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// [1.1.1 The DOM Structure Model](https://www.w3.org/TR/2004/REC-DOM-Level-3-Core-20040407/DOM3-Core.html#core-ID-1590626202)
    /// - `Element` (maximum of one)
    /// - `ProcessingInstruction`
    /// - `Comment`
    /// - `DocumentType` (maximum of one)
    children: Vec<Node>,
    /// Whether the content was built with namespace processing.
    namespace_processing: bool,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document whose document type has only a name.
    pub fn with_name(name: impl Into<Rc<str>>) -> Self {
        Self::with_doctype(DocumentType::new(name, None, None))
    }

    /// Create a document whose first child is `doctype`.
    pub fn with_doctype(doctype: DocumentType) -> Self {
        Self {
            children: vec![doctype.into()],
            namespace_processing: false,
        }
    }

    /// Implementation of `doctype` attribute.
    pub fn doctype(&self) -> Option<&DocumentType> {
        self.children.iter().find_map(|child| child.as_document_type())
    }

    pub(crate) fn doctype_mut(&mut self) -> Option<&mut DocumentType> {
        self.children.iter_mut().find_map(|child| match child {
            Node::DocumentType(doctype) => Some(doctype),
            _ => None,
        })
    }

    /// Implementation of `documentElement` attribute.
    pub fn document_element(&self) -> Option<&Element> {
        self.children.iter().find_map(|child| child.as_element())
    }

    /// Return the children in document order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub(crate) fn into_children(self) -> Vec<Node> {
        self.children
    }

    /// Whether the content was built with namespace processing.
    ///
    /// This decides whether the serializer writes namespace declarations for
    /// namespaced attributes.
    pub fn namespace_processing(&self) -> bool {
        self.namespace_processing
    }

    pub fn set_namespace_processing(&mut self, namespace_processing: bool) {
        self.namespace_processing = namespace_processing;
    }

    /// Remove all children and reset the namespace processing flag.
    pub fn clear(&mut self) {
        self.children.clear();
        self.namespace_processing = false;
    }

    /// Implementation of `appendChild` method.
    ///
    /// # Errors
    /// - `HierarchyRequestErr`: `node` cannot be a child of a document, or it is a
    ///   second `Element` or a second `DocumentType`.
    pub fn append_child(&mut self, node: impl Into<Node>) -> Result<(), DOMException> {
        let node = node.into();
        let node_type = node.node_type();
        if !check_vertical_hierarchy(NodeType::Document, node_type) {
            return Err(DOMException::HierarchyRequestErr);
        }
        if matches!(node_type, NodeType::Element | NodeType::DocumentType)
            && self.children.iter().any(|child| child.node_type() == node_type)
        {
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

    /// Follow a path of child indices from this document to an element.
    pub(crate) fn element_at(&self, path: &[usize]) -> Option<&Element> {
        let (&first, rest) = path.split_first()?;
        let mut elem = self.children.get(first)?.as_element()?;
        for &index in rest {
            elem = elem.children().get(index)?.as_element()?;
        }
        Some(elem)
    }

    pub(crate) fn element_at_mut(&mut self, path: &[usize]) -> Option<&mut Element> {
        let (&first, rest) = path.split_first()?;
        let mut elem = self.children.get_mut(first)?.as_element_mut()?;
        for &index in rest {
            elem = elem.child_mut(index)?.as_element_mut()?;
        }
        Some(elem)
    }

    /// Replace the content of this document with what `reader` reports.
    ///
    /// The namespace processing flag is `namespaces && !namespace-prefixes` of
    /// the reader features. On failure the error record of the reader is returned,
    /// and the part of the tree built before the failure is kept.
    ///
    /// # Errors
    /// Readers with entity boundary reporting enabled are rejected before anything
    /// is read. The error record then has position `0`.
    #[doc(alias = "setContent")]
    pub fn set_content(&mut self, reader: &mut dyn XmlReader) -> Result<(), ParseException> {
        self.clear();
        let namespace_processing =
            reader.feature(FEATURE_NAMESPACES) && !reader.feature(FEATURE_NAMESPACE_PREFIXES);
        self.namespace_processing = namespace_processing;
        if reader.feature(FEATURE_REPORT_START_END_ENTITY) {
            return Err(BuildError::UnsupportedFeature {
                feature: FEATURE_REPORT_START_END_ENTITY.to_owned(),
            }
            .into());
        }

        let mut builder = TreeBuilder::new(namespace_processing);
        let success = reader.parse(&mut builder);
        let last_error = builder.last_error().cloned();
        *self = builder.into_document();
        if success {
            Ok(())
        } else {
            Err(last_error.unwrap_or_default())
        }
    }
}
