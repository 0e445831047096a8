//! An owned, ordered document tree modeled on the DOM Level 3 Core node kinds.
//!
//! Every node has exactly one owner. Children live in a `Vec` in document order,
//! attributes live in an insertion-ordered [`AttributeMap`](named_node_map::AttributeMap),
//! and DTD entities and notations live in name-keyed maps on the [`DocumentType`](document_type::DocumentType).
//!
//! # Note
//! - There are no parent or sibling back-pointers. Code that needs the siblings of a node
//!   (for example the serializer) walks the parent's child list instead.
//! - `Clone` on any node is a deep copy.

use std::rc::Rc;

pub mod attr;
pub mod character_data;
pub mod document;
pub mod document_fragment;
pub mod document_type;
pub mod element;
pub mod entity;
pub mod entity_reference;
pub mod named_node_map;
pub mod node;
pub mod notation;
pub mod pi;

/// Error codes returned by tree mutations.
///
/// Only the codes this tree can actually raise are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum DOMException {
    /// If any Node is inserted somewhere it doesn't belong.
    #[error("the node cannot be inserted at this position")]
    HierarchyRequestErr = 3,
}

/// Constants `NodeType` in [Interface Node](https://www.w3.org/TR/2004/REC-DOM-Level-3-Core-20040407/DOM3-Core.html#core-ID-1950641247).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NodeType {
    Element = 1,
    Attribute = 2,
    Text = 3,
    CDATASection = 4,
    EntityReference = 5,
    Entity = 6,
    ProcessingInstruction = 7,
    Comment = 8,
    Document = 9,
    DocumentType = 10,
    DocumentFragment = 11,
    Notation = 12,
}

impl TryFrom<u16> for NodeType {
    type Error = anyhow::Error;
    fn try_from(value: u16) -> Result<Self, Self::Error> {
        use NodeType::*;
        match value {
            1 => Ok(Element),
            2 => Ok(Attribute),
            3 => Ok(Text),
            4 => Ok(CDATASection),
            5 => Ok(EntityReference),
            6 => Ok(Entity),
            7 => Ok(ProcessingInstruction),
            8 => Ok(Comment),
            9 => Ok(Document),
            10 => Ok(DocumentType),
            11 => Ok(DocumentFragment),
            12 => Ok(Notation),
            _ => Err(anyhow::anyhow!(
                "Invalid convert from value '{value}' to {}",
                std::any::type_name::<Self>()
            )),
        }
    }
}

/// Return `true` if `parent` and `child` are allowed to be parent and child.
/// Otherwise, return `false`.
///
/// | NodeType              | Allowed children                                                                          |
/// | :-------------------- | :---------------------------------------------------------------------------------------- |
/// | Document              | Element, ProcessingInstruction, Comment, DocumentType                                     |
/// | DocumentFragment      | Element, ProcessingInstruction, Comment, Text, CDATASection, EntityReference              |
/// | Element               | Element, ProcessingInstruction, Comment, Text, CDATASection, EntityReference              |
/// | others                | no children                                                                               |
pub(crate) fn check_vertical_hierarchy(parent: NodeType, child: NodeType) -> bool {
    use NodeType::*;
    match parent {
        Element | DocumentFragment => matches!(
            child,
            Element | Text | Comment | ProcessingInstruction | CDATASection | EntityReference
        ),
        Document => matches!(
            child,
            Element | ProcessingInstruction | Comment | DocumentType
        ),
        _ => false,
    }
}

/// Split a QName into its prefix and local part.
///
/// Return `None` if `name` has no prefix. A name starting with ':' is
/// "nasty but valid" and is not split.
///
/// # Note
/// This function does not perform validation.
#[doc(alias = "xmlSplitQName2")]
pub fn split_qname2(name: &str) -> Option<(&str, &str)> {
    if name.starts_with(':') {
        return None;
    }
    name.split_once(':')
}

/// Normalize a namespace URI received from the outside.
/// An empty URI means "no namespace".
pub(crate) fn non_empty_uri(uri: Option<&str>) -> Option<Rc<str>> {
    uri.filter(|uri| !uri.is_empty()).map(Rc::from)
}
