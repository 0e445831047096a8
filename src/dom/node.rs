use super::{
    NodeType,
    attr::Attr,
    character_data::{CDATASection, CharacterData, Comment, Text},
    document::Document,
    document_fragment::DocumentFragment,
    document_type::DocumentType,
    element::Element,
    entity::Entity,
    entity_reference::EntityReference,
    notation::Notation,
    pi::ProcessingInstruction,
};

/// A node that can be placed in the child list of a `Document`, an `Element` or
/// a `DocumentFragment`.
///
/// Which variants are allowed under which parent is checked by `append_child`
/// of each parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(Text),
    CDATASection(CDATASection),
    EntityReference(EntityReference),
    ProcessingInstruction(ProcessingInstruction),
    Comment(Comment),
    DocumentType(DocumentType),
}

impl Node {
    /// Implementation of `nodeType` attribute.
    pub fn node_type(&self) -> NodeType {
        self.as_node_ref().node_type()
    }

    /// Borrow this node as a [`NodeRef`].
    pub fn as_node_ref(&self) -> NodeRef<'_> {
        match self {
            Node::Element(elem) => NodeRef::Element(elem),
            Node::Text(text) => NodeRef::Text(text),
            Node::CDATASection(cdata) => NodeRef::CDATASection(cdata),
            Node::EntityReference(entref) => NodeRef::EntityReference(entref),
            Node::ProcessingInstruction(pi) => NodeRef::ProcessingInstruction(pi),
            Node::Comment(comment) => NodeRef::Comment(comment),
            Node::DocumentType(doctype) => NodeRef::DocumentType(doctype),
        }
    }

    /// Check if this node is `Text` or `CDATASection`.
    pub fn is_text_like(&self) -> bool {
        matches!(self, Node::Text(_) | Node::CDATASection(_))
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(elem) => Some(elem),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(elem) => Some(elem),
            _ => None,
        }
    }

    pub fn as_document_type(&self) -> Option<&DocumentType> {
        match self {
            Node::DocumentType(doctype) => Some(doctype),
            _ => None,
        }
    }
}

macro_rules! impl_from_for_node {
    ( $( $var:ident ),* ) => {
        $(
            impl From<$var> for Node {
                fn from(value: $var) -> Self {
                    Node::$var(value)
                }
            }
        )*
    };
}

impl_from_for_node!(
    Element,
    Text,
    CDATASection,
    EntityReference,
    ProcessingInstruction,
    Comment,
    DocumentType
);

/// A borrowed view of any node of the tree, including the nodes that never
/// appear in a child list.
///
/// The serializer dispatches on this type, so every kind of node is matched
/// exhaustively in one place.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Element(&'a Element),
    Attribute(&'a Attr),
    Text(&'a Text),
    CDATASection(&'a CDATASection),
    EntityReference(&'a EntityReference),
    Entity(&'a Entity),
    ProcessingInstruction(&'a ProcessingInstruction),
    Comment(&'a Comment),
    Document(&'a Document),
    DocumentType(&'a DocumentType),
    DocumentFragment(&'a DocumentFragment),
    Notation(&'a Notation),
}

impl<'a> NodeRef<'a> {
    /// Implementation of `nodeType` attribute.
    pub fn node_type(&self) -> NodeType {
        match self {
            NodeRef::Element(_) => NodeType::Element,
            NodeRef::Attribute(_) => NodeType::Attribute,
            NodeRef::Text(_) => NodeType::Text,
            NodeRef::CDATASection(_) => NodeType::CDATASection,
            NodeRef::EntityReference(_) => NodeType::EntityReference,
            NodeRef::Entity(_) => NodeType::Entity,
            NodeRef::ProcessingInstruction(_) => NodeType::ProcessingInstruction,
            NodeRef::Comment(_) => NodeType::Comment,
            NodeRef::Document(_) => NodeType::Document,
            NodeRef::DocumentType(_) => NodeType::DocumentType,
            NodeRef::DocumentFragment(_) => NodeType::DocumentFragment,
            NodeRef::Notation(_) => NodeType::Notation,
        }
    }

    /// Implementation of `nodeName` attribute.
    ///
    /// # Specification
    /// ```text
    /// The name of this node, depending on its type; see the table above.
    /// ```
    pub fn node_name(&self) -> &'a str {
        match *self {
            NodeRef::Element(elem) => elem.tag_name(),
            NodeRef::Attribute(attr) => attr.name(),
            NodeRef::Text(_) => "#text",
            NodeRef::CDATASection(_) => "#cdata-section",
            NodeRef::EntityReference(entref) => entref.name(),
            NodeRef::Entity(ent) => ent.name(),
            NodeRef::ProcessingInstruction(pi) => pi.target(),
            NodeRef::Comment(_) => "#comment",
            NodeRef::Document(_) => "#document",
            NodeRef::DocumentType(doctype) => doctype.name(),
            NodeRef::DocumentFragment(_) => "#document-fragment",
            NodeRef::Notation(nota) => nota.name(),
        }
    }

    /// Implementation of `nodeValue` attribute.
    pub fn node_value(&self) -> Option<&'a str> {
        match *self {
            NodeRef::Attribute(attr) => Some(attr.value()),
            NodeRef::Text(text) => Some(text.data()),
            NodeRef::CDATASection(cdata) => Some(cdata.data()),
            NodeRef::Comment(comment) => Some(comment.data()),
            NodeRef::ProcessingInstruction(pi) => Some(pi.data()),
            _ => None,
        }
    }

    /// Check if this node is `Text` or `CDATASection`.
    pub fn is_text_like(&self) -> bool {
        matches!(self, NodeRef::Text(_) | NodeRef::CDATASection(_))
    }

    /// Return the child list if this kind of node can have children.
    pub fn children(&self) -> &'a [Node] {
        match *self {
            NodeRef::Element(elem) => elem.children(),
            NodeRef::Document(doc) => doc.children(),
            NodeRef::DocumentFragment(frag) => frag.children(),
            _ => &[],
        }
    }
}

macro_rules! impl_from_for_node_ref {
    ( $( $var:ident ),* ) => {
        $(
            impl<'a> From<&'a $var> for NodeRef<'a> {
                fn from(value: &'a $var) -> Self {
                    NodeRef::$var(value)
                }
            }
        )*
    };
}

impl_from_for_node_ref!(
    Element,
    Text,
    CDATASection,
    EntityReference,
    Entity,
    ProcessingInstruction,
    Comment,
    Document,
    DocumentType,
    DocumentFragment,
    Notation
);

impl<'a> From<&'a Attr> for NodeRef<'a> {
    fn from(value: &'a Attr) -> Self {
        NodeRef::Attribute(value)
    }
}

impl<'a> From<&'a Node> for NodeRef<'a> {
    fn from(value: &'a Node) -> Self {
        value.as_node_ref()
    }
}
