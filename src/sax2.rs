//! The SAX2 handler that builds a [`Document`] from parse events.
//!
//! The builder keeps the insertion point as a path of child indices from the
//! document instead of a pointer into the tree, so the tree can be moved or
//! rebuilt while it is under construction.

use log::{debug, error, trace, warn};

use crate::{
    dom::{
        character_data::{CDATASection, Comment, Text},
        document::Document,
        document_type::DocumentType,
        element::Element,
        entity::Entity,
        entity_reference::EntityReference,
        node::Node,
        notation::{Notation, NotationIdentifier},
        pi::ProcessingInstruction,
    },
    error::BuildError,
    sax::{FEATURE_REPORT_START_END_ENTITY, ParseException, SaxAttribute, SaxHandler},
};

/// Builds a document tree from the events of one parse.
///
/// A builder is bound to exactly one parse. Take the result with
/// [`TreeBuilder::into_document`].
#[derive(Debug, Default)]
pub struct TreeBuilder {
    doc: Document,
    /// Child indices from the document to the current insertion node.
    /// Empty if no element is open.
    current: Vec<usize>,
    namespace_processing: bool,
    in_cdata: bool,
    last_error: Option<ParseException>,
    warnings: Vec<ParseException>,
}

impl TreeBuilder {
    pub fn new(namespace_processing: bool) -> Self {
        let mut doc = Document::new();
        doc.set_namespace_processing(namespace_processing);
        Self {
            doc,
            namespace_processing,
            ..Default::default()
        }
    }

    /// The document built so far.
    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn into_document(self) -> Document {
        self.doc
    }

    pub fn namespace_processing(&self) -> bool {
        self.namespace_processing
    }

    /// The error that stopped the parse, if any.
    pub fn last_error(&self) -> Option<&ParseException> {
        self.last_error.as_ref()
    }

    /// Warnings and recoverable errors reported by the reader, in order.
    pub fn warnings(&self) -> &[ParseException] {
        &self.warnings
    }

    /// The element new nodes are appended to, if any is open.
    pub fn current_element(&self) -> Option<&Element> {
        self.doc.element_at(&self.current)
    }

    fn current_element_mut(&mut self) -> Option<&mut Element> {
        self.doc.element_at_mut(&self.current)
    }

    /// Append `node` to the current element, or to the document if no element is open.
    /// Return the index of `node` in its new parent.
    fn append_to_current(&mut self, node: Node) -> usize {
        match self.current_element_mut() {
            Some(elem) => elem.push_child(node),
            None => self.doc.push_child(node),
        }
    }

    /// Record `err` as the reason the parse stopped and return it.
    ///
    /// The reader reports the same error back through `fatal_error` with its
    /// position, which replaces this record and logs it.
    fn fail(&mut self, err: BuildError) -> Result<(), BuildError> {
        debug!("{err}");
        self.last_error = Some(ParseException::from(err.clone()));
        Err(err)
    }

    /// Attach a declaration to the document type. Declarations outside of a
    /// document type are dropped.
    fn with_doctype(&mut self, what: &str, name: &str, f: impl FnOnce(&mut DocumentType)) {
        match self.doc.doctype_mut() {
            Some(doctype) => f(doctype),
            None => debug!("{what} '{name}' outside of a document type is dropped"),
        }
    }
}

impl SaxHandler for TreeBuilder {
    fn start_document(&mut self) -> Result<(), BuildError> {
        trace!("start_document");
        Ok(())
    }

    fn end_document(&mut self) -> Result<(), BuildError> {
        trace!("end_document");
        if let Some(open) = self.current_element() {
            let open = open.tag_name().to_owned();
            return self.fail(BuildError::UnterminatedDocument { open });
        }
        Ok(())
    }

    fn start_element(
        &mut self,
        namespace_uri: &str,
        qname: &str,
        attributes: &[SaxAttribute],
    ) -> Result<(), BuildError> {
        trace!("start_element {{{namespace_uri}}}{qname}");
        let mut elem = if self.namespace_processing {
            Element::new_ns(Some(namespace_uri), qname)
        } else {
            Element::new(qname)
        };
        for attr in attributes {
            if self.namespace_processing {
                elem.set_attribute_ns(
                    Some(attr.namespace_uri.as_str()),
                    attr.qname.as_str(),
                    attr.value.as_str(),
                );
            } else {
                elem.set_attribute(attr.qname.as_str(), attr.value.as_str());
            }
        }

        let index = self.append_to_current(elem.into());
        self.current.push(index);
        Ok(())
    }

    fn end_element(&mut self, namespace_uri: &str, qname: &str) -> Result<(), BuildError> {
        trace!("end_element {{{namespace_uri}}}{qname}");
        let Some(current) = self.current_element() else {
            return self.fail(BuildError::UnbalancedEndElement {
                name: qname.to_owned(),
            });
        };
        // without namespace processing an element is identified by its qualified name alone
        let uri_differs =
            self.namespace_processing && current.namespace_uri().unwrap_or_default() != namespace_uri;
        if uri_differs || current.tag_name() != qname {
            let start = current.tag_name().to_owned();
            return self.fail(BuildError::TagMismatch {
                start,
                end: qname.to_owned(),
            });
        }

        if let &[index] = self.current.as_slice() {
            let earlier = self.doc.children()[..index]
                .iter()
                .any(|child| child.as_element().is_some());
            if earlier {
                return self.fail(BuildError::ExtraRootElement {
                    name: qname.to_owned(),
                });
            }
        }
        self.current.pop();
        Ok(())
    }

    fn characters(&mut self, text: &str) -> Result<(), BuildError> {
        trace!("characters {text:?}");
        let node = if self.in_cdata {
            Node::from(CDATASection::new(text))
        } else {
            Node::from(Text::new(text))
        };
        match self.current_element_mut() {
            Some(elem) => {
                elem.push_child(node);
            }
            None => debug!("character data outside of the document element is dropped"),
        }
        Ok(())
    }

    fn processing_instruction(&mut self, target: &str, data: &str) -> Result<(), BuildError> {
        trace!("processing_instruction {target} {data}");
        self.append_to_current(ProcessingInstruction::new(target, data).into());
        Ok(())
    }

    fn skipped_entity(&mut self, name: &str) -> Result<(), BuildError> {
        trace!("skipped_entity {name}");
        match self.current_element_mut() {
            Some(elem) => {
                elem.push_child(EntityReference::new(name).into());
            }
            None => debug!("reference to '{name}' outside of the document element is dropped"),
        }
        Ok(())
    }

    fn comment(&mut self, text: &str) -> Result<(), BuildError> {
        trace!("comment {text:?}");
        self.append_to_current(Comment::new(text).into());
        Ok(())
    }

    fn start_cdata(&mut self) -> Result<(), BuildError> {
        self.in_cdata = true;
        Ok(())
    }

    fn end_cdata(&mut self) -> Result<(), BuildError> {
        self.in_cdata = false;
        Ok(())
    }

    /// Rebuild the document around a new document type.
    ///
    /// The nodes that were already built move to the new document in their
    /// original order, after the document type. A document type that was
    /// reported earlier is replaced.
    fn start_dtd(
        &mut self,
        name: &str,
        public_id: Option<&str>,
        system_id: Option<&str>,
    ) -> Result<(), BuildError> {
        debug!("start_dtd {name} public={public_id:?} system={system_id:?}");
        let mut doc = Document::with_doctype(DocumentType::new(name, public_id, system_id));
        doc.set_namespace_processing(self.namespace_processing);

        let old = std::mem::take(&mut self.doc);
        let mut removed_before_current = 0;
        for (index, child) in old.into_children().into_iter().enumerate() {
            if child.as_document_type().is_some() {
                if self.current.first().is_some_and(|&first| index < first) {
                    removed_before_current += 1;
                }
                continue;
            }
            doc.push_child(child);
        }
        if let Some(first) = self.current.first_mut() {
            *first = *first + 1 - removed_before_current;
        }
        self.doc = doc;
        Ok(())
    }

    /// Reporting entity boundaries would require entity reference subtrees,
    /// which this tree does not build.
    fn start_entity(&mut self, name: &str) -> Result<(), BuildError> {
        trace!("start_entity {name}");
        self.fail(BuildError::UnsupportedFeature {
            feature: FEATURE_REPORT_START_END_ENTITY.to_owned(),
        })
    }

    fn notation_decl(
        &mut self,
        name: &str,
        public_id: Option<&str>,
        system_id: Option<&str>,
    ) -> Result<(), BuildError> {
        trace!("notation_decl {name}");
        let notation = Notation::new(name, NotationIdentifier::from_ids(public_id, system_id));
        self.with_doctype("notation", name, |doctype| {
            doctype.add_notation(notation);
        });
        Ok(())
    }

    fn unparsed_entity_decl(
        &mut self,
        name: &str,
        public_id: Option<&str>,
        system_id: Option<&str>,
        notation_name: &str,
    ) -> Result<(), BuildError> {
        trace!("unparsed_entity_decl {name}");
        let entity = Entity::new_unparsed(name, public_id, system_id, notation_name);
        self.with_doctype("entity", name, |doctype| {
            doctype.add_entity(entity);
        });
        Ok(())
    }

    /// References to internal entities are substituted by the reader, so the
    /// declaration is not kept.
    fn internal_entity_decl(&mut self, name: &str, value: &str) -> Result<(), BuildError> {
        trace!("internal_entity_decl {name} {value:?}");
        Ok(())
    }

    fn external_entity_decl(
        &mut self,
        name: &str,
        public_id: Option<&str>,
        system_id: Option<&str>,
    ) -> Result<(), BuildError> {
        trace!("external_entity_decl {name}");
        let entity = Entity::new_external(name, public_id, system_id);
        self.with_doctype("entity", name, |doctype| {
            doctype.add_entity(entity);
        });
        Ok(())
    }

    fn warning(&mut self, exception: &ParseException) -> bool {
        warn!("warning: {exception}");
        self.warnings.push(exception.clone());
        true
    }

    fn error(&mut self, exception: &ParseException) -> bool {
        warn!("error: {exception}");
        self.warnings.push(exception.clone());
        true
    }

    fn fatal_error(&mut self, exception: &ParseException) -> bool {
        error!("fatal error: {exception}");
        self.last_error = Some(exception.clone());
        false
    }
}
