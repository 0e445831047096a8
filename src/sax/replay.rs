//! An [`XmlReader`] that replays a recorded sequence of events.
//!
//! This is what a tokenizer that has already run looks like from the tree
//! builder's side. Every recorded event carries the position it was reported at,
//! and that position is what a failing callback is reported with.
//!
//! ```
//! use xmlcompat::dom::document::Document;
//! use xmlcompat::sax::replay::EventStream;
//!
//! let mut events = EventStream::new();
//! events
//!     .start_element("", "a", &[("", "id", "1")])
//!     .characters("text")
//!     .end_element("", "a");
//!
//! let mut doc = Document::new();
//! doc.set_content(&mut events).unwrap();
//! assert_eq!(doc.to_string_indent(1), "<a id=\"1\">text</a>\n");
//! ```

use std::collections::HashMap;

use log::trace;

use super::{
    FEATURE_NAMESPACE_PREFIXES, FEATURE_NAMESPACES, ParseException, SaxAttribute, SaxHandler,
    XmlReader,
};
use crate::error::BuildError;

/// One recorded parse event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaxEvent {
    StartPrefixMapping {
        prefix: String,
        uri: String,
    },
    EndPrefixMapping(String),
    StartElement {
        namespace_uri: String,
        qname: String,
        attributes: Vec<SaxAttribute>,
    },
    EndElement {
        namespace_uri: String,
        qname: String,
    },
    Characters(String),
    IgnorableWhitespace(String),
    ProcessingInstruction {
        target: String,
        data: String,
    },
    SkippedEntity(String),
    Comment(String),
    StartCDATA,
    EndCDATA,
    StartDTD {
        name: String,
        public_id: Option<String>,
        system_id: Option<String>,
    },
    EndDTD,
    StartEntity(String),
    EndEntity(String),
    NotationDecl {
        name: String,
        public_id: Option<String>,
        system_id: Option<String>,
    },
    UnparsedEntityDecl {
        name: String,
        public_id: Option<String>,
        system_id: Option<String>,
        notation_name: String,
    },
    InternalEntityDecl {
        name: String,
        value: String,
    },
    ExternalEntityDecl {
        name: String,
        public_id: Option<String>,
        system_id: Option<String>,
    },
    ElementDecl {
        name: String,
        content_model: String,
    },
    AttributeDecl {
        element_name: String,
        attribute_name: String,
        attribute_type: String,
        value_default: String,
        value: Option<String>,
    },
    Warning(String),
    Error(String),
    FatalError(String),
}

/// A recorded event stream, positioned and replayable.
///
/// Events are recorded with the position most recently set by [`EventStream::at`].
/// The builder methods return `&mut Self` so that a document can be written as one
/// chain of calls.
#[derive(Debug, Clone)]
pub struct EventStream {
    events: Vec<(SaxEvent, usize, usize)>,
    features: HashMap<String, bool>,
    line: usize,
    column: usize,
}

impl Default for EventStream {
    fn default() -> Self {
        Self::new()
    }
}

impl EventStream {
    /// Create an empty stream with namespace processing enabled and
    /// `namespace-prefixes` disabled, which is the default of a SAX2 reader.
    pub fn new() -> Self {
        let mut features = HashMap::new();
        features.insert(FEATURE_NAMESPACES.to_owned(), true);
        features.insert(FEATURE_NAMESPACE_PREFIXES.to_owned(), false);
        Self {
            events: vec![],
            features,
            line: 1,
            column: 1,
        }
    }

    pub fn set_feature(&mut self, name: &str, enable: bool) -> &mut Self {
        self.features.insert(name.to_owned(), enable);
        self
    }

    /// Set the position that following events are recorded with.
    pub fn at(&mut self, line: usize, column: usize) -> &mut Self {
        self.line = line;
        self.column = column;
        self
    }

    /// Record `event` at the current position.
    pub fn push(&mut self, event: SaxEvent) -> &mut Self {
        self.events.push((event, self.line, self.column));
        self
    }

    pub fn events(&self) -> impl Iterator<Item = &SaxEvent> {
        self.events.iter().map(|(event, _, _)| event)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Record a start tag. Attributes are `(namespace URI, qualified name, value)`.
    pub fn start_element(
        &mut self,
        namespace_uri: &str,
        qname: &str,
        attributes: &[(&str, &str, &str)],
    ) -> &mut Self {
        let attributes = attributes
            .iter()
            .map(|&(uri, qname, value)| SaxAttribute::new(uri, qname, value))
            .collect();
        self.push(SaxEvent::StartElement {
            namespace_uri: namespace_uri.to_owned(),
            qname: qname.to_owned(),
            attributes,
        })
    }

    pub fn end_element(&mut self, namespace_uri: &str, qname: &str) -> &mut Self {
        self.push(SaxEvent::EndElement {
            namespace_uri: namespace_uri.to_owned(),
            qname: qname.to_owned(),
        })
    }

    /// Record an empty-element tag, which a reader reports as a start and an end.
    pub fn empty_element(
        &mut self,
        namespace_uri: &str,
        qname: &str,
        attributes: &[(&str, &str, &str)],
    ) -> &mut Self {
        self.start_element(namespace_uri, qname, attributes)
            .end_element(namespace_uri, qname)
    }

    pub fn characters(&mut self, text: &str) -> &mut Self {
        self.push(SaxEvent::Characters(text.to_owned()))
    }

    pub fn comment(&mut self, text: &str) -> &mut Self {
        self.push(SaxEvent::Comment(text.to_owned()))
    }

    pub fn processing_instruction(&mut self, target: &str, data: &str) -> &mut Self {
        self.push(SaxEvent::ProcessingInstruction {
            target: target.to_owned(),
            data: data.to_owned(),
        })
    }

    pub fn skipped_entity(&mut self, name: &str) -> &mut Self {
        self.push(SaxEvent::SkippedEntity(name.to_owned()))
    }

    /// Record a whole CDATA section.
    pub fn cdata(&mut self, text: &str) -> &mut Self {
        self.push(SaxEvent::StartCDATA)
            .characters(text)
            .push(SaxEvent::EndCDATA)
    }

    pub fn start_dtd(
        &mut self,
        name: &str,
        public_id: Option<&str>,
        system_id: Option<&str>,
    ) -> &mut Self {
        self.push(SaxEvent::StartDTD {
            name: name.to_owned(),
            public_id: public_id.map(str::to_owned),
            system_id: system_id.map(str::to_owned),
        })
    }

    pub fn end_dtd(&mut self) -> &mut Self {
        self.push(SaxEvent::EndDTD)
    }

    pub fn notation_decl(
        &mut self,
        name: &str,
        public_id: Option<&str>,
        system_id: Option<&str>,
    ) -> &mut Self {
        self.push(SaxEvent::NotationDecl {
            name: name.to_owned(),
            public_id: public_id.map(str::to_owned),
            system_id: system_id.map(str::to_owned),
        })
    }

    pub fn unparsed_entity_decl(
        &mut self,
        name: &str,
        public_id: Option<&str>,
        system_id: Option<&str>,
        notation_name: &str,
    ) -> &mut Self {
        self.push(SaxEvent::UnparsedEntityDecl {
            name: name.to_owned(),
            public_id: public_id.map(str::to_owned),
            system_id: system_id.map(str::to_owned),
            notation_name: notation_name.to_owned(),
        })
    }

    pub fn internal_entity_decl(&mut self, name: &str, value: &str) -> &mut Self {
        self.push(SaxEvent::InternalEntityDecl {
            name: name.to_owned(),
            value: value.to_owned(),
        })
    }

    pub fn external_entity_decl(
        &mut self,
        name: &str,
        public_id: Option<&str>,
        system_id: Option<&str>,
    ) -> &mut Self {
        self.push(SaxEvent::ExternalEntityDecl {
            name: name.to_owned(),
            public_id: public_id.map(str::to_owned),
            system_id: system_id.map(str::to_owned),
        })
    }

    pub fn element_decl(&mut self, name: &str, content_model: &str) -> &mut Self {
        self.push(SaxEvent::ElementDecl {
            name: name.to_owned(),
            content_model: content_model.to_owned(),
        })
    }

    /// Record an attribute list declaration for a single attribute.
    pub fn attribute_decl(
        &mut self,
        element_name: &str,
        attribute_name: &str,
        attribute_type: &str,
        value_default: &str,
        value: Option<&str>,
    ) -> &mut Self {
        self.push(SaxEvent::AttributeDecl {
            element_name: element_name.to_owned(),
            attribute_name: attribute_name.to_owned(),
            attribute_type: attribute_type.to_owned(),
            value_default: value_default.to_owned(),
            value: value.map(str::to_owned),
        })
    }

    pub fn warning(&mut self, message: &str) -> &mut Self {
        self.push(SaxEvent::Warning(message.to_owned()))
    }

    pub fn error(&mut self, message: &str) -> &mut Self {
        self.push(SaxEvent::Error(message.to_owned()))
    }

    pub fn fatal_error(&mut self, message: &str) -> &mut Self {
        self.push(SaxEvent::FatalError(message.to_owned()))
    }
}

/// Deliver one event. `Ok(false)` means the handler asked to stop.
fn dispatch(
    event: &SaxEvent,
    handler: &mut dyn SaxHandler,
    line: usize,
    column: usize,
) -> Result<bool, BuildError> {
    use SaxEvent::*;

    trace!("replay {event:?} at {line}:{column}");
    match event {
        StartPrefixMapping { prefix, uri } => handler.start_prefix_mapping(prefix, uri)?,
        EndPrefixMapping(prefix) => handler.end_prefix_mapping(prefix)?,
        StartElement {
            namespace_uri,
            qname,
            attributes,
        } => handler.start_element(namespace_uri, qname, attributes)?,
        EndElement {
            namespace_uri,
            qname,
        } => handler.end_element(namespace_uri, qname)?,
        Characters(text) => handler.characters(text)?,
        IgnorableWhitespace(text) => handler.ignorable_whitespace(text)?,
        ProcessingInstruction { target, data } => handler.processing_instruction(target, data)?,
        SkippedEntity(name) => handler.skipped_entity(name)?,
        Comment(text) => handler.comment(text)?,
        StartCDATA => handler.start_cdata()?,
        EndCDATA => handler.end_cdata()?,
        StartDTD {
            name,
            public_id,
            system_id,
        } => handler.start_dtd(name, public_id.as_deref(), system_id.as_deref())?,
        EndDTD => handler.end_dtd()?,
        StartEntity(name) => handler.start_entity(name)?,
        EndEntity(name) => handler.end_entity(name)?,
        NotationDecl {
            name,
            public_id,
            system_id,
        } => handler.notation_decl(name, public_id.as_deref(), system_id.as_deref())?,
        UnparsedEntityDecl {
            name,
            public_id,
            system_id,
            notation_name,
        } => handler.unparsed_entity_decl(
            name,
            public_id.as_deref(),
            system_id.as_deref(),
            notation_name,
        )?,
        InternalEntityDecl { name, value } => handler.internal_entity_decl(name, value)?,
        ExternalEntityDecl {
            name,
            public_id,
            system_id,
        } => handler.external_entity_decl(name, public_id.as_deref(), system_id.as_deref())?,
        ElementDecl {
            name,
            content_model,
        } => handler.element_decl(name, content_model)?,
        AttributeDecl {
            element_name,
            attribute_name,
            attribute_type,
            value_default,
            value,
        } => handler.attribute_decl(
            element_name,
            attribute_name,
            attribute_type,
            value_default,
            value.as_deref(),
        )?,
        Warning(message) => {
            return Ok(handler.warning(&ParseException::new(message.as_str(), line, column)));
        }
        Error(message) => {
            return Ok(handler.error(&ParseException::new(message.as_str(), line, column)));
        }
        FatalError(message) => {
            handler.fatal_error(&ParseException::new(message.as_str(), line, column));
            return Ok(false);
        }
    }
    Ok(true)
}

/// Report a failed callback as a fatal error at `line`:`column`.
fn report(handler: &mut dyn SaxHandler, err: BuildError, line: usize, column: usize) -> bool {
    handler.fatal_error(&ParseException::new(err.to_string(), line, column));
    false
}

impl XmlReader for EventStream {
    fn feature(&self, name: &str) -> bool {
        self.features.get(name).copied().unwrap_or(false)
    }

    fn parse(&mut self, handler: &mut dyn SaxHandler) -> bool {
        let (first_line, first_column) = self
            .events
            .first()
            .map_or((self.line, self.column), |&(_, line, column)| (line, column));
        if let Err(err) = handler.start_document() {
            return report(handler, err, first_line, first_column);
        }
        for (event, line, column) in &self.events {
            match dispatch(event, handler, *line, *column) {
                Ok(true) => {}
                Ok(false) => return false,
                Err(err) => return report(handler, err, *line, *column),
            }
        }
        if let Err(err) = handler.end_document() {
            return report(handler, err, self.line, self.column);
        }
        true
    }
}
