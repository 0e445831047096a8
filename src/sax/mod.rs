//! The push-style interface between an XML tokenizer and the tree builder.
//!
//! A tokenizer implements [`XmlReader`] and reports what it reads by calling the
//! methods of a [`SaxHandler`] one event at a time. Every callback returns before
//! the next one is delivered.
//!
//! Callbacks that change the tree return `Result<(), BuildError>`. When a callback
//! fails, the reader must report the error through [`SaxHandler::fatal_error`]
//! with its current position and stop.

pub mod replay;

use const_format::concatcp;

use crate::error::BuildError;
pub use crate::error::ParseException;

const SAX_FEATURES: &str = "http://xml.org/sax/features/";
const QT_XML_FEATURES: &str = "http://qt-project.org/xml/features/";

/// If enabled, the reader reports namespace URIs and splits qualified names.
pub const FEATURE_NAMESPACES: &str = concatcp!(SAX_FEATURES, "namespaces");
/// If enabled, the reader reports `xmlns` attributes as ordinary attributes.
pub const FEATURE_NAMESPACE_PREFIXES: &str = concatcp!(SAX_FEATURES, "namespace-prefixes");
/// If enabled, the reader reports entity boundaries with `start_entity`/`end_entity`.
///
/// The tree builder does not support this mode.
pub const FEATURE_REPORT_START_END_ENTITY: &str =
    concatcp!(QT_XML_FEATURES, "report-start-end-entity");

/// An attribute as reported with a start tag.
///
/// `namespace_uri` is empty if the attribute is not in a namespace or if the
/// reader does not process namespaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaxAttribute {
    pub namespace_uri: String,
    pub qname: String,
    pub value: String,
}

impl SaxAttribute {
    pub fn new(
        namespace_uri: impl Into<String>,
        qname: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            namespace_uri: namespace_uri.into(),
            qname: qname.into(),
            value: value.into(),
        }
    }
}

/// A SAX2 event handler.
///
/// All methods have default implementations that accept the event and do
/// nothing, so an implementation only overrides what it needs.
#[allow(unused_variables)]
pub trait SaxHandler {
    /// Called before any other event.
    fn start_document(&mut self) -> Result<(), BuildError> {
        Ok(())
    }

    /// Called after all other events.
    fn end_document(&mut self) -> Result<(), BuildError> {
        Ok(())
    }

    fn start_prefix_mapping(&mut self, prefix: &str, uri: &str) -> Result<(), BuildError> {
        Ok(())
    }

    fn end_prefix_mapping(&mut self, prefix: &str) -> Result<(), BuildError> {
        Ok(())
    }

    /// Called for a start tag.
    ///
    /// `namespace_uri` is empty for an element without namespace.
    fn start_element(
        &mut self,
        namespace_uri: &str,
        qname: &str,
        attributes: &[SaxAttribute],
    ) -> Result<(), BuildError> {
        Ok(())
    }

    /// Called for an end tag, or right after `start_element` for an empty-element tag.
    fn end_element(&mut self, namespace_uri: &str, qname: &str) -> Result<(), BuildError> {
        Ok(())
    }

    /// Called for character data. A run of text may be split over several calls.
    fn characters(&mut self, text: &str) -> Result<(), BuildError> {
        Ok(())
    }

    fn ignorable_whitespace(&mut self, text: &str) -> Result<(), BuildError> {
        Ok(())
    }

    fn processing_instruction(&mut self, target: &str, data: &str) -> Result<(), BuildError> {
        Ok(())
    }

    /// Called for a reference to an entity the reader did not expand.
    fn skipped_entity(&mut self, name: &str) -> Result<(), BuildError> {
        Ok(())
    }

    fn comment(&mut self, text: &str) -> Result<(), BuildError> {
        Ok(())
    }

    fn start_cdata(&mut self) -> Result<(), BuildError> {
        Ok(())
    }

    fn end_cdata(&mut self) -> Result<(), BuildError> {
        Ok(())
    }

    /// Called for a document type declaration, before any of its declarations.
    fn start_dtd(
        &mut self,
        name: &str,
        public_id: Option<&str>,
        system_id: Option<&str>,
    ) -> Result<(), BuildError> {
        Ok(())
    }

    fn end_dtd(&mut self) -> Result<(), BuildError> {
        Ok(())
    }

    fn start_entity(&mut self, name: &str) -> Result<(), BuildError> {
        Ok(())
    }

    fn end_entity(&mut self, name: &str) -> Result<(), BuildError> {
        Ok(())
    }

    /// Called for `<!NOTATION ...>`.
    fn notation_decl(
        &mut self,
        name: &str,
        public_id: Option<&str>,
        system_id: Option<&str>,
    ) -> Result<(), BuildError> {
        Ok(())
    }

    /// Called for `<!ENTITY name ... NDATA notation>`.
    fn unparsed_entity_decl(
        &mut self,
        name: &str,
        public_id: Option<&str>,
        system_id: Option<&str>,
        notation_name: &str,
    ) -> Result<(), BuildError> {
        Ok(())
    }

    /// Called for `<!ENTITY name "value">`. Parameter entity names start with '%'.
    fn internal_entity_decl(&mut self, name: &str, value: &str) -> Result<(), BuildError> {
        Ok(())
    }

    /// Called for a parsed external entity. Parameter entity names start with '%'.
    fn external_entity_decl(
        &mut self,
        name: &str,
        public_id: Option<&str>,
        system_id: Option<&str>,
    ) -> Result<(), BuildError> {
        Ok(())
    }

    fn attribute_decl(
        &mut self,
        element_name: &str,
        attribute_name: &str,
        attribute_type: &str,
        value_default: &str,
        value: Option<&str>,
    ) -> Result<(), BuildError> {
        Ok(())
    }

    fn element_decl(&mut self, name: &str, content_model: &str) -> Result<(), BuildError> {
        Ok(())
    }

    /// Receive a warning. Return `false` to stop parsing.
    fn warning(&mut self, exception: &ParseException) -> bool {
        true
    }

    /// Receive a recoverable error. Return `false` to stop parsing.
    fn error(&mut self, exception: &ParseException) -> bool {
        true
    }

    /// Receive a non-recoverable error. The reader stops after this call.
    fn fatal_error(&mut self, exception: &ParseException) -> bool {
        false
    }
}

/// The tokenizer side of a parse.
pub trait XmlReader {
    /// Return the state of the feature named by `name`.
    /// Unknown features are disabled.
    fn feature(&self, name: &str) -> bool;

    /// Read the whole input and report it to `handler`.
    ///
    /// Return `true` if the input was read to its end without a fatal error.
    fn parse(&mut self, handler: &mut dyn SaxHandler) -> bool;
}
