//! Serialization of a document tree to text.
//!
//! The output follows a fixed legacy layout:
//! - attributes are written sorted by qualified name,
//! - the namespace of an element is always declared on its start tag, and a
//!   namespaced attribute declares its namespace unless the same start tag already did,
//! - line breaks and indentation are not inserted next to text and CDATA sections,
//! - the internal subset of the document type lists entities and then notations,
//!   each sorted by name.
//!
//! The indentation width is signed. A negative width disables all optional line
//! breaks, and widths below `1` produce no indentation.

pub mod escape;
pub mod namespace;

use std::{
    borrow::Cow,
    fmt::{self, Write},
    io,
};

use crate::dom::{
    attr::Attr,
    character_data::{CharacterData, Comment},
    document::Document,
    document_type::DocumentType,
    element::Element,
    entity::Entity,
    node::{Node, NodeRef},
    notation::Notation,
};
#[cfg(feature = "output_encoding")]
use crate::error::SaveError;

use escape::{
    encode_attribute_value, encode_entity_value, encode_text, quoted_literal,
};
use namespace::NamespaceTable;

/// Where a node sits among its siblings.
#[derive(Debug, Clone, Copy, Default)]
struct Position {
    depth: usize,
    /// The parent is an element.
    in_element: bool,
    /// The previous sibling is a text or a CDATA section.
    after_text: bool,
    /// The next sibling is a text or a CDATA section.
    before_text: bool,
}

/// The context of one serialization.
pub struct SaveCtxt<'a, W: Write> {
    buf: &'a mut W,
    indent: i32,
    namespace_processing: bool,
}

impl<'a, W: Write> SaveCtxt<'a, W> {
    /// Create a context writing to `buf`.
    ///
    /// If `namespace_processing` is `true`, the namespace of an attribute counts as
    /// declared for the rest of the start tag once it has been written.
    pub fn new(buf: &'a mut W, indent: i32, namespace_processing: bool) -> Self {
        Self {
            buf,
            indent,
            namespace_processing,
        }
    }

    fn write_indent(&mut self, depth: usize) -> fmt::Result {
        let width = if self.indent < 1 {
            0
        } else {
            depth * self.indent as usize
        };
        write!(self.buf, "{:width$}", "")
    }

    fn write_break(&mut self) -> fmt::Result {
        if self.indent >= 0 {
            self.buf.write_char('\n')?;
        }
        Ok(())
    }

    /// Dump a whole document.
    ///
    /// The document type is written in front of the first child that is not a
    /// processing instruction, so that an XML declaration stays in front of it.
    #[doc(alias = "docContentDumpOutput")]
    pub fn dump_document(&mut self, doc: &Document) -> fmt::Result {
        let children = doc
            .children()
            .iter()
            .filter(|child| child.as_document_type().is_none())
            .collect::<Vec<_>>();
        let mut doctype = doc.doctype();
        for (i, &child) in children.iter().enumerate() {
            if !matches!(child, Node::ProcessingInstruction(_)) {
                if let Some(doctype) = doctype.take() {
                    self.dump_doctype(doctype)?;
                }
            }
            let pos = Position {
                depth: 0,
                in_element: false,
                after_text: i > 0 && children[i - 1].is_text_like(),
                before_text: children.get(i + 1).is_some_and(|next| next.is_text_like()),
            };
            self.dump_node_at(child.as_node_ref(), pos)?;
        }
        if let Some(doctype) = doctype {
            self.dump_doctype(doctype)?;
        }
        Ok(())
    }

    /// Dump `node` as if it had no parent and no siblings.
    #[doc(alias = "nodeDumpOutput")]
    pub fn dump_node(&mut self, node: NodeRef<'_>, depth: usize) -> fmt::Result {
        self.dump_node_at(
            node,
            Position {
                depth,
                ..Default::default()
            },
        )
    }

    fn dump_node_at(&mut self, node: NodeRef<'_>, pos: Position) -> fmt::Result {
        match node {
            NodeRef::Document(doc) => self.dump_document(doc),
            NodeRef::DocumentType(doctype) => self.dump_doctype(doctype),
            NodeRef::DocumentFragment(frag) => self.dump_children(frag.children(), pos.depth, false),
            NodeRef::Element(elem) => self.dump_element(elem, pos),
            NodeRef::Attribute(attr) => self.dump_attr(attr, None, None),
            NodeRef::Text(text) => self
                .buf
                .write_str(&encode_text(text.data(), !pos.in_element)),
            NodeRef::CDATASection(cdata) => write!(self.buf, "<![CDATA[{}]]>", cdata.data()),
            NodeRef::Comment(comment) => self.dump_comment(comment, pos),
            NodeRef::ProcessingInstruction(pi) => {
                writeln!(self.buf, "<?{} {}?>", pi.target(), pi.data())
            }
            NodeRef::EntityReference(entref) => write!(self.buf, "&{};", entref.name()),
            NodeRef::Entity(ent) => self.dump_entity_decl(ent),
            NodeRef::Notation(nota) => self.dump_notation_decl(nota),
        }
    }

    fn dump_children(&mut self, children: &[Node], depth: usize, in_element: bool) -> fmt::Result {
        for (i, child) in children.iter().enumerate() {
            let pos = Position {
                depth,
                in_element,
                after_text: i > 0 && children[i - 1].is_text_like(),
                before_text: children.get(i + 1).is_some_and(Node::is_text_like),
            };
            self.dump_node_at(child.as_node_ref(), pos)?;
        }
        Ok(())
    }

    fn dump_element(&mut self, elem: &Element, pos: Position) -> fmt::Result {
        if !pos.after_text {
            self.write_indent(pos.depth)?;
        }

        let mut table = NamespaceTable::new();
        write!(self.buf, "<{}", elem.tag_name())?;
        if let Some(uri) = elem.namespace_uri() {
            self.buf.write_str(" xmlns")?;
            if let Some(prefix) = elem.prefix() {
                write!(self.buf, ":{prefix}")?;
            }
            write!(self.buf, "=\"{}\"", encode_attribute_value(uri))?;
            table.declare(uri);
        }

        for attr in elem.attributes().sorted_by_name() {
            self.dump_attr(attr, elem.namespace_uri(), Some(&table))?;
            if self.namespace_processing {
                if let Some(uri) = attr.namespace_uri() {
                    table.declare(uri);
                }
            }
        }

        let children = elem.children();
        match (children.first(), children.last()) {
            (Some(first), Some(last)) => {
                self.buf.write_char('>')?;
                if !first.is_text_like() {
                    self.write_break()?;
                }
                self.dump_children(children, pos.depth + 1, true)?;
                if !last.is_text_like() {
                    self.write_indent(pos.depth)?;
                }
                write!(self.buf, "</{}>", elem.tag_name())?;
            }
            _ => self.buf.write_str("/>")?,
        }

        if !pos.before_text {
            self.write_break()?;
        }
        Ok(())
    }

    /// Dump ` name="value"` for `attr`.
    ///
    /// A namespaced attribute is preceded by the declaration of its namespace,
    /// unless the namespace is the one of the owner element or `table` has it.
    fn dump_attr(
        &mut self,
        attr: &Attr,
        owner_uri: Option<&str>,
        table: Option<&NamespaceTable>,
    ) -> fmt::Result {
        let local_name = attr.local_name().unwrap_or(attr.name());
        match (attr.namespace_uri(), attr.prefix()) {
            (Some(uri), Some(prefix)) => {
                let needs_declaration = table.map_or(owner_uri != Some(uri), |table| {
                    table.needs_declaration(uri, owner_uri)
                });
                if needs_declaration {
                    write!(
                        self.buf,
                        " xmlns:{prefix}=\"{}\"",
                        encode_attribute_value(uri)
                    )?;
                }
                write!(self.buf, " {prefix}:{local_name}")?;
            }
            _ => write!(self.buf, " {local_name}")?,
        }
        write!(self.buf, "=\"{}\"", encode_attribute_value(attr.value()))
    }

    fn dump_comment(&mut self, comment: &Comment, pos: Position) -> fmt::Result {
        // comments are indented by one level wherever they are
        if !pos.after_text {
            self.write_indent(1)?;
        }
        let data = comment.data();
        write!(self.buf, "<!--{data}")?;
        if data.ends_with('-') {
            self.buf.write_char(' ')?;
        }
        self.buf.write_str("-->")?;
        if !pos.before_text {
            self.buf.write_char('\n')?;
        }
        Ok(())
    }

    /// Dump `<!DOCTYPE ...>` with its internal subset.
    ///
    /// A document type without a name produces no output.
    #[doc(alias = "xmlDtdDumpOutput")]
    pub fn dump_doctype(&mut self, doctype: &DocumentType) -> fmt::Result {
        if doctype.name().is_empty() {
            return Ok(());
        }
        write!(self.buf, "<!DOCTYPE {}", doctype.name())?;
        let public_id = doctype.public_id().filter(|id| !id.is_empty());
        let system_id = doctype.system_id().filter(|id| !id.is_empty());
        match (public_id, system_id) {
            (Some(public_id), system_id) => {
                write!(self.buf, " PUBLIC \"{public_id}\"")?;
                if let Some(system_id) = system_id {
                    write!(self.buf, " \"{system_id}\"")?;
                }
            }
            (None, Some(system_id)) => write!(self.buf, " SYSTEM \"{system_id}\"")?,
            (None, None) => {}
        }

        if doctype.has_declarations() {
            self.buf.write_str(" [\n")?;
            for entity in doctype.entities().sorted() {
                self.dump_entity_decl(entity)?;
            }
            for notation in doctype.notations().sorted() {
                self.dump_notation_decl(notation)?;
            }
            self.buf.write_char(']')?;
        }
        self.buf.write_str(">\n")
    }

    #[doc(alias = "xmlDumpEntityDecl")]
    fn dump_entity_decl(&mut self, entity: &Entity) -> fmt::Result {
        let name = match entity.name().strip_prefix('%') {
            Some(name) => Cow::Owned(format!("% {name}")),
            None => Cow::Borrowed(entity.name()),
        };
        let (public_id, system_id) = (entity.public_id(), entity.system_id());
        if public_id.is_none() && system_id.is_none() {
            let value = encode_entity_value(entity.value().unwrap_or_default());
            return writeln!(self.buf, "<!ENTITY {name} \"{value}\">");
        }

        write!(self.buf, "<!ENTITY {name} ")?;
        let system_id = quoted_literal(system_id.unwrap_or_default());
        match public_id {
            Some(public_id) => {
                write!(self.buf, "PUBLIC {} {system_id}", quoted_literal(public_id))?
            }
            None => write!(self.buf, "SYSTEM {system_id}")?,
        }
        if let Some(notation_name) = entity.notation_name() {
            write!(self.buf, " NDATA {notation_name}")?;
        }
        writeln!(self.buf, ">")
    }

    #[doc(alias = "xmlDumpNotationDecl")]
    fn dump_notation_decl(&mut self, notation: &Notation) -> fmt::Result {
        write!(self.buf, "<!NOTATION {} ", notation.name())?;
        match (notation.public_id(), notation.system_id()) {
            (Some(public_id), system_id) => {
                write!(self.buf, "PUBLIC {}", quoted_literal(public_id))?;
                if let Some(system_id) = system_id {
                    write!(self.buf, " {}", quoted_literal(system_id))?;
                }
            }
            (None, system_id) => write!(
                self.buf,
                "SYSTEM {}",
                quoted_literal(system_id.unwrap_or_default())
            )?,
        }
        writeln!(self.buf, ">")
    }
}

/// Render `doc` to a string.
pub fn render(doc: &Document, indent: i32) -> String {
    let mut out = String::new();
    // writing to a `String` never fails
    let _ = SaveCtxt::new(&mut out, indent, doc.namespace_processing()).dump_document(doc);
    out
}

/// Render a single node to a string, as if it had no parent and no siblings.
pub fn render_node<'a>(node: impl Into<NodeRef<'a>>, indent: i32, namespace_processing: bool) -> String {
    let mut out = String::new();
    let _ = SaveCtxt::new(&mut out, indent, namespace_processing).dump_node(node.into(), 0);
    out
}

/// Forwards formatted text to an [`io::Write`] and keeps the I/O error that
/// `fmt::Error` cannot carry.
struct IoAdapter<'a, W: io::Write + ?Sized> {
    inner: &'a mut W,
    error: Option<io::Error>,
}

impl<W: io::Write + ?Sized> Write for IoAdapter<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|err| {
            self.error = Some(err);
            fmt::Error
        })
    }
}

/// Render `doc` as UTF-8 into `sink`.
pub fn render_to<W: io::Write + ?Sized>(sink: &mut W, doc: &Document, indent: i32) -> io::Result<()> {
    let mut adapter = IoAdapter {
        inner: sink,
        error: None,
    };
    let result = SaveCtxt::new(&mut adapter, indent, doc.namespace_processing()).dump_document(doc);
    match result {
        Ok(()) => Ok(()),
        Err(_) => Err(adapter
            .error
            .take()
            .unwrap_or_else(|| io::Error::other("failed to format the document"))),
    }
}

/// Render `doc` and encode the text with the encoding named by `encoding`.
///
/// `encoding` is a label as accepted by the WHATWG Encoding Standard, such as
/// `"UTF-8"`, `"Shift_JIS"` or `"UTF-16LE"`. Characters the encoding cannot
/// represent are written as decimal character references.
///
/// # Errors
/// - `SaveError::UnknownEncoding`: `encoding` is not a known label.
#[cfg(feature = "output_encoding")]
#[doc(alias = "xmlDocDumpFormatMemoryEnc")]
pub fn dump_enc(doc: &Document, indent: i32, encoding: &str) -> Result<Vec<u8>, SaveError> {
    use encoding_rs::{Encoding, UTF_16BE, UTF_16LE};

    let handler = Encoding::for_label(encoding.as_bytes())
        .ok_or_else(|| SaveError::UnknownEncoding(encoding.to_owned()))?;
    let text = render(doc, indent);
    // encoding_rs only decodes UTF-16
    if handler == UTF_16LE {
        return Ok(text.encode_utf16().flat_map(u16::to_le_bytes).collect());
    }
    if handler == UTF_16BE {
        return Ok(text.encode_utf16().flat_map(u16::to_be_bytes).collect());
    }
    let (bytes, _, _) = handler.encode(&text);
    Ok(bytes.into_owned())
}

/// Encode `doc` as [`dump_enc`] does and write the bytes into `sink`.
#[cfg(feature = "output_encoding")]
pub fn save_enc<W: io::Write + ?Sized>(
    sink: &mut W,
    doc: &Document,
    indent: i32,
    encoding: &str,
) -> Result<(), SaveError> {
    let bytes = dump_enc(doc, indent, encoding)?;
    sink.write_all(&bytes)?;
    sink.flush()?;
    Ok(())
}

impl Document {
    /// Render this document with the indentation width `indent`.
    #[doc(alias = "toString")]
    pub fn to_string_indent(&self, indent: i32) -> String {
        render(self, indent)
    }

    /// Render this document into `sink`.
    pub fn save<W: io::Write + ?Sized>(&self, sink: &mut W, indent: i32) -> io::Result<()> {
        render_to(sink, self, indent)
    }
}

/// Renders with an indentation width of `1`.
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        SaveCtxt::new(f, 1, self.namespace_processing()).dump_document(self)
    }
}
