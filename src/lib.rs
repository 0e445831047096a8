//! Build XML document trees from a stream of parse events and serialize them
//! with a fixed legacy-compatible layout.
//!
//! The tokenizer is not part of this crate. Anything that implements
//! [`sax::XmlReader`] can feed [`Document::set_content`], and
//! [`sax::replay::EventStream`] replays a recorded event sequence.
//!
//! ```
//! use xmlcompat::{Document, sax::replay::EventStream};
//!
//! let mut events = EventStream::new();
//! events
//!     .start_element("", "p", &[("", "id", "hoge"), ("", "class", "fuga")])
//!     .characters("order")
//!     .end_element("", "p");
//! let mut doc = Document::new();
//! doc.set_content(&mut events).unwrap();
//! assert_eq!(
//!     doc.to_string_indent(-1),
//!     r#"<p class="fuga" id="hoge">order</p>"#
//! );
//! ```

pub mod dom;
pub mod error;
pub mod sax;
pub mod sax2;
pub mod save;

pub use dom::{
    NodeType,
    document::Document,
    node::{Node, NodeRef},
};
pub use error::{BuildError, ParseException, SaveError};
#[cfg(feature = "output_encoding")]
pub use save::dump_enc;
pub use save::{render, render_to};
