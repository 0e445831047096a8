use std::rc::Rc;

use super::{non_empty_uri, split_qname2};

/// Implementation of [Attr](https://www.w3.org/TR/2004/REC-DOM-Level-3-Core-20040407/DOM3-Core.html#core-ID-637646024)
/// interface on [1.4 Fundamental Interfaces: Core Module](https://www.w3.org/TR/2004/REC-DOM-Level-3-Core-20040407/DOM3-Core.html#core-ID-BBACDC08)
///
/// An attribute is exclusively owned by the [`AttributeMap`](super::named_node_map::AttributeMap)
/// of one element and carries its value as a plain string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    /// Implementation of `name` attribute of `Attr`.
    /// as same as `nodeName` for `Node`.
    name: Rc<str>,
    /// Implementation of `namespaceURI` for `Node`.
    namespace_uri: Option<Rc<str>>,
    /// Implementation of `prefix` for `Node`.
    prefix: Option<Rc<str>>,
    /// Implementation of `localName` for `Node`.
    ///
    /// `None` for attributes created without namespace processing.
    local_name: Option<Rc<str>>,
    /// Implementation of `value` attribute of `Attr`.
    value: Rc<str>,
}

impl Attr {
    /// Create an attribute that is not namespace-aware (DOM Level 1).
    pub fn new(name: impl Into<Rc<str>>, value: impl Into<Rc<str>>) -> Self {
        Self {
            name: name.into(),
            namespace_uri: None,
            prefix: None,
            local_name: None,
            value: value.into(),
        }
    }

    /// Create a namespace-aware attribute.
    ///
    /// An empty `namespace_uri` is treated as no namespace.
    pub fn new_ns(
        namespace_uri: Option<&str>,
        qname: impl Into<Rc<str>>,
        value: impl Into<Rc<str>>,
    ) -> Self {
        let name: Rc<str> = qname.into();
        let (prefix, local_name) = match split_qname2(&name) {
            Some((prefix, local)) => (Some(prefix.into()), local.into()),
            None => (None, name.clone()),
        };
        Self {
            namespace_uri: non_empty_uri(namespace_uri),
            prefix,
            local_name: Some(local_name),
            value: value.into(),
            name,
        }
    }

    /// Implementation of `name` attribute.
    pub fn name(&self) -> &str {
        &self.name
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

    /// Implementation of `value` attribute.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the value and return the old one.
    pub fn set_value(&mut self, value: impl Into<Rc<str>>) -> Rc<str> {
        std::mem::replace(&mut self.value, value.into())
    }

    /// Replace the prefix of a namespace-aware attribute. The qualified name follows.
    pub(super) fn set_prefix(&mut self, prefix: Option<&str>) {
        let Some(local_name) = self.local_name.as_deref() else {
            return;
        };
        self.name = match prefix {
            Some(prefix) => format!("{prefix}:{local_name}").into(),
            None => local_name.into(),
        };
        self.prefix = prefix.map(Rc::from);
    }

    /// Check if this attribute matches the `(namespaceURI, localName)` pair.
    ///
    /// An empty `namespace_uri` matches an attribute without namespace.
    pub fn matches_ns(&self, namespace_uri: Option<&str>, local_name: &str) -> bool {
        self.local_name.as_deref() == Some(local_name)
            && self.namespace_uri.as_deref() == namespace_uri.filter(|uri| !uri.is_empty())
    }
}
