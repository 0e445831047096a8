use std::{
    collections::{HashMap, hash_map::Entry},
    rc::Rc,
};

use super::attr::Attr;

/// Implementation of [NamedNodeMap](https://www.w3.org/TR/2004/REC-DOM-Level-3-Core-20040407/DOM3-Core.html#core-ID-1780488922)
/// interface for the attributes of an element.
///
/// Attributes are kept in insertion order and are unique by qualified name.
/// `clone` is a deep copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMap {
    data: Vec<Attr>,
}

impl AttributeMap {
    /// Create new empty [`AttributeMap`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Implementation of `length` attribute.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if this map is empty.\
    /// In other words, check `self.len() == 0` is satisfied.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Implementation of `item` method.
    pub fn item(&self, index: usize) -> Option<&Attr> {
        self.data.get(index)
    }

    /// Iterate attributes in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Attr> {
        self.data.iter()
    }

    /// Implementation of `getNamedItem` method.
    pub fn get_named_item(&self, name: &str) -> Option<&Attr> {
        self.data.iter().find(|attr| attr.name() == name)
    }

    pub(super) fn get_named_item_mut(&mut self, name: &str) -> Option<&mut Attr> {
        self.data.iter_mut().find(|attr| attr.name() == name)
    }

    /// Implementation of `getNamedItemNS` method.
    pub fn get_named_item_ns(&self, namespace_uri: Option<&str>, local_name: &str) -> Option<&Attr> {
        self.data
            .iter()
            .find(|attr| attr.matches_ns(namespace_uri, local_name))
    }

    /// Implementation of `setNamedItem` method.
    ///
    /// If an attribute with the same qualified name already exists, it is replaced
    /// at its position and returned.
    pub fn set_named_item(&mut self, attr: Attr) -> Option<Attr> {
        match self.data.iter().position(|old| old.name() == attr.name()) {
            Some(pos) => Some(std::mem::replace(&mut self.data[pos], attr)),
            None => {
                self.data.push(attr);
                None
            }
        }
    }

    /// Implementation of `setNamedItemNS` method.
    ///
    /// An attribute with the same `(namespaceURI, localName)` keeps its position and
    /// takes the new prefix and value. Otherwise the qualified name decides, as
    /// [`AttributeMap::set_named_item`] does.
    pub fn set_named_item_ns(&mut self, attr: Attr) -> Option<Attr> {
        if let Some(local_name) = attr.local_name() {
            let pos = self
                .data
                .iter()
                .position(|old| old.matches_ns(attr.namespace_uri(), local_name));
            if let Some(pos) = pos {
                let old = self.data[pos].clone();
                let slot = &mut self.data[pos];
                slot.set_prefix(attr.prefix());
                slot.set_value(attr.value());
                return Some(old);
            }
        }
        self.set_named_item(attr)
    }

    /// Implementation of `removeNamedItem` method.
    pub fn remove_named_item(&mut self, name: &str) -> Option<Attr> {
        let pos = self.data.iter().position(|attr| attr.name() == name)?;
        Some(self.data.remove(pos))
    }

    /// Return attributes sorted by qualified name.
    ///
    /// Names compare by their UTF-16 code units, so supplementary characters sort
    /// after the rest of the BMP the same way the legacy output does.
    pub fn sorted_by_name(&self) -> Vec<&Attr> {
        let mut sorted = self.data.iter().collect::<Vec<_>>();
        sorted.sort_by(|l, r| l.name().encode_utf16().cmp(r.name().encode_utf16()));
        sorted
    }
}

impl<'a> IntoIterator for &'a AttributeMap {
    type Item = &'a Attr;
    type IntoIter = std::slice::Iter<'a, Attr>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A name-keyed collection of declarations, used for the entities and notations
/// of a document type.
///
/// The iteration order of the underlying map is unspecified. Use
/// [`NamedNodeMap::sorted`] where a stable order matters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedNodeMap<N> {
    data: HashMap<Rc<str>, N>,
}

impl<N> Default for NamedNodeMap<N> {
    fn default() -> Self {
        Self {
            data: HashMap::new(),
        }
    }
}

impl<N> NamedNodeMap<N> {
    /// Create new empty [`NamedNodeMap`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Implementation of `length` attribute.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Implementation of `getNamedItem` method.
    pub fn get_named_item(&self, name: &str) -> Option<&N> {
        self.data.get(name)
    }

    /// Add `node` under `name`. A node already registered under the same name is
    /// replaced and returned.
    pub fn set_named_item(&mut self, name: impl Into<Rc<str>>, node: N) -> Option<N> {
        match self.data.entry(name.into()) {
            Entry::Occupied(mut entry) => Some(entry.insert(node)),
            Entry::Vacant(entry) => {
                entry.insert(node);
                None
            }
        }
    }

    /// Implementation of `removeNamedItem` method.
    pub fn remove_named_item(&mut self, name: &str) -> Option<N> {
        self.data.remove(name)
    }

    /// Iterate `(name, node)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &N)> {
        self.data.iter().map(|(name, node)| (name.as_ref(), node))
    }

    /// Return the nodes sorted by name.
    pub fn sorted(&self) -> Vec<&N> {
        let mut sorted = self.data.iter().collect::<Vec<_>>();
        sorted.sort_by(|(l, _), (r, _)| l.encode_utf16().cmp(r.encode_utf16()));
        sorted.into_iter().map(|(_, node)| node).collect()
    }
}
