use std::rc::Rc;

/// Implementation of [EntityReference](https://www.w3.org/TR/2004/REC-DOM-Level-3-Core-20040407/DOM3-Core.html#core-ID-11C98490)
/// interface on [1.5 Extended Interfaces: XML Module](https://www.w3.org/TR/2004/REC-DOM-Level-3-Core-20040407/DOM3-Core.html#core-ID-E067D597)
///
/// Only created for entities the tokenizer skipped, so it never has an expansion subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityReference {
    /// The name of the referenced entity. as same as `nodeName` for `Node`.
    name: Rc<str>,
}

impl EntityReference {
    pub fn new(name: impl Into<Rc<str>>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
