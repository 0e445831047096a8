use std::rc::Rc;

/// Implementation of [ProcessingInstruction](https://www.w3.org/TR/2004/REC-DOM-Level-3-Core-20040407/DOM3-Core.html#core-ID-1004215813)
/// interface on [1.5 Extended Interfaces: XML Module](https://www.w3.org/TR/2004/REC-DOM-Level-3-Core-20040407/DOM3-Core.html#core-ID-E067D597)
///
/// An XML declaration reported by the tokenizer is kept as a processing
/// instruction whose target is `xml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingInstruction {
    /// Implementation of `target` attribute.
    /// as same as `nodeName` for `Node`.
    target: Rc<str>,
    /// Implementation of `data` attribute.
    data: Rc<str>,
}

impl ProcessingInstruction {
    pub fn new(target: impl Into<Rc<str>>, data: impl Into<Rc<str>>) -> Self {
        Self {
            target: target.into(),
            data: data.into(),
        }
    }

    /// Implementation of `target` attribute.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Implementation of `data` attribute.
    pub fn data(&self) -> &str {
        &self.data
    }
}
