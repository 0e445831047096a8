use std::rc::Rc;

/// The different valid entity types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntityType {
    #[default]
    InternalGeneral,
    ExternalGeneralParsed,
    ExternalGeneralUnparsed,
    InternalParameter,
    ExternalParameter,
}

/// Implementation of [Entity](https://www.w3.org/TR/2004/REC-DOM-Level-3-Core-20040407/DOM3-Core.html#core-ID-527DCFF2)
/// interface on [1.5 Extended Interfaces: XML Module](https://www.w3.org/TR/2004/REC-DOM-Level-3-Core-20040407/DOM3-Core.html#core-ID-E067D597)
///
/// Parameter entities keep their leading '%' in `name`, the same way
/// the declaration handler reports them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    /// Entity name. as same as `nodeName` for `Node`.
    name: Rc<str>,
    /// Implementation of `publicId` attribute.
    public_id: Option<Rc<str>>,
    /// Implementation of `systemId` attribute.
    system_id: Option<Rc<str>>,
    /// Implementation of `notationName` attribute.
    notation_name: Option<Rc<str>>,
    /// Replacement text of an internal entity.
    value: Option<Rc<str>>,
}

impl Entity {
    /// Create an internal entity whose replacement text is `value`.
    pub fn new_internal(name: impl Into<Rc<str>>, value: impl Into<Rc<str>>) -> Self {
        Self {
            name: name.into(),
            public_id: None,
            system_id: None,
            notation_name: None,
            value: Some(value.into()),
        }
    }

    /// Create an external parsed entity.
    pub fn new_external(
        name: impl Into<Rc<str>>,
        public_id: Option<&str>,
        system_id: Option<&str>,
    ) -> Self {
        Self {
            name: name.into(),
            public_id: public_id.map(Rc::from),
            system_id: system_id.map(Rc::from),
            notation_name: None,
            value: None,
        }
    }

    /// Create an external unparsed entity bound to `notation_name`.
    pub fn new_unparsed(
        name: impl Into<Rc<str>>,
        public_id: Option<&str>,
        system_id: Option<&str>,
        notation_name: &str,
    ) -> Self {
        Self {
            notation_name: Some(notation_name.into()),
            ..Self::new_external(name, public_id, system_id)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Implementation of `publicId` attribute.
    pub fn public_id(&self) -> Option<&str> {
        self.public_id.as_deref()
    }

    /// Implementation of `systemId` attribute.
    pub fn system_id(&self) -> Option<&str> {
        self.system_id.as_deref()
    }

    /// Implementation of `notationName` attribute.
    pub fn notation_name(&self) -> Option<&str> {
        self.notation_name.as_deref()
    }

    /// The replacement text, if this is an internal entity.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn entity_type(&self) -> EntityType {
        let parameter = self.name.starts_with('%');
        let external = self.public_id.is_some() || self.system_id.is_some();
        match (parameter, external) {
            (true, true) => EntityType::ExternalParameter,
            (true, false) => EntityType::InternalParameter,
            (false, true) if self.notation_name.is_some() => EntityType::ExternalGeneralUnparsed,
            (false, true) => EntityType::ExternalGeneralParsed,
            (false, false) => EntityType::InternalGeneral,
        }
    }
}
