use std::rc::Rc;

/// The external identifier of a notation declaration.
///
/// A notation may be declared with only a public identifier, which is not
/// allowed for entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationIdentifier {
    ExternalID {
        public_id: Option<Rc<str>>,
        system_id: Rc<str>,
    },
    PublicID {
        public_id: Rc<str>,
    },
}

impl NotationIdentifier {
    /// Build an identifier from the optional ids a declaration handler reports.
    ///
    /// If both ids are missing, an empty system id is assumed.
    pub fn from_ids(public_id: Option<&str>, system_id: Option<&str>) -> Self {
        match (public_id, system_id) {
            (Some(public_id), None) => Self::PublicID {
                public_id: public_id.into(),
            },
            (public_id, system_id) => Self::ExternalID {
                public_id: public_id.map(Rc::from),
                system_id: system_id.unwrap_or_default().into(),
            },
        }
    }
}

/// Implementation of [Notation](https://www.w3.org/TR/2004/REC-DOM-Level-3-Core-20040407/DOM3-Core.html#core-ID-5431D1B9)
/// interface on [1.5 Extended Interfaces: XML Module](https://www.w3.org/TR/2004/REC-DOM-Level-3-Core-20040407/DOM3-Core.html#core-ID-E067D597)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notation {
    /// Notation name. as same as `nodeName` for `Node`.
    name: Rc<str>,
    /// Implementation of `publicId` attribute.
    public_id: Option<Rc<str>>,
    /// Implementation of `systemId` attribute.
    system_id: Option<Rc<str>>,
}

impl Notation {
    pub fn new(name: impl Into<Rc<str>>, id: NotationIdentifier) -> Self {
        let (public_id, system_id) = match id {
            NotationIdentifier::ExternalID {
                public_id,
                system_id,
            } => (public_id, Some(system_id)),
            NotationIdentifier::PublicID { public_id } => (Some(public_id), None),
        };
        Self {
            name: name.into(),
            public_id,
            system_id,
        }
    }

    /// Get `name` attribute of this notation.
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
}
