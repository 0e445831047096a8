use std::rc::Rc;

use super::{entity::Entity, named_node_map::NamedNodeMap, notation::Notation};

/// Implementation of [DocumentType](https://www.w3.org/TR/2004/REC-DOM-Level-3-Core-20040407/DOM3-Core.html#core-ID-412266927)
/// interface on [1.5 Extended Interfaces: XML Module](https://www.w3.org/TR/2004/REC-DOM-Level-3-Core-20040407/DOM3-Core.html#core-ID-E067D597)
///
/// Entities and notations are keyed by their declaration name. A later
/// declaration with the same name overwrites the earlier one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentType {
    /// Implementation of `name` for `DocumentType`.
    /// as same as `nodeName` for `Node`.
    name: Rc<str>,
    /// Implementation of `publicId` for `DocumentType`.
    public_id: Option<Rc<str>>,
    /// Implementation of `systemId` for `DocumentType`.
    system_id: Option<Rc<str>>,
    /// Implementation of `entities` for `DocumentType`.
    entities: NamedNodeMap<Entity>,
    /// Implementation of `notations` for `DocumentType`.
    notations: NamedNodeMap<Notation>,
}

impl DocumentType {
    #[doc(alias = "createDocumentType")]
    pub fn new(name: impl Into<Rc<str>>, public_id: Option<&str>, system_id: Option<&str>) -> Self {
        Self {
            name: name.into(),
            public_id: public_id.map(Rc::from),
            system_id: system_id.map(Rc::from),
            entities: NamedNodeMap::new(),
            notations: NamedNodeMap::new(),
        }
    }

    /// Implementation of `name` attribute.
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

    /// Implementation of `entities` attribute.
    pub fn entities(&self) -> &NamedNodeMap<Entity> {
        &self.entities
    }

    /// Implementation of `notations` attribute.
    pub fn notations(&self) -> &NamedNodeMap<Notation> {
        &self.notations
    }

    /// Register `entity`, returning the entity it replaces if any.
    pub fn add_entity(&mut self, entity: Entity) -> Option<Entity> {
        let name: Rc<str> = entity.name().into();
        self.entities.set_named_item(name, entity)
    }

    /// Register `notation`, returning the notation it replaces if any.
    pub fn add_notation(&mut self, notation: Notation) -> Option<Notation> {
        let name: Rc<str> = notation.name().into();
        self.notations.set_named_item(name, notation)
    }

    /// Check if this document type has an internal subset to write out.
    pub fn has_declarations(&self) -> bool {
        !self.entities.is_empty() || !self.notations.is_empty()
    }
}
