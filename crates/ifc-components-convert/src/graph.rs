// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Input entity graph supplied by an external parser
//!
//! The graph is already flat: each node carries its type name, an optional
//! stable GUID (first-class entities only), and a capability payload. Shape
//! payloads arrive as opaque, already-encoded geometry strings; this
//! subsystem never interprets them.

use ifc_components_model::{AttributeValue, PropertyRecord};
use std::collections::BTreeMap;

/// Capability payload of an entity node
#[derive(Clone, Debug, PartialEq)]
pub enum NodePayload {
    /// First-class entity with its own scalar attributes
    ObjectDefinition {
        /// Scalar attributes, keyed by wire field name
        attributes: BTreeMap<String, AttributeValue>,
    },
    /// Relation between first-class entities, references only
    Relation {
        /// GUIDs of the related entities
        related_elements: Vec<String>,
        /// GUID of the relating structure, where the relation has one
        relating_structure: Option<String>,
    },
    /// Property container with recursively nested value records
    PropertySet {
        /// Embedded property records
        properties: Vec<PropertyRecord>,
    },
    /// Externally produced geometry encoding
    ShapeRepresentation {
        /// Representation identifier (e.g. `Body`)
        identifier: String,
        /// Encoding format tag (e.g. `OBJ`)
        format: String,
        /// Opaque payload strings
        items: Vec<String>,
    },
    /// Node outside the supported capability set; skipped and counted
    Unsupported,
}

/// One node of the parsed entity graph
#[derive(Clone, Debug, PartialEq)]
pub struct EntityNode {
    /// Stable entity GUID; `None` for nodes that are not first class
    pub guid: Option<String>,
    /// Entity type name from the source type system (e.g. `IfcDoor`)
    pub type_name: String,
    /// Display name from the source entity
    pub name: Option<String>,
    /// Description from the source entity
    pub description: Option<String>,
    /// Capability payload
    pub payload: NodePayload,
}

impl EntityNode {
    /// First-class object-definition node
    pub fn object_definition(
        guid: impl Into<String>,
        type_name: impl Into<String>,
        attributes: BTreeMap<String, AttributeValue>,
    ) -> Self {
        Self {
            guid: Some(guid.into()),
            type_name: type_name.into(),
            name: None,
            description: None,
            payload: NodePayload::ObjectDefinition { attributes },
        }
    }

    /// Relation node referencing other first-class entities
    pub fn relation(
        guid: impl Into<String>,
        type_name: impl Into<String>,
        related_elements: Vec<String>,
        relating_structure: Option<String>,
    ) -> Self {
        Self {
            guid: Some(guid.into()),
            type_name: type_name.into(),
            name: None,
            description: None,
            payload: NodePayload::Relation {
                related_elements,
                relating_structure,
            },
        }
    }

    /// Property-set node owned by a first-class entity
    ///
    /// `owner_guid` is the GUID of the owning entity; the set itself has no
    /// independent global identity.
    pub fn property_set(
        owner_guid: impl Into<String>,
        set_name: impl Into<String>,
        properties: Vec<PropertyRecord>,
    ) -> Self {
        Self {
            guid: Some(owner_guid.into()),
            type_name: "IfcPropertySet".to_string(),
            name: Some(set_name.into()),
            description: None,
            payload: NodePayload::PropertySet { properties },
        }
    }

    /// Shape-representation node attached to a first-class entity
    pub fn shape_representation(
        owner_guid: impl Into<String>,
        identifier: impl Into<String>,
        format: impl Into<String>,
        items: Vec<String>,
    ) -> Self {
        Self {
            guid: Some(owner_guid.into()),
            type_name: "IfcShapeRepresentation".to_string(),
            name: None,
            description: None,
            payload: NodePayload::ShapeRepresentation {
                identifier: identifier.into(),
                format: format.into(),
                items,
            },
        }
    }

    /// Attach a display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Flat list of parsed entity nodes forming one model
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntityGraph {
    /// Graph nodes in source order
    pub nodes: Vec<EntityNode>,
}

impl EntityGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node
    pub fn push(&mut self, node: EntityNode) {
        self.nodes.push(node);
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
