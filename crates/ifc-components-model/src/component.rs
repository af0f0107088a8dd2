// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The component record - the atomic stored unit
//!
//! A component flattens one aspect of a first-class entity into an
//! independently addressable record. The JSON field names are part of the
//! wire contract shared with the persistent store and its clients.

use crate::value::{AttributeValue, PropertyRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The four component kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// Scalar attributes of the described entity itself
    ObjectDefinition,
    /// GUID references to other first-class entities
    Relation,
    /// Nested, non-globally-identified value records
    PropertySet,
    /// Format tag plus opaque geometry payloads
    ShapeRepresentation,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ComponentKind::ObjectDefinition => "object-definition",
            ComponentKind::Relation => "relation",
            ComponentKind::PropertySet => "property-set",
            ComponentKind::ShapeRepresentation => "shape-representation",
        };
        write!(f, "{name}")
    }
}

/// Kind-specific component payload
///
/// Flattened into the component JSON; the kind is recovered from the field
/// shape on deserialization. The object-definition variant must stay last:
/// it is the catch-all that absorbs any remaining scalar attributes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComponentBody {
    /// Relation payload: references only, never embedded entity data
    #[serde(rename_all = "camelCase")]
    Relation {
        /// GUIDs of the related first-class entities
        related_elements: Vec<String>,
        /// GUID of the relating structure, where the relation has one
        #[serde(default, skip_serializing_if = "Option::is_none")]
        relating_structure: Option<String>,
    },
    /// Property-set payload: recursively nested value records
    #[serde(rename_all = "camelCase")]
    PropertySet {
        /// Embedded property records
        has_properties: Vec<PropertyRecord>,
    },
    /// Shape-representation payload: opaque, externally produced encoding
    #[serde(rename_all = "camelCase")]
    ShapeRepresentation {
        /// Representation identifier (e.g. `Body`)
        representation_identifier: String,
        /// Encoding format tag (e.g. `OBJ`)
        representation_format: String,
        /// Inert payload strings
        items: Vec<String>,
    },
    /// Object-definition payload: the entity's own scalar attributes
    ObjectDefinition {
        /// Remaining scalar attributes, flattened into the JSON object
        #[serde(flatten)]
        attributes: BTreeMap<String, AttributeValue>,
    },
}

impl ComponentBody {
    /// Which of the four kinds this payload is
    pub fn kind(&self) -> ComponentKind {
        match self {
            ComponentBody::Relation { .. } => ComponentKind::Relation,
            ComponentBody::PropertySet { .. } => ComponentKind::PropertySet,
            ComponentBody::ShapeRepresentation { .. } => ComponentKind::ShapeRepresentation,
            ComponentBody::ObjectDefinition { .. } => ComponentKind::ObjectDefinition,
        }
    }
}

/// The atomic stored unit describing one aspect of one entity
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    /// Unique, deterministic component identity
    pub component_guid: String,
    /// Kind name: the source type plus the fixed `Component` suffix
    pub component_type: String,
    /// GUID of the entity this component describes
    pub entity_guid: String,
    /// Type name of the described entity (object definitions only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    /// Display name carried over from the source entity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_name: Option<String>,
    /// Kind-specific payload
    #[serde(flatten)]
    pub body: ComponentBody,
}

impl Component {
    /// Which of the four kinds this component is
    pub fn kind(&self) -> ComponentKind {
        self.body.kind()
    }

    /// All entity GUIDs this component references
    ///
    /// Empty for everything but relation components; relations reference
    /// their related elements and, when present, the relating structure.
    pub fn referenced_guids(&self) -> Vec<&str> {
        match &self.body {
            ComponentBody::Relation {
                related_elements,
                relating_structure,
            } => related_elements
                .iter()
                .map(String::as_str)
                .chain(relating_structure.as_deref())
                .collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object_definition() -> Component {
        let mut attributes = BTreeMap::new();
        attributes.insert(
            "overallHeight".to_string(),
            AttributeValue::Float(2.1),
        );
        attributes.insert(
            "tag".to_string(),
            AttributeValue::String("D-01".to_string()),
        );
        Component {
            component_guid: "c0ffee00-0000-4000-8000-000000000001".to_string(),
            component_type: "IfcDoorComponent".to_string(),
            entity_guid: "e1".to_string(),
            entity_type: Some("IfcDoor".to_string()),
            component_name: Some("Front door".to_string()),
            body: ComponentBody::ObjectDefinition { attributes },
        }
    }

    #[test]
    fn object_definition_flattens_attributes() {
        let json = serde_json::to_value(object_definition()).unwrap();
        assert_eq!(json["componentType"], "IfcDoorComponent");
        assert_eq!(json["entityType"], "IfcDoor");
        assert_eq!(json["overallHeight"], 2.1);
        assert_eq!(json["tag"], "D-01");
        let back: Component = serde_json::from_value(json).unwrap();
        assert_eq!(back, object_definition());
        assert_eq!(back.kind(), ComponentKind::ObjectDefinition);
    }

    #[test]
    fn relation_round_trip_and_references() {
        let component = Component {
            component_guid: "c2".to_string(),
            component_type: "IfcRelContainedInSpatialStructureComponent".to_string(),
            entity_guid: "r1".to_string(),
            entity_type: None,
            component_name: None,
            body: ComponentBody::Relation {
                related_elements: vec!["e1".to_string(), "e2".to_string()],
                relating_structure: Some("s1".to_string()),
            },
        };
        let json = serde_json::to_value(&component).unwrap();
        assert_eq!(json["relatedElements"][1], "e2");
        assert_eq!(json["relatingStructure"], "s1");
        let back: Component = serde_json::from_value(json).unwrap();
        assert_eq!(back.kind(), ComponentKind::Relation);
        assert_eq!(back.referenced_guids(), vec!["e1", "e2", "s1"]);
    }

    #[test]
    fn property_set_round_trip() {
        let component = Component {
            component_guid: "c3".to_string(),
            component_type: "IfcPropertySetComponent".to_string(),
            entity_guid: "e1".to_string(),
            entity_type: None,
            component_name: Some("Pset_DoorCommon".to_string()),
            body: ComponentBody::PropertySet {
                has_properties: vec![PropertyRecord::nominal(
                    "FireRating",
                    "IfcLabel",
                    "EI30",
                )],
            },
        };
        let json = serde_json::to_string(&component).unwrap();
        let back: Component = serde_json::from_str(&json).unwrap();
        assert_eq!(back, component);
        assert_eq!(back.kind(), ComponentKind::PropertySet);
    }

    #[test]
    fn shape_representation_round_trip() {
        let component = Component {
            component_guid: "c4".to_string(),
            component_type: "IfcShapeRepresentationComponent".to_string(),
            entity_guid: "e1".to_string(),
            entity_type: None,
            component_name: None,
            body: ComponentBody::ShapeRepresentation {
                representation_identifier: "Body".to_string(),
                representation_format: "OBJ".to_string(),
                items: vec!["v 0 0 0\nf 1 2 3\n".to_string()],
            },
        };
        let json = serde_json::to_value(&component).unwrap();
        assert_eq!(json["representationFormat"], "OBJ");
        let back: Component = serde_json::from_value(json).unwrap();
        assert_eq!(back.kind(), ComponentKind::ShapeRepresentation);
        assert!(back.referenced_guids().is_empty());
    }
}
