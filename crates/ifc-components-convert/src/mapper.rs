// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The component mapper
//!
//! Walks an entity graph and emits components, deterministically identified.
//! Re-running over unchanged input reproduces identical component GUIDs and
//! identical content.

use crate::error::ConversionError;
use crate::graph::{EntityGraph, EntityNode, NodePayload};
use ifc_components_model::{
    component_type_for, derive_component_guid, AttributeValue, Component, ComponentBody,
};
use rustc_hash::{FxHashMap, FxHashSet};

/// Attribute key the source entity description is folded into
const DESCRIPTION_ATTRIBUTE: &str = "componentDescription";

/// A relation reference that matches no converted entity in the model
///
/// Documented, logged condition - never a hard failure and never silently
/// dropped.
#[derive(Clone, Debug, PartialEq)]
pub struct DanglingReference {
    /// GUID of the relation component holding the reference
    pub component_guid: String,
    /// The referenced entity GUID with no component in this model
    pub referenced_guid: String,
}

/// Result of mapping one entity graph
#[derive(Debug, Default)]
pub struct ConversionOutcome {
    /// Emitted components, in emission order
    pub components: Vec<Component>,
    /// Nodes skipped: unsupported capability, missing GUID, or dropped on
    /// collision
    pub skipped: usize,
    /// Aggregated per-item failures
    pub errors: Vec<ConversionError>,
    /// Relation references that match no converted entity
    pub dangling_references: Vec<DanglingReference>,
}

impl ConversionOutcome {
    /// Whether every node was mapped cleanly
    pub fn is_complete(&self) -> bool {
        self.skipped == 0 && self.errors.is_empty()
    }
}

/// Map an entity graph to components
///
/// Nodes outside the supported capability set are skipped and counted.
/// Identical re-derivations of one id are deduplicated; divergent content
/// behind one id drops the later component and records an
/// [`ConversionError::IdCollision`].
pub fn convert(graph: &EntityGraph) -> ConversionOutcome {
    let mut outcome = ConversionOutcome::default();
    // componentGuid -> index into outcome.components, for collision checks
    let mut seen: FxHashMap<String, usize> = FxHashMap::default();
    // (entityGuid, set name) -> occurrences, for property-set discriminators
    let mut set_ordinals: FxHashMap<(String, String), usize> = FxHashMap::default();

    for node in &graph.nodes {
        let Some(component) = map_node(node, &mut set_ordinals, &mut outcome.skipped) else {
            continue;
        };

        match seen.get(&component.component_guid) {
            None => {
                seen.insert(component.component_guid.clone(), outcome.components.len());
                outcome.components.push(component);
            }
            Some(&index) if outcome.components[index] == component => {
                // Idempotent re-emission of the same record
            }
            Some(_) => {
                log::warn!(
                    "dropping component {} ({}): id collision with divergent content",
                    component.component_guid,
                    component.component_type
                );
                outcome.errors.push(ConversionError::IdCollision {
                    component_guid: component.component_guid,
                    component_type: component.component_type,
                    entity_guid: component.entity_guid,
                });
                outcome.skipped += 1;
            }
        }
    }

    check_references(&mut outcome);
    outcome
}

/// Map one node, or skip it
fn map_node(
    node: &EntityNode,
    set_ordinals: &mut FxHashMap<(String, String), usize>,
    skipped: &mut usize,
) -> Option<Component> {
    let Some(entity_guid) = node.guid.as_deref() else {
        log::debug!("skipping {} node without a GUID", node.type_name);
        *skipped += 1;
        return None;
    };

    let component = match &node.payload {
        NodePayload::ObjectDefinition { attributes } => {
            let component_type = component_type_for(&node.type_name);
            let mut attributes = attributes.clone();
            if let Some(description) = &node.description {
                attributes
                    .entry(DESCRIPTION_ATTRIBUTE.to_string())
                    .or_insert_with(|| AttributeValue::String(description.clone()));
            }
            Component {
                component_guid: derive_component_guid(&component_type, entity_guid, ""),
                component_type,
                entity_guid: entity_guid.to_string(),
                entity_type: Some(node.type_name.clone()),
                component_name: node.name.clone(),
                body: ComponentBody::ObjectDefinition { attributes },
            }
        }
        NodePayload::Relation {
            related_elements,
            relating_structure,
        } => {
            let component_type = component_type_for(&node.type_name);
            Component {
                component_guid: derive_component_guid(&component_type, entity_guid, ""),
                component_type,
                entity_guid: entity_guid.to_string(),
                entity_type: None,
                component_name: node.name.clone(),
                body: ComponentBody::Relation {
                    related_elements: related_elements.clone(),
                    relating_structure: relating_structure.clone(),
                },
            }
        }
        NodePayload::PropertySet { properties } => {
            let component_type = component_type_for(&node.type_name);
            let set_name = node.name.clone().unwrap_or_default();
            let ordinal_key = (entity_guid.to_string(), set_name.clone());
            let ordinal = set_ordinals.entry(ordinal_key).or_insert(0);
            let discriminator = if *ordinal == 0 {
                set_name.clone()
            } else {
                format!("{set_name}#{ordinal}")
            };
            *ordinal += 1;
            Component {
                component_guid: derive_component_guid(&component_type, entity_guid, &discriminator),
                component_type,
                entity_guid: entity_guid.to_string(),
                entity_type: None,
                component_name: node.name.clone(),
                body: ComponentBody::PropertySet {
                    has_properties: properties.clone(),
                },
            }
        }
        NodePayload::ShapeRepresentation {
            identifier,
            format,
            items,
        } => {
            let component_type = component_type_for(&node.type_name);
            Component {
                component_guid: derive_component_guid(&component_type, entity_guid, ""),
                component_type,
                entity_guid: entity_guid.to_string(),
                entity_type: None,
                component_name: node.name.clone(),
                body: ComponentBody::ShapeRepresentation {
                    representation_identifier: identifier.clone(),
                    representation_format: format.clone(),
                    items: items.clone(),
                },
            }
        }
        NodePayload::Unsupported => {
            log::debug!(
                "skipping {} node: no capability mapping",
                node.type_name
            );
            *skipped += 1;
            return None;
        }
    };
    Some(component)
}

/// Collect relation references that match no converted entity
fn check_references(outcome: &mut ConversionOutcome) {
    let represented: FxHashSet<&str> = outcome
        .components
        .iter()
        .map(|c| c.entity_guid.as_str())
        .collect();

    let mut dangling = Vec::new();
    for component in &outcome.components {
        for referenced in component.referenced_guids() {
            if !represented.contains(referenced) {
                log::warn!(
                    "relation component {} references unconverted entity {}",
                    component.component_guid,
                    referenced
                );
                dangling.push(DanglingReference {
                    component_guid: component.component_guid.clone(),
                    referenced_guid: referenced.to_string(),
                });
            }
        }
    }
    outcome.dangling_references = dangling;
}

#[cfg(test)]
mod tests {
    use super::*;
    use ifc_components_model::{ComponentKind, PropertyRecord};
    use std::collections::BTreeMap;

    const DOOR: &str = "5e1a3c7b-0d4f-4a6e-9b2c-8f71d0a45e90";
    const STOREY: &str = "9c0b2d41-7e8a-4f53-b6d9-2a1c4e8f7013";
    const REL: &str = "31f7a9d2-6b4c-4e08-8a5f-c9d0217e63b4";

    fn door_attributes() -> BTreeMap<String, AttributeValue> {
        let mut attributes = BTreeMap::new();
        attributes.insert("overallHeight".to_string(), AttributeValue::Float(2.1));
        attributes.insert("overallWidth".to_string(), AttributeValue::Float(0.9));
        attributes
    }

    fn sample_graph() -> EntityGraph {
        let mut graph = EntityGraph::new();
        graph.push(
            EntityNode::object_definition(DOOR, "IfcDoor", door_attributes())
                .with_name("Front door"),
        );
        graph.push(EntityNode::object_definition(
            STOREY,
            "IfcBuildingStorey",
            BTreeMap::new(),
        ));
        graph.push(EntityNode::relation(
            REL,
            "IfcRelContainedInSpatialStructure",
            vec![DOOR.to_string()],
            Some(STOREY.to_string()),
        ));
        graph.push(EntityNode::property_set(
            DOOR,
            "Pset_DoorCommon",
            vec![PropertyRecord::nominal("FireRating", "IfcLabel", "EI30")],
        ));
        graph.push(EntityNode::shape_representation(
            DOOR,
            "Body",
            "OBJ",
            vec!["v 0 0 0\n".to_string()],
        ));
        graph
    }

    #[test]
    fn maps_every_supported_capability() {
        let outcome = convert(&sample_graph());
        assert_eq!(outcome.components.len(), 5);
        assert_eq!(outcome.skipped, 0);
        assert!(outcome.errors.is_empty());
        assert!(outcome.dangling_references.is_empty());

        let kinds: Vec<ComponentKind> =
            outcome.components.iter().map(Component::kind).collect();
        assert_eq!(
            kinds,
            vec![
                ComponentKind::ObjectDefinition,
                ComponentKind::ObjectDefinition,
                ComponentKind::Relation,
                ComponentKind::PropertySet,
                ComponentKind::ShapeRepresentation,
            ]
        );
    }

    #[test]
    fn object_definition_carries_entity_type_and_attributes() {
        let outcome = convert(&sample_graph());
        let door = &outcome.components[0];
        assert_eq!(door.component_type, "IfcDoorComponent");
        assert_eq!(door.entity_guid, DOOR);
        assert_eq!(door.entity_type.as_deref(), Some("IfcDoor"));
        assert_eq!(door.component_name.as_deref(), Some("Front door"));
        assert_eq!(
            door.component_guid,
            derive_component_guid("IfcDoorComponent", DOOR, "")
        );
    }

    #[test]
    fn conversion_is_idempotent() {
        let graph = sample_graph();
        let first = convert(&graph);
        let second = convert(&graph);
        assert_eq!(first.components, second.components);
    }

    #[test]
    fn relation_payload_is_references_only() {
        let outcome = convert(&sample_graph());
        let relation = &outcome.components[2];
        assert_eq!(relation.kind(), ComponentKind::Relation);
        assert_eq!(relation.referenced_guids(), vec![DOOR, STOREY]);
    }

    #[test]
    fn same_named_property_sets_get_distinct_ids() {
        let mut graph = EntityGraph::new();
        graph.push(EntityNode::object_definition(
            DOOR,
            "IfcDoor",
            BTreeMap::new(),
        ));
        graph.push(EntityNode::property_set(
            DOOR,
            "Pset_DoorCommon",
            vec![PropertyRecord::nominal("FireRating", "IfcLabel", "EI30")],
        ));
        graph.push(EntityNode::property_set(
            DOOR,
            "Pset_DoorCommon",
            vec![PropertyRecord::nominal("FireRating", "IfcLabel", "EI60")],
        ));

        let outcome = convert(&graph);
        assert_eq!(outcome.components.len(), 3);
        assert!(outcome.errors.is_empty());
        assert_ne!(
            outcome.components[1].component_guid,
            outcome.components[2].component_guid
        );
    }

    #[test]
    fn divergent_collision_drops_the_later_component() {
        let mut graph = EntityGraph::new();
        graph.push(EntityNode::object_definition(
            DOOR,
            "IfcDoor",
            door_attributes(),
        ));
        let mut changed = door_attributes();
        changed.insert("overallHeight".to_string(), AttributeValue::Float(2.4));
        graph.push(EntityNode::object_definition(DOOR, "IfcDoor", changed));

        let outcome = convert(&graph);
        assert_eq!(outcome.components.len(), 1);
        assert_eq!(outcome.skipped, 1);
        assert!(matches!(
            outcome.errors.as_slice(),
            [ConversionError::IdCollision { entity_guid, .. }] if entity_guid == DOOR
        ));
    }

    #[test]
    fn identical_duplicate_is_deduplicated_silently() {
        let mut graph = EntityGraph::new();
        graph.push(EntityNode::object_definition(
            DOOR,
            "IfcDoor",
            door_attributes(),
        ));
        graph.push(EntityNode::object_definition(
            DOOR,
            "IfcDoor",
            door_attributes(),
        ));

        let outcome = convert(&graph);
        assert_eq!(outcome.components.len(), 1);
        assert_eq!(outcome.skipped, 0);
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn unsupported_and_guidless_nodes_are_counted() {
        let mut graph = sample_graph();
        graph.push(EntityNode {
            guid: Some("x1".to_string()),
            type_name: "IfcCartesianPoint".to_string(),
            name: None,
            description: None,
            payload: NodePayload::Unsupported,
        });
        graph.push(EntityNode {
            guid: None,
            type_name: "IfcWall".to_string(),
            name: None,
            description: None,
            payload: NodePayload::ObjectDefinition {
                attributes: BTreeMap::new(),
            },
        });

        let outcome = convert(&graph);
        assert_eq!(outcome.components.len(), 5);
        assert_eq!(outcome.skipped, 2);
        assert!(outcome.errors.is_empty());
        assert!(!outcome.is_complete());
    }

    #[test]
    fn dangling_references_are_reported_not_dropped() {
        let mut graph = EntityGraph::new();
        graph.push(EntityNode::object_definition(
            DOOR,
            "IfcDoor",
            BTreeMap::new(),
        ));
        graph.push(EntityNode::relation(
            REL,
            "IfcRelContainedInSpatialStructure",
            vec![DOOR.to_string(), "missing-guid".to_string()],
            None,
        ));

        let outcome = convert(&graph);
        assert_eq!(outcome.components.len(), 2);
        assert_eq!(
            outcome.dangling_references,
            vec![DanglingReference {
                component_guid: outcome.components[1].component_guid.clone(),
                referenced_guid: "missing-guid".to_string(),
            }]
        );
        // The reference itself stays in the component payload.
        assert!(outcome.components[1]
            .referenced_guids()
            .contains(&"missing-guid"));
    }

    #[test]
    fn description_folds_into_attributes() {
        let mut graph = EntityGraph::new();
        graph.push(
            EntityNode::object_definition(DOOR, "IfcDoor", BTreeMap::new())
                .with_description("South entrance"),
        );
        let outcome = convert(&graph);
        let ComponentBody::ObjectDefinition { attributes } = &outcome.components[0].body else {
            panic!("expected object definition");
        };
        assert_eq!(
            attributes.get(DESCRIPTION_ATTRIBUTE),
            Some(&AttributeValue::String("South entrance".to_string()))
        );
    }
}
