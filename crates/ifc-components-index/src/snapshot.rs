// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Immutable index snapshots
//!
//! A snapshot holds, per model, the direct component map plus three
//! membership indices. Snapshots are built off to the side and published
//! wholesale; nothing mutates them after publication.

use ifc_components_model::Component;
use rustc_hash::FxHashMap;
use std::collections::{BTreeMap, BTreeSet};

/// Per-model multi-index
pub(crate) struct ModelIndex {
    /// componentGuid -> component, sorted for deterministic "all" scans
    pub(crate) by_component_guid: BTreeMap<String, Component>,
    /// entityGuid -> {componentGuid}
    pub(crate) by_entity: FxHashMap<String, BTreeSet<String>>,
    /// componentType -> {componentGuid}
    pub(crate) by_component_type: FxHashMap<String, BTreeSet<String>>,
    /// entityType -> {componentGuid}
    pub(crate) by_entity_type: FxHashMap<String, BTreeSet<String>>,
}

impl ModelIndex {
    /// Index one model's components
    pub(crate) fn build(components: Vec<Component>) -> Self {
        let mut by_component_guid = BTreeMap::new();
        let mut by_entity: FxHashMap<String, BTreeSet<String>> = FxHashMap::default();
        let mut by_component_type: FxHashMap<String, BTreeSet<String>> = FxHashMap::default();
        let mut by_entity_type: FxHashMap<String, BTreeSet<String>> = FxHashMap::default();

        for component in components {
            let guid = component.component_guid.clone();
            by_entity
                .entry(component.entity_guid.clone())
                .or_default()
                .insert(guid.clone());
            by_component_type
                .entry(component.component_type.clone())
                .or_default()
                .insert(guid.clone());
            if let Some(entity_type) = &component.entity_type {
                by_entity_type
                    .entry(entity_type.clone())
                    .or_default()
                    .insert(guid.clone());
            }
            by_component_guid.insert(guid, component);
        }

        Self {
            by_component_guid,
            by_entity,
            by_component_type,
            by_entity_type,
        }
    }

    /// Number of indexed components
    pub(crate) fn len(&self) -> usize {
        self.by_component_guid.len()
    }
}

/// Complete, immutable index state across all models
pub struct IndexSnapshot {
    /// Per-model indices, keyed by model name
    pub(crate) models: BTreeMap<String, ModelIndex>,
    /// Publication counter; 0 marks the initial empty snapshot
    pub(crate) generation: u64,
}

impl IndexSnapshot {
    /// The pre-refresh empty snapshot
    pub(crate) fn empty() -> Self {
        Self {
            models: BTreeMap::new(),
            generation: 0,
        }
    }

    /// Publication counter of this snapshot
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Sorted model names held by this snapshot
    pub fn model_names(&self) -> Vec<String> {
        self.models.keys().cloned().collect()
    }

    /// Total component count across models
    pub fn total_components(&self) -> usize {
        self.models.values().map(ModelIndex::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ifc_components_model::ComponentBody;

    fn component(guid: &str, entity: &str, component_type: &str, entity_type: Option<&str>) -> Component {
        Component {
            component_guid: guid.to_string(),
            component_type: component_type.to_string(),
            entity_guid: entity.to_string(),
            entity_type: entity_type.map(String::from),
            component_name: None,
            body: ComponentBody::ObjectDefinition {
                attributes: BTreeMap::new(),
            },
        }
    }

    #[test]
    fn build_populates_every_index() {
        let index = ModelIndex::build(vec![
            component("c1", "e1", "IfcDoorComponent", Some("IfcDoor")),
            component("c2", "e1", "IfcPropertySetComponent", None),
            component("c3", "e2", "IfcWallComponent", Some("IfcWall")),
        ]);

        assert_eq!(index.len(), 3);
        assert_eq!(
            index.by_entity["e1"],
            BTreeSet::from(["c1".to_string(), "c2".to_string()])
        );
        assert_eq!(
            index.by_component_type["IfcDoorComponent"],
            BTreeSet::from(["c1".to_string()])
        );
        assert_eq!(
            index.by_entity_type["IfcDoor"],
            BTreeSet::from(["c1".to_string()])
        );
        // Components without an entityType stay out of that index.
        assert!(!index
            .by_entity_type
            .values()
            .any(|bucket| bucket.contains("c2")));
    }

    #[test]
    fn empty_snapshot_is_generation_zero() {
        let snapshot = IndexSnapshot::empty();
        assert_eq!(snapshot.generation(), 0);
        assert!(snapshot.model_names().is_empty());
        assert_eq!(snapshot.total_components(), 0);
    }
}
