// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The index engine
//!
//! One lifecycle per process: Empty -> Building -> Ready, then Building ->
//! Ready again on every refresh. Queries read whichever snapshot is
//! currently published; a refresh never blocks them because it builds a
//! complete replacement and swaps one atomic pointer.
//!
//! Repeated refreshes are idempotent: each one re-derives the snapshot
//! entirely from the store's current contents, so the engine converges to
//! the most recently completed rebuild.

use crate::error::{IndexError, QueryError};
use crate::filter::QueryFilter;
use crate::snapshot::{IndexSnapshot, ModelIndex};
use arc_swap::ArcSwap;
use ifc_components_model::{base_type_of, component_type_for, Component, ComponentStore};
use ifc_components_schema::TypeHierarchy;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};
use std::sync::Arc;

/// Engine lifecycle state
///
/// Advisory: queries are always answered from the last published snapshot,
/// which is complete by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    /// No snapshot has been published yet
    Empty,
    /// A rebuild is in progress; the prior snapshot still serves reads
    Building,
    /// The published snapshot reflects a completed rebuild
    Ready,
}

const STATE_EMPTY: u8 = 0;
const STATE_BUILDING: u8 = 1;
const STATE_READY: u8 = 2;

/// Multi-index query engine over a [`ComponentStore`]
pub struct IndexEngine {
    hierarchy: Arc<TypeHierarchy>,
    snapshot: ArcSwap<IndexSnapshot>,
    state: AtomicU8,
    generation: AtomicU64,
}

impl IndexEngine {
    /// Create an engine with an empty snapshot
    pub fn new(hierarchy: Arc<TypeHierarchy>) -> Self {
        Self {
            hierarchy,
            snapshot: ArcSwap::from_pointee(IndexSnapshot::empty()),
            state: AtomicU8::new(STATE_EMPTY),
            generation: AtomicU64::new(0),
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> EngineState {
        match self.state.load(Ordering::Acquire) {
            STATE_BUILDING => EngineState::Building,
            STATE_READY => EngineState::Ready,
            _ => EngineState::Empty,
        }
    }

    /// Pin the currently published snapshot
    ///
    /// The returned handle stays consistent across concurrent refreshes.
    pub fn snapshot(&self) -> Arc<IndexSnapshot> {
        self.snapshot.load_full()
    }

    /// Rebuild the snapshot from the store and publish it
    ///
    /// Returns the number of models loaded. On failure the previously
    /// published snapshot remains authoritative.
    pub fn refresh(&self, store: &dyn ComponentStore) -> Result<usize, IndexError> {
        self.state.store(STATE_BUILDING, Ordering::Release);

        match self.build_snapshot(store) {
            Ok(snapshot) => {
                let models_loaded = snapshot.models.len();
                log::info!(
                    "index refreshed: {} model(s), {} component(s), generation {}",
                    models_loaded,
                    snapshot.total_components(),
                    snapshot.generation
                );
                self.snapshot.store(Arc::new(snapshot));
                self.state.store(STATE_READY, Ordering::Release);
                Ok(models_loaded)
            }
            Err(error) => {
                let state = if self.snapshot.load().generation() > 0 {
                    STATE_READY
                } else {
                    STATE_EMPTY
                };
                self.state.store(state, Ordering::Release);
                Err(error)
            }
        }
    }

    fn build_snapshot(&self, store: &dyn ComponentStore) -> Result<IndexSnapshot, IndexError> {
        let mut models = BTreeMap::new();
        for model in store
            .list_models()
            .map_err(|source| IndexError::ListModels { source })?
        {
            let components = store.retrieve(&model).map_err(|source| {
                IndexError::LoadModel {
                    model: model.clone(),
                    source,
                }
            })?;
            models.insert(model, ModelIndex::build(components));
        }
        Ok(IndexSnapshot {
            models,
            generation: self.generation.fetch_add(1, Ordering::AcqRel) + 1,
        })
    }

    /// Retrieve components matching the filter, grouped by model
    ///
    /// Within each model the result list is sorted by `componentGuid`;
    /// models without matches are omitted. An empty map is a successful
    /// result.
    pub fn query(
        &self,
        filter: &QueryFilter,
    ) -> Result<BTreeMap<String, Vec<Component>>, QueryError> {
        filter.validate()?;
        let snapshot = self.snapshot.load();

        let mut results = BTreeMap::new();
        for (model, index) in selected_models(&snapshot, filter) {
            let candidates = self.candidates(index, filter);
            if candidates.is_empty() {
                continue;
            }
            let components: Vec<Component> = candidates
                .iter()
                .filter_map(|guid| index.by_component_guid.get(guid))
                .cloned()
                .collect();
            results.insert(model.clone(), components);
        }
        Ok(results)
    }

    /// Component GUIDs matching the filter, grouped by model and sorted
    pub fn component_guids(
        &self,
        filter: &QueryFilter,
    ) -> Result<BTreeMap<String, Vec<String>>, QueryError> {
        filter.validate()?;
        let snapshot = self.snapshot.load();

        let mut results = BTreeMap::new();
        for (model, index) in selected_models(&snapshot, filter) {
            let candidates = self.candidates(index, filter);
            if candidates.is_empty() {
                continue;
            }
            results.insert(model.clone(), candidates.into_iter().collect());
        }
        Ok(results)
    }

    /// Entity GUIDs represented by matching components, grouped by model
    /// and sorted
    pub fn entity_guids(
        &self,
        filter: &QueryFilter,
    ) -> Result<BTreeMap<String, Vec<String>>, QueryError> {
        filter.validate()?;
        let snapshot = self.snapshot.load();

        let mut results = BTreeMap::new();
        for (model, index) in selected_models(&snapshot, filter) {
            let entities: BTreeSet<String> = self
                .candidates(index, filter)
                .iter()
                .filter_map(|guid| index.by_component_guid.get(guid))
                .map(|component| component.entity_guid.clone())
                .collect();
            if entities.is_empty() {
                continue;
            }
            results.insert(model.clone(), entities.into_iter().collect());
        }
        Ok(results)
    }

    /// Sorted model names in the current snapshot
    pub fn models(&self) -> Vec<String> {
        self.snapshot.load().model_names()
    }

    /// Sorted distinct entity types across the selected models
    pub fn entity_types(&self, models: Option<&[String]>) -> Vec<String> {
        let snapshot = self.snapshot.load();
        let mut types = BTreeSet::new();
        for (model, index) in snapshot.models.iter() {
            if let Some(selected) = models {
                if !selected.iter().any(|name| name == model) {
                    continue;
                }
            }
            types.extend(index.by_entity_type.keys().cloned());
        }
        types.into_iter().collect()
    }

    /// Intersect every supplied filter dimension's membership set
    ///
    /// An omitted dimension contributes no constraint; no dimensions at all
    /// selects every component in the model.
    fn candidates(&self, index: &ModelIndex, filter: &QueryFilter) -> BTreeSet<String> {
        let mut sets: Vec<BTreeSet<String>> = Vec::new();

        if let Some(types) = &filter.entity_types {
            let mut members = BTreeSet::new();
            for type_name in types {
                for concrete in self.hierarchy.expand(type_name) {
                    if let Some(bucket) = index.by_entity_type.get(&concrete) {
                        members.extend(bucket.iter().cloned());
                    }
                }
            }
            sets.push(members);
        }

        if let Some(types) = &filter.component_types {
            let mut members = BTreeSet::new();
            for type_name in types {
                // Expansion happens on the underlying type name; the fixed
                // suffix is re-applied to address the index buckets.
                for concrete in self.hierarchy.expand(base_type_of(type_name)) {
                    if let Some(bucket) = index.by_component_type.get(&component_type_for(&concrete))
                    {
                        members.extend(bucket.iter().cloned());
                    }
                }
            }
            sets.push(members);
        }

        if let Some(guids) = &filter.entity_guids {
            let mut members = BTreeSet::new();
            for guid in guids {
                if let Some(bucket) = index.by_entity.get(guid) {
                    members.extend(bucket.iter().cloned());
                }
            }
            sets.push(members);
        }

        if let Some(guids) = &filter.component_guids {
            let members: BTreeSet<String> = guids
                .iter()
                .filter(|guid| index.by_component_guid.contains_key(*guid))
                .cloned()
                .collect();
            sets.push(members);
        }

        match sets.pop() {
            None => index.by_component_guid.keys().cloned().collect(),
            Some(mut candidates) => {
                for set in sets {
                    candidates.retain(|guid| set.contains(guid));
                }
                candidates
            }
        }
    }
}

/// Models selected by the filter, in name order
fn selected_models<'a>(
    snapshot: &'a IndexSnapshot,
    filter: &QueryFilter,
) -> Vec<(&'a String, &'a ModelIndex)> {
    match &filter.models {
        None => snapshot.models.iter().collect(),
        Some(selected) => snapshot
            .models
            .iter()
            .filter(|(model, _)| selected.iter().any(|name| name == *model))
            .collect(),
    }
}
