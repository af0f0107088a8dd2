// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Persistence boundary for components grouped by model
//!
//! The index engine treats the store purely as a re-derivable source of
//! truth: every refresh re-reads what the store reports as persisted and
//! never caches writes independently.

use crate::component::Component;
use crate::error::StorageError;
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Result type alias for store operations
pub type StoreResult<T> = std::result::Result<T, StorageError>;

/// Durable component storage, grouped by model name
///
/// A model is a named collection of components originating from one ingested
/// source file. Retrieving an unknown model is a successful empty result,
/// not an error.
pub trait ComponentStore: Send + Sync {
    /// Persist components under a model name, returning the stored count
    ///
    /// Components are immutable once persisted; re-storing a component with
    /// the same deterministic id rewrites identical content.
    fn store(&self, model: &str, components: &[Component]) -> StoreResult<usize>;

    /// Retrieve all components of a model
    fn retrieve(&self, model: &str) -> StoreResult<Vec<Component>>;

    /// List all model names known to the store, sorted
    fn list_models(&self) -> StoreResult<Vec<String>>;
}

/// In-memory [`ComponentStore`] for tests and embedding
///
/// Keeps components keyed by model and component GUID behind a mutex;
/// iteration order is deterministic.
#[derive(Default)]
pub struct MemoryStore {
    models: Mutex<BTreeMap<String, BTreeMap<String, Component>>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl ComponentStore for MemoryStore {
    fn store(&self, model: &str, components: &[Component]) -> StoreResult<usize> {
        if model.is_empty() {
            return Err(StorageError::InvalidModelName(model.to_string()));
        }
        let mut models = self.models.lock().unwrap_or_else(|e| e.into_inner());
        let entry = models.entry(model.to_string()).or_default();
        for component in components {
            entry.insert(component.component_guid.clone(), component.clone());
        }
        Ok(components.len())
    }

    fn retrieve(&self, model: &str) -> StoreResult<Vec<Component>> {
        let models = self.models.lock().unwrap_or_else(|e| e.into_inner());
        Ok(models
            .get(model)
            .map(|components| components.values().cloned().collect())
            .unwrap_or_default())
    }

    fn list_models(&self) -> StoreResult<Vec<String>> {
        let models = self.models.lock().unwrap_or_else(|e| e.into_inner());
        Ok(models.keys().cloned().collect())
    }
}
