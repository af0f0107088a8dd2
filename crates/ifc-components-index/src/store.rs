// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! File-backed component store
//!
//! One directory per model under a configurable root; one JSON document per
//! component, named `<entityGuid>_<componentGuid>.json`. The layout is the
//! durable source of truth the index engine re-derives its snapshot from.

use ifc_components_model::{Component, ComponentStore, StorageError, StoreResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the store root directory
pub const STORE_ROOT_ENV: &str = "IFC_COMPONENTS_STORE_ROOT";

/// [`ComponentStore`] persisting one JSON file per component
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the given directory
    ///
    /// The directory is created lazily on the first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a store rooted at [`STORE_ROOT_ENV`], or the fallback
    pub fn from_env_or(fallback: impl Into<PathBuf>) -> Self {
        match std::env::var(STORE_ROOT_ENV) {
            Ok(root) if !root.trim().is_empty() => Self::new(root),
            _ => Self::new(fallback),
        }
    }

    /// Root directory of this store
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn model_dir(&self, model: &str) -> StoreResult<PathBuf> {
        validate_model_name(model)?;
        Ok(self.root.join(model))
    }
}

/// Reject model names that would escape the store root
fn validate_model_name(model: &str) -> StoreResult<()> {
    let escapes = model.is_empty()
        || model == "."
        || model == ".."
        || model.contains('/')
        || model.contains('\\')
        || model.contains('\0');
    if escapes {
        return Err(StorageError::InvalidModelName(model.to_string()));
    }
    Ok(())
}

impl ComponentStore for FileStore {
    fn store(&self, model: &str, components: &[Component]) -> StoreResult<usize> {
        let dir = self.model_dir(model)?;
        fs::create_dir_all(&dir)?;

        for component in components {
            let encoded = serde_json::to_vec_pretty(component).map_err(|source| {
                StorageError::Encode {
                    component_guid: component.component_guid.clone(),
                    source,
                }
            })?;
            let file_name = format!(
                "{}_{}.json",
                component.entity_guid, component.component_guid
            );
            fs::write(dir.join(file_name), encoded)?;
        }
        log::debug!(
            "stored {} component(s) for model '{}'",
            components.len(),
            model
        );
        Ok(components.len())
    }

    fn retrieve(&self, model: &str) -> StoreResult<Vec<Component>> {
        let dir = self.model_dir(model)?;
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut components = Vec::new();
        let mut entries: Vec<PathBuf> = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
                entries.push(path);
            }
        }
        entries.sort();

        for path in entries {
            let bytes = fs::read(&path)?;
            match serde_json::from_slice::<Component>(&bytes) {
                Ok(component) => components.push(component),
                // Foreign or corrupted files must not take the model down.
                Err(error) => {
                    log::warn!("skipping unreadable component file {}: {error}", path.display());
                }
            }
        }
        Ok(components)
    }

    fn list_models(&self) -> StoreResult<Vec<String>> {
        if !self.root.is_dir() {
            return Ok(Vec::new());
        }
        let mut models = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                if let Some(name) = entry.file_name().to_str() {
                    models.push(name.to_string());
                }
            }
        }
        models.sort_unstable();
        Ok(models)
    }
}
