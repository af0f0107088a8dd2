// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Index engine error types

use ifc_components_model::StorageError;
use thiserror::Error;

/// Failures while rebuilding the index snapshot
///
/// A refresh failure aborts the in-progress rebuild; the previously
/// published snapshot stays authoritative.
#[derive(Error, Debug)]
pub enum IndexError {
    /// The store could not enumerate its models
    #[error("failed to list models from store: {source}")]
    ListModels {
        #[source]
        source: StorageError,
    },

    /// One model's components could not be retrieved
    #[error("failed to load model '{model}' from store: {source}")]
    LoadModel {
        model: String,
        #[source]
        source: StorageError,
    },
}

/// Malformed query input, rejected before touching the snapshot
#[derive(Error, Debug, PartialEq)]
pub enum QueryError {
    /// A filter list contains an unusable value
    #[error("invalid {field} filter: {reason}")]
    InvalidFilter {
        field: &'static str,
        reason: String,
    },
}
