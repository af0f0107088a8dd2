// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Storage-boundary error type

use thiserror::Error;

/// Errors surfaced by [`ComponentStore`](crate::ComponentStore)
/// implementations
///
/// A storage error aborts the operation that triggered it; it never corrupts
/// state already published elsewhere.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A component could not be encoded for persistence
    #[error("failed to encode component {component_guid}: {source}")]
    Encode {
        component_guid: String,
        #[source]
        source: serde_json::Error,
    },

    /// Model name unusable as a storage key
    #[error("invalid model name '{0}'")]
    InvalidModelName(String),
}
