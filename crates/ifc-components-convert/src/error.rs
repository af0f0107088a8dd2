// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-item conversion errors
//!
//! Conversion errors are absorbed and aggregated: a failing item is skipped
//! and counted, and processing of the remaining graph continues.

use thiserror::Error;

/// An entity or sub-record that could not be mapped
#[derive(Error, Debug, PartialEq)]
pub enum ConversionError {
    /// The same deterministic id was derived for divergent content
    ///
    /// Identical re-derivations are deduplicated silently; divergent content
    /// behind one id would corrupt the store, so the later component is
    /// dropped.
    #[error(
        "component id {component_guid} (type {component_type}, entity {entity_guid}) derived twice with divergent content"
    )]
    IdCollision {
        component_guid: String,
        component_type: String,
        entity_guid: String,
    },
}
