// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IFC-Components Index - Snapshot index engine over persisted components
//!
//! The [`IndexEngine`] rebuilds, from a [`ComponentStore`], a complete
//! in-memory multi-index snapshot per model, and answers filtered queries
//! against the current snapshot. A refresh builds its replacement off to the
//! side and publishes it with one atomic pointer swap: readers in flight
//! keep the prior snapshot and never observe a partially built one.
//!
//! Filters expand abstract type names through the
//! [`TypeHierarchy`](ifc_components_schema::TypeHierarchy) so a query for
//! `IfcProductComponent` also matches components of registered descendant
//! types.
//!
//! [`ComponentStore`]: ifc_components_model::ComponentStore

pub mod engine;
pub mod error;
pub mod filter;
pub mod snapshot;
pub mod store;

pub use engine::*;
pub use error::*;
pub use filter::*;
pub use snapshot::*;
pub use store::*;
