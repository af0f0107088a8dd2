// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IFC-Components Model - Shared types for the component data model
//!
//! This crate defines the flattened component representation of IFC entity
//! graphs. Each first-class entity (an entity carrying a stable GUID) is
//! re-expressed as one or more [`Component`] records: an object-definition
//! component for its own scalar attributes, relation components holding only
//! GUID references, property-set components embedding nested value records,
//! and shape-representation components carrying opaque geometry payloads.
//!
//! # Architecture
//!
//! - [`Component`] / [`ComponentBody`] - the atomic stored unit and its four
//!   kind-specific payloads
//! - [`derive_component_guid`] - the content-addressing scheme that gives
//!   every component a deterministic, reproducible identity
//! - [`ComponentStore`] - the narrow persistence boundary consumed by the
//!   index engine
//!
//! Components are immutable once persisted; a changed entity produces a
//! regenerated component addressed by the same deterministic id.

pub mod component;
pub mod error;
pub mod identity;
pub mod store;
pub mod value;

pub use component::*;
pub use error::*;
pub use identity::*;
pub use store::*;
pub use value::*;
