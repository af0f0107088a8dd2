// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IFC-Components Schema - Type ancestry table and descendant expansion
//!
//! Query filters name types abstractly (`IfcProduct`) while stored
//! components carry concrete type names (`IfcDoor`). This crate bridges the
//! two: a [`TypeHierarchy`] is built once from a static parent table,
//! precomputes the full descendant closure, and answers
//! [`expand`](TypeHierarchy::expand) by exact lookup - no runtime
//! reflection, no string scanning on the query path.
//!
//! A curated IFC4 table ships built in ([`TypeHierarchy::ifc4`]); arbitrary
//! tables load from parent pairs or from a JSON object mapping each type
//! name to its parent.

pub mod hierarchy;
pub mod ifc4;

pub use hierarchy::*;
