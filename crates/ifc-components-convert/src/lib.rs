// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IFC-Components Convert - Entity graph to component mapping
//!
//! The mapper walks an externally parsed [`EntityGraph`] and emits one
//! [`Component`](ifc_components_model::Component) per mappable node,
//! deterministically identified. Nodes outside the supported capability set
//! are skipped and counted, never fatal; per-item failures are absorbed and
//! reported in the [`ConversionOutcome`].
//!
//! The mapper has no side effects beyond its returned outcome - persisting
//! the components is the caller's separate step.

pub mod error;
pub mod graph;
pub mod mapper;

pub use error::*;
pub use graph::*;
pub use mapper::*;
