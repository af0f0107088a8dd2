// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Deterministic component identity
//!
//! Component GUIDs are content addresses: a pure function of the component
//! type, the described entity's GUID, and an optional discriminator. Running
//! the mapper twice over unchanged input reproduces identical ids.
//!
//! The derivation is fixed as part of the persisted contract:
//!
//! 1. hash input is `"{componentType}:{entityGuid}"`, with
//!    `":{discriminator}"` appended only when the discriminator is non-empty;
//! 2. the input is hashed with SHA-256;
//! 3. the first 16 digest bytes are rendered as a hyphenated UUID.
//!
//! The discriminator is empty for component kinds an entity can own at most
//! once. Property-set components use the set name, with `#<ordinal>` appended
//! for repeated same-named sets, so several sets on one entity never collide.

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Fixed suffix appended to an entity type name to form a component type
pub const COMPONENT_TYPE_SUFFIX: &str = "Component";

/// Form the component type name for an entity type (`IfcDoor` ->
/// `IfcDoorComponent`)
pub fn component_type_for(entity_type: &str) -> String {
    format!("{entity_type}{COMPONENT_TYPE_SUFFIX}")
}

/// Strip the component suffix, returning the underlying type name
///
/// Names without the suffix are returned unchanged.
pub fn base_type_of(component_type: &str) -> &str {
    component_type
        .strip_suffix(COMPONENT_TYPE_SUFFIX)
        .unwrap_or(component_type)
}

/// Derive the deterministic GUID for a component
///
/// An empty `discriminator` contributes nothing to the hash input, so kinds
/// that need no disambiguation get ids derived purely from
/// `(componentType, entityGuid)`.
pub fn derive_component_guid(
    component_type: &str,
    entity_guid: &str,
    discriminator: &str,
) -> String {
    let mut hasher = Sha256::new();
    hasher.update(component_type.as_bytes());
    hasher.update(b":");
    hasher.update(entity_guid.as_bytes());
    if !discriminator.is_empty() {
        hasher.update(b":");
        hasher.update(discriminator.as_bytes());
    }
    let digest = hasher.finalize();

    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest[..16]);
    Uuid::from_bytes(bytes).hyphenated().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTITY: &str = "2b8e5c91-9e4f-4c2e-8d1a-3f6b7a90c412";

    #[test]
    fn derivation_is_deterministic() {
        let a = derive_component_guid("IfcDoorComponent", ENTITY, "");
        let b = derive_component_guid("IfcDoorComponent", ENTITY, "");
        assert_eq!(a, b);
    }

    #[test]
    fn derivation_is_hyphenated_uuid() {
        let guid = derive_component_guid("IfcDoorComponent", ENTITY, "");
        assert_eq!(guid.len(), 36);
        let dashes: Vec<usize> = guid
            .char_indices()
            .filter(|(_, c)| *c == '-')
            .map(|(i, _)| i)
            .collect();
        assert_eq!(dashes, vec![8, 13, 18, 23]);
    }

    #[test]
    fn inputs_change_the_id() {
        let base = derive_component_guid("IfcDoorComponent", ENTITY, "");
        assert_ne!(base, derive_component_guid("IfcWallComponent", ENTITY, ""));
        assert_ne!(base, derive_component_guid("IfcDoorComponent", "other", ""));
        assert_ne!(
            base,
            derive_component_guid("IfcDoorComponent", ENTITY, "Pset_DoorCommon")
        );
    }

    #[test]
    fn discriminator_ordinals_stay_distinct() {
        let first = derive_component_guid("IfcPropertySetComponent", ENTITY, "Pset_Common");
        let second = derive_component_guid("IfcPropertySetComponent", ENTITY, "Pset_Common#1");
        assert_ne!(first, second);
    }

    #[test]
    fn component_type_suffix_helpers() {
        assert_eq!(component_type_for("IfcDoor"), "IfcDoorComponent");
        assert_eq!(base_type_of("IfcDoorComponent"), "IfcDoor");
        assert_eq!(base_type_of("IfcDoor"), "IfcDoor");
    }
}
