// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hierarchy table construction and expansion queries

use rustc_hash::FxHashMap;
use std::collections::BTreeSet;
use thiserror::Error;

/// Errors raised while building a hierarchy table
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The JSON document is not an object of `{"Child": "Parent"}` pairs
    #[error("invalid hierarchy document: {0}")]
    InvalidDocument(String),

    /// The JSON document failed to parse
    #[error("failed to parse hierarchy document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Immutable type ancestry table with a precomputed descendant closure
///
/// Built once at startup; queries are exact hash lookups. Type names are
/// case-sensitive throughout.
pub struct TypeHierarchy {
    /// Direct parent per type name (roots absent)
    parents: FxHashMap<String, String>,
    /// Full expansion per type name: the name itself plus all descendants
    expansions: FxHashMap<String, BTreeSet<String>>,
}

impl TypeHierarchy {
    /// Build a hierarchy from `(child, parent)` pairs
    ///
    /// Parents that never appear as children are registered as roots. Cycles
    /// cannot deadlock construction; the walk stops on revisit.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let mut parents: FxHashMap<String, String> = FxHashMap::default();
        let mut names: BTreeSet<String> = BTreeSet::new();
        for (child, parent) in pairs {
            let child = child.into();
            let parent = parent.into();
            names.insert(child.clone());
            names.insert(parent.clone());
            parents.insert(child, parent);
        }

        // Every name contributes itself to its own expansion and to the
        // expansion of each ancestor on its parent chain.
        let mut expansions: FxHashMap<String, BTreeSet<String>> = FxHashMap::default();
        for name in &names {
            expansions
                .entry(name.clone())
                .or_default()
                .insert(name.clone());

            let mut visited: BTreeSet<&str> = BTreeSet::new();
            let mut current = name.as_str();
            while let Some(parent) = parents.get(current) {
                if !visited.insert(current) {
                    break;
                }
                expansions
                    .entry(parent.clone())
                    .or_default()
                    .insert(name.clone());
                current = parent.as_str();
            }
        }

        Self {
            parents,
            expansions,
        }
    }

    /// Build a hierarchy from a JSON object `{"IfcDoor": "IfcBuildingElement", ...}`
    pub fn from_json(document: &str) -> Result<Self, SchemaError> {
        let value: serde_json::Value = serde_json::from_str(document)?;
        let object = value
            .as_object()
            .ok_or_else(|| SchemaError::InvalidDocument("expected a JSON object".to_string()))?;

        let mut pairs = Vec::with_capacity(object.len());
        for (child, parent) in object {
            let parent = parent.as_str().ok_or_else(|| {
                SchemaError::InvalidDocument(format!("parent of '{child}' is not a string"))
            })?;
            pairs.push((child.clone(), parent.to_string()));
        }
        Ok(Self::from_pairs(pairs))
    }

    /// Expand a type name into itself plus all registered descendants
    ///
    /// An unrecognized name expands to the singleton set and logs a warning;
    /// an unknown filter value must never fail a query.
    pub fn expand(&self, type_name: &str) -> BTreeSet<String> {
        match self.expansions.get(type_name) {
            Some(expansion) => expansion.clone(),
            None => {
                log::warn!("unknown type '{type_name}' in filter, matching exactly");
                BTreeSet::from([type_name.to_string()])
            }
        }
    }

    /// Check whether `type_name` is `base` or one of its descendants
    pub fn is_descendant_of(&self, type_name: &str, base: &str) -> bool {
        self.expansions
            .get(base)
            .is_some_and(|expansion| expansion.contains(type_name))
    }

    /// Direct parent of a type, if registered and not a root
    pub fn parent_of(&self, type_name: &str) -> Option<&str> {
        self.parents.get(type_name).map(String::as_str)
    }

    /// Whether the name is registered in the table
    pub fn contains(&self, type_name: &str) -> bool {
        self.expansions.contains_key(type_name)
    }

    /// Number of registered type names
    pub fn len(&self) -> usize {
        self.expansions.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.expansions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TypeHierarchy {
        TypeHierarchy::from_pairs([
            ("IfcBuildingElement", "IfcElement"),
            ("IfcDoor", "IfcBuildingElement"),
            ("IfcWall", "IfcBuildingElement"),
            ("IfcWallStandardCase", "IfcWall"),
        ])
    }

    #[test]
    fn expand_includes_self_and_descendants() {
        let hierarchy = sample();
        let expanded = hierarchy.expand("IfcBuildingElement");
        assert!(expanded.contains("IfcBuildingElement"));
        assert!(expanded.contains("IfcDoor"));
        assert!(expanded.contains("IfcWall"));
        assert!(expanded.contains("IfcWallStandardCase"));
        assert!(!expanded.contains("IfcElement"));
    }

    #[test]
    fn leaf_expands_to_itself() {
        let hierarchy = sample();
        assert_eq!(
            hierarchy.expand("IfcDoor"),
            BTreeSet::from(["IfcDoor".to_string()])
        );
    }

    #[test]
    fn unknown_name_expands_to_singleton() {
        let hierarchy = sample();
        assert_eq!(
            hierarchy.expand("NotAType"),
            BTreeSet::from(["NotAType".to_string()])
        );
    }

    #[test]
    fn descendant_checks() {
        let hierarchy = sample();
        assert!(hierarchy.is_descendant_of("IfcWallStandardCase", "IfcElement"));
        assert!(hierarchy.is_descendant_of("IfcDoor", "IfcDoor"));
        assert!(!hierarchy.is_descendant_of("IfcElement", "IfcDoor"));
        assert!(!hierarchy.is_descendant_of("NotAType", "IfcElement"));
    }

    #[test]
    fn roots_are_registered() {
        let hierarchy = sample();
        assert!(hierarchy.contains("IfcElement"));
        assert_eq!(hierarchy.parent_of("IfcElement"), None);
        assert_eq!(hierarchy.parent_of("IfcDoor"), Some("IfcBuildingElement"));
    }

    #[test]
    fn loads_from_json_object() {
        let hierarchy = TypeHierarchy::from_json(
            r#"{"IfcDoor": "IfcBuildingElement", "IfcBuildingElement": "IfcElement"}"#,
        )
        .unwrap();
        assert!(hierarchy.is_descendant_of("IfcDoor", "IfcElement"));
    }

    #[test]
    fn rejects_non_object_json() {
        assert!(matches!(
            TypeHierarchy::from_json("[1, 2]"),
            Err(SchemaError::InvalidDocument(_))
        ));
        assert!(matches!(
            TypeHierarchy::from_json(r#"{"IfcDoor": 3}"#),
            Err(SchemaError::InvalidDocument(_))
        ));
    }
}
