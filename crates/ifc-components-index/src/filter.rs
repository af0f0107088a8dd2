// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Query filters
//!
//! Each filter dimension is an optional, case-sensitive value list; an
//! omitted dimension contributes no constraint. The wire form is a
//! comma-separated list per dimension. Validation happens before any
//! snapshot access.

use crate::error::QueryError;

/// Filter over indexed components
///
/// Supplied dimensions are intersected; values within one dimension are
/// unioned. Type dimensions are hierarchy-expanded by the engine.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryFilter {
    /// Model names to search; `None` selects all models
    pub models: Option<Vec<String>>,
    /// Entity type names, expanded to include registered descendants
    pub entity_types: Option<Vec<String>>,
    /// Component type names, expanded to include registered descendants
    pub component_types: Option<Vec<String>>,
    /// Entity GUIDs
    pub entity_guids: Option<Vec<String>>,
    /// Component GUIDs
    pub component_guids: Option<Vec<String>>,
}

impl QueryFilter {
    /// Unconstrained filter matching everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrain to the given models
    pub fn with_models<I: IntoIterator<Item = S>, S: Into<String>>(mut self, models: I) -> Self {
        self.models = Some(models.into_iter().map(Into::into).collect());
        self
    }

    /// Constrain to the given entity types (descendants included)
    pub fn with_entity_types<I: IntoIterator<Item = S>, S: Into<String>>(
        mut self,
        types: I,
    ) -> Self {
        self.entity_types = Some(types.into_iter().map(Into::into).collect());
        self
    }

    /// Constrain to the given component types (descendants included)
    pub fn with_component_types<I: IntoIterator<Item = S>, S: Into<String>>(
        mut self,
        types: I,
    ) -> Self {
        self.component_types = Some(types.into_iter().map(Into::into).collect());
        self
    }

    /// Constrain to the given entity GUIDs
    pub fn with_entity_guids<I: IntoIterator<Item = S>, S: Into<String>>(
        mut self,
        guids: I,
    ) -> Self {
        self.entity_guids = Some(guids.into_iter().map(Into::into).collect());
        self
    }

    /// Constrain to the given component GUIDs
    pub fn with_component_guids<I: IntoIterator<Item = S>, S: Into<String>>(
        mut self,
        guids: I,
    ) -> Self {
        self.component_guids = Some(guids.into_iter().map(Into::into).collect());
        self
    }

    /// Parse the comma-separated wire form
    ///
    /// `None` or an all-whitespace value means "unconstrained" for that
    /// dimension. Blank items inside a list are rejected.
    pub fn parse(
        models: Option<&str>,
        entity_types: Option<&str>,
        component_types: Option<&str>,
        entity_guids: Option<&str>,
        component_guids: Option<&str>,
    ) -> Result<Self, QueryError> {
        Ok(Self {
            models: parse_list("models", models)?,
            entity_types: parse_list("entityTypes", entity_types)?,
            component_types: parse_list("componentTypes", component_types)?,
            entity_guids: parse_list("entityGuids", entity_guids)?,
            component_guids: parse_list("componentGuids", component_guids)?,
        })
    }

    /// Reject filters with supplied-but-unusable dimensions
    pub fn validate(&self) -> Result<(), QueryError> {
        validate_list("models", &self.models)?;
        validate_list("entityTypes", &self.entity_types)?;
        validate_list("componentTypes", &self.component_types)?;
        validate_list("entityGuids", &self.entity_guids)?;
        validate_list("componentGuids", &self.component_guids)?;
        Ok(())
    }
}

fn parse_list(
    field: &'static str,
    raw: Option<&str>,
) -> Result<Option<Vec<String>>, QueryError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    if raw.trim().is_empty() {
        return Ok(None);
    }
    let mut items = Vec::new();
    for part in raw.split(',') {
        let part = part.trim();
        if part.is_empty() {
            return Err(QueryError::InvalidFilter {
                field,
                reason: "blank list item".to_string(),
            });
        }
        items.push(part.to_string());
    }
    Ok(Some(items))
}

fn validate_list(field: &'static str, list: &Option<Vec<String>>) -> Result<(), QueryError> {
    let Some(list) = list else {
        return Ok(());
    };
    if list.is_empty() {
        return Err(QueryError::InvalidFilter {
            field,
            reason: "supplied but empty".to_string(),
        });
    }
    if list.iter().any(|item| item.trim().is_empty()) {
        return Err(QueryError::InvalidFilter {
            field,
            reason: "blank list item".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_lists() {
        let filter = QueryFilter::parse(
            Some("HelloWall-03, Office-01"),
            Some("IfcDoor"),
            None,
            None,
            Some("g1,g2"),
        )
        .unwrap();
        assert_eq!(
            filter.models,
            Some(vec!["HelloWall-03".to_string(), "Office-01".to_string()])
        );
        assert_eq!(filter.entity_types, Some(vec!["IfcDoor".to_string()]));
        assert_eq!(filter.component_types, None);
        assert_eq!(
            filter.component_guids,
            Some(vec!["g1".to_string(), "g2".to_string()])
        );
    }

    #[test]
    fn empty_value_means_unconstrained() {
        let filter = QueryFilter::parse(Some(""), Some("  "), None, None, None).unwrap();
        assert_eq!(filter, QueryFilter::new());
    }

    #[test]
    fn blank_list_item_is_rejected() {
        let error =
            QueryFilter::parse(Some("a,,b"), None, None, None, None).unwrap_err();
        assert_eq!(
            error,
            QueryError::InvalidFilter {
                field: "models",
                reason: "blank list item".to_string(),
            }
        );
    }

    #[test]
    fn filters_are_case_sensitive() {
        let filter = QueryFilter::parse(None, Some("ifcdoor"), None, None, None).unwrap();
        assert_eq!(filter.entity_types, Some(vec!["ifcdoor".to_string()]));
    }

    #[test]
    fn validate_rejects_supplied_empty_dimension() {
        let filter = QueryFilter::new().with_entity_types(Vec::<String>::new());
        assert!(filter.validate().is_err());

        let filter = QueryFilter::new().with_models(["ok", " "]);
        assert!(filter.validate().is_err());

        assert!(QueryFilter::new().validate().is_ok());
    }
}
