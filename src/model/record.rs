// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Holocron-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Holocron and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::category::CategoryLabel;
use super::entity_ref::EntityRef;

const UNKNOWN_DISPLAY_NAME: &str = "Unknown";

/// Flat attribute bag as returned by the upstream API.
///
/// Category-specific attributes are looked up by key through the layout descriptors;
/// records are never mutated after decoding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityRecord {
    attributes: Map<String, Value>,
}

impl EntityRecord {
    pub fn new(attributes: Map<String, Value>) -> Self {
        Self { attributes }
    }

    pub fn url(&self) -> Option<EntityRef> {
        self.str_field("url").and_then(|raw| EntityRef::new(raw).ok())
    }

    pub fn is(&self, reference: &EntityRef) -> bool {
        self.str_field("url") == Some(reference.as_str())
    }

    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(Value::as_str)
    }

    /// Scalar attribute rendered for display; numbers and booleans are stringified.
    pub fn text(&self, key: &str) -> Option<Cow<'_, str>> {
        match self.attributes.get(key)? {
            Value::String(value) => Some(Cow::Borrowed(value.as_str())),
            Value::Number(value) => Some(Cow::Owned(value.to_string())),
            Value::Bool(value) => Some(Cow::Owned(value.to_string())),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.str_field("title")
    }

    pub fn name(&self) -> Option<&str> {
        self.str_field("name")
    }

    /// `title`, else `name`, else `"Unknown"`.
    pub fn display_name(&self) -> &str {
        self.title().or_else(|| self.name()).unwrap_or(UNKNOWN_DISPLAY_NAME)
    }

    pub fn episode_id(&self) -> Option<i64> {
        self.attributes.get("episode_id").and_then(Value::as_i64)
    }

    /// References stored under `key`, which may hold a single url or a list of urls.
    ///
    /// Null, missing and malformed entries yield nothing.
    pub fn references(&self, key: &str) -> Vec<EntityRef> {
        match self.attributes.get(key) {
            Some(Value::String(raw)) => EntityRef::new(raw.as_str()).ok().into_iter().collect(),
            Some(Value::Array(values)) => values
                .iter()
                .filter_map(Value::as_str)
                .filter_map(|raw| EntityRef::new(raw).ok())
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// One window of a category listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<EntityRecord>,
}

impl Page {
    pub fn position_of(&self, reference: &EntityRef) -> Option<usize> {
        self.results.iter().position(|record| record.is(reference))
    }
}

/// Display record for one resolved cross-reference. Never cached across views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedItem {
    pub display_name: String,
    pub category: CategoryLabel,
    pub reference: EntityRef,
}
