// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Holocron-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Holocron and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Opaque absolute URL identifying exactly one record in exactly one category.
///
/// The value is kept verbatim; it is only ever compared for equality and split into
/// path segments. Examples:
/// - `https://swapi.py4e.com/api/people/1/`
/// - `https://swapi.py4e.com/api/films/4/`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityRef {
    value: String,
}

impl EntityRef {
    pub fn new(value: impl Into<String>) -> Result<Self, EntityRefError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(EntityRefError::Empty);
        }
        if value.chars().any(char::is_whitespace) {
            return Err(EntityRefError::ContainsWhitespace);
        }
        if !value.contains("://") {
            return Err(EntityRefError::NotAbsolute);
        }
        Ok(Self { value })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Non-empty `/`-separated segments of the reference, scheme and host included.
    pub fn segments(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.value.split('/').filter(|segment| !segment.is_empty())
    }

    /// Second-to-last segment; names the category in the upstream vocabulary.
    pub fn category_segment(&self) -> Option<&str> {
        self.segments().rev().nth(1)
    }

    /// Last segment; the record id within its category.
    pub fn id(&self) -> Option<&str> {
        self.segments().next_back()
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for EntityRef {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for EntityRef {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for EntityRef {
    type Err = EntityRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_owned())
    }
}

impl TryFrom<String> for EntityRef {
    type Error = EntityRefError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityRefError {
    Empty,
    ContainsWhitespace,
    NotAbsolute,
}

impl fmt::Display for EntityRefError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("entity reference must not be empty"),
            Self::ContainsWhitespace => f.write_str("entity reference must not contain whitespace"),
            Self::NotAbsolute => f.write_str("entity reference must be an absolute url"),
        }
    }
}

impl std::error::Error for EntityRefError {}
