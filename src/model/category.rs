// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Holocron-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Holocron and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use super::entity_ref::EntityRef;

/// The six fixed entity kinds of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Character,
    Film,
    Planet,
    Starship,
    Vehicle,
    Species,
}

/// Upstream path segment vocabulary, in tab order.
const PATH_SEGMENTS: [(&str, Category); 6] = [
    ("people", Category::Character),
    ("films", Category::Film),
    ("planets", Category::Planet),
    ("starships", Category::Starship),
    ("vehicles", Category::Vehicle),
    ("species", Category::Species),
];

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Character,
        Category::Film,
        Category::Planet,
        Category::Starship,
        Category::Vehicle,
        Category::Species,
    ];

    /// Literal path segment used by the upstream API (`people`, `films`, ...).
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Character => "people",
            Self::Film => "films",
            Self::Planet => "planets",
            Self::Starship => "starships",
            Self::Vehicle => "vehicles",
            Self::Species => "species",
        }
    }

    pub fn from_path_segment(segment: &str) -> Option<Self> {
        PATH_SEGMENTS
            .iter()
            .find(|(candidate, _)| *candidate == segment)
            .map(|(_, category)| *category)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Film => "film",
            Self::Planet => "planet",
            Self::Starship => "starship",
            Self::Vehicle => "vehicle",
            Self::Species => "species",
        }
    }

    pub fn tab_label(self) -> &'static str {
        match self {
            Self::Character => "Characters",
            Self::Film => "Films",
            Self::Planet => "Planets",
            Self::Starship => "Starships",
            Self::Vehicle => "Vehicles",
            Self::Species => "Species",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::Character => 0,
            Self::Film => 1,
            Self::Planet => 2,
            Self::Starship => 3,
            Self::Vehicle => 4,
            Self::Species => 5,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts the enum name, the tab label, or the upstream path segment (case-insensitive).
impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        if let Some(category) = Self::from_path_segment(&lower) {
            return Ok(category);
        }
        Self::ALL
            .into_iter()
            .find(|category| {
                category.as_str() == lower || category.tab_label().eq_ignore_ascii_case(&lower)
            })
            .ok_or_else(|| ParseCategoryError { value: s.to_owned() })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError {
    value: String,
}

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category: {}", self.value)
    }
}

impl std::error::Error for ParseCategoryError {}

/// Category derived from a reference: a known [`Category`], or the raw path segment verbatim.
///
/// Unknown segments are not an error; they are carried as an opaque display label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CategoryLabel {
    Known(Category),
    Other(String),
}

impl CategoryLabel {
    pub fn known(&self) -> Option<Category> {
        match self {
            Self::Known(category) => Some(*category),
            Self::Other(_) => None,
        }
    }
}

impl fmt::Display for CategoryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(category) => f.write_str(category.as_str()),
            Self::Other(raw) => f.write_str(raw),
        }
    }
}

impl From<Category> for CategoryLabel {
    fn from(value: Category) -> Self {
        Self::Known(value)
    }
}

/// Maps a reference to its category from the path alone; never touches the network.
pub fn resolve_category(reference: &EntityRef) -> CategoryLabel {
    let segment = reference.category_segment().unwrap_or_default();
    match Category::from_path_segment(segment) {
        Some(category) => CategoryLabel::Known(category),
        None => CategoryLabel::Other(segment.to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{resolve_category, Category, CategoryLabel};
    use crate::model::EntityRef;

    fn reference(raw: &str) -> EntityRef {
        EntityRef::new(raw).expect("entity ref")
    }

    #[rstest]
    #[case("https://swapi.py4e.com/api/people/1/", Category::Character)]
    #[case("https://swapi.py4e.com/api/films/4/", Category::Film)]
    #[case("https://swapi.py4e.com/api/planets/8/", Category::Planet)]
    #[case("https://swapi.py4e.com/api/starships/9/", Category::Starship)]
    #[case("https://swapi.py4e.com/api/vehicles/4/", Category::Vehicle)]
    #[case("https://swapi.py4e.com/api/species/3/", Category::Species)]
    #[case("https://swapi.py4e.com/api/people/1", Category::Character)]
    fn resolves_upstream_vocabulary(#[case] raw: &str, #[case] expected: Category) {
        assert_eq!(resolve_category(&reference(raw)), CategoryLabel::Known(expected));
    }

    #[test]
    fn unknown_segment_is_returned_verbatim() {
        let label = resolve_category(&reference("https://swapi.py4e.com/api/droids/2/"));
        assert_eq!(label, CategoryLabel::Other("droids".to_owned()));
        assert_eq!(label.to_string(), "droids");
        assert_eq!(label.known(), None);
    }

    #[test]
    fn mapping_is_case_sensitive_like_upstream() {
        let label = resolve_category(&reference("https://swapi.py4e.com/api/People/1/"));
        assert_eq!(label, CategoryLabel::Other("People".to_owned()));
    }

    #[test]
    fn resolution_depends_only_on_the_path() {
        let raw = "https://swapi.py4e.com/api/starships/10/";
        let first = resolve_category(&reference(raw));
        let second = resolve_category(&reference(raw));
        assert_eq!(first, second);

        let other_host = resolve_category(&reference("http://mirror.example/api/starships/10/"));
        assert_eq!(first, other_host);
    }

    #[test]
    fn path_segments_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_path_segment(category.path_segment()), Some(category));
        }
    }

    #[rstest]
    #[case("characters", Category::Character)]
    #[case("Characters", Category::Character)]
    #[case("people", Category::Character)]
    #[case("character", Category::Character)]
    #[case("films", Category::Film)]
    #[case("SPECIES", Category::Species)]
    fn parses_tab_names(#[case] raw: &str, #[case] expected: Category) {
        assert_eq!(raw.parse::<Category>().expect("category"), expected);
    }

    #[test]
    fn rejects_unknown_tab_names() {
        let err = "droids".parse::<Category>().unwrap_err();
        assert_eq!(err.to_string(), "unknown category: droids");
    }

    #[test]
    fn tab_cycle_wraps() {
        assert_eq!(Category::Species.next(), Category::Character);
        assert_eq!(Category::Character.prev(), Category::Species);
    }
}
