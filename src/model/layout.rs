// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Holocron-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Holocron and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Static per-category layout descriptors.
//!
//! One generic browser renders every category; everything that differs between
//! categories (list label, detail fields, cross-reference groups, ordering) lives here.

use super::category::Category;
use super::record::EntityRecord;

/// One scalar attribute in the detail grid, e.g. `Height: 172 cm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub label: &'static str,
    pub key: &'static str,
    pub suffix: &'static str,
}

/// One labeled group of cross-references, e.g. `Films (3)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelatedSpec {
    pub label: &'static str,
    pub key: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListLabel {
    Name,
    Episode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryLayout {
    pub category: Category,
    pub list_label: ListLabel,
    pub fields: &'static [FieldSpec],
    /// Long free-text attribute shown below the grid.
    pub prose: Option<FieldSpec>,
    pub related: &'static [RelatedSpec],
    pub sort_by_episode: bool,
}

const fn field(label: &'static str, key: &'static str, suffix: &'static str) -> FieldSpec {
    FieldSpec { label, key, suffix }
}

const fn related(label: &'static str, key: &'static str) -> RelatedSpec {
    RelatedSpec { label, key }
}

static CHARACTER: CategoryLayout = CategoryLayout {
    category: Category::Character,
    list_label: ListLabel::Name,
    fields: &[
        field("Height", "height", " cm"),
        field("Mass", "mass", " kg"),
        field("Hair", "hair_color", ""),
        field("Skin", "skin_color", ""),
        field("Eyes", "eye_color", ""),
        field("Birth Year", "birth_year", ""),
        field("Gender", "gender", ""),
    ],
    prose: None,
    related: &[
        related("Homeworld", "homeworld"),
        related("Films", "films"),
        related("Species", "species"),
        related("Vehicles", "vehicles"),
        related("Starships", "starships"),
    ],
    sort_by_episode: false,
};

static FILM: CategoryLayout = CategoryLayout {
    category: Category::Film,
    list_label: ListLabel::Episode,
    fields: &[
        field("Director", "director", ""),
        field("Producer", "producer", ""),
        field("Release Date", "release_date", ""),
    ],
    prose: Some(field("Opening Crawl", "opening_crawl", "")),
    related: &[
        related("Characters", "characters"),
        related("Planets", "planets"),
        related("Starships", "starships"),
        related("Vehicles", "vehicles"),
    ],
    sort_by_episode: true,
};

static PLANET: CategoryLayout = CategoryLayout {
    category: Category::Planet,
    list_label: ListLabel::Name,
    fields: &[
        field("Diameter", "diameter", " km"),
        field("Climate", "climate", ""),
        field("Gravity", "gravity", ""),
        field("Terrain", "terrain", ""),
        field("Population", "population", ""),
        field("Rotation Period", "rotation_period", " hours"),
        field("Orbital Period", "orbital_period", " days"),
        field("Surface Water", "surface_water", "%"),
    ],
    prose: None,
    related: &[related("Residents", "residents"), related("Films", "films")],
    sort_by_episode: false,
};

static STARSHIP: CategoryLayout = CategoryLayout {
    category: Category::Starship,
    list_label: ListLabel::Name,
    fields: &[
        field("Model", "model", ""),
        field("Manufacturer", "manufacturer", ""),
        field("Length", "length", " m"),
        field("Max Speed", "max_atmosphering_speed", " km/h"),
        field("Crew", "crew", ""),
        field("Passengers", "passengers", ""),
        field("Cargo Capacity", "cargo_capacity", " kg"),
        field("Hyperdrive Rating", "hyperdrive_rating", ""),
        field("Cost", "cost_in_credits", " credits"),
    ],
    prose: None,
    related: &[related("Pilots", "pilots"), related("Films", "films")],
    sort_by_episode: false,
};

static VEHICLE: CategoryLayout = CategoryLayout {
    category: Category::Vehicle,
    list_label: ListLabel::Name,
    fields: &[
        field("Model", "model", ""),
        field("Manufacturer", "manufacturer", ""),
        field("Length", "length", " m"),
        field("Max Speed", "max_atmosphering_speed", " km/h"),
        field("Crew", "crew", ""),
        field("Passengers", "passengers", ""),
        field("Cargo Capacity", "cargo_capacity", " kg"),
        field("Cost", "cost_in_credits", " credits"),
    ],
    prose: None,
    related: &[related("Pilots", "pilots"), related("Films", "films")],
    sort_by_episode: false,
};

static SPECIES: CategoryLayout = CategoryLayout {
    category: Category::Species,
    list_label: ListLabel::Name,
    fields: &[
        field("Classification", "classification", ""),
        field("Designation", "designation", ""),
        field("Average Height", "average_height", " cm"),
        field("Skin Colors", "skin_colors", ""),
        field("Hair Colors", "hair_colors", ""),
        field("Eye Colors", "eye_colors", ""),
        field("Average Lifespan", "average_lifespan", " years"),
        field("Language", "language", ""),
    ],
    prose: None,
    related: &[
        related("Homeworld", "homeworld"),
        related("Characters", "people"),
        related("Films", "films"),
    ],
    sort_by_episode: false,
};

pub fn layout(category: Category) -> &'static CategoryLayout {
    match category {
        Category::Character => &CHARACTER,
        Category::Film => &FILM,
        Category::Planet => &PLANET,
        Category::Starship => &STARSHIP,
        Category::Vehicle => &VEHICLE,
        Category::Species => &SPECIES,
    }
}

impl CategoryLayout {
    /// Label used for both the list row and the detail heading.
    pub fn list_label(&self, record: &EntityRecord) -> String {
        match self.list_label {
            ListLabel::Name => record.display_name().to_owned(),
            ListLabel::Episode => {
                let episode =
                    record.text("episode_id").map(|value| value.into_owned()).unwrap_or_default();
                format!("Episode {episode}: {}", record.display_name())
            }
        }
    }

    /// `(label, rendered value)` for every field present on the record.
    pub fn field_rows(&self, record: &EntityRecord) -> Vec<(&'static str, String)> {
        self.fields
            .iter()
            .filter_map(|spec| {
                record.text(spec.key).map(|value| (spec.label, format!("{value}{}", spec.suffix)))
            })
            .collect()
    }

    /// Orders a freshly fetched page for display.
    pub fn arrange(&self, records: &mut [EntityRecord]) {
        if self.sort_by_episode {
            records.sort_by_key(|record| record.episode_id().unwrap_or(i64::MAX));
        }
    }
}
