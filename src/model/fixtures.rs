// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Holocron-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Holocron and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use serde_json::json;

use super::category::Category;
use super::entity_ref::EntityRef;
use super::record::EntityRecord;

pub(crate) const BASE_URL: &str = "https://swapi.test/api";

pub(crate) fn url(category: Category, id: u32) -> String {
    format!("{BASE_URL}/{}/{id}/", category.path_segment())
}

pub(crate) fn eref(category: Category, id: u32) -> EntityRef {
    EntityRef::new(url(category, id)).expect("entity ref")
}

fn person(id: u32) -> EntityRecord {
    let name = if id == 1 { "Luke Skywalker".to_owned() } else { format!("Person {id}") };
    let homeworld = if id == 1 { 1 } else { (id % 60) + 1 };
    record(json!({
        "name": name,
        "height": "172",
        "mass": "77",
        "hair_color": "blond",
        "skin_color": "fair",
        "eye_color": "blue",
        "birth_year": "19BBY",
        "gender": "male",
        "homeworld": url(Category::Planet, homeworld),
        "films": [url(Category::Film, 1), url(Category::Film, 2)],
        "species": [],
        "vehicles": [],
        "starships": [url(Category::Starship, 12)],
        "url": url(Category::Character, id),
    }))
}

fn planet(id: u32) -> EntityRecord {
    let name = if id == 1 { "Tatooine".to_owned() } else { format!("Planet {id}") };
    record(json!({
        "name": name,
        "climate": "arid",
        "diameter": "10465",
        "residents": [url(Category::Character, 1)],
        "films": [url(Category::Film, 1)],
        "url": url(Category::Planet, id),
    }))
}

/// Returned deliberately out of episode order.
fn films() -> Vec<EntityRecord> {
    [
        (6, 3, "Revenge of the Sith"),
        (1, 4, "A New Hope"),
        (3, 6, "Return of the Jedi"),
        (2, 5, "The Empire Strikes Back"),
        (5, 2, "Attack of the Clones"),
        (4, 1, "The Phantom Menace"),
    ]
    .into_iter()
    .map(|(id, episode, title)| {
        let characters = if id == 1 {
            vec![url(Category::Character, 1), url(Category::Character, 99999)]
        } else {
            vec![url(Category::Character, 1)]
        };
        record(json!({
            "title": title,
            "episode_id": episode,
            "director": "George Lucas",
            "producer": "Rick McCallum",
            "release_date": "1977-05-25",
            "opening_crawl": "It is a period of civil war.",
            "characters": characters,
            "planets": [url(Category::Planet, 1)],
            "starships": [],
            "vehicles": [],
            "url": url(Category::Film, id),
        }))
    })
    .collect()
}

fn named(category: Category, id: u32) -> EntityRecord {
    record(json!({
        "name": format!("{} {id}", category.tab_label()),
        "films": [url(Category::Film, 1)],
        "url": url(category, id),
    }))
}

fn record(value: serde_json::Value) -> EntityRecord {
    serde_json::from_value(value).expect("record")
}

/// Listing order per category: 82 people, 6 films, 60 planets, 36 starships,
/// 39 vehicles, 37 species.
pub(crate) fn dataset() -> BTreeMap<Category, Vec<EntityRecord>> {
    let mut data = BTreeMap::new();
    data.insert(Category::Character, (1..=82).map(person).collect());
    data.insert(Category::Film, films());
    data.insert(Category::Planet, (1..=60).map(planet).collect());
    data.insert(Category::Starship, (1..=36).map(|id| named(Category::Starship, id)).collect());
    data.insert(Category::Vehicle, (1..=39).map(|id| named(Category::Vehicle, id)).collect());
    data.insert(Category::Species, (1..=37).map(|id| named(Category::Species, id)).collect());
    data
}
