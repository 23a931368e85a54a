// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Holocron-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Holocron and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Holocron: a terminal catalog browser for the public sci-fi reference API.
//!
//! Six categories (characters, films, planets, starships, vehicles, species) are browsed
//! page by page; cross-references in a record's detail jump to the referenced record in
//! its own category tab.

pub mod browser;
pub mod client;
pub mod config;
pub mod controller;
pub mod logging;
pub mod model;
pub mod nav;
pub mod resolve;
pub mod tui;
