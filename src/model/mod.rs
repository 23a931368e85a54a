// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Holocron-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Holocron and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Records are flat attribute bags linked to each other only through [`EntityRef`]s; the
//! category of a reference is derived from its path.

pub mod category;
pub mod entity_ref;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod layout;
pub mod record;

pub use category::{resolve_category, Category, CategoryLabel, ParseCategoryError};
pub use entity_ref::{EntityRef, EntityRefError};
pub use layout::{layout, CategoryLayout, FieldSpec, ListLabel, RelatedSpec};
pub use record::{EntityRecord, Page, RelatedItem};
