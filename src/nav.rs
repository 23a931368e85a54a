// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Holocron-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Holocron and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Cross-category navigation.

use crate::model::{resolve_category, CategoryLabel, EntityRef};

/// Where an activated cross-reference leads: the tab to show and what to select there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub target_category: CategoryLabel,
    pub initial_selection: EntityRef,
}

pub fn navigate(reference: &EntityRef) -> Navigation {
    Navigation {
        target_category: resolve_category(reference),
        initial_selection: reference.clone(),
    }
}
