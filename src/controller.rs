// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Holocron-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Holocron and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Top-level controller: owns the active tab and the externally selected reference.
//!
//! Only one category view is alive at a time; activating a tab mounts a fresh browser for it,
//! so events still in flight for a previous view are dropped by category and generation.

use tracing::{info, warn};

use crate::browser::{BrowserEffect, BrowserEvent, CategoryBrowser};
use crate::model::{Category, CategoryLabel, EntityRef};
use crate::nav::navigate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The target tab is active and has been asked to select the reference.
    Routed(Category),
    /// The reference names a category without a tab; nothing changed.
    UnknownCategory(String),
}

#[derive(Debug, Clone)]
pub struct Controller {
    active: Category,
    selected: Option<EntityRef>,
    browser: CategoryBrowser,
}

impl Controller {
    /// Builds the controller with `initial` active; the returned effects mount its view.
    pub fn new(initial: Category) -> (Self, Vec<BrowserEffect>) {
        let mut browser = CategoryBrowser::new(initial);
        let mount = browser.mount();
        let controller = Self { active: initial, selected: None, browser };
        (controller, vec![mount])
    }

    pub fn active(&self) -> Category {
        self.active
    }

    pub fn selected(&self) -> Option<&EntityRef> {
        self.selected.as_ref()
    }

    pub fn browser(&self) -> &CategoryBrowser {
        &self.browser
    }

    pub fn browser_mut(&mut self) -> &mut CategoryBrowser {
        &mut self.browser
    }

    /// Tab picked directly by the user: clears the external selection and remounts at page 1.
    pub fn activate_tab(&mut self, category: Category) -> Vec<BrowserEffect> {
        self.selected = None;
        self.mount(category)
    }

    /// Cross-reference activated inside a detail panel, reported with its raw path segment.
    pub fn on_navigate(
        &mut self,
        reference: EntityRef,
        segment: &str,
    ) -> (NavigationOutcome, Vec<BrowserEffect>) {
        let navigation = navigate(&reference);
        let target = match navigation.target_category {
            CategoryLabel::Known(category) => category,
            CategoryLabel::Other(label) => {
                warn!(reference = %reference, segment, "no tab for category");
                return (NavigationOutcome::UnknownCategory(label), Vec::new());
            }
        };

        info!(reference = %reference, from = %self.active, to = %target, "navigate");
        self.selected = Some(navigation.initial_selection.clone());
        let mut effects = Vec::new();
        if target != self.active {
            effects.extend(self.mount(target));
        }
        effects.extend(self.browser.request_selection(Some(navigation.initial_selection)));
        (NavigationOutcome::Routed(target), effects)
    }

    /// Routes a fetch outcome to the active view; events for other views are discarded.
    pub fn dispatch(&mut self, event: BrowserEvent) -> Vec<BrowserEffect> {
        if event.category() != self.active {
            return Vec::new();
        }
        self.browser.apply(event)
    }

    fn mount(&mut self, category: Category) -> Vec<BrowserEffect> {
        self.active = category;
        self.browser = CategoryBrowser::new(category);
        vec![self.browser.mount()]
    }
}
