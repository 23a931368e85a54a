// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Holocron-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Holocron and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Generic paginated category browser.
//!
//! The browser is a synchronous state machine: operations return [`BrowserEffect`]s describing
//! the fetches they need, and fetch outcomes come back as [`BrowserEvent`]s through
//! [`CategoryBrowser::apply`]. Every outstanding request is tagged with a [`Generation`]; an
//! event whose generation is no longer current is dropped, which is how superseded work is
//! detected without cancelling it.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, info};

use crate::model::{layout, Category, CategoryLayout, EntityRecord, EntityRef, Page};
use crate::resolve::{RelatedGroup, RelatedRequest};

mod runner;

pub use runner::run_effect;

/// Fixed upstream page size.
pub const PAGE_SIZE: u64 = 10;

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// Process-wide monotonically increasing request tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    pub fn next() -> Self {
        Self(NEXT_GENERATION.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "g{}", self.0)
    }
}

/// `ceil(count / PAGE_SIZE)`.
pub fn total_pages(count: u64) -> u32 {
    u32::try_from(count.div_ceil(PAGE_SIZE)).unwrap_or(u32::MAX)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Error(String),
}

/// Direct fetch of a requested reference that was not on the loaded page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OffPageState {
    Idle,
    Resolving { reference: EntityRef, generation: Generation },
    Resolved { reference: EntityRef },
    Failed { reference: EntityRef },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelatedState {
    Idle,
    Resolving { generation: Generation, requests: Vec<RelatedRequest> },
    Ready(Vec<RelatedGroup>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserEffect {
    FetchPage { category: Category, page: u32, generation: Generation },
    FetchSelection { category: Category, reference: EntityRef, generation: Generation },
    ResolveRelated { category: Category, generation: Generation, requests: Vec<RelatedRequest> },
}

impl BrowserEffect {
    pub fn category(&self) -> Category {
        match self {
            Self::FetchPage { category, .. }
            | Self::FetchSelection { category, .. }
            | Self::ResolveRelated { category, .. } => *category,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BrowserEvent {
    PageLoaded {
        category: Category,
        page: u32,
        generation: Generation,
        result: Result<Page, String>,
    },
    SelectionFetched {
        category: Category,
        generation: Generation,
        reference: EntityRef,
        record: Option<EntityRecord>,
    },
    RelatedResolved { category: Category, generation: Generation, groups: Vec<RelatedGroup> },
}

impl BrowserEvent {
    pub fn category(&self) -> Category {
        match self {
            Self::PageLoaded { category, .. }
            | Self::SelectionFetched { category, .. }
            | Self::RelatedResolved { category, .. } => *category,
        }
    }
}

/// Pagination and selection state for one category.
#[derive(Debug, Clone)]
pub struct CategoryBrowser {
    category: Category,
    layout: &'static CategoryLayout,
    page_number: u32,
    total_count: u64,
    page: Option<Page>,
    status: LoadStatus,
    page_generation: Option<Generation>,
    selection: Option<EntityRecord>,
    pending_selection: Option<EntityRef>,
    off_page: OffPageState,
    related: RelatedState,
}

impl CategoryBrowser {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            layout: layout(category),
            page_number: 1,
            total_count: 0,
            page: None,
            status: LoadStatus::Loading,
            page_generation: None,
            selection: None,
            pending_selection: None,
            off_page: OffPageState::Idle,
            related: RelatedState::Idle,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn layout(&self) -> &'static CategoryLayout {
        self.layout
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    pub fn total_pages(&self) -> u32 {
        total_pages(self.total_count)
    }

    pub fn page(&self) -> Option<&Page> {
        self.page.as_ref()
    }

    pub fn records(&self) -> &[EntityRecord] {
        self.page.as_ref().map(|page| page.results.as_slice()).unwrap_or_default()
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn selection(&self) -> Option<&EntityRecord> {
        self.selection.as_ref()
    }

    pub fn pending_selection(&self) -> Option<&EntityRef> {
        self.pending_selection.as_ref()
    }

    pub fn off_page(&self) -> &OffPageState {
        &self.off_page
    }

    pub fn related(&self) -> &RelatedState {
        &self.related
    }

    /// Position of the selection within the loaded page.
    pub fn selected_index(&self) -> Option<usize> {
        let url = self.selection.as_ref()?.url()?;
        self.page.as_ref()?.position_of(&url)
    }

    /// A selection exists but is not part of the loaded page.
    pub fn selection_is_off_page(&self) -> bool {
        self.selection.is_some() && self.selected_index().is_none()
    }

    pub fn shows_pagination(&self) -> bool {
        self.total_pages() > 1
    }

    /// Clamps to `[1, total_pages]`; before any page has loaded only page 1 exists.
    pub fn clamp_page(&self, page: u32) -> u32 {
        page.clamp(1, self.total_pages().max(1))
    }

    /// Starts loading the current page.
    pub fn mount(&mut self) -> BrowserEffect {
        self.load_page(self.page_number)
    }

    pub fn reload(&mut self) -> BrowserEffect {
        self.load_page(self.page_number)
    }

    pub fn go_to_page(&mut self, page: u32) -> Option<BrowserEffect> {
        let target = self.clamp_page(page);
        if target == self.page_number {
            return None;
        }
        info!(category = %self.category, from = self.page_number, to = target, "page change");
        Some(self.load_page(target))
    }

    pub fn next_page(&mut self) -> Option<BrowserEffect> {
        self.go_to_page(self.page_number.saturating_add(1))
    }

    pub fn prev_page(&mut self) -> Option<BrowserEffect> {
        self.go_to_page(self.page_number.saturating_sub(1))
    }

    /// User picked a listed row; the record is already loaded so nothing is fetched for it.
    pub fn select_index(&mut self, index: usize) -> Option<BrowserEffect> {
        let record = self.records().get(index)?.clone();
        self.off_page = OffPageState::Idle;
        Some(self.set_selection(record))
    }

    /// Externally requested selection, e.g. from cross-category navigation.
    ///
    /// Found on the loaded page: selected directly. Otherwise fetched by reference once a
    /// non-empty page has loaded; until then the request is held.
    pub fn request_selection(&mut self, reference: Option<EntityRef>) -> Vec<BrowserEffect> {
        let Some(reference) = reference else {
            self.pending_selection = None;
            return Vec::new();
        };

        if let Some(index) = self.page.as_ref().and_then(|page| page.position_of(&reference)) {
            self.pending_selection = None;
            return self.select_index(index).into_iter().collect();
        }

        let page_loaded = self.status == LoadStatus::Ready && !self.records().is_empty();
        if !page_loaded {
            debug!(category = %self.category, reference = %reference, "holding selection until page loads");
            self.pending_selection = Some(reference);
            return Vec::new();
        }

        self.pending_selection = None;
        let generation = Generation::next();
        debug!(category = %self.category, reference = %reference, %generation, "fetching off-page selection");
        self.off_page = OffPageState::Resolving { reference: reference.clone(), generation };
        vec![BrowserEffect::FetchSelection { category: self.category, reference, generation }]
    }

    /// Applies a fetch outcome; stale or foreign events are ignored.
    pub fn apply(&mut self, event: BrowserEvent) -> Vec<BrowserEffect> {
        if event.category() != self.category {
            return Vec::new();
        }

        match event {
            BrowserEvent::PageLoaded { page, generation, result, .. } => {
                if self.page_generation != Some(generation) {
                    debug!(category = %self.category, page, %generation, "dropping stale page");
                    return Vec::new();
                }
                self.page_generation = None;
                match result {
                    Ok(mut loaded) => {
                        self.layout.arrange(&mut loaded.results);
                        self.total_count = loaded.count;
                        self.page = Some(loaded);
                        self.status = LoadStatus::Ready;
                        let pending = self.pending_selection.take();
                        self.request_selection(pending)
                    }
                    Err(message) => {
                        self.page = None;
                        self.status = LoadStatus::Error(message);
                        Vec::new()
                    }
                }
            }
            BrowserEvent::SelectionFetched { generation, reference, record, .. } => {
                let current = matches!(
                    &self.off_page,
                    OffPageState::Resolving { generation: expected, .. } if *expected == generation
                );
                if !current {
                    debug!(category = %self.category, reference = %reference, %generation, "dropping stale selection");
                    return Vec::new();
                }
                match record {
                    Some(record) => {
                        self.off_page = OffPageState::Resolved { reference };
                        vec![self.set_selection(record)]
                    }
                    None => {
                        self.off_page = OffPageState::Failed { reference };
                        Vec::new()
                    }
                }
            }
            BrowserEvent::RelatedResolved { generation, groups, .. } => {
                let current = matches!(
                    &self.related,
                    RelatedState::Resolving { generation: expected, .. } if *expected == generation
                );
                if current {
                    self.related = RelatedState::Ready(groups);
                } else {
                    debug!(category = %self.category, %generation, "dropping stale related groups");
                }
                Vec::new()
            }
        }
    }

    fn load_page(&mut self, page: u32) -> BrowserEffect {
        let generation = Generation::next();
        self.page_number = page;
        self.status = LoadStatus::Loading;
        self.page_generation = Some(generation);
        BrowserEffect::FetchPage { category: self.category, page, generation }
    }

    fn set_selection(&mut self, record: EntityRecord) -> BrowserEffect {
        let requests = self
            .layout
            .related
            .iter()
            .map(|spec| RelatedRequest { label: spec.label, refs: record.references(spec.key) })
            .collect::<Vec<_>>();
        let generation = Generation::next();
        self.selection = Some(record);
        self.related = RelatedState::Resolving { generation, requests: requests.clone() };
        BrowserEffect::ResolveRelated { category: self.category, generation, requests }
    }
}
