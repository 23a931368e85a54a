// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Holocron-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Holocron and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{FetchError, ResourceSource, Result};
use crate::model::{fixtures, Category, EntityRecord, EntityRef, Page};

const PAGE_SIZE: usize = 10;

/// In-memory catalog that counts and records every request.
pub(crate) struct FakeSource {
    records: BTreeMap<Category, Vec<EntityRecord>>,
    failing_pages: BTreeSet<(Category, u32)>,
    page_requests: AtomicUsize,
    record_requests: AtomicUsize,
    log: Mutex<Vec<String>>,
}

impl FakeSource {
    pub(crate) fn new(records: BTreeMap<Category, Vec<EntityRecord>>) -> Self {
        Self {
            records,
            failing_pages: BTreeSet::new(),
            page_requests: AtomicUsize::new(0),
            record_requests: AtomicUsize::new(0),
            log: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn dataset() -> Self {
        Self::new(fixtures::dataset())
    }

    pub(crate) fn with_failing_page(mut self, category: Category, page: u32) -> Self {
        self.failing_pages.insert((category, page));
        self
    }

    pub(crate) fn page_requests(&self) -> usize {
        self.page_requests.load(Ordering::SeqCst)
    }

    pub(crate) fn record_requests(&self) -> usize {
        self.record_requests.load(Ordering::SeqCst)
    }

    pub(crate) fn log(&self) -> Vec<String> {
        self.log.lock().expect("log lock").clone()
    }

    fn not_found(url: String) -> FetchError {
        FetchError::Status { url, status: 404, status_text: "Not Found".to_owned() }
    }
}

#[async_trait]
impl ResourceSource for FakeSource {
    async fn fetch_page(&self, category: Category, page: u32) -> Result<Page> {
        self.page_requests.fetch_add(1, Ordering::SeqCst);
        let url = format!("{}/{}/?page={page}", fixtures::BASE_URL, category.path_segment());
        self.log.lock().expect("log lock").push(url.clone());

        if self.failing_pages.contains(&(category, page)) {
            return Err(FetchError::Status {
                url,
                status: 500,
                status_text: "Internal Server Error".to_owned(),
            });
        }

        let all = self.records.get(&category).map(Vec::as_slice).unwrap_or_default();
        let start = (page.max(1) as usize - 1) * PAGE_SIZE;
        if page == 0 || (start >= all.len() && page != 1) {
            return Err(Self::not_found(url));
        }
        let end = (start + PAGE_SIZE).min(all.len());
        let pages = all.len().div_ceil(PAGE_SIZE) as u32;
        let link = |n: u32| format!("{}/{}/?page={n}", fixtures::BASE_URL, category.path_segment());

        Ok(Page {
            count: all.len() as u64,
            next: (page < pages).then(|| link(page + 1)),
            previous: (page > 1).then(|| link(page - 1)),
            results: all[start.min(end)..end].to_vec(),
        })
    }

    async fn fetch_record(&self, reference: &EntityRef) -> Result<EntityRecord> {
        self.record_requests.fetch_add(1, Ordering::SeqCst);
        self.log.lock().expect("log lock").push(reference.to_string());

        self.records
            .values()
            .flatten()
            .find(|record| record.is(reference))
            .cloned()
            .ok_or_else(|| Self::not_found(reference.to_string()))
    }
}
