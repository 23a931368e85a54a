// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Holocron-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Holocron and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Resource client for the external catalog API.
//!
//! [`ResourceSource`] is the seam between the browsing logic and the network; the TUI uses
//! [`HttpClient`], tests use in-memory sources.

use async_trait::async_trait;

use crate::model::{Category, EntityRecord, EntityRef, Page};

mod error;
#[cfg(test)]
pub(crate) mod fake;
mod http;

pub use error::{FetchError, Result};
pub use http::{ClientConfig, HttpClient, DEFAULT_BASE_URL};

#[async_trait]
pub trait ResourceSource: Send + Sync {
    /// `GET {base}/{category-path}/?page={page}`.
    async fn fetch_page(&self, category: Category, page: u32) -> Result<Page>;

    /// `GET {reference}`; the reference is an absolute url.
    async fn fetch_record(&self, reference: &EntityRef) -> Result<EntityRecord>;
}
