// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Holocron-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Holocron and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use tracing::{debug, warn};

use super::{BrowserEffect, BrowserEvent};
use crate::client::ResourceSource;
use crate::resolve::resolve_groups;

/// Performs the fetches an effect describes and packages the outcome for [`super::CategoryBrowser::apply`].
///
/// Never fails: page failures become an error message, an off-page selection failure becomes
/// `None`, and unresolved related references are simply absent.
pub async fn run_effect<S>(source: &S, effect: BrowserEffect) -> BrowserEvent
where
    S: ResourceSource + ?Sized,
{
    match effect {
        BrowserEffect::FetchPage { category, page, generation } => {
            let result = source.fetch_page(category, page).await.map_err(|err| {
                warn!(%category, page, status = ?err.status(), error = %err, "page load failed");
                err.to_string()
            });
            BrowserEvent::PageLoaded { category, page, generation, result }
        }
        BrowserEffect::FetchSelection { category, reference, generation } => {
            let record = match source.fetch_record(&reference).await {
                Ok(record) => Some(record),
                Err(err) => {
                    debug!(%category, reference = %reference, error = %err, "off-page selection failed");
                    None
                }
            };
            BrowserEvent::SelectionFetched { category, generation, reference, record }
        }
        BrowserEffect::ResolveRelated { category, generation, requests } => {
            let groups = resolve_groups(source, &requests).await;
            BrowserEvent::RelatedResolved { category, generation, groups }
        }
    }
}
