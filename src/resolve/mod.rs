// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Holocron-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Holocron and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Resolution of cross-reference sets into display records.

use futures::future::join_all;
use tracing::debug;

use crate::client::ResourceSource;
use crate::model::{EntityRef, RelatedItem};

pub use crate::model::resolve_category;

/// One labeled group of references awaiting resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedRequest {
    pub label: &'static str,
    pub refs: Vec<EntityRef>,
}

/// One labeled group after resolution; `items` holds only the references that resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedGroup {
    pub label: &'static str,
    pub requested: usize,
    pub items: Vec<RelatedItem>,
}

impl RelatedGroup {
    /// `Films (3)`; counts resolved items, not requested ones.
    pub fn heading(&self) -> String {
        format!("{} ({})", self.label, self.items.len())
    }
}

/// Fetches every reference concurrently and reduces each success to a [`RelatedItem`].
///
/// Empty or absent input issues no request. Individual failures are dropped, so the
/// result never fails as a whole; it holds exactly the references that resolved.
pub async fn resolve_related<S>(source: &S, refs: Option<&[EntityRef]>) -> Vec<RelatedItem>
where
    S: ResourceSource + ?Sized,
{
    let Some(refs) = refs.filter(|refs| !refs.is_empty()) else {
        return Vec::new();
    };

    let fetches = refs.iter().map(|reference| async move {
        match source.fetch_record(reference).await {
            Ok(record) => Some(RelatedItem {
                display_name: record.display_name().to_owned(),
                category: resolve_category(reference),
                reference: reference.clone(),
            }),
            Err(err) => {
                debug!(reference = %reference, error = %err, "dropping unresolved reference");
                None
            }
        }
    });

    join_all(fetches).await.into_iter().flatten().collect()
}

/// Resolves several groups at once; all groups settle before this returns.
pub async fn resolve_groups<S>(source: &S, requests: &[RelatedRequest]) -> Vec<RelatedGroup>
where
    S: ResourceSource + ?Sized,
{
    let groups = requests.iter().map(|request| async move {
        RelatedGroup {
            label: request.label,
            requested: request.refs.len(),
            items: resolve_related(source, Some(request.refs.as_slice())).await,
        }
    });
    join_all(groups).await
}
